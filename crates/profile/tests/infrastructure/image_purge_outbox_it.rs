// crates/profile/tests/infrastructure/image_purge_outbox_it.rs

use crate::common::{test_now, IntegrationContext};
use profile::application::ports::ObjectStore;
use profile::domain::entities::PurgeJob;

#[tokio::test]
async fn test_claimed_jobs_are_not_handed_out_twice() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let outbox = ctx.repositories().purge_outbox;
    let jobs = vec![PurgeJob::new("profiles/1/a.jpg", test_now()), PurgeJob::new("profiles/1/b.jpg", test_now())];
    outbox.enqueue(&jobs, None).await.unwrap();

    // Act
    let first = outbox.fetch_unprocessed(10, 3).await.unwrap();
    let second = outbox.fetch_unprocessed(10, 3).await.unwrap();

    // Assert
    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
}

#[tokio::test]
async fn test_failed_jobs_are_retried_until_max_attempts() {
    // Arrange : un échec libère la réservation
    let ctx = IntegrationContext::new().await;
    let outbox = ctx.repositories().purge_outbox;
    let job = PurgeJob::new("profiles/1/a.jpg", test_now());
    outbox.enqueue(std::slice::from_ref(&job), None).await.unwrap();

    // Act
    for _ in 0..2 {
        let claimed = outbox.fetch_unprocessed(10, 2).await.unwrap();
        assert_eq!(claimed.len(), 1);
        outbox.mark_as_failed(job.id, "disk full".into()).await.unwrap();
    }

    // Assert
    assert!(outbox.fetch_unprocessed(10, 2).await.unwrap().is_empty());
    let (attempts, last_error): (i32, Option<String>) =
        sqlx::query_as("SELECT attempts, last_error FROM image_purge_outbox WHERE id = $1")
            .bind(job.id)
            .fetch_one(&ctx.pool())
            .await
            .unwrap();
    assert_eq!(attempts, 2);
    assert_eq!(last_error.as_deref(), Some("disk full"));
}

#[tokio::test]
async fn test_processor_purges_pending_blobs() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    ctx.object_store.upload("profiles/1/a.jpg", vec![1, 2, 3], "image/jpeg").await.unwrap();
    let job = PurgeJob::new("profiles/1/a.jpg", test_now());
    ctx.repositories().purge_outbox.enqueue(std::slice::from_ref(&job), None).await.unwrap();

    // Act
    let processed = ctx.purger().process_batch().await.unwrap();

    // Assert
    assert_eq!(processed, 1);
    assert!(!ctx.blob_path("profiles/1/a.jpg").exists());
    let processed_at: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT processed_at FROM image_purge_outbox WHERE id = $1")
            .bind(job.id)
            .fetch_one(&ctx.pool())
            .await
            .unwrap();
    assert!(processed_at.is_some());
}
