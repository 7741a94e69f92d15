// crates/profile/tests/infrastructure/unit_of_work_it.rs

use crate::common::{birthday_for_age, test_now, IntegrationContext};
use profile::application::add_profile::AddProfileUseCase;
use profile::application::common::ImageUpload;
use profile::application::update_profile::{UpdateProfileCommand, UpdateProfileUseCase};
use profile::domain::builders::ProfileBuilder;
use profile::domain::entities::Status;
use profile::domain::params::ProfilePatch;
use profile::domain::value_objects::{AgeRange, DisplayName, Gender, ProfileId};
use shared_kernel::errors::DomainError;

async fn count_rows(ctx: &IntegrationContext, table: &str, profile_id: ProfileId) -> i64 {
    let column = if table == "profiles" { "id" } else { "profile_id" };
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1"))
        .bind(profile_id.value())
        .fetch_one(&ctx.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_commit_publishes_all_writes() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let id = ProfileId::from_raw(1);
    let profile = ProfileBuilder::new(id, DisplayName::from_raw("Anna"), birthday_for_age(30), Gender::Woman)
        .build(test_now());
    let mut uow = ctx.uow_factory.create_unit().await.unwrap();

    // Act
    uow.profiles().add(&profile, Some(uow.tx().unwrap())).await.unwrap();
    uow.statuses().add(&Status::initial(id, test_now()), Some(uow.tx().unwrap())).await.unwrap();
    uow.commit().await.unwrap();

    // Assert
    assert_eq!(count_rows(&ctx, "profiles", id).await, 1);
    assert_eq!(count_rows(&ctx, "statuses", id).await, 1);
}

#[tokio::test]
async fn test_rollback_discards_all_writes() {
    let ctx = IntegrationContext::new().await;
    let id = ProfileId::from_raw(1);
    let profile = ProfileBuilder::new(id, DisplayName::from_raw("Anna"), birthday_for_age(30), Gender::Woman)
        .build(test_now());
    let mut uow = ctx.uow_factory.create_unit().await.unwrap();

    uow.profiles().add(&profile, Some(uow.tx().unwrap())).await.unwrap();
    uow.rollback().await.unwrap();

    assert_eq!(count_rows(&ctx, "profiles", id).await, 0);
}

#[tokio::test]
async fn test_dropped_unit_rolls_back() {
    let ctx = IntegrationContext::new().await;
    let id = ProfileId::from_raw(1);
    let profile = ProfileBuilder::new(id, DisplayName::from_raw("Anna"), birthday_for_age(30), Gender::Woman)
        .build(test_now());

    {
        let mut uow = ctx.uow_factory.create_unit().await.unwrap();
        uow.profiles().add(&profile, Some(uow.tx().unwrap())).await.unwrap();
    }

    assert_eq!(count_rows(&ctx, "profiles", id).await, 0);
}

#[tokio::test]
async fn test_add_profile_failing_on_identity_leaves_nothing_behind() {
    // Arrange : le compte externe 1 est déjà lié au profil 1
    let ctx = IntegrationContext::new().await;
    ctx.seed_profile(1, 30, Gender::Man, None).await;
    let mut command = ctx.add_profile_command(2, 28, Gender::Woman, Some((55.76, 37.62)), 2);
    command.identity.external_id = 1;

    // Act
    let result = AddProfileUseCase::new(ctx.runner(), ctx.clock.clone()).execute(command).await;

    // Assert
    assert!(matches!(result, Err(DomainError::AlreadyExists { entity: "Identity", .. })));
    let id = ProfileId::from_raw(2);
    for table in ["profiles", "statuses", "navigators", "images", "filters", "identities"] {
        assert_eq!(count_rows(&ctx, table, id).await, 0, "{table} kept a row");
    }
    // Blobs compensés
    assert!(!ctx.blob_path("profiles/2").read_dir().map(|mut d| d.next().is_some()).unwrap_or(false));
}

#[tokio::test]
async fn test_update_profile_failing_on_filter_changes_nothing() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let id = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let mut command = UpdateProfileCommand::new(id);
    command.profile = ProfilePatch {
        display_name: Some(DisplayName::from_raw("Renamed")),
        ..Default::default()
    };
    command.images = vec![ImageUpload::new("new.jpg", "image/jpeg", vec![9; 8])];
    // Bornes inversées : rejetées par la contrainte CHECK de la table
    command.filter.age_range = Some(AgeRange::from_raw(50, 20));

    // Act
    let result = UpdateProfileUseCase::new(ctx.runner(), ctx.guard()).execute(command).await;

    // Assert
    assert!(result.is_err());
    let repos = ctx.repositories();
    let profile = repos.profiles.find_by_id(id, None).await.unwrap().unwrap();
    assert_eq!(profile.display_name.as_str(), "user-1");
    assert!(repos.images.list_all(id, None).await.unwrap().is_empty());
    let filter = repos.filters.find_by_profile_id(id, None).await.unwrap().unwrap();
    assert_eq!(filter.age_range, AgeRange::default());
}
