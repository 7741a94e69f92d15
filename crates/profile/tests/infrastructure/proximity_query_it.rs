// crates/profile/tests/infrastructure/proximity_query_it.rs

use crate::common::{test_now, IntegrationContext};
use profile::application::add_block::{AddBlockCommand, AddBlockUseCase};
use profile::application::get_profile_list::{GetProfileListCommand, GetProfileListUseCase};
use profile::domain::params::StatusPatch;
use profile::domain::value_objects::{AgeRange, Gender, ProfileId, SearchGender, SearchRadius};
use shared_kernel::errors::DomainError;

fn list_use_case(ctx: &IntegrationContext) -> GetProfileListUseCase {
    GetProfileListUseCase::new(
        ctx.repositories().profiles,
        ctx.guard(),
        ctx.tracker(),
        ctx.clock.clone(),
        ctx.settings.online_window_chrono(),
    )
}

fn query(requester: ProfileId, km: f64, page: u32, size: u32) -> GetProfileListCommand {
    GetProfileListCommand {
        requester_id: requester,
        search_gender: SearchGender::All,
        age_range: AgeRange::try_new(18, 40).unwrap(),
        distance: SearchRadius::try_new(km).unwrap(),
        page,
        size,
        position: None,
    }
}

#[tokio::test]
async fn test_nearby_profile_is_listed_with_distance_and_pagination() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let p1 = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let p2 = ctx.seed_profile(2, 28, Gender::Woman, Some((55.76, 37.62))).await;

    // Act
    let page = list_use_case(&ctx).execute(query(p1, 5.0, 1, 10)).await.unwrap();

    // Assert
    assert_eq!(page.content.len(), 1);
    let item = &page.content[0];
    assert_eq!(item.id, p2);
    assert_eq!(item.age, 28);
    assert!(item.is_online);
    let meters = item.distance.expect("both points known");
    assert!((1100.0..1400.0).contains(&meters), "distance was {meters}");

    let pagination = page.pagination;
    assert!(!pagination.has_previous);
    assert!(!pagination.has_next);
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.size, 10);
    assert_eq!(pagination.total_entities, 1);
    assert_eq!(pagination.total_pages, 1);
}

#[tokio::test]
async fn test_blocked_candidate_disappears_from_results() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let p1 = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let p2 = ctx.seed_profile(2, 28, Gender::Woman, Some((55.76, 37.62))).await;
    ctx.seed_profile(3, 25, Gender::Woman, Some((55.751, 37.611))).await;
    let list = list_use_case(&ctx);
    let before = list.execute(query(p1, 5.0, 1, 10)).await.unwrap();

    // Act
    AddBlockUseCase::new(ctx.uow_factory.clone(), ctx.guard())
        .execute(AddBlockCommand { profile_id: p1, blocked_profile_id: p2 })
        .await
        .unwrap();
    let after = list.execute(query(p1, 5.0, 1, 10)).await.unwrap();

    // Assert
    assert!(before.content.iter().any(|i| i.id == p2));
    assert!(after.content.iter().all(|i| i.id != p2));
    assert_eq!(after.pagination.total_entities, before.pagination.total_entities - 1);
}

#[tokio::test]
async fn test_candidates_are_filtered_on_every_criterion() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let requester = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let kept = ctx.seed_profile(2, 28, Gender::Woman, Some((55.76, 37.62))).await;
    let no_position = ctx.seed_profile(3, 35, Gender::Woman, None).await;
    ctx.seed_profile(4, 45, Gender::Woman, Some((55.75, 37.61))).await; // trop âgée
    ctx.seed_profile(5, 17, Gender::Woman, Some((55.75, 37.61))).await; // trop jeune
    ctx.seed_profile(6, 30, Gender::Woman, Some((59.93, 30.33))).await; // ~630 km
    let frozen = ctx.seed_profile(7, 30, Gender::Woman, Some((55.75, 37.61))).await;
    let blocked = ctx.seed_profile(8, 30, Gender::Woman, Some((55.75, 37.61))).await;
    ctx.repositories().statuses.update(frozen, &StatusPatch::frozen(true), None).await.unwrap();
    ctx.repositories().statuses.update(blocked, &StatusPatch::blocked(true), None).await.unwrap();

    // Act
    let page = list_use_case(&ctx).execute(query(requester, 5.0, 1, 10)).await.unwrap();

    // Assert
    let ids: Vec<_> = page.content.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![kept, no_position]);
    // Le profil hors rayon reste compté
    assert_eq!(page.pagination.total_entities, 3);
    for item in &page.content {
        assert!((18..=40).contains(&item.age));
        assert!(item.distance.map_or(true, |d| d <= 5_000.0));
    }
}

#[tokio::test]
async fn test_total_counts_candidates_outside_the_radius() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let p1 = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let p2 = ctx.seed_profile(2, 28, Gender::Woman, Some((55.76, 37.62))).await;
    ctx.seed_profile(3, 28, Gender::Woman, Some((59.93, 30.33))).await;

    // Act
    let first = list_use_case(&ctx).execute(query(p1, 5.0, 1, 1)).await.unwrap();

    // Assert
    assert_eq!(first.content.iter().map(|i| i.id).collect::<Vec<_>>(), vec![p2]);
    assert_eq!(first.pagination.total_entities, 2);
    assert_eq!(first.pagination.total_pages, 2);
    assert!(first.pagination.has_next);
}

#[tokio::test]
async fn test_requester_without_position_sees_everyone_by_recent_activity() {
    // Arrange : le demandeur n'a pas de navigator
    let ctx = IntegrationContext::new().await;
    let requester = ctx.seed_profile(1, 30, Gender::Man, None).await;
    let far_idle = ctx.seed_profile(2, 25, Gender::Woman, Some((59.93, 30.33))).await;
    let near_recent = ctx.seed_profile(3, 25, Gender::Woman, Some((55.76, 37.62))).await;
    let nowhere_latest = ctx.seed_profile(4, 25, Gender::Woman, None).await;
    let profiles = ctx.repositories().profiles;
    profiles
        .touch_last_online(far_idle, test_now() - chrono::Duration::hours(2), None)
        .await
        .unwrap();
    profiles
        .touch_last_online(near_recent, test_now() - chrono::Duration::hours(1), None)
        .await
        .unwrap();

    // Act
    let page = list_use_case(&ctx).execute(query(requester, 5.0, 1, 10)).await.unwrap();

    // Assert
    let ids: Vec<_> = page.content.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![nowhere_latest, near_recent, far_idle]);
    assert!(page.content.iter().all(|i| i.distance.is_none()));
    assert_eq!(page.pagination.total_entities, 3);
    assert!(ctx.repositories().navigators.find_by_profile_id(requester, None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_gender_filter_excludes_other_gender() {
    let ctx = IntegrationContext::new().await;
    let requester = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    ctx.seed_profile(2, 28, Gender::Man, Some((55.76, 37.62))).await;
    let woman = ctx.seed_profile(3, 28, Gender::Woman, Some((55.76, 37.62))).await;

    let mut command = query(requester, 5.0, 1, 10);
    command.search_gender = SearchGender::Woman;
    let page = list_use_case(&ctx).execute(command).await.unwrap();

    assert_eq!(page.content.iter().map(|i| i.id).collect::<Vec<_>>(), vec![woman]);
}

#[tokio::test]
async fn test_ordering_by_distance_then_last_online_with_unknown_last() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let requester = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let far = ctx.seed_profile(2, 28, Gender::Woman, Some((55.77, 37.63))).await;
    let near_idle = ctx.seed_profile(3, 28, Gender::Woman, Some((55.755, 37.615))).await;
    let near_active = ctx.seed_profile(4, 28, Gender::Woman, Some((55.755, 37.615))).await;
    let unknown = ctx.seed_profile(5, 28, Gender::Woman, None).await;
    let profiles = ctx.repositories().profiles;
    profiles
        .touch_last_online(near_idle, test_now() - chrono::Duration::hours(2), None)
        .await
        .unwrap();

    // Act
    let page = list_use_case(&ctx).execute(query(requester, 5.0, 1, 10)).await.unwrap();

    // Assert
    let ids: Vec<_> = page.content.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![near_active, near_idle, far, unknown]);
    let idle = &page.content[1];
    assert!(!idle.is_online);
}

#[tokio::test]
async fn test_pagination_walks_through_all_candidates() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let requester = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    for id in 2..=6 {
        let offset = id as f64 * 0.001;
        ctx.seed_profile(id, 28, Gender::Woman, Some((55.75 + offset, 37.61))).await;
    }
    let list = list_use_case(&ctx);

    // Act
    let first = list.execute(query(requester, 5.0, 1, 2)).await.unwrap();
    let last = list.execute(query(requester, 5.0, 3, 2)).await.unwrap();

    // Assert
    assert_eq!(first.pagination.total_entities, 5);
    assert_eq!(first.pagination.total_pages, 3);
    assert!(first.pagination.has_next);
    assert!(!first.pagination.has_previous);
    assert_eq!(first.content.len(), 2);

    assert_eq!(last.content.len(), 1);
    assert!(!last.pagination.has_next);
    assert!(last.pagination.has_previous);
}

#[tokio::test]
async fn test_frozen_requester_cannot_search() {
    let ctx = IntegrationContext::new().await;
    let requester = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    ctx.repositories().statuses.update(requester, &StatusPatch::frozen(true), None).await.unwrap();

    let result = list_use_case(&ctx).execute(query(requester, 5.0, 1, 10)).await;

    assert!(matches!(result, Err(DomainError::PreconditionFailed { .. })));
}
