// crates/profile/tests/infrastructure/repository_it_for_profile.rs

use crate::common::{birthday_for_age, test_now, IntegrationContext};
use profile::domain::builders::ProfileBuilder;
use profile::domain::entities::{Identity, Navigator};
use profile::domain::params::{FilterPatch, IdentityPatch, ProfilePatch, StatusPatch};
use profile::domain::value_objects::{AgeRange, DisplayName, Gender, ProfileId, SearchGender};
use shared_kernel::domain::value_objects::{CountryCode, GeoPoint};
use shared_kernel::errors::DomainError;

#[tokio::test]
async fn test_profile_patch_distinguishes_absent_and_cleared_fields() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let id = ctx.seed_profile(1, 30, Gender::Woman, None).await;
    let repos = ctx.repositories();

    // Act : nom changé, description vidée, location non fournie
    let patch = ProfilePatch {
        display_name: Some(DisplayName::from_raw("Anna")),
        description: Some(None),
        ..Default::default()
    };
    let updated = repos.profiles.update(id, &patch, None).await.unwrap();

    // Assert
    assert_eq!(updated.display_name.as_str(), "Anna");
    assert_eq!(updated.description, None);
    assert_eq!(updated.location.as_deref(), Some("Moscow"));
    assert_eq!(updated.gender, Gender::Woman);
}

#[tokio::test]
async fn test_update_unknown_profile_is_not_found() {
    let ctx = IntegrationContext::new().await;

    let result = ctx
        .repositories()
        .profiles
        .update(ProfileId::from_raw(404), &ProfilePatch::default(), None)
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { entity: "Profile", .. })));
}

#[tokio::test]
async fn test_status_flags_are_written_independently() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let id = ctx.seed_profile(1, 30, Gender::Man, None).await;
    let statuses = ctx.repositories().statuses;
    statuses.update(id, &StatusPatch::blocked(true), None).await.unwrap();

    // Act
    let status = statuses.update(id, &StatusPatch::frozen(true), None).await.unwrap();

    // Assert
    assert!(status.is_frozen);
    assert!(status.is_blocked);
    assert!(status.is_show_distance);
}

#[tokio::test]
async fn test_filter_partial_update_keeps_other_criteria() {
    let ctx = IntegrationContext::new().await;
    let id = ctx.seed_profile(1, 30, Gender::Man, None).await;

    let patch = FilterPatch {
        search_gender: Some(SearchGender::Woman),
        age_range: Some(AgeRange::try_new(20, 35).unwrap()),
        ..Default::default()
    };
    let filter = ctx.repositories().filters.update(id, &patch, None).await.unwrap();

    assert_eq!(filter.search_gender, SearchGender::Woman);
    assert_eq!(filter.age_range, AgeRange::try_new(20, 35).unwrap());
    assert_eq!(filter.size, 10);
}

#[tokio::test]
async fn test_identity_external_id_is_unique() {
    // Arrange : profil 2 sans identité, profil 1 déjà lié au compte externe 1
    let ctx = IntegrationContext::new().await;
    ctx.seed_profile(1, 30, Gender::Man, None).await;
    let repos = ctx.repositories();
    let bare = ProfileBuilder::new(
        ProfileId::from_raw(2),
        DisplayName::from_raw("bare"),
        birthday_for_age(25),
        Gender::Woman,
    )
    .build(test_now());
    repos.profiles.add(&bare, None).await.unwrap();

    // Act
    let result = repos
        .identities
        .add(
            &Identity {
                profile_id: bare.id,
                external_id: 1,
                username: None,
                first_name: None,
                last_name: None,
                language_code: None,
                allows_write_to_pm: false,
                created_at: test_now(),
                updated_at: test_now(),
            },
            None,
        )
        .await;

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::AlreadyExists { entity: "Identity", field: "external_id", .. })
    ));
}

#[tokio::test]
async fn test_identity_patch_clears_optional_fields() {
    let ctx = IntegrationContext::new().await;
    let id = ctx.seed_profile(1, 30, Gender::Man, None).await;

    let patch = IdentityPatch {
        username: Some(None),
        first_name: Some(Some("Ivan".into())),
        allows_write_to_pm: Some(true),
        ..Default::default()
    };
    let identity = ctx.repositories().identities.update(id, &patch, None).await.unwrap();

    assert_eq!(identity.username, None);
    assert_eq!(identity.first_name.as_deref(), Some("Ivan"));
    assert_eq!(identity.language_code.as_deref(), Some("en"));
    assert!(identity.allows_write_to_pm);
}

#[tokio::test]
async fn test_navigator_round_trips_coordinates_and_computes_distance() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let a = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let b = ctx.seed_profile(2, 28, Gender::Woman, None).await;
    let navigators = ctx.repositories().navigators;

    // Act
    let added = navigators
        .add(
            &Navigator {
                profile_id: b,
                point: GeoPoint::from_raw(55.76, 37.62),
                country_code: Some(CountryCode::new_unchecked("RU")),
                created_at: test_now(),
                updated_at: test_now(),
            },
            None,
        )
        .await
        .unwrap();
    let distance = navigators.distance_between(a, b).await.unwrap();

    // Assert
    assert!((added.point.lat() - 55.76).abs() < 1e-9);
    assert!((added.point.lon() - 37.62).abs() < 1e-9);
    assert_eq!(added.country_code.as_ref().map(|c| c.as_str()), Some("RU"));
    let meters = distance.expect("both points known");
    assert!((1100.0..1400.0).contains(&meters), "distance was {meters}");
}

#[tokio::test]
async fn test_block_insert_is_idempotent() {
    let ctx = IntegrationContext::new().await;
    let a = ctx.seed_profile(1, 30, Gender::Man, None).await;
    let b = ctx.seed_profile(2, 30, Gender::Woman, None).await;
    let blocks = ctx.repositories().blocks;

    let first = blocks.add(a, b, None).await.unwrap();
    let second = blocks.add(a, b, None).await.unwrap();

    assert_eq!(first.id, second.id);
    assert!(blocks.exists(a, b).await.unwrap());
    assert!(!blocks.exists(b, a).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_like_is_already_exists() {
    let ctx = IntegrationContext::new().await;
    let a = ctx.seed_profile(1, 30, Gender::Man, None).await;
    let b = ctx.seed_profile(2, 30, Gender::Woman, None).await;
    let likes = ctx.repositories().likes;

    likes.add(a, b, None).await.unwrap();
    let result = likes.add(a, b, None).await;

    assert!(matches!(result, Err(DomainError::AlreadyExists { entity: "Like", .. })));
}

#[tokio::test]
async fn test_relation_to_unknown_profile_is_not_found() {
    let ctx = IntegrationContext::new().await;
    let a = ctx.seed_profile(1, 30, Gender::Man, None).await;

    let result = ctx.repositories().complaints.add(a, ProfileId::from_raw(999), "spam", None).await;

    assert!(matches!(result, Err(DomainError::NotFound { entity: "Profile", .. })));
}

#[tokio::test]
async fn test_delete_profile_cascades_to_sub_records() {
    // Arrange
    let ctx = IntegrationContext::new().await;
    let a = ctx.seed_profile(1, 30, Gender::Man, Some((55.75, 37.61))).await;
    let b = ctx.seed_profile(2, 30, Gender::Woman, None).await;
    let repos = ctx.repositories();
    repos.likes.add(a, b, None).await.unwrap();

    // Act
    repos.profiles.delete(a, None).await.unwrap();

    // Assert
    assert!(repos.profiles.find_by_id(a, None).await.unwrap().is_none());
    assert!(repos.navigators.find_by_profile_id(a, None).await.unwrap().is_none());
    assert!(repos.statuses.find_by_profile_id(a, None).await.unwrap().is_none());
    assert!(repos.filters.find_by_profile_id(a, None).await.unwrap().is_none());
    assert!(repos.identities.find_by_profile_id(a, None).await.unwrap().is_none());
    assert!(repos.likes.find_by_pair(a, b).await.unwrap().is_none());
}
