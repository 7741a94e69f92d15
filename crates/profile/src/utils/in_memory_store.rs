// crates/profile/src/utils/in_memory_store.rs

//! Stockage transactionnel en mémoire pour les tests unitaires.
//! `begin` prend un instantané de l'état validé, `commit` le publie, `rollback` le jette.

use crate::domain::entities::{
    age_on, Block, Complaint, Filter, Identity, Image, Like, Navigator, NewImage, Profile, PurgeJob, Status,
};
use crate::domain::models::{ProfileListItem, ProfileListQuery};
use crate::domain::params::{FilterPatch, IdentityPatch, ProfilePatch, StatusPatch};
use crate::domain::repositories::{
    BlockRepository, ComplaintRepository, FilterRepository, IdentityRepository, ImagePurgeOutbox,
    ImageRepository, LikeRepository, NavigatorRepository, ProfileRepository, StatusRepository,
};
use crate::domain::unit_of_work::ProfileRepositories;
use crate::domain::value_objects::{BlockId, ComplaintId, ImageId, LikeId, ProfileId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::application::PageResponse;
use shared_kernel::clock::{Clock, FixedClock};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::transaction::{Transaction, TransactionManager};
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};
use std::any::Any;
use std::collections::{BTreeMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct OutboxEntry {
    pub job: PurgeJob,
    pub processed: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryState {
    pub profiles: BTreeMap<ProfileId, Profile>,
    pub navigators: BTreeMap<ProfileId, Navigator>,
    pub filters: BTreeMap<ProfileId, Filter>,
    pub identities: BTreeMap<ProfileId, Identity>,
    pub statuses: BTreeMap<ProfileId, Status>,
    pub images: BTreeMap<i64, Image>,
    pub blocks: Vec<Block>,
    pub likes: Vec<Like>,
    pub complaints: Vec<Complaint>,
    pub purge_jobs: Vec<OutboxEntry>,
    sequence: i64,
}

impl InMemoryState {
    fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    fn require_profile(&self, id: ProfileId) -> Result<()> {
        if self.profiles.contains_key(&id) {
            Ok(())
        } else {
            Err(Profile::not_found(id))
        }
    }

    fn cascade_delete(&mut self, id: ProfileId) {
        self.profiles.remove(&id);
        self.navigators.remove(&id);
        self.filters.remove(&id);
        self.identities.remove(&id);
        self.statuses.remove(&id);
        self.images.retain(|_, i| i.profile_id != id);
        self.blocks.retain(|b| b.profile_id != id && b.blocked_profile_id != id);
        self.likes.retain(|l| l.profile_id != id && l.liked_profile_id != id);
        self.complaints.retain(|c| c.profile_id != id && c.complained_profile_id != id);
    }
}

pub struct InMemoryStore {
    committed: Mutex<InMemoryState>,
    failures: Mutex<HashSet<&'static str>>,
    commit_delay: Mutex<Option<Duration>>,
    clock: Arc<FixedClock>,
}

impl InMemoryStore {
    pub fn new(clock: Arc<FixedClock>) -> Arc<Self> {
        Arc::new(Self {
            committed: Mutex::new(InMemoryState::default()),
            failures: Mutex::new(HashSet::new()),
            commit_delay: Mutex::new(None),
            clock,
        })
    }

    /// Fait échouer toute opération nommée `op` (ex. `"filters.add"`, `"commit"`)
    pub fn fail_on(&self, op: &'static str) {
        self.failures.lock().unwrap().insert(op);
    }

    /// Retarde chaque `commit` avant publication
    pub fn slow_commits(&self, delay: Duration) {
        *self.commit_delay.lock().unwrap() = Some(delay);
    }

    /// Copie de l'état validé
    pub fn snapshot(&self) -> InMemoryState {
        self.committed.lock().unwrap().clone()
    }

    pub fn repositories(self: &Arc<Self>) -> ProfileRepositories {
        ProfileRepositories {
            profiles: self.clone(),
            navigators: self.clone(),
            filters: self.clone(),
            identities: self.clone(),
            statuses: self.clone(),
            images: self.clone(),
            blocks: self.clone(),
            likes: self.clone(),
            complaints: self.clone(),
            purge_outbox: self.clone(),
        }
    }

    pub fn transaction_manager(self: &Arc<Self>) -> Arc<dyn TransactionManager> {
        Arc::new(InMemoryTransactionManager { store: self.clone() })
    }

    fn check(&self, op: &str) -> Result<()> {
        if self.failures.lock().unwrap().contains(op) {
            return Err(DomainError::Infrastructure(format!("injected failure on {op}")));
        }
        Ok(())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Hors transaction, l'opération travaille sur une copie publiée seulement en cas de succès
    fn with_state<T>(
        &self,
        op: &'static str,
        tx: Option<&mut dyn Transaction>,
        f: impl FnOnce(&mut InMemoryState) -> Result<T>,
    ) -> Result<T> {
        self.check(op)?;

        match tx {
            Some(tx) => {
                let tx = tx
                    .as_any_mut()
                    .downcast_mut::<InMemoryTransaction>()
                    .ok_or_else(|| DomainError::Internal("Type mismatch: expected InMemoryTransaction".into()))?;
                f(&mut tx.working)
            }
            None => {
                let mut committed = self.committed.lock().unwrap();
                let mut working = committed.clone();
                let value = f(&mut working)?;
                *committed = working;
                Ok(value)
            }
        }
    }
}

pub struct InMemoryTransaction {
    store: Arc<InMemoryStore>,
    working: InMemoryState,
}

impl Transaction for InMemoryTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn commit(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> {
        let this = *self;
        Box::pin(async move {
            let delay = *this.store.commit_delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            this.store.check("commit")?;
            *this.store.committed.lock().unwrap() = this.working;
            Ok(())
        })
    }

    fn rollback(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> {
        Box::pin(async move { Ok(()) })
    }
}

pub struct InMemoryTransactionManager {
    store: Arc<InMemoryStore>,
}

impl TransactionManager for InMemoryTransactionManager {
    fn begin<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Box<dyn Transaction>>> + Send + 'a>> {
        Box::pin(async move {
            self.store.check("begin")?;
            let working = self.store.snapshot();
            Ok(Box::new(InMemoryTransaction { store: self.store.clone(), working }) as Box<dyn Transaction>)
        })
    }
}

/// Haversine sur la sphère moyenne, suffisant pour les tests
pub fn sphere_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_008.8;
    let (lat1, lat2) = (a.lat().to_radians(), b.lat().to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon() - a.lon()).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn add(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<Profile> {
        self.with_state("profiles.add", tx, |state| {
            if state.profiles.contains_key(&profile.id) {
                return Err(DomainError::AlreadyExists {
                    entity: "Profile",
                    field: "id",
                    value: profile.id.to_string(),
                });
            }
            state.profiles.insert(profile.id, profile.clone());
            Ok(profile.clone())
        })
    }

    async fn update(&self, id: ProfileId, patch: &ProfilePatch, tx: Option<&mut dyn Transaction>) -> Result<Profile> {
        let now = self.now();
        self.with_state("profiles.update", tx, |state| {
            let profile = state.profiles.get_mut(&id).ok_or_else(|| Profile::not_found(id))?;
            if let Some(name) = &patch.display_name {
                profile.display_name = name.clone();
            }
            if let Some(birthday) = patch.birthday {
                profile.birthday = birthday;
            }
            if let Some(gender) = patch.gender {
                profile.gender = gender;
            }
            if let Some(location) = &patch.location {
                profile.location = location.clone();
            }
            if let Some(description) = &patch.description {
                profile.description = description.clone();
            }
            if let Some(height) = patch.height {
                profile.height = height;
            }
            if let Some(weight) = patch.weight {
                profile.weight = weight;
            }
            profile.updated_at = now;
            Ok(profile.clone())
        })
    }

    async fn touch_last_online(&self, id: ProfileId, at: DateTime<Utc>, tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.with_state("profiles.touch_last_online", tx, |state| {
            let profile = state.profiles.get_mut(&id).ok_or_else(|| Profile::not_found(id))?;
            profile.last_online = at;
            Ok(())
        })
    }

    async fn find_by_id(&self, id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Profile>> {
        self.with_state("profiles.find_by_id", tx, |state| Ok(state.profiles.get(&id).cloned()))
    }

    async fn delete(&self, id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.with_state("profiles.delete", tx, |state| {
            state.require_profile(id)?;
            state.cascade_delete(id);
            Ok(())
        })
    }

    async fn find_nearby(&self, query: &ProfileListQuery) -> Result<PageResponse<ProfileListItem>> {
        self.check("profiles.find_nearby")?;
        let state = self.snapshot();
        let today = self.now().date_naive();
        let origin = state.navigators.get(&query.requester_id).map(|n| n.point);

        let eligible: Vec<ProfileListItem> = state
            .profiles
            .values()
            .filter(|p| p.id != query.requester_id)
            .filter(|p| state.statuses.get(&p.id).is_some_and(|s| s.is_active()))
            .filter(|p| query.search_gender.accepts(p.gender))
            .filter(|p| query.age_range.contains(age_on(p.birthday, today)))
            .filter(|p| {
                !state
                    .blocks
                    .iter()
                    .any(|b| b.profile_id == query.requester_id && b.blocked_profile_id == p.id)
            })
            .map(|p| {
                let distance = match (origin, state.navigators.get(&p.id)) {
                    (Some(from), Some(to)) => Some(sphere_distance(&from, &to.point)),
                    _ => None,
                };

                let image_url = state
                    .images
                    .values()
                    .filter(|i| i.profile_id == p.id && i.is_public())
                    .max_by_key(|i| (i.created_at, i.id))
                    .map(|i| i.url.as_str().to_string());

                ProfileListItem {
                    id: p.id,
                    display_name: p.display_name.clone(),
                    age: age_on(p.birthday, today),
                    gender: p.gender,
                    location: p.location.clone(),
                    distance,
                    last_online: p.last_online,
                    is_online: p.last_online >= query.online_since,
                    image_url,
                }
            })
            .collect();

        // Le total ignore le rayon et la pagination
        let total = eligible.len() as u64;
        let radius = query.distance.meters();
        let mut matches: Vec<ProfileListItem> = eligible
            .into_iter()
            .filter(|item| item.distance.map_or(true, |d| d <= radius))
            .collect();

        matches.sort_by(|a, b| {
            let by_distance = match (a.distance, b.distance) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            by_distance
                .then(b.last_online.cmp(&a.last_online))
                .then(a.id.cmp(&b.id))
        });

        let content = matches
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.size() as usize)
            .collect();

        Ok(PageResponse::new(content, query.page, total))
    }
}

#[async_trait]
impl NavigatorRepository for InMemoryStore {
    async fn add(&self, navigator: &Navigator, tx: Option<&mut dyn Transaction>) -> Result<Navigator> {
        self.with_state("navigators.add", tx, |state| {
            state.require_profile(navigator.profile_id)?;
            if state.navigators.contains_key(&navigator.profile_id) {
                return Err(DomainError::AlreadyExists {
                    entity: "Navigator",
                    field: "profile_id",
                    value: navigator.profile_id.to_string(),
                });
            }
            state.navigators.insert(navigator.profile_id, navigator.clone());
            Ok(navigator.clone())
        })
    }

    async fn update(&self, navigator: &Navigator, tx: Option<&mut dyn Transaction>) -> Result<Navigator> {
        self.with_state("navigators.update", tx, |state| {
            let current = state
                .navigators
                .get_mut(&navigator.profile_id)
                .ok_or_else(|| Navigator::not_found(navigator.profile_id))?;
            current.point = navigator.point;
            current.country_code = navigator.country_code.clone();
            current.updated_at = navigator.updated_at;
            Ok(current.clone())
        })
    }

    async fn exists(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<bool> {
        self.with_state("navigators.exists", tx, |state| Ok(state.navigators.contains_key(&profile_id)))
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Navigator>> {
        self.with_state("navigators.find_by_profile_id", tx, |state| {
            Ok(state.navigators.get(&profile_id).cloned())
        })
    }

    async fn distance_between(&self, from: ProfileId, to: ProfileId) -> Result<Option<f64>> {
        self.check("navigators.distance_between")?;
        let state = self.snapshot();
        Ok(match (state.navigators.get(&from), state.navigators.get(&to)) {
            (Some(a), Some(b)) => Some(sphere_distance(&a.point, &b.point)),
            _ => None,
        })
    }
}

#[async_trait]
impl FilterRepository for InMemoryStore {
    async fn add(&self, filter: &Filter, tx: Option<&mut dyn Transaction>) -> Result<Filter> {
        self.with_state("filters.add", tx, |state| {
            state.require_profile(filter.profile_id)?;
            state.filters.insert(filter.profile_id, filter.clone());
            Ok(filter.clone())
        })
    }

    async fn update(&self, profile_id: ProfileId, patch: &FilterPatch, tx: Option<&mut dyn Transaction>) -> Result<Filter> {
        let now = self.now();
        self.with_state("filters.update", tx, |state| {
            let filter = state
                .filters
                .get_mut(&profile_id)
                .ok_or_else(|| Filter::not_found(profile_id))?;
            if let Some(gender) = patch.search_gender {
                filter.search_gender = gender;
            }
            if let Some(range) = patch.age_range {
                filter.age_range = range;
            }
            if let Some(distance) = patch.distance {
                filter.distance = distance;
            }
            if let Some(page) = patch.page {
                filter.page = page;
            }
            if let Some(size) = patch.size {
                filter.size = size;
            }
            filter.updated_at = now;
            Ok(filter.clone())
        })
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Filter>> {
        self.with_state("filters.find_by_profile_id", tx, |state| Ok(state.filters.get(&profile_id).cloned()))
    }
}

#[async_trait]
impl IdentityRepository for InMemoryStore {
    async fn add(&self, identity: &Identity, tx: Option<&mut dyn Transaction>) -> Result<Identity> {
        self.with_state("identities.add", tx, |state| {
            state.require_profile(identity.profile_id)?;
            if state.identities.values().any(|i| i.external_id == identity.external_id) {
                return Err(DomainError::AlreadyExists {
                    entity: "Identity",
                    field: "external_id",
                    value: identity.external_id.to_string(),
                });
            }
            state.identities.insert(identity.profile_id, identity.clone());
            Ok(identity.clone())
        })
    }

    async fn update(&self, profile_id: ProfileId, patch: &IdentityPatch, tx: Option<&mut dyn Transaction>) -> Result<Identity> {
        let now = self.now();
        self.with_state("identities.update", tx, |state| {
            let identity = state
                .identities
                .get_mut(&profile_id)
                .ok_or_else(|| Identity::not_found(profile_id))?;
            if let Some(username) = &patch.username {
                identity.username = username.clone();
            }
            if let Some(first_name) = &patch.first_name {
                identity.first_name = first_name.clone();
            }
            if let Some(last_name) = &patch.last_name {
                identity.last_name = last_name.clone();
            }
            if let Some(language_code) = &patch.language_code {
                identity.language_code = language_code.clone();
            }
            if let Some(allows) = patch.allows_write_to_pm {
                identity.allows_write_to_pm = allows;
            }
            identity.updated_at = now;
            Ok(identity.clone())
        })
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Identity>> {
        self.with_state("identities.find_by_profile_id", tx, |state| {
            Ok(state.identities.get(&profile_id).cloned())
        })
    }
}

#[async_trait]
impl StatusRepository for InMemoryStore {
    async fn add(&self, status: &Status, tx: Option<&mut dyn Transaction>) -> Result<Status> {
        self.with_state("statuses.add", tx, |state| {
            state.require_profile(status.profile_id)?;
            state.statuses.insert(status.profile_id, status.clone());
            Ok(status.clone())
        })
    }

    async fn update(&self, profile_id: ProfileId, patch: &StatusPatch, tx: Option<&mut dyn Transaction>) -> Result<Status> {
        let now = self.now();
        self.with_state("statuses.update", tx, |state| {
            let status = state
                .statuses
                .get_mut(&profile_id)
                .ok_or_else(|| Status::not_found(profile_id))?;
            let apply = |flag: &mut bool, value: Option<bool>| {
                if let Some(value) = value {
                    *flag = value;
                }
            };
            apply(&mut status.is_frozen, patch.is_frozen);
            apply(&mut status.is_blocked, patch.is_blocked);
            apply(&mut status.is_premium, patch.is_premium);
            apply(&mut status.is_show_distance, patch.is_show_distance);
            apply(&mut status.is_invisible, patch.is_invisible);
            apply(&mut status.is_left_hand, patch.is_left_hand);
            status.updated_at = now;
            Ok(status.clone())
        })
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Status>> {
        self.with_state("statuses.find_by_profile_id", tx, |state| Ok(state.statuses.get(&profile_id).cloned()))
    }
}

#[async_trait]
impl ImageRepository for InMemoryStore {
    async fn add(&self, image: &NewImage, tx: Option<&mut dyn Transaction>) -> Result<Image> {
        let now = self.now();
        self.with_state("images.add", tx, |state| {
            state.require_profile(image.profile_id)?;
            let id = state.next_id();
            let stored = Image {
                id: ImageId::from_raw(id),
                profile_id: image.profile_id,
                name: image.name.clone(),
                url: image.url.clone(),
                size: image.size,
                is_blocked: false,
                is_primary: image.is_primary,
                is_private: image.is_private,
                deleted_at: None,
                created_at: now,
                updated_at: now,
            };
            state.images.insert(id, stored.clone());
            Ok(stored)
        })
    }

    async fn find_by_id(&self, id: ImageId, tx: Option<&mut dyn Transaction>) -> Result<Option<Image>> {
        self.with_state("images.find_by_id", tx, |state| Ok(state.images.get(&id.value()).cloned()))
    }

    async fn list_all(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Vec<Image>> {
        self.with_state("images.list_all", tx, |state| {
            Ok(state.images.values().filter(|i| i.profile_id == profile_id).cloned().collect())
        })
    }

    async fn list_active(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Vec<Image>> {
        self.with_state("images.list_active", tx, |state| {
            Ok(state
                .images
                .values()
                .filter(|i| i.profile_id == profile_id && !i.is_deleted())
                .cloned()
                .collect())
        })
    }

    async fn list_public(&self, profile_id: ProfileId) -> Result<Vec<Image>> {
        self.with_state("images.list_public", None, |state| {
            Ok(state
                .images
                .values()
                .filter(|i| i.profile_id == profile_id && i.is_public())
                .cloned()
                .collect())
        })
    }

    async fn last_public(&self, profile_id: ProfileId) -> Result<Option<Image>> {
        Ok(self.list_public(profile_id).await?.into_iter().max_by_key(|i| (i.created_at, i.id)))
    }

    async fn mark_deleted(&self, id: ImageId, at: DateTime<Utc>, tx: Option<&mut dyn Transaction>) -> Result<Image> {
        self.with_state("images.mark_deleted", tx, |state| {
            let image = state.images.get_mut(&id.value()).ok_or_else(|| Image::not_found(id))?;
            image.deleted_at = Some(at);
            image.updated_at = at;
            Ok(image.clone())
        })
    }
}

#[async_trait]
impl BlockRepository for InMemoryStore {
    async fn add(&self, profile_id: ProfileId, blocked_profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Block> {
        let now = self.now();
        self.with_state("blocks.add", tx, |state| {
            state.require_profile(profile_id)?;
            state.require_profile(blocked_profile_id)?;
            if let Some(existing) = state
                .blocks
                .iter()
                .find(|b| b.profile_id == profile_id && b.blocked_profile_id == blocked_profile_id)
            {
                return Ok(existing.clone());
            }
            let block = Block {
                id: BlockId::from_raw(state.next_id()),
                profile_id,
                blocked_profile_id,
                created_at: now,
            };
            state.blocks.push(block.clone());
            Ok(block)
        })
    }

    async fn exists(&self, profile_id: ProfileId, blocked_profile_id: ProfileId) -> Result<bool> {
        self.with_state("blocks.exists", None, |state| {
            Ok(state
                .blocks
                .iter()
                .any(|b| b.profile_id == profile_id && b.blocked_profile_id == blocked_profile_id))
        })
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn add(&self, profile_id: ProfileId, liked_profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Like> {
        let now = self.now();
        self.with_state("likes.add", tx, |state| {
            state.require_profile(profile_id)?;
            state.require_profile(liked_profile_id)?;
            if state
                .likes
                .iter()
                .any(|l| l.profile_id == profile_id && l.liked_profile_id == liked_profile_id)
            {
                return Err(DomainError::AlreadyExists {
                    entity: "Like",
                    field: "liked_profile_id",
                    value: liked_profile_id.to_string(),
                });
            }
            let like = Like {
                id: LikeId::from_raw(state.next_id()),
                profile_id,
                liked_profile_id,
                is_liked: true,
                created_at: now,
                updated_at: now,
            };
            state.likes.push(like.clone());
            Ok(like)
        })
    }

    async fn update(&self, id: LikeId, is_liked: bool, tx: Option<&mut dyn Transaction>) -> Result<Like> {
        let now = self.now();
        self.with_state("likes.update", tx, |state| {
            let like = state
                .likes
                .iter_mut()
                .find(|l| l.id == id)
                .ok_or_else(|| Like::not_found(id))?;
            like.is_liked = is_liked;
            like.updated_at = now;
            Ok(like.clone())
        })
    }

    async fn find_by_id(&self, id: LikeId, tx: Option<&mut dyn Transaction>) -> Result<Option<Like>> {
        self.with_state("likes.find_by_id", tx, |state| Ok(state.likes.iter().find(|l| l.id == id).cloned()))
    }

    async fn find_by_pair(&self, profile_id: ProfileId, liked_profile_id: ProfileId) -> Result<Option<Like>> {
        self.with_state("likes.find_by_pair", None, |state| {
            Ok(state
                .likes
                .iter()
                .find(|l| l.profile_id == profile_id && l.liked_profile_id == liked_profile_id)
                .cloned())
        })
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryStore {
    async fn add(
        &self,
        profile_id: ProfileId,
        complained_profile_id: ProfileId,
        reason: &str,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Complaint> {
        let now = self.now();
        self.with_state("complaints.add", tx, |state| {
            state.require_profile(profile_id)?;
            state.require_profile(complained_profile_id)?;
            let complaint = Complaint {
                id: ComplaintId::from_raw(state.next_id()),
                profile_id,
                complained_profile_id,
                reason: reason.to_string(),
                created_at: now,
            };
            state.complaints.push(complaint.clone());
            Ok(complaint)
        })
    }

    async fn count_against(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<u64> {
        self.with_state("complaints.count_against", tx, |state| {
            Ok(state
                .complaints
                .iter()
                .filter(|c| c.complained_profile_id == profile_id)
                .count() as u64)
        })
    }
}

#[async_trait]
impl ImagePurgeOutbox for InMemoryStore {
    async fn enqueue(&self, jobs: &[PurgeJob], tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.with_state("purge_outbox.enqueue", tx, |state| {
            state.purge_jobs.extend(jobs.iter().cloned().map(|job| OutboxEntry {
                job,
                processed: false,
                last_error: None,
            }));
            Ok(())
        })
    }

    async fn fetch_unprocessed(&self, limit: u32, max_attempts: i32) -> Result<Vec<PurgeJob>> {
        self.with_state("purge_outbox.fetch_unprocessed", None, |state| {
            Ok(state
                .purge_jobs
                .iter()
                .filter(|e| !e.processed && e.job.attempts < max_attempts)
                .take(limit as usize)
                .map(|e| e.job.clone())
                .collect())
        })
    }

    async fn mark_as_processed(&self, ids: &[Uuid]) -> Result<()> {
        self.with_state("purge_outbox.mark_as_processed", None, |state| {
            for entry in state.purge_jobs.iter_mut().filter(|e| ids.contains(&e.job.id)) {
                entry.processed = true;
            }
            Ok(())
        })
    }

    async fn mark_as_failed(&self, id: Uuid, last_error: String) -> Result<()> {
        self.with_state("purge_outbox.mark_as_failed", None, |state| {
            if let Some(entry) = state.purge_jobs.iter_mut().find(|e| e.job.id == id) {
                entry.job.attempts += 1;
                entry.last_error = Some(last_error);
            }
            Ok(())
        })
    }
}
