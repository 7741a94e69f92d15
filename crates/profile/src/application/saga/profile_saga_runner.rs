// crates/profile/src/application/saga/profile_saga_runner.rs

use crate::application::common::upsert_navigator;
use crate::application::ports::ObjectStore;
use crate::application::saga::{ProfileSaga, ProfileSagaStep, SagaOutcome};
use crate::domain::entities::{NewImage, Profile, PurgeJob};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Exécute une saga dans une seule unité de travail.
///
/// La première étape en erreur annule la transaction et l'erreur est renvoyée telle quelle.
/// Les blobs déjà uploadés sont alors supprimés (compensation). Ceux qui résistent partent
/// dans l'outbox de purge.
pub struct ProfileSagaRunner {
    uow_factory: Arc<UnitOfWorkFactory>,
    object_store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
    deadline: Duration,
}

impl ProfileSagaRunner {
    pub fn new(
        uow_factory: Arc<UnitOfWorkFactory>,
        object_store: Arc<dyn ObjectStore>,
        clock: Arc<dyn Clock>,
        deadline: Duration,
    ) -> Self {
        Self { uow_factory, object_store, clock, deadline }
    }

    pub async fn run(&self, saga: ProfileSaga) -> Result<SagaOutcome> {
        let profile_id = saga.profile_id();
        let step_count = saga.steps.len();
        let mut uploaded: Vec<String> = Vec::new();

        // Le délai borne les étapes, pas le COMMIT dont l'issue serait inconnue
        let staged = match tokio::time::timeout(self.deadline, self.execute(saga, &mut uploaded)).await {
            Ok(staged) => staged,
            Err(_) => {
                tracing::error!(%profile_id, deadline = ?self.deadline, "⏱️ Saga deadline exceeded, transaction rolled back");
                Err(DomainError::Infrastructure(format!(
                    "saga deadline of {:?} exceeded",
                    self.deadline
                )))
            }
        };

        let result = match staged {
            Ok((mut uow, outcome)) => uow.commit().await.map(|()| {
                tracing::info!(%profile_id, steps = step_count, "✅ Saga committed");
                outcome
            }),
            Err(error) => Err(error),
        };

        if result.is_err() && !uploaded.is_empty() {
            self.compensate(profile_id, &uploaded).await;
        }

        result
    }

    /// Applique les étapes et rend l'unité de travail prête à valider
    async fn execute(&self, saga: ProfileSaga, uploaded: &mut Vec<String>) -> Result<(UnitOfWork, SagaOutcome)> {
        let ProfileSaga { profile_id, steps } = saga;
        let now = self.clock.now();

        let mut uow = self.uow_factory.create_unit().await?;
        let mut outcome = SagaOutcome::default();

        for step in steps {
            let name = step.name();
            tracing::debug!(%profile_id, step = name, kind = ?step.kind(), "saga step");

            if let Err(error) = self.apply(&mut uow, profile_id, step, now, &mut outcome, uploaded).await {
                tracing::warn!(%profile_id, step = name, %error, "❌ Saga step failed, rolling back");
                if let Err(rollback_error) = uow.rollback().await {
                    tracing::error!(%profile_id, %rollback_error, "Rollback failed");
                }
                return Err(error);
            }
        }

        Ok((uow, outcome))
    }

    async fn apply(
        &self,
        uow: &mut UnitOfWork,
        profile_id: ProfileId,
        step: ProfileSagaStep,
        now: DateTime<Utc>,
        outcome: &mut SagaOutcome,
        uploaded: &mut Vec<String>,
    ) -> Result<()> {
        match step {
            ProfileSagaStep::InsertProfile(profile) => {
                outcome.profile = Some(uow.profiles().add(&profile, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::UpdateProfile(patch) => {
                outcome.profile = Some(uow.profiles().update(profile_id, &patch, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::TouchLastOnline => {
                uow.profiles().touch_last_online(profile_id, now, Some(uow.tx()?)).await?;
            }
            ProfileSagaStep::InsertStatus(status) => {
                outcome.status = Some(uow.statuses().add(&status, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::UpdateStatus(patch) => {
                outcome.status = Some(uow.statuses().update(profile_id, &patch, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::UpsertNavigator(position) => {
                outcome.navigator = Some(upsert_navigator(uow, profile_id, &position, now).await?);
            }
            ProfileSagaStep::StoreImage(upload) => {
                let key = upload.object_key(profile_id);
                let size = upload.bytes.len() as i64;

                let url = self
                    .object_store
                    .upload(&key, upload.bytes, &upload.content_type)
                    .await?;
                uploaded.push(key.clone());

                let image = NewImage {
                    profile_id,
                    name: key,
                    url,
                    size,
                    is_primary: upload.is_primary,
                    is_private: upload.is_private,
                };
                outcome.images.push(uow.images().add(&image, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::InsertFilter(filter) => {
                outcome.filter = Some(uow.filters().add(&filter, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::UpdateFilter(patch) => {
                outcome.filter = Some(uow.filters().update(profile_id, &patch, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::InsertIdentity(identity) => {
                outcome.identity = Some(uow.identities().add(&identity, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::UpdateIdentity(patch) => {
                outcome.identity = Some(uow.identities().update(profile_id, &patch, Some(uow.tx()?)).await?);
            }
            ProfileSagaStep::LoadNavigator => {
                outcome.navigator = uow.navigators().find_by_profile_id(profile_id, Some(uow.tx()?)).await?;
            }
            ProfileSagaStep::LoadStatus => {
                let status = uow.statuses().find_by_profile_id(profile_id, Some(uow.tx()?)).await?;
                outcome.status = Some(status.ok_or_else(|| Profile::not_found(profile_id))?);
            }
            ProfileSagaStep::LoadImages => {
                outcome.images = uow.images().list_active(profile_id, Some(uow.tx()?)).await?;
            }
        }

        Ok(())
    }

    async fn compensate(&self, profile_id: ProfileId, uploaded: &[String]) {
        let mut leftovers = Vec::new();

        for key in uploaded.iter().rev() {
            match self.object_store.delete(key).await {
                Ok(()) => tracing::info!(%profile_id, key = %key, "↩️ Uploaded image compensated"),
                Err(error) => {
                    tracing::warn!(%profile_id, key = %key, %error, "Compensation failed, deferring to purge outbox");
                    leftovers.push(PurgeJob::new(key.clone(), self.clock.now()));
                }
            }
        }

        if leftovers.is_empty() {
            return;
        }

        let outbox = self.uow_factory.repositories().purge_outbox.clone();
        if let Err(error) = outbox.enqueue(&leftovers, None).await {
            tracing::error!(%profile_id, %error, orphans = leftovers.len(), "Orphaned images could not be queued for purge");
        }
    }
}
