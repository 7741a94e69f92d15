// crates/profile/src/application/add_complaint/add_complaint_use_case.rs

use crate::application::add_complaint::AddComplaintCommand;
use crate::application::common::ProfileGuard;
use crate::domain::entities::Complaint;
use crate::domain::params::StatusPatch;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

const MAX_REASON_LEN: usize = 1024;

pub struct AddComplaintUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
    block_threshold: u64,
}

impl AddComplaintUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, guard: ProfileGuard, block_threshold: u64) -> Self {
        Self { uow_factory, guard, block_threshold }
    }

    /// Enregistre la plainte ; au seuil, la cible est bloquée dans la même transaction
    pub async fn execute(&self, command: AddComplaintCommand) -> Result<Complaint> {
        let AddComplaintCommand { profile_id, complained_profile_id, reason } = command;

        let reason = reason.trim().to_string();
        if reason.is_empty() || reason.chars().count() > MAX_REASON_LEN {
            return Err(DomainError::Validation {
                field: "reason",
                reason: format!("must be between 1 and {MAX_REASON_LEN} characters"),
            });
        }

        ProfileGuard::ensure_distinct(profile_id, complained_profile_id, "complained_profile_id")?;
        self.guard.ensure_exists(profile_id).await?;
        self.guard.ensure_exists(complained_profile_id).await?;

        let threshold = self.block_threshold;
        let (complaint, blocked) = self
            .uow_factory
            .run_in_unit(move |uow| {
                Box::pin(async move {
                    let complaint = uow
                        .complaints()
                        .add(profile_id, complained_profile_id, &reason, Some(uow.tx()?))
                        .await?;

                    let count = uow.complaints().count_against(complained_profile_id, Some(uow.tx()?)).await?;
                    let blocked = count >= threshold;
                    if blocked {
                        uow.statuses()
                            .update(complained_profile_id, &StatusPatch::blocked(true), Some(uow.tx()?))
                            .await?;
                    }

                    Ok((complaint, blocked))
                })
            })
            .await?;

        tracing::info!(%profile_id, %complained_profile_id, "📣 Complaint recorded");
        if blocked {
            tracing::warn!(%complained_profile_id, threshold, "🚫 Profile blocked after complaints");
        }

        Ok(complaint)
    }
}
