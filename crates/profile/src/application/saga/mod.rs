// crates/profile/src/application/saga/mod.rs

mod profile_saga;
mod profile_saga_runner;
mod saga_outcome;
mod saga_step;

pub use profile_saga::ProfileSaga;
pub use profile_saga_runner::ProfileSagaRunner;
pub use saga_outcome::SagaOutcome;
pub use saga_step::{ProfileSagaStep, StepKind};
