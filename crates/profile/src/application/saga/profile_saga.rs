// crates/profile/src/application/saga/profile_saga.rs

use crate::application::saga::ProfileSagaStep;
use crate::domain::value_objects::ProfileId;

/// Liste ordonnée des étapes d'une saga
#[derive(Debug, Clone)]
pub struct ProfileSaga {
    pub(crate) profile_id: ProfileId,
    pub(crate) steps: Vec<ProfileSagaStep>,
}

impl ProfileSaga {
    pub fn new(profile_id: ProfileId) -> Self {
        Self { profile_id, steps: Vec::new() }
    }

    pub fn then(mut self, step: ProfileSagaStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn then_some<T>(self, value: Option<T>, step: impl FnOnce(T) -> ProfileSagaStep) -> Self {
        match value {
            Some(value) => self.then(step(value)),
            None => self,
        }
    }

    pub fn then_each<T>(mut self, values: impl IntoIterator<Item = T>, step: impl Fn(T) -> ProfileSagaStep) -> Self {
        self.steps.extend(values.into_iter().map(step));
        self
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }

    pub fn steps(&self) -> &[ProfileSagaStep] {
        &self.steps
    }
}
