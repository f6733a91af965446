use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::error::TutorError;
use crate::tutor::types::LearnerProfile;

/// Owns every learner profile. Each profile sits behind its own lock so a
/// read-modify-write of one learner never interleaves with another call on
/// the same learner.
#[derive(Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<String, Arc<Mutex<LearnerProfile>>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, learner_id: &str, profile: LearnerProfile) -> Result<(), TutorError> {
        let mut profiles = self.profiles.write();
        if profiles.contains_key(learner_id) {
            return Err(TutorError::AlreadyExists(learner_id.to_string()));
        }
        profiles.insert(learner_id.to_string(), Arc::new(Mutex::new(profile)));
        Ok(())
    }

    pub fn contains(&self, learner_id: &str) -> bool {
        self.profiles.read().contains_key(learner_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }

    pub fn learner_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.profiles.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    fn entry(&self, learner_id: &str) -> Result<Arc<Mutex<LearnerProfile>>, TutorError> {
        self.profiles
            .read()
            .get(learner_id)
            .cloned()
            .ok_or_else(|| TutorError::NotFound(learner_id.to_string()))
    }

    pub fn with_profile<T, F>(&self, learner_id: &str, f: F) -> Result<T, TutorError>
    where
        F: FnOnce(&LearnerProfile) -> T,
    {
        let entry = self.entry(learner_id)?;
        let guard = entry.lock();
        Ok(f(&guard))
    }

    /// The closure's own error is propagated as-is; the profile lock is held
    /// for the whole call.
    pub fn with_profile_mut<T, F>(&self, learner_id: &str, f: F) -> Result<T, TutorError>
    where
        F: FnOnce(&mut LearnerProfile) -> Result<T, TutorError>,
    {
        let entry = self.entry(learner_id)?;
        let mut guard = entry.lock();
        f(&mut guard)
    }
}
