//! Object insertion

use shared::SceneObject;

use super::SceneState;
use crate::error::{SceneError, SceneResult};

impl SceneState {
    /// Append an object, failing with `CapacityExceeded` when the scene is full.
    /// The existing objects are left untouched on failure.
    pub fn try_add(&mut self, object: SceneObject) -> SceneResult<()> {
        if self.is_full() {
            return Err(SceneError::CapacityExceeded {
                capacity: Self::CAPACITY,
            });
        }

        tracing::info!("Added {} ({})", object.name, super::short_id(&object.id));
        self.objects.push(object);
        self.version += 1;
        Ok(())
    }

    /// Append an object if there is room. A full scene ignores the request
    /// and returns false.
    pub fn add(&mut self, object: SceneObject) -> bool {
        match self.try_add(object) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Add ignored: {e}");
                false
            }
        }
    }
}
