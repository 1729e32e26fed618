//! Scene object registry
//!
//! Bounded, insertion-ordered collection of placed primitives. Objects are
//! added and mutated in place but never removed during a session.

mod display;
mod object_ops;
mod transform_ops;

pub use display::{format_point, object_display_name, short_id};
pub use transform_ops::RotationAxis;

use shared::{ObjectId, SceneObject};

/// Scene registry holding at most [`SceneState::CAPACITY`] objects
#[derive(Default)]
pub struct SceneState {
    /// Objects in insertion order
    pub(crate) objects: Vec<SceneObject>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Maximum number of objects in the scene
    pub const CAPACITY: usize = 2;

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of objects in the scene
    pub fn size(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.objects.len() >= Self::CAPACITY
    }

    /// Get an object by insertion index
    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    /// Get an object by ID
    pub fn get_by_id(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Get mutable object by ID
    pub(crate) fn get_by_id_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Check whether an object with this ID exists
    pub fn contains(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    /// All objects in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// IDs of all objects in insertion order
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|o| o.id.clone()).collect()
    }
}
