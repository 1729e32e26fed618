//! Outline and picking-bounds cache

use std::collections::HashMap;

use shared::ObjectId;

use super::build_scene_outlines;
use crate::state::scene::SceneState;
use crate::viewport::mesh::LineMeshData;
use crate::viewport::picking::Aabb;

/// Cached object outlines and bounds, rebuilt when the scene version changes
pub struct OutlineCache {
    outlines: HashMap<ObjectId, LineMeshData>,
    aabbs: HashMap<ObjectId, Aabb>,
    version: u64,
    rebuild_count: u64,
}

impl Default for OutlineCache {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineCache {
    pub fn new() -> Self {
        Self {
            outlines: HashMap::new(),
            aabbs: HashMap::new(),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, scene_version: u64) -> bool {
        self.version == scene_version
    }

    /// Rebuild when the scene changed. Returns true if a rebuild happened.
    pub fn update(&mut self, scene: &SceneState, segments: u32) -> bool {
        if self.is_valid(scene.version()) {
            return false;
        }
        self.rebuild(scene, segments);
        true
    }

    /// Rebuild cached outlines from the scene
    pub fn rebuild(&mut self, scene: &SceneState, segments: u32) {
        self.outlines = build_scene_outlines(scene, segments);
        self.aabbs = self
            .outlines
            .iter()
            .filter_map(|(id, mesh)| Aabb::from_points(mesh.positions()).map(|b| (id.clone(), b)))
            .collect();
        self.version = scene.version();
        self.rebuild_count += 1;
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    pub fn outline(&self, id: &str) -> Option<&LineMeshData> {
        self.outlines.get(id)
    }

    /// Get the cached AABBs
    pub fn aabbs(&self) -> &HashMap<ObjectId, Aabb> {
        &self.aabbs
    }
}
