//! Pointer drag provider.
//!
//! Picks an object under the pointer and moves it on a plane facing the
//! camera through the object's position, keeping the grab offset so the
//! object does not jump to the cursor.

use std::collections::HashMap;

use glam::Vec3;
use shared::ObjectId;

use super::picking::{pick_nearest, ray_plane, Aabb, Ray};
use crate::interaction::DragEvent;
use crate::state::scene::SceneState;

struct ActiveDrag {
    object_id: ObjectId,
    plane_point: Vec3,
    plane_normal: Vec3,
    /// Hit point minus object position at grab time
    offset: Vec3,
}

/// Turns pointer press/move/release rays into drag events
#[derive(Default)]
pub struct PointerDrag {
    active: Option<ActiveDrag>,
}

impl PointerDrag {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Object currently held, if any
    pub fn target(&self) -> Option<&ObjectId> {
        self.active.as_ref().map(|d| &d.object_id)
    }

    /// Pointer pressed. Emits `Start` when the ray hits an object.
    pub fn press(
        &mut self,
        ray: &Ray,
        scene: &SceneState,
        aabbs: &HashMap<ObjectId, Aabb>,
        camera_forward: Vec3,
    ) -> Option<DragEvent> {
        let (id, _) = pick_nearest(ray, aabbs)?;
        let position = Vec3::from_array(scene.get_by_id(&id)?.position().map(|v| v as f32));

        let plane_normal = camera_forward.normalize_or_zero();
        let t = ray_plane(ray, position, plane_normal)?;
        let offset = ray.at(t) - position;

        self.active = Some(ActiveDrag {
            object_id: id.clone(),
            plane_point: position,
            plane_normal,
            offset,
        });
        Some(DragEvent::Start(id))
    }

    /// Pointer moved while pressed. Emits `Move` with the new object position.
    pub fn motion(&mut self, ray: &Ray) -> Option<DragEvent> {
        let drag = self.active.as_ref()?;
        let t = ray_plane(ray, drag.plane_point, drag.plane_normal)?;
        let position = ray.at(t) - drag.offset;
        Some(DragEvent::Move(drag.object_id.clone(), position.as_dvec3()))
    }

    /// Pointer released. Emits `End` if a drag was active.
    pub fn release(&mut self) -> Option<DragEvent> {
        self.active.take().map(|d| DragEvent::End(d.object_id))
    }
}
