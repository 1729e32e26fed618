//! Pointer-drag and arrow-key handling.
//!
//! Turns discrete drag and key events into registry mutations. Every drag
//! move on a linked scene recomputes the link right away, so the line is
//! never more than one event behind the objects.

use glam::DVec3;
use shared::ObjectId;

use crate::state::scene::RotationAxis;
use crate::state::AppState;

/// Rotation applied per arrow key press (radians)
pub const ROTATION_STEP: f64 = 0.1;

/// The four arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Up,
    Right,
    Down,
}

impl ArrowKey {
    /// Map a DOM-style key code (37..=40) to an arrow key
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(ArrowKey::Left),
            38 => Some(ArrowKey::Up),
            39 => Some(ArrowKey::Right),
            40 => Some(ArrowKey::Down),
            _ => None,
        }
    }

    /// Axis and signed angle this key applies.
    /// Left/Right turn around Z, Up/Down around Y.
    pub fn rotation(self) -> (RotationAxis, f64) {
        match self {
            ArrowKey::Left => (RotationAxis::Z, -ROTATION_STEP),
            ArrowKey::Right => (RotationAxis::Z, ROTATION_STEP),
            ArrowKey::Up => (RotationAxis::Y, ROTATION_STEP),
            ArrowKey::Down => (RotationAxis::Y, -ROTATION_STEP),
        }
    }
}

/// Events emitted by a pointer-drag provider
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// Pointer went down over an object
    Start(ObjectId),
    /// The dragged object should move to this world position
    Move(ObjectId, DVec3),
    /// Pointer released
    End(ObjectId),
}

/// Drag state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(ObjectId),
}

/// Maps drag and key events onto the scene
#[derive(Debug, Default)]
pub struct InteractionController {
    phase: DragPhase,
}

impl InteractionController {
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Apply a drag event. Returns true when scene state changed.
    pub fn handle_drag(&mut self, state: &mut AppState, event: DragEvent) -> bool {
        match event {
            DragEvent::Start(id) => {
                if !state.scene.contains(&id) {
                    tracing::debug!("Drag start on unknown object {id}");
                    return false;
                }
                state.selection.select(id.clone());
                self.phase = DragPhase::Dragging(id);
                true
            }
            DragEvent::Move(id, position) => {
                let DragPhase::Dragging(ref dragged) = self.phase else {
                    tracing::debug!("Drag move without drag start, ignored");
                    return false;
                };
                if *dragged != id {
                    tracing::debug!("Drag move for {id} while dragging {dragged}, ignored");
                    return false;
                }
                if !state.scene.set_position(&id, position.to_array()) {
                    return false;
                }
                if state.link.is_active() {
                    state.link.recompute(&state.scene);
                }
                true
            }
            DragEvent::End(id) => {
                if let DragPhase::Dragging(ref dragged) = self.phase {
                    if *dragged != id {
                        tracing::debug!("Drag end for {id} while dragging {dragged}");
                    }
                }
                // Selection stays on the dragged object
                self.phase = DragPhase::Idle;
                false
            }
        }
    }

    /// Rotate the selected object by one step. No-op without a selection.
    pub fn handle_key(&mut self, state: &mut AppState, key: ArrowKey) -> bool {
        let Some(id) = state.selection.primary().cloned() else {
            return false;
        };
        let (axis, delta) = key.rotation();
        state.scene.rotate(&id, axis, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::two_cylinder_state;

    #[test]
    fn test_key_codes() {
        assert_eq!(ArrowKey::from_key_code(37), Some(ArrowKey::Left));
        assert_eq!(ArrowKey::from_key_code(38), Some(ArrowKey::Up));
        assert_eq!(ArrowKey::from_key_code(39), Some(ArrowKey::Right));
        assert_eq!(ArrowKey::from_key_code(40), Some(ArrowKey::Down));
        assert_eq!(ArrowKey::from_key_code(13), None);
    }

    #[test]
    fn test_drag_start_selects() {
        let (mut state, a, _) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        assert!(ctl.handle_drag(&mut state, DragEvent::Start(a.clone())));
        assert_eq!(ctl.phase(), &DragPhase::Dragging(a.clone()));
        assert!(state.selection.is_selected(&a));
    }

    #[test]
    fn test_drag_start_unknown_stays_idle() {
        let (mut state, _, _) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        assert!(!ctl.handle_drag(&mut state, DragEvent::Start("ghost".into())));
        assert_eq!(ctl.phase(), &DragPhase::Idle);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_drag_move_updates_position() {
        let (mut state, a, _) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(a.clone()));
        assert!(ctl.handle_drag(&mut state, DragEvent::Move(a.clone(), DVec3::new(1.0, 2.0, 0.0))));
        assert_eq!(state.scene.get_by_id(&a).unwrap().position(), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_drag_move_when_idle_ignored() {
        let (mut state, a, _) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        assert!(!ctl.handle_drag(&mut state, DragEvent::Move(a.clone(), DVec3::ONE)));
        assert_eq!(state.scene.get_by_id(&a).unwrap().position(), [0.0; 3]);
    }

    #[test]
    fn test_drag_move_other_object_ignored() {
        let (mut state, a, b) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(a));
        assert!(!ctl.handle_drag(&mut state, DragEvent::Move(b.clone(), DVec3::ONE)));
        assert_eq!(state.scene.get_by_id(&b).unwrap().position(), [0.0; 3]);
    }

    #[test]
    fn test_drag_move_recomputes_link() {
        let (mut state, a, b) = two_cylinder_state();
        state.connect_objects().unwrap();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(b.clone()));
        ctl.handle_drag(&mut state, DragEvent::Move(b, DVec3::new(3.0, -1.0, 0.5)));

        let link = state.link.active().unwrap();
        assert_eq!(link.samples()[50], DVec3::new(3.0, -1.0, 0.5));
        assert_eq!(link.samples()[0], DVec3::ZERO);
        assert_eq!(link.start_id(), &a);
    }

    #[test]
    fn test_drag_end_keeps_selection() {
        let (mut state, a, _) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(a.clone()));
        ctl.handle_drag(&mut state, DragEvent::End(a.clone()));
        assert_eq!(ctl.phase(), &DragPhase::Idle);
        assert!(state.selection.is_selected(&a));
    }

    #[test]
    fn test_rotate_without_selection_noop() {
        let (mut state, a, b) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        for key in [ArrowKey::Left, ArrowKey::Right, ArrowKey::Up, ArrowKey::Down] {
            assert!(!ctl.handle_key(&mut state, key));
        }
        assert_eq!(state.scene.get_by_id(&a).unwrap().rotation(), [0.0; 3]);
        assert_eq!(state.scene.get_by_id(&b).unwrap().rotation(), [0.0; 3]);
    }

    #[test]
    fn test_four_right_presses() {
        let (mut state, a, b) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(a.clone()));
        ctl.handle_drag(&mut state, DragEvent::End(a.clone()));
        for _ in 0..4 {
            assert!(ctl.handle_key(&mut state, ArrowKey::Right));
        }
        let rot = state.scene.get_by_id(&a).unwrap().rotation();
        assert!((rot[2] - 0.4).abs() < 1e-12);
        assert_eq!(rot[0], 0.0);
        assert_eq!(rot[1], 0.0);
        // Only the selected object turns
        assert_eq!(state.scene.get_by_id(&b).unwrap().rotation(), [0.0; 3]);
    }

    #[test]
    fn test_key_axes() {
        let (mut state, a, _) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(a.clone()));
        ctl.handle_key(&mut state, ArrowKey::Left);
        ctl.handle_key(&mut state, ArrowKey::Up);
        ctl.handle_key(&mut state, ArrowKey::Up);
        ctl.handle_key(&mut state, ArrowKey::Down);
        let rot = state.scene.get_by_id(&a).unwrap().rotation();
        assert!((rot[2] + 0.1).abs() < 1e-12);
        assert!((rot[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_targets_last_dragged() {
        let (mut state, a, b) = two_cylinder_state();
        let mut ctl = InteractionController::default();
        ctl.handle_drag(&mut state, DragEvent::Start(a.clone()));
        ctl.handle_drag(&mut state, DragEvent::End(a.clone()));
        ctl.handle_drag(&mut state, DragEvent::Start(b.clone()));
        ctl.handle_drag(&mut state, DragEvent::End(b.clone()));
        ctl.handle_key(&mut state, ArrowKey::Right);
        assert_eq!(state.scene.get_by_id(&a).unwrap().rotation(), [0.0; 3]);
        assert!((state.scene.get_by_id(&b).unwrap().rotation()[2] - 0.1).abs() < 1e-12);
    }
}
