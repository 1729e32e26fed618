//! Position and rotation updates

use super::SceneState;

/// Euler axis for a rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    fn index(self) -> usize {
        match self {
            RotationAxis::X => 0,
            RotationAxis::Y => 1,
            RotationAxis::Z => 2,
        }
    }
}

impl SceneState {
    /// Move an object to an absolute position. Returns false for an unknown ID.
    pub fn set_position(&mut self, id: &str, position: [f64; 3]) -> bool {
        let Some(object) = self.get_by_id_mut(id) else {
            return false;
        };
        object.transform.position = position;
        self.version += 1;
        true
    }

    /// Add `delta` radians to one Euler angle of an object
    pub fn rotate(&mut self, id: &str, axis: RotationAxis, delta: f64) -> bool {
        let Some(object) = self.get_by_id_mut(id) else {
            return false;
        };
        object.transform.rotation[axis.index()] += delta;
        self.version += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::red_cylinder;

    #[test]
    fn test_set_position() {
        let mut s = SceneState::default();
        let a = red_cylinder();
        s.add(a.clone());
        assert!(s.set_position(&a.id, [1.0, -2.0, 0.5]));
        assert_eq!(s.get(0).unwrap().position(), [1.0, -2.0, 0.5]);
    }

    #[test]
    fn test_rotate_single_axis() {
        let mut s = SceneState::default();
        let a = red_cylinder();
        s.add(a.clone());
        assert!(s.rotate(&a.id, RotationAxis::Y, 0.25));
        assert_eq!(s.get(0).unwrap().rotation(), [0.0, 0.25, 0.0]);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut s = SceneState::default();
        let v = s.version();
        assert!(!s.set_position("nope", [1.0; 3]));
        assert!(!s.rotate("nope", RotationAxis::Z, 0.1));
        assert_eq!(s.version(), v);
    }

    #[test]
    fn test_mutations_bump_version() {
        let mut s = SceneState::default();
        let a = red_cylinder();
        s.add(a.clone());
        let v = s.version();
        s.set_position(&a.id, [0.0, 1.0, 0.0]);
        s.rotate(&a.id, RotationAxis::X, 0.1);
        assert_eq!(s.version(), v + 2);
    }
}
