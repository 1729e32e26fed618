use std::collections::HashMap;

use glam::Vec3;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from a point cloud. Returns None for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut any = false;

        for p in points {
            min = min.min(p);
            max = max.max(p);
            any = true;
        }

        any.then_some(Self { min, max })
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest object whose AABB is intersected by the ray.
/// Returns the object ID and the hit distance.
pub fn pick_nearest(ray: &Ray, aabbs: &HashMap<String, Aabb>) -> Option<(String, f32)> {
    let mut best: Option<(String, f32)> = None;

    for (id, aabb) in aabbs {
        if let Some(dist) = ray_aabb(ray, aabb) {
            if best.as_ref().is_none_or(|(_, d)| dist < *d) {
                best = Some((id.clone(), dist));
            }
        }
    }

    best
}

/// Ray-plane intersection. Returns the distance along the ray, or None when the
/// ray is parallel to the plane or the plane lies behind the origin.
pub fn ray_plane(ray: &Ray, point_on_plane: Vec3, normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (point_on_plane - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb {
            min: center - Vec3::splat(0.5),
            max: center + Vec3::splat(0.5),
        }
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points([Vec3::new(-1.0, 2.0, 0.0), Vec3::new(3.0, -2.0, 1.0)]).unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 0.0, 0.5));
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), direction: Vec3::NEG_Z };
        let hit = ray_aabb(&ray, &unit_box_at(Vec3::ZERO)).unwrap();
        assert!((hit - 4.5).abs() < 1e-5);
        assert!(ray_aabb(&ray, &unit_box_at(Vec3::new(3.0, 0.0, 0.0))).is_none());
    }

    #[test]
    fn test_pick_nearest_prefers_closer() {
        let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), direction: Vec3::NEG_Z };
        let mut aabbs = HashMap::new();
        aabbs.insert("far".to_string(), unit_box_at(Vec3::new(0.0, 0.0, -2.0)));
        aabbs.insert("near".to_string(), unit_box_at(Vec3::new(0.0, 0.0, 1.0)));
        let (id, _) = pick_nearest(&ray, &aabbs).unwrap();
        assert_eq!(id, "near");
    }

    #[test]
    fn test_ray_plane() {
        let ray = Ray { origin: Vec3::new(1.0, 2.0, 5.0), direction: Vec3::NEG_Z };
        let t = ray_plane(&ray, Vec3::ZERO, Vec3::Z).unwrap();
        assert_eq!(ray.at(t), Vec3::new(1.0, 2.0, 0.0));
        // Parallel
        assert!(ray_plane(&ray, Vec3::ZERO, Vec3::X).is_none());
        // Behind
        assert!(ray_plane(&ray, Vec3::new(0.0, 0.0, 10.0), Vec3::Z).is_none());
    }
}
