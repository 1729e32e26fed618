//! Link manager: the single connecting line between two scene objects.
//!
//! The link stores endpoint IDs, never copies of the objects, so every
//! recomputation reads the live positions from the registry. Recomputation is
//! explicit; writing a position does not update the samples by itself.

use glam::DVec3;
use shared::{ObjectId, Rgb};

use super::scene::SceneState;
use crate::error::{SceneError, SceneResult};

/// Number of points sampled along a link (50 segments)
pub const LINK_SAMPLE_COUNT: usize = 51;

/// Sampled straight line between two objects
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSegment {
    start_id: ObjectId,
    end_id: ObjectId,
    samples: Vec<DVec3>,
    /// Endpoint positions captured at the last recomputation
    endpoints: [DVec3; 2],
    color: Rgb,
}

impl LinkSegment {
    /// Object anchoring sample 0
    pub fn start_id(&self) -> &ObjectId {
        &self.start_id
    }

    /// Object anchoring the last sample
    pub fn end_id(&self) -> &ObjectId {
        &self.end_id
    }

    pub fn samples(&self) -> &[DVec3] {
        &self.samples
    }

    pub fn start_point(&self) -> DVec3 {
        self.endpoints[0]
    }

    pub fn end_point(&self) -> DVec3 {
        self.endpoints[1]
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Whether `id` is one of the two endpoints
    pub fn connects(&self, id: &str) -> bool {
        self.start_id == id || self.end_id == id
    }
}

/// Owner of the (at most one) active link
#[derive(Debug)]
pub struct LinkState {
    active: Option<LinkSegment>,
    color: Rgb,
}

impl Default for LinkState {
    fn default() -> Self {
        Self::with_color(Rgb::RED)
    }
}

impl LinkState {
    pub fn with_color(color: Rgb) -> Self {
        Self {
            active: None,
            color,
        }
    }

    pub fn active(&self) -> Option<&LinkSegment> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Change the link color; applies to the active link immediately
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        if let Some(link) = self.active.as_mut() {
            link.color = color;
        }
    }

    /// Connect two distinct objects with a straight line sampled at their
    /// current positions, replacing any previous link.
    ///
    /// On error the previous link, if any, is left as it was.
    pub fn connect(&mut self, scene: &SceneState, a: &str, b: &str) -> SceneResult<&LinkSegment> {
        if a == b {
            return Err(SceneError::InvalidOperation(
                "cannot connect an object to itself".to_string(),
            ));
        }
        let (start, end) = endpoint_positions(scene, a, b).ok_or_else(|| {
            SceneError::InvalidOperation("both link endpoints must be in the scene".to_string())
        })?;

        tracing::info!(
            "Connected {} -> {}",
            super::scene::short_id(a),
            super::scene::short_id(b)
        );

        let link = self.active.insert(LinkSegment {
            start_id: a.to_string(),
            end_id: b.to_string(),
            samples: sample_line(start, end, LINK_SAMPLE_COUNT),
            endpoints: [start, end],
            color: self.color,
        });
        Ok(&*link)
    }

    /// Re-read both endpoint positions and regenerate the samples.
    /// Returns None when no link is active.
    pub fn recompute(&mut self, scene: &SceneState) -> Option<&LinkSegment> {
        let color = self.color;
        let link = self.active.as_mut()?;

        match endpoint_positions(scene, &link.start_id, &link.end_id) {
            Some((start, end)) => {
                link.samples = sample_line(start, end, LINK_SAMPLE_COUNT);
                link.endpoints = [start, end];
                link.color = color;
            }
            None => tracing::warn!("Link endpoint missing from scene, keeping last samples"),
        }
        Some(&*link)
    }
}

fn endpoint_positions(scene: &SceneState, a: &str, b: &str) -> Option<(DVec3, DVec3)> {
    let start = scene.get_by_id(a)?.position();
    let end = scene.get_by_id(b)?.position();
    Some((DVec3::from_array(start), DVec3::from_array(end)))
}

/// Sample `count` uniformly spaced points on the segment `start..=end`.
/// The first and last samples are exactly `start` and `end`.
pub fn sample_line(start: DVec3, end: DVec3, count: usize) -> Vec<DVec3> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            (0..count)
                .map(|i| match i {
                    0 => start,
                    i if i == last => end,
                    i => start + (end - start) * (i as f64 / last as f64),
                })
                .collect()
        }
    }
}
