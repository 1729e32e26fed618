//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Highlight color for the selected object
    pub selection_color: [u8; 3],
    /// Outline stroke width in pixels
    pub outline_width: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 35],
            selection_color: [0, 220, 255],
            outline_width: 1.0,
        }
    }
}

/// Perspective camera settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Initial distance from the origin
    pub distance: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            distance: 5.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

/// Link (connecting line) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Color used for new links until the user picks another
    pub default_color: String,
    /// Line width in pixels
    pub stroke_width: f32,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            default_color: "#ff0000".to_string(),
            stroke_width: 2.0,
        }
    }
}

/// Initial values for the "Add cylinder" form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveDefaults {
    pub height: f64,
    pub top_radius: f64,
    pub bottom_radius: f64,
    pub color: String,
    /// Radial segments for the wireframe outline
    pub segments: u32,
}

impl Default for PrimitiveDefaults {
    fn default() -> Self {
        Self {
            height: 1.0,
            top_radius: 0.5,
            bottom_radius: 0.5,
            color: "#ffffff".to_string(),
            segments: crate::build::DEFAULT_SEGMENTS,
        }
    }
}

/// Native window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub viewport: ViewportSettings,
    pub camera: CameraSettings,
    pub link: LinkSettings,
    pub primitive: PrimitiveDefaults,
    pub window: WindowSettings,
}

impl AppSettings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tether", "tether")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(dir) = path.parent() {
                if std::fs::create_dir_all(dir).is_err() {
                    return;
                }
            }
            match serde_json::to_string_pretty(self) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        tracing::warn!("Failed to write settings to {}: {e}", path.display());
                    }
                }
                Err(e) => tracing::warn!("Failed to serialize settings: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_and_link() {
        let s = AppSettings::default();
        assert_eq!(s.camera.fov_degrees, 50.0);
        assert_eq!(s.camera.distance, 5.0);
        assert_eq!(s.camera.near, 0.1);
        assert_eq!(s.camera.far, 200.0);
        assert_eq!(s.link.default_color, "#ff0000");
        assert_eq!(s.primitive.segments, 30);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = AppSettings::from_json(r#"{"link": {"stroke_width": 4.0}}"#).unwrap();
        assert_eq!(s.link.stroke_width, 4.0);
        assert_eq!(s.link.default_color, "#ff0000");
        assert_eq!(s.camera.fov_degrees, 50.0);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppSettings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = AppSettings::default();
        s.primitive.color = "#00ff00".to_string();
        let json = serde_json::to_string(&s).unwrap();
        let back = AppSettings::from_json(&json).unwrap();
        assert_eq!(back.primitive.color, "#00ff00");
    }
}
