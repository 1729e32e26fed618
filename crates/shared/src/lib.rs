use serde::{Deserialize, Serialize};

/// Уникальный идентификатор объекта в сцене
pub type ObjectId = String;

/// Параметры усечённого цилиндра (ось вдоль Y, центр в начале координат)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    pub height: f64,
    pub top_radius: f64,
    pub bottom_radius: f64,
}

impl CylinderParams {
    pub fn new(height: f64, top_radius: f64, bottom_radius: f64) -> Self {
        Self {
            height,
            top_radius,
            bottom_radius,
        }
    }
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self::new(1.0, 0.5, 0.5)
    }
}

/// Трансформация объекта: позиция и углы Эйлера (порядок XYZ, радианы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
        }
    }

    /// Трансформация с заданной позицией и нулевым поворотом
    pub fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }
}

/// Цвет RGB (8 бит на канал)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Разобрать цвет из строки: `#rgb`, `#rrggbb` (решётка необязательна)
    /// или базовое CSS-имя цвета.
    pub fn parse(input: &str) -> Option<Rgb> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        if let Some(named) = Self::from_name(s) {
            return Some(named);
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    channels[i] = v * 16 + v;
                }
                Some(Rgb::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb::new(r, g, b))
            }
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Rgb> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "red" => Rgb::new(255, 0, 0),
            "green" => Rgb::new(0, 128, 0),
            "blue" => Rgb::new(0, 0, 255),
            "white" => Rgb::WHITE,
            "black" => Rgb::BLACK,
            "yellow" => Rgb::new(255, 255, 0),
            "cyan" => Rgb::new(0, 255, 255),
            "magenta" => Rgb::new(255, 0, 255),
            "orange" => Rgb::new(255, 165, 0),
            "purple" => Rgb::new(128, 0, 128),
            "gray" | "grey" => Rgb::new(128, 128, 128),
            _ => return None,
        };
        Some(rgb)
    }

    /// Цвет в виде `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

/// Объект сцены: усечённый цилиндр с цветом и трансформацией
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Уникальный идентификатор объекта
    pub id: ObjectId,
    /// Имя объекта (для отображения)
    pub name: String,
    pub params: CylinderParams,
    pub color: Rgb,
    /// Позиция меняется перетаскиванием, поворот стрелками
    pub transform: Transform,
}

impl SceneObject {
    pub fn position(&self) -> [f64; 3] {
        self.transform.position
    }

    pub fn rotation(&self) -> [f64; 3] {
        self.transform.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Rgb ---

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Rgb::parse("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse("00FF00"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Rgb::parse("#0f8"), Some(Rgb::new(0, 255, 136)));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgb::parse("Red"), Some(Rgb::RED));
        assert_eq!(Rgb::parse("grey"), Rgb::parse("gray"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse(""), None);
        assert_eq!(Rgb::parse("   "), None);
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
        assert_eq!(Rgb::parse("chartreuse-ish"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(0, 255, 16).to_hex(), "#00ff10");
        assert_eq!(Rgb::parse(&Rgb::new(1, 2, 3).to_hex()), Some(Rgb::new(1, 2, 3)));
    }

    // --- Transform ---

    #[test]
    fn test_transform_defaults() {
        let t = Transform::new();
        assert_eq!(t.position, [0.0; 3]);
        assert_eq!(t.rotation, [0.0; 3]);
        assert_eq!(Transform::at([1.0, 2.0, 3.0]).position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scene_object_serde() {
        let obj = SceneObject {
            id: "a".to_string(),
            name: "Cylinder 1".to_string(),
            params: CylinderParams::new(2.0, 0.3, 0.3),
            color: Rgb::new(0, 255, 0),
            transform: Transform::at([1.0, 0.0, -1.0]),
        };
        let json = serde_json::to_string(&obj).unwrap();
        assert!(json.contains(r#""top_radius":0.3"#));
        let back: SceneObject = serde_json::from_str(&json).unwrap();
        assert_eq!(obj, back);
    }
}
