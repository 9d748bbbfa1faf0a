use super::LuminaireInstance;
use serde::{Deserialize, Serialize};

/// Plan position in host-native units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A door in the room's boundary. Sits on the floor, so only X/Y are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub width: f64,
    pub height: f64,
    pub position: Point2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub height: f64,
    pub working_plane: f64,
    /// Boundary loops as vertex lists; the first loop encloses the room.
    #[serde(default)]
    pub boundary: Vec<Vec<Point2>>,
    #[serde(default)]
    pub ceiling_reflectance: f64,
    #[serde(default)]
    pub luminaires: Vec<LuminaireInstance>,
    #[serde(default)]
    pub openings: Vec<Opening>,
    /// Set by the host adapter when the room could not be retrieved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>, height: f64, working_plane: f64) -> Self {
        Self {
            name: name.into(),
            height,
            working_plane,
            boundary: Vec::new(),
            ceiling_reflectance: 0.0,
            luminaires: Vec::new(),
            openings: Vec::new(),
            fault: None,
        }
    }

    /// Vertices of the enclosing loop, empty when the room is not enclosed.
    #[must_use]
    pub fn outline(&self) -> &[Point2] {
        self.boundary.first().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_enclosed(&self) -> bool {
        !self.outline().is_empty()
    }
}
