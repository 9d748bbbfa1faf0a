use super::Point3;
use serde::{Deserialize, Serialize};

const DEFAULT_LAMP_COUNT: u32 = 1;
const DEFAULT_MOUNTING_TYPE: u32 = 1;

/// Catalog entry for one kind of light fixture.
///
/// `load` and `flux` keep the host's formatted strings (`"18 W"`,
/// `"1200 lm"`); they are parsed when the section is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuminaireType {
    pub name: String,
    #[serde(default)]
    pub load: Option<String>,
    #[serde(default)]
    pub flux: Option<String>,
    #[serde(default)]
    pub lamp_count: Option<u32>,
    #[serde(default = "default_bounding_box")]
    pub bounding_box: [f64; 3],
    #[serde(default = "default_mounting_type")]
    pub mounting_type: u32,
}

/// One placed fixture. Rotation is not tracked: hosts cannot report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuminaireInstance {
    pub luminaire_type: String,
    pub position: Point3,
}

fn default_bounding_box() -> [f64; 3] {
    [1.0, 1.0, 0.0]
}

fn default_mounting_type() -> u32 {
    DEFAULT_MOUNTING_TYPE
}

impl LuminaireType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            load: None,
            flux: None,
            lamp_count: None,
            bounding_box: default_bounding_box(),
            mounting_type: DEFAULT_MOUNTING_TYPE,
        }
    }

    #[must_use]
    pub fn with_photometry(mut self, load: impl Into<String>, flux: impl Into<String>) -> Self {
        self.load = Some(load.into());
        self.flux = Some(flux.into());
        self
    }

    /// Lamp count, 1 when the host has no authoritative value.
    #[must_use]
    pub fn lamps(&self) -> u32 {
        self.lamp_count.unwrap_or(DEFAULT_LAMP_COUNT)
    }

    /// Name as used for section headers and `LumN=` values.
    #[must_use]
    pub fn identifier(&self) -> String {
        sanitize_identifier(&self.name)
    }
}

impl LuminaireInstance {
    #[must_use]
    pub fn new(luminaire_type: impl Into<String>, position: Point3) -> Self {
        Self {
            luminaire_type: luminaire_type.into(),
            position,
        }
    }
}

/// Strips spaces; STF identifiers may not contain whitespace.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    name.replace(' ', "")
}
