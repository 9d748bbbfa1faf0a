use super::{LuminaireType, Room};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The application the project was exported from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostApplication {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl Default for HostApplication {
    fn default() -> Self {
        Self {
            name: "Revit".to_string(),
            version: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default = "today")]
    pub date: NaiveDate,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub host: HostApplication,
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Luminaire catalog, in the order types were first encountered.
    #[serde(default)]
    pub luminaire_types: Vec<LuminaireType>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl Project {
    #[must_use]
    pub fn new(name: String, date: NaiveDate, operator: String, host: HostApplication) -> Self {
        Self {
            name,
            date,
            operator,
            host,
            rooms: Vec::new(),
            luminaire_types: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_luminaires(&self) -> usize {
        self.rooms.iter().map(|r| r.luminaires.len()).sum()
    }

    #[must_use]
    pub fn total_openings(&self) -> usize {
        self.rooms.iter().map(|r| r.openings.len()).sum()
    }
}
