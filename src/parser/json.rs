use crate::error::InputError;
use crate::model::Project;
use crate::units::HostSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A project description as handed over by a host adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Host unit/locale settings in effect when the description was taken.
    #[serde(default)]
    pub host_settings: HostSettings,
    pub project: Project,
}

/// Loads a project description from a JSON file.
///
/// # Errors
///
/// Returns [`InputError::FileRead`] if the file cannot be read.
/// Returns [`InputError::Json`] if the content does not describe a project.
pub fn load_project<P: AsRef<Path>>(path: P) -> Result<ProjectFile, InputError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse_project(&content).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        rooms = file.project.rooms.len(),
        luminaire_types = file.project.luminaire_types.len(),
        "loaded project '{}' from {}",
        file.project.name,
        path.display()
    );
    Ok(file)
}

pub fn parse_project(content: &str) -> Result<ProjectFile, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DecimalSymbol, LengthUnit};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "host_settings": {
            "number_format": { "decimal_symbol": "comma", "digit_grouping": true },
            "length_unit": "feet"
        },
        "project": {
            "name": "Office Block",
            "date": "2024-03-07",
            "operator": "kmorin",
            "host": { "name": "Revit", "version": "2017" },
            "rooms": [
                {
                    "name": "Office",
                    "height": 10.0,
                    "working_plane": 2.5,
                    "ceiling_reflectance": 0.7,
                    "boundary": [[{ "x": 0.0, "y": 0.0 }, { "x": 10.0, "y": 0.0 }]],
                    "luminaires": [
                        { "luminaire_type": "Downlight 1x18W", "position": { "x": 5.0, "y": 5.0, "z": 9.0 } }
                    ],
                    "openings": [
                        { "width": 3.0, "height": 7.0, "position": { "x": 1.0, "y": 0.0 } }
                    ]
                },
                { "name": "Shaft", "height": 10.0, "working_plane": 0.0, "fault": "not enclosed" }
            ],
            "luminaire_types": [
                { "name": "Downlight 1x18W", "load": "18 W", "flux": "1200 lm" }
            ]
        }
    }"#;

    #[test]
    fn parses_full_description() {
        let file = parse_project(SAMPLE).expect("valid description");

        assert_eq!(file.host_settings.number_format.decimal_symbol, DecimalSymbol::Comma);
        assert!(file.host_settings.number_format.digit_grouping);
        assert_eq!(file.host_settings.length_unit, LengthUnit::Feet);

        let project = &file.project;
        assert_eq!(project.date, NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date"));
        assert_eq!(project.host.version, "2017");
        assert_eq!(project.rooms.len(), 2);
        assert_eq!(project.rooms[0].outline().len(), 2);
        assert_eq!(project.total_luminaires(), 1);
        assert_eq!(project.total_openings(), 1);
        assert_eq!(project.rooms[1].fault.as_deref(), Some("not enclosed"));
        assert!(project.rooms[1].boundary.is_empty());
        assert_eq!(project.luminaire_types[0].lamps(), 1);
    }

    #[test]
    fn host_settings_are_optional() {
        let file = parse_project(r#"{ "project": { "name": "Minimal", "date": "2020-01-01" } }"#)
            .expect("valid description");

        assert_eq!(file.host_settings, HostSettings::default());
        assert_eq!(file.project.host.name, "Revit");
        assert!(file.project.rooms.is_empty());
        assert!(file.project.operator.is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_project("/nonexistent/project.json").expect_err("missing file");
        assert!(matches!(err, InputError::FileRead { .. }));
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"project\": ").expect("write fixture");

        let err = load_project(&path).expect_err("invalid json");
        assert!(matches!(err, InputError::Json { path: ref p, .. } if p == &path));
    }
}
