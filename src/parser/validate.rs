use crate::model::{sanitize_identifier, Project};
use std::collections::HashSet;

// Characters that break the `[section]` / `key=value` line grammar.
const RESERVED: &[char] = &['[', ']', '=', '\n', '\r'];

/// Checks a project for data STF cannot represent faithfully.
///
/// Nothing here is fatal: the export still runs, but each problem is logged
/// as a warning and returned so callers can surface it.
pub fn validate(project: &Project) -> Vec<String> {
    let mut warnings = Vec::new();
    let known: HashSet<String> = project
        .luminaire_types
        .iter()
        .map(|t| t.identifier())
        .collect();

    for room in &project.rooms {
        if room.name.contains(RESERVED) {
            warnings.push(format!(
                "room name '{}' contains characters reserved by STF",
                room.name
            ));
        }
        if !(0.0..=1.0).contains(&room.ceiling_reflectance) {
            warnings.push(format!(
                "room '{}' has ceiling reflectance {} outside 0..1",
                room.name, room.ceiling_reflectance
            ));
        }
        for lum in &room.luminaires {
            if !known.contains(&sanitize_identifier(&lum.luminaire_type)) {
                warnings.push(format!(
                    "room '{}' references unknown luminaire type '{}'",
                    room.name, lum.luminaire_type
                ));
            }
        }
    }

    for lum in &project.luminaire_types {
        if lum.name.contains(RESERVED) {
            warnings.push(format!(
                "luminaire type '{}' contains characters reserved by STF",
                lum.name
            ));
        }
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HostApplication, LuminaireInstance, LuminaireType, Point3, Room};
    use chrono::NaiveDate;

    fn project() -> Project {
        let mut project = Project::new(
            "Demo".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            String::new(),
            HostApplication::default(),
        );
        project.luminaire_types.push(LuminaireType::new("Downlight 1x18W"));
        let mut room = Room::new("Office", 10.0, 2.5);
        room.ceiling_reflectance = 0.7;
        room.luminaires.push(LuminaireInstance::new(
            "Downlight1x18W",
            Point3::default(),
        ));
        project.rooms.push(room);
        project
    }

    #[test]
    fn clean_project_has_no_warnings() {
        assert!(validate(&project()).is_empty());
    }

    #[test]
    fn reports_each_problem() {
        let mut project = project();
        project.rooms[0].name = "Office [north]".to_string();
        project.rooms[0].ceiling_reflectance = 70.0;
        project.rooms[0]
            .luminaires
            .push(LuminaireInstance::new("Wall Washer", Point3::default()));
        project.luminaire_types.push(LuminaireType::new("Strip=1500"));

        let warnings = validate(&project);

        assert_eq!(warnings.len(), 4);
        assert!(warnings[2].contains("Wall Washer"));
        assert!(warnings[3].contains("Strip=1500"));
    }
}
