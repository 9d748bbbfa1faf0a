use crate::error::SerializeError;
use crate::model::{sanitize_identifier, LuminaireType, Point2, Project, Room};
use crate::stf::quantity::{Quantity, FLUX_UNITS, LOAD_UNITS};
use crate::stf::StfDocument;
use crate::units::{feet_to_meters, DecimalSymbol, NumberFormat};
use std::collections::HashSet;

/// STF format version written to `[VERSION]`.
pub const STF_VERSION: &str = "1.0.5";

// STF readers accept nothing else, whatever the host locale.
const FORMAT: NumberFormat = NumberFormat::STF;

// Hosts cannot report fixture or door orientation, so these are fixed.
const LUMINAIRE_ROTATION: &str = "0 0 0";
const DOOR_ROTATION: &str = "90.00 0.00 0.00";

/// What to do with a room the host adapter failed to retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomFaultPolicy {
    /// Fail the whole export.
    #[default]
    Abort,
    /// Leave the room out and renumber the rest.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    pub stf_version: String,
    pub room_faults: RoomFaultPolicy,
    /// Decimal symbol the host used when formatting load and flux strings.
    pub source_decimal: DecimalSymbol,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            stf_version: STF_VERSION.to_string(),
            room_faults: RoomFaultPolicy::default(),
            source_decimal: DecimalSymbol::default(),
        }
    }
}

/// Serializes `project` to an STF document.
///
/// Numbers are always written in [`NumberFormat::STF`]. Load and flux
/// strings are read with `options.source_decimal`.
///
/// # Errors
///
/// Returns [`SerializeError::RoomRetrieval`] for a faulty room under
/// [`RoomFaultPolicy::Abort`], and [`SerializeError::MissingLoad`] or
/// [`SerializeError::Quantity`] when a luminaire type with flux has an
/// unusable load or flux value.
pub fn serialize(
    project: &Project,
    options: &SerializeOptions,
) -> Result<StfDocument, SerializeError> {
    let rooms = collect_rooms(project, options.room_faults)?;

    let mut doc = StfDocument::new();
    write_header(&mut doc, project, &options.stf_version, rooms.len());

    for (i, room) in rooms.iter().enumerate() {
        write_room(&mut doc, &room_section(i + 1), room);
    }

    write_luminaire_types(&mut doc, &project.luminaire_types, options.source_decimal)?;

    tracing::debug!(
        rooms = rooms.len(),
        lines = doc.len(),
        "serialized project '{}'",
        project.name
    );
    Ok(doc)
}

fn room_section(number: usize) -> String {
    format!("ROOM.R{number}")
}

fn collect_rooms(
    project: &Project,
    policy: RoomFaultPolicy,
) -> Result<Vec<&Room>, SerializeError> {
    let mut rooms = Vec::with_capacity(project.rooms.len());

    for (i, room) in project.rooms.iter().enumerate() {
        let Some(reason) = &room.fault else {
            rooms.push(room);
            continue;
        };

        match policy {
            RoomFaultPolicy::Abort => {
                return Err(SerializeError::RoomRetrieval {
                    index: i + 1,
                    name: room.name.clone(),
                    reason: reason.clone(),
                });
            }
            RoomFaultPolicy::Skip => {
                tracing::warn!(room = %room.name, %reason, "skipping room that could not be retrieved");
            }
        }
    }

    Ok(rooms)
}

fn write_header(doc: &mut StfDocument, project: &Project, stf_version: &str, room_count: usize) {
    doc.section("VERSION");
    doc.entry("STFF", stf_version);
    doc.entry("Progname", &project.host.name);
    doc.entry("Progvers", &project.host.version);

    doc.section("Project");
    doc.entry("Name", &project.name);
    doc.entry("Date", format_date(project.date));
    doc.entry("Operator", &project.operator);
    doc.entry("NrRooms", room_count);
    for i in 1..=room_count {
        doc.entry(format_args!("Room{i}"), room_section(i));
    }
}

/// `year-month-day` without zero padding, e.g. `2024-3-7`.
fn format_date(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

fn write_room(doc: &mut StfDocument, section: &str, room: &Room) {
    let length = |feet: f64| FORMAT.format(feet_to_meters(feet));
    let point = |p: &Point2| format!("{} {}", length(p.x), length(p.y));

    doc.section(section);
    doc.entry("Name", &room.name);
    doc.entry("Height", length(room.height));
    doc.entry("WorkingPlane", length(room.working_plane));

    let mut outline = room.outline();
    if !room.is_enclosed() {
        tracing::warn!(room = %room.name, "room is not enclosed, writing placeholder vertex");
        outline = std::slice::from_ref(&Point2::ORIGIN);
    }
    doc.entry("NrPoints", outline.len());
    for (k, vertex) in outline.iter().enumerate() {
        doc.entry(format_args!("Point{}", k + 1), point(vertex));
    }

    doc.entry("R_Ceiling", FORMAT.format(room.ceiling_reflectance));

    for (k, lum) in room.luminaires.iter().enumerate() {
        let key = format!("Lum{}", k + 1);
        let p = lum.position;
        doc.entry(&key, sanitize_identifier(&lum.luminaire_type));
        doc.entry(
            format_args!("{key}.Pos"),
            format_args!("{} {} {}", length(p.x), length(p.y), length(p.z)),
        );
        doc.entry(format_args!("{key}.Rot"), LUMINAIRE_ROTATION);
    }
    doc.entry("NrLums", room.luminaires.len());

    doc.entry("NrStruct", 0);

    doc.entry("NrFurns", room.openings.len());
    for (k, door) in room.openings.iter().enumerate() {
        let key = format!("Furn{}", k + 1);
        doc.entry(&key, "door");
        doc.entry(format_args!("{key}.Ref"), format_args!("{section}.F{}", k + 1));
        doc.entry(format_args!("{key}.Rot"), DOOR_ROTATION);
        doc.entry(format_args!("{key}.Pos"), point(&door.position));
        doc.entry(
            format_args!("{key}.Size"),
            format_args!("{} {} 0.00", length(door.width), length(door.height)),
        );
    }
}

fn write_luminaire_types(
    doc: &mut StfDocument,
    types: &[LuminaireType],
    decimal: DecimalSymbol,
) -> Result<(), SerializeError> {
    let mut seen = HashSet::new();

    for lum in types {
        let identifier = lum.identifier();
        if !seen.insert(identifier.clone()) {
            tracing::debug!(luminaire = %lum.name, "duplicate luminaire type, keeping the first");
            continue;
        }

        let Some(flux) = lum.flux.as_deref() else {
            tracing::debug!(luminaire = %lum.name, "no flux value, skipping luminaire type");
            continue;
        };
        let load = lum.load.as_deref().ok_or_else(|| SerializeError::MissingLoad {
            luminaire: lum.name.clone(),
        })?;

        let quantity = |field: &'static str, text: &str, units| {
            Quantity::expect(text, units, decimal).map_err(|source| SerializeError::Quantity {
                luminaire: lum.name.clone(),
                field,
                source,
            })
        };
        let load = quantity("load", load, LOAD_UNITS)?;
        let flux = quantity("flux", flux, FLUX_UNITS)?;

        let [bx, by, bz] = lum.bounding_box;
        doc.section(&identifier);
        doc.entry("Manufacturer", "");
        doc.entry("Name", "");
        doc.entry("OrderNr", "");
        doc.entry(
            "Box",
            format_args!(
                "{} {} {}",
                FORMAT.format(bx),
                FORMAT.format(by),
                FORMAT.format(bz)
            ),
        );
        doc.entry("Shape", 0);
        doc.entry("Load", FORMAT.format(load));
        doc.entry("Flux", FORMAT.format(flux));
        doc.entry("NrLamps", lum.lamps());
        doc.entry("MountingType", lum.mounting_type);
    }

    Ok(())
}
