use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use stf_exporter::export::{write_stf, LineEnding};
use stf_exporter::model::{
    HostApplication, LuminaireInstance, LuminaireType, Point2, Point3, Project, Room,
};
use stf_exporter::parser::{load_project, merge_catalog, read_catalog};
use stf_exporter::stf::{export_project, SerializeOptions};
use stf_exporter::units::{DecimalSymbol, HostSettings, NumberFormat};

fn two_room_project() -> Project {
    let mut project = Project::new(
        "Office Block".to_string(),
        NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date"),
        "kmorin".to_string(),
        HostApplication {
            name: "Revit".to_string(),
            version: "2017".to_string(),
        },
    );

    let mut room_a = Room::new("Room A", 10.0, 2.5);
    room_a.boundary = vec![vec![
        Point2::new(0.0, 0.0),
        Point2::new(20.0, 0.0),
        Point2::new(20.0, 12.0),
        Point2::new(0.0, 12.0),
    ]];
    room_a.ceiling_reflectance = 0.7;
    room_a.luminaires.push(LuminaireInstance::new(
        "Downlight 1x18W",
        Point3::new(10.0, 6.0, 9.0),
    ));
    project.rooms.push(room_a);

    project.rooms.push(Room::new("Room B", 10.0, 2.5));

    project
        .luminaire_types
        .push(LuminaireType::new("Downlight 1x18W").with_photometry("18 W", "1200 lm"));

    project
}

#[test]
fn two_room_export() {
    let mut host = HostSettings::default();
    let doc = export_project(&mut host, &two_room_project(), &SerializeOptions::default())
        .expect("serializes");

    assert_eq!(doc.get("Project", "NrRooms"), Some("2"));

    assert_eq!(doc.get("ROOM.R1", "Name"), Some("Room A"));
    assert_eq!(doc.get("ROOM.R1", "NrPoints"), Some("4"));
    assert_eq!(doc.get("ROOM.R1", "Point3"), Some("6.096 3.6576"));
    assert_eq!(doc.get("ROOM.R1", "NrLums"), Some("1"));
    assert_eq!(doc.get("ROOM.R1", "Lum1"), Some("Downlight1x18W"));
    assert_eq!(doc.get("ROOM.R1", "Lum1.Pos"), Some("3.048 1.8288 2.7432"));

    assert_eq!(doc.get("ROOM.R2", "NrPoints"), Some("1"));
    assert_eq!(doc.get("ROOM.R2", "Point1"), Some("0 0"));
    assert_eq!(doc.get("ROOM.R2", "NrLums"), Some("0"));

    assert_eq!(doc.sections().last(), Some("Downlight1x18W"));
    assert_eq!(doc.get("Downlight1x18W", "Load"), Some("18"));
    assert_eq!(doc.get("Downlight1x18W", "Flux"), Some("1200"));
    assert_eq!(doc.get("Downlight1x18W", "NrLamps"), Some("1"));
}

#[test]
fn comma_locale_host_writes_dot_decimals() {
    let mut host = HostSettings {
        number_format: NumberFormat {
            decimal_symbol: DecimalSymbol::Comma,
            digit_grouping: true,
        },
        ..HostSettings::default()
    };

    let doc = export_project(&mut host, &two_room_project(), &SerializeOptions::default())
        .expect("serializes");

    assert_eq!(doc.get("ROOM.R1", "Height"), Some("3.048"));
    assert!(doc.lines().iter().all(|line| !line.contains(',')));
    assert_eq!(host.number_format.decimal_symbol, DecimalSymbol::Comma);
    assert!(host.number_format.digit_grouping);
}

#[test]
fn json_and_catalog_to_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("office.json");
    std::fs::write(
        &input,
        r#"{
            "host_settings": { "number_format": { "decimal_symbol": "comma" } },
            "project": {
                "name": "Office",
                "date": "2023-12-24",
                "operator": "lighting",
                "host": { "name": "Revit", "version": "2015" },
                "rooms": [{
                    "name": "Open Space",
                    "height": 10.0,
                    "working_plane": 2.5,
                    "ceiling_reflectance": 0.8,
                    "boundary": [[{ "x": 0, "y": 0 }, { "x": 10, "y": 0 }, { "x": 10, "y": 10 }]],
                    "luminaires": [
                        { "luminaire_type": "Panel 600", "position": { "x": 5, "y": 5, "z": 9 } }
                    ],
                    "openings": [
                        { "width": 3.0, "height": 7.0, "position": { "x": 5, "y": 0 } }
                    ]
                }]
            }
        }"#,
    )
    .expect("write input");

    let mut file = load_project(&input).expect("loads");
    let catalog = read_catalog("name,load,flux,lamps\nPanel 600,36 W,3600 lm,4\n".as_bytes())
        .expect("catalog");
    assert_eq!(merge_catalog(&mut file.project, catalog), 1);

    let doc = export_project(&mut file.host_settings, &file.project, &SerializeOptions::default())
        .expect("serializes");
    let output = dir.path().join("office.stf");
    write_stf(&doc, &output, LineEnding::CrLf).expect("writes");

    let text = std::fs::read_to_string(&output).expect("read back");
    let lines: Vec<&str> = text.split("\r\n").collect();
    assert_eq!(
        &lines[..10],
        [
            "[VERSION]",
            "STFF=1.0.5",
            "Progname=Revit",
            "Progvers=2015",
            "[Project]",
            "Name=Office",
            "Date=2023-12-24",
            "Operator=lighting",
            "NrRooms=1",
            "Room1=ROOM.R1",
        ]
    );
    assert!(lines.contains(&"Furn1.Ref=ROOM.R1.F1"));
    assert!(lines.contains(&"Furn1.Pos=1.524 0"));
    assert!(lines.contains(&"[Panel600]"));
    assert!(lines.contains(&"NrLamps=4"));
    assert!(text.ends_with("MountingType=1\r\n\r\n"));
}
