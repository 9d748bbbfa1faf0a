use chrono::NaiveDate;
use clap::Parser;
use color_eyre::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use stf_exporter::export::{write_lines, write_stf, LineEnding};
use stf_exporter::parser::{load_catalog, load_project, merge_catalog, validate};
use stf_exporter::stf::{export_project, RoomFaultPolicy, SerializeOptions, STF_VERSION};

#[derive(Parser, Debug)]
#[command(name = "stf-exporter")]
#[command(about = "STF Exporter - write rooms and luminaires to a DIALux STF file")]
#[command(version)]
struct Args {
    /// Path to the project description (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output STF file (defaults to the input path with .stf extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Luminaire catalog to merge into the project (CSV)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Operator name written to the [Project] section
    #[arg(long)]
    operator: Option<String>,

    /// Export date, YYYY-MM-DD
    #[arg(long)]
    date: Option<NaiveDate>,

    /// STF format version written to the [VERSION] section
    #[arg(long, default_value = STF_VERSION)]
    stf_version: String,

    /// Leave out rooms the host could not retrieve instead of failing
    #[arg(long)]
    skip_faulty_rooms: bool,

    /// Write CRLF line endings
    #[arg(long)]
    crlf: bool,

    /// Print the STF document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut file = load_project(&args.input)?;

    if let Some(catalog_path) = &args.catalog {
        let added = merge_catalog(&mut file.project, load_catalog(catalog_path)?);
        tracing::info!(added, "merged luminaire catalog {}", catalog_path.display());
    }
    if let Some(operator) = args.operator {
        file.project.operator = operator;
    }
    if let Some(date) = args.date {
        file.project.date = date;
    }

    validate(&file.project);

    let options = SerializeOptions {
        stf_version: args.stf_version,
        room_faults: if args.skip_faulty_rooms {
            RoomFaultPolicy::Skip
        } else {
            RoomFaultPolicy::Abort
        },
        ..SerializeOptions::default()
    };
    let document = export_project(&mut file.host_settings, &file.project, &options)?;

    let line_ending = if args.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        write_lines(&mut stdout, &document, line_ending)?;
        stdout.flush()?;
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("stf"));
    write_stf(&document, &output, line_ending)?;
    println!(
        "Exported {} rooms, {} luminaires, {} doors to STF: {}",
        document.get("Project", "NrRooms").unwrap_or("0"),
        file.project.total_luminaires(),
        file.project.total_openings(),
        output.display()
    );

    Ok(())
}
