//! Luminaire catalog in CSV form.
//!
//! ```text
//! name,load,flux,lamps
//! Downlight 1x18W,18 W,1200 lm,1
//! Exit Sign,3 W,,
//! ```

use crate::error::InputError;
use crate::model::{LuminaireType, Project};
use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    #[serde(default)]
    load: Option<String>,
    #[serde(default)]
    flux: Option<String>,
    #[serde(default)]
    lamps: Option<u32>,
}

impl From<CatalogRow> for LuminaireType {
    fn from(row: CatalogRow) -> Self {
        let mut lum = LuminaireType::new(row.name);
        lum.load = row.load;
        lum.flux = row.flux;
        lum.lamp_count = row.lamps;
        lum
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<LuminaireType>, InputError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    read_catalog(file).map_err(|source| InputError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_catalog<R: io::Read>(reader: R) -> Result<Vec<LuminaireType>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<CatalogRow>()
        .map(|row| row.map(LuminaireType::from))
        .collect()
}

/// Appends catalog entries the project does not already know.
///
/// Names are compared without spaces, the way they end up in the file.
/// Returns the number of types added.
pub fn merge_catalog(project: &mut Project, catalog: Vec<LuminaireType>) -> usize {
    let mut known: HashSet<String> = project
        .luminaire_types
        .iter()
        .map(LuminaireType::identifier)
        .collect();

    let before = project.luminaire_types.len();
    for lum in catalog {
        if known.insert(lum.identifier()) {
            project.luminaire_types.push(lum);
        } else {
            tracing::debug!(luminaire = %lum.name, "catalog entry already in project");
        }
    }
    project.luminaire_types.len() - before
}
