pub mod document;
pub mod quantity;
pub mod serializer;

pub use crate::error::{QuantityError, SerializeError};
pub use document::StfDocument;
pub use quantity::Quantity;
pub use serializer::{serialize, RoomFaultPolicy, SerializeOptions, STF_VERSION};

use crate::model::Project;
use crate::units::{with_stf_units, HostUnits};

/// Serializes `project` while the host is held in STF units and number format.
///
/// The host's previous settings are restored before this returns, whether
/// serialization succeeded or not. Load and flux strings are read with the
/// decimal symbol the host had before the switch, which overrides
/// `options.source_decimal`. Output is always [`NumberFormat::STF`], even
/// when the host ignores the switch.
///
/// [`NumberFormat::STF`]: crate::units::NumberFormat::STF
///
/// # Example
///
/// ```
/// use stf_exporter::model::{HostApplication, Project};
/// use stf_exporter::stf::{export_project, SerializeOptions};
/// use stf_exporter::units::{DecimalSymbol, HostSettings, NumberFormat};
///
/// let mut host = HostSettings {
///     number_format: NumberFormat { decimal_symbol: DecimalSymbol::Comma, digit_grouping: true },
///     ..HostSettings::default()
/// };
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let project = Project::new("Demo".into(), date, "me".into(), HostApplication::default());
///
/// let doc = export_project(&mut host, &project, &SerializeOptions::default())?;
/// assert_eq!(doc.get("Project", "Date"), Some("2024-1-31"));
/// assert_eq!(host.number_format.decimal_symbol, DecimalSymbol::Comma);
/// # Ok::<(), stf_exporter::error::SerializeError>(())
/// ```
pub fn export_project<H: HostUnits + ?Sized>(
    host: &mut H,
    project: &Project,
    options: &SerializeOptions,
) -> Result<StfDocument, SerializeError> {
    with_stf_units(host, |source| {
        let options = SerializeOptions {
            source_decimal: source.decimal_symbol,
            ..options.clone()
        };
        serialize(project, &options)
    })
}
