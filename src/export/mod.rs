pub mod stf;

pub use crate::error::ExportError;
pub use stf::{write_lines, write_stf, LineEnding};
