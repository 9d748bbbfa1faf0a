pub mod catalog;
pub mod json;
pub mod validate;

pub use crate::error::InputError;
pub use catalog::{load_catalog, merge_catalog, read_catalog};
pub use json::{load_project, parse_project, ProjectFile};
pub use validate::validate;
