pub mod luminaire;
pub mod project;
pub mod room;

pub use luminaire::{sanitize_identifier, LuminaireInstance, LuminaireType};
pub use project::{HostApplication, Project};
pub use room::{Opening, Point2, Point3, Room};
