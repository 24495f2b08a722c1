#![deny(missing_docs)]
#![doc = "Core error surface, schema descriptor and validated parameters for the beautiful numbers counter."]

pub mod errors;
pub mod params;
pub mod provenance;

pub use errors::{BeautyError, ErrorInfo};
pub use params::{Base, NumberLength};
pub use provenance::SchemaVersion;
