//! Open-data access: record types, the loaded/unloaded collection wrapper,
//! response decoding, the HTTP source, and the startup loaders.

pub mod collection;
pub mod decode;
pub mod loader;
pub mod model;
pub mod source;

pub use collection::{Collection, LoadState};
pub use decode::{decode_records, Decoded};
pub use loader::{spawn_loaders, LoadEvent, Loaders};
pub use model::{Keyed, SatScore, School};
pub use source::{DataSource, Endpoints, HttpSource, SAT_SCORES_URL, SCHOOLS_URL};
