mod decode;
mod error;
mod types;

pub use decode::{decode_tle, decode_visual_passes};
pub use error::DecodeError;
pub use types::{PassRecord, SatelliteInfo, TleRecord, VisualPassesResponse};
