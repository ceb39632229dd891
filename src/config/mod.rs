//! Typed configuration and its decoders.

mod decode;
mod error;
pub mod file;
mod locate;
mod schema;

pub use decode::{decode, decode_jsonc, ConfigFormat};
pub use error::{ConfigError, DecodeError};
pub use file::ConfigFile;
pub use schema::{
    BoundingBoxConfig, Config, OriginConfig, OsmDataConfig, OsmSource, OutputConfig,
    ProjectionConfig,
};
