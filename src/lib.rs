//! Configuration loading for an OSM-to-3D conversion job.
//!
//! Configuration is written as JSON or as JSONC (JSON with `//` and `/* */`
//! comments). [`strip_comments`] turns JSONC into strict JSON, and
//! [`decode`]/[`decode_jsonc`] map the text onto the typed [`Config`] tree.
//! [`ConfigFile`] adds file discovery and reading on top.

pub mod config;
pub mod jsonc;

pub use config::{
    decode, decode_jsonc, BoundingBoxConfig, Config, ConfigError, ConfigFile, ConfigFormat,
    DecodeError, OriginConfig, OsmDataConfig, OsmSource, OutputConfig, ProjectionConfig,
};
pub use jsonc::strip_comments;
