//! Typed configuration tree for an OSM-to-3D conversion job.
//!
//! Field names on the wire are camelCase. Every field is required and unknown
//! keys are rejected.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Root of the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "object")]
    pub osm_data: OsmDataConfig,
    #[serde(deserialize_with = "object")]
    pub projection: ProjectionConfig,
    #[serde(deserialize_with = "object")]
    pub output: OutputConfig,
}

/// Where the OSM input data comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OsmDataConfig {
    /// Read from `local_file_path` instead of querying Overpass.
    pub use_local_extract: bool,
    pub local_file_path: PathBuf,
    #[serde(deserialize_with = "object")]
    pub bounding_box: BoundingBoxConfig,
    /// Overpass query timeout in seconds.
    pub overpass_timeout: i32,
}

impl OsmDataConfig {
    /// Returns the Overpass timeout, or `None` if it is negative.
    pub fn query_timeout(&self) -> Option<Duration> {
        u64::try_from(self.overpass_timeout)
            .ok()
            .map(Duration::from_secs)
    }

    /// Resolves which data source this configuration selects.
    pub fn source(&self) -> OsmSource<'_> {
        if self.use_local_extract {
            OsmSource::LocalExtract(&self.local_file_path)
        } else {
            OsmSource::Overpass {
                bounding_box: &self.bounding_box,
                timeout: self.query_timeout(),
            }
        }
    }
}

/// The data source selected by an [`OsmDataConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OsmSource<'a> {
    /// A local `.osm`/`.pbf` extract.
    LocalExtract(&'a Path),
    /// A live Overpass API query over the bounding box.
    Overpass {
        bounding_box: &'a BoundingBoxConfig,
        timeout: Option<Duration>,
    },
}

/// Geographic box in degrees.
///
/// No ordering between opposite edges is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundingBoxConfig {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub description: String,
}

impl BoundingBoxConfig {
    /// Formats the box as `south,west,north,east`, the order used by Overpass
    /// bounding queries.
    pub fn overpass_bbox(&self) -> String {
        format!("{},{},{},{}", self.south, self.west, self.north, self.east)
    }

    /// Approximate area in square degrees. Negative for an inverted box.
    pub fn area(&self) -> f64 {
        (self.north - self.south) * (self.east - self.west)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionConfig {
    #[serde(deserialize_with = "object")]
    pub origin: OriginConfig,
}

/// Reference point anchoring the map projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OriginConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl OriginConfig {
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination of the generated 3D scene.
    pub file_name: PathBuf,
    pub auto_open: bool,
}

/// Deserializes `T` from a JSON object only.
///
/// Derived struct impls also accept a sequence of fields by position, which
/// would let a document skip its key names entirely.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct ObjectVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
            T::deserialize(MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_map(ObjectVisitor(PhantomData))
}
