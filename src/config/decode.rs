use std::path::Path;

use tracing::{debug, trace};

use super::schema::object;
use super::{Config, DecodeError};
use crate::jsonc::strip_comments;

/// Decodes strict JSON text into a [`Config`].
///
/// Every field is required; a missing, mistyped, or unknown field is an error
/// rather than a default. Every section, the root included, must be a JSON
/// object; positional arrays are rejected.
pub fn decode(json: &str) -> Result<Config, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let parsed = object::<_, Config>(&mut de).and_then(|config| de.end().map(|()| config));
    let config = parsed.map_err(|e| {
        let err = DecodeError::from_json(e, json);
        debug!(error = %err, "config decode failed");
        err
    })?;
    trace!(
        area = %config.osm_data.bounding_box.description,
        output = %config.output.file_name.display(),
        "decoded config"
    );
    Ok(config)
}

/// Strips comments from JSONC text and decodes the result.
///
/// Line numbers in errors refer to the original text as long as no block
/// comment spanning several lines precedes the failure.
pub fn decode_jsonc(jsonc: &str) -> Result<Config, DecodeError> {
    let json = strip_comments(jsonc);
    trace!(
        input_len = jsonc.len(),
        stripped_len = json.len(),
        "stripped comments"
    );
    decode(&json)
}

/// Source format of configuration text, which selects the decode entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// Strict JSON; comments are a syntax error.
    Json,
    /// JSON with `//` and `/* */` comments.
    Jsonc,
}

impl ConfigFormat {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonc" => Some(Self::Jsonc),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Jsonc => "jsonc",
        }
    }

    pub fn decode(self, text: &str) -> Result<Config, DecodeError> {
        match self {
            Self::Json => decode(text),
            Self::Jsonc => decode_jsonc(text),
        }
    }
}
