//! File-based configuration loading.
//!
//! Thin I/O layer over the pure decoders: resolves which file to read, reads it,
//! and picks the decode entry point from the file extension.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Config, ConfigError, ConfigFormat};

/// Candidate file names checked by [`ConfigFile::discover`], in priority order.
pub const DEFAULT_FILE_NAMES: [&str; 2] = ["config.jsonc", "config.json"];

/// A configuration file together with the format used to decode it.
///
/// ```no_run
/// use osm_maker_config::ConfigFile;
///
/// let config = ConfigFile::discover(".")?.load()?;
/// println!("area: {}", config.osm_data.bounding_box.description);
/// # Ok::<(), osm_maker_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    format: ConfigFormat,
}

impl ConfigFile {
    /// Creates a config file handle, inferring the format from the extension.
    ///
    /// Fails with [`ConfigError::UnsupportedFormat`] unless the extension is
    /// `.jsonc` or `.json`. The file is not touched until [`load`](Self::load).
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    /// Finds the configuration file in `dir`, preferring `config.jsonc` over
    /// `config.json`.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        for name in DEFAULT_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "discovered config file");
                return Self::new(candidate);
            }
        }
        Err(ConfigError::NoConfigFile {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Reads and decodes the file.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let contents = read_config_file(&self.path)?;
        let config = self
            .format
            .decode(&contents)
            .map_err(|source| ConfigError::Decode {
                path: self.path.clone(),
                source,
            })?;
        info!(
            path = %self.path.display(),
            format = self.format.extension(),
            "loaded configuration"
        );
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    const VALID_JSON: &str = r#"{
        "osmData": {
            "useLocalExtract": true,
            "localFilePath": "virginia.osm.pbf",
            "boundingBox": {"south": 37.115, "west": -76.396, "north": 37.139, "east": -76.345, "description": "Poquoson, VA"},
            "overpassTimeout": 25
        },
        "projection": {"origin": {"latitude": 37.120907, "longitude": -76.333694}},
        "output": {"fileName": "municipality.glb", "autoOpen": false}
    }"#;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_new_infers_format() {
        let file = ConfigFile::new("settings/config.jsonc").unwrap();
        assert_eq!(file.format(), ConfigFormat::Jsonc);
        assert_eq!(file.path(), Path::new("settings/config.jsonc"));
    }

    #[test]
    fn test_new_rejects_unknown_extension() {
        let result = ConfigFile::new("config.toml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_jsonc_file() {
        let mut file = Builder::new().suffix(".jsonc").tempfile().unwrap();
        writeln!(file, "// Poquoson extract").unwrap();
        write!(file, "{VALID_JSON}").unwrap();

        let config = ConfigFile::new(file.path()).unwrap().load().unwrap();
        assert!(config.osm_data.use_local_extract);
        assert_eq!(config.output.file_name, PathBuf::from("municipality.glb"));
    }

    #[test]
    fn test_load_json_rejects_comments() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "// not allowed here").unwrap();
        write!(file, "{VALID_JSON}").unwrap();

        let result = ConfigFile::new(file.path()).unwrap().load();
        assert!(matches!(
            result,
            Err(ConfigError::Decode {
                source: DecodeError::MalformedInput { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let file = ConfigFile::new("/nonexistent/path/config.jsonc").unwrap();
        assert!(matches!(file.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "config.json", VALID_JSON);
        let jsonc = write_file(&dir, "config.jsonc", VALID_JSON);

        let file = ConfigFile::discover(dir.path()).unwrap();
        assert_eq!(file.path(), jsonc);
        assert_eq!(file.format(), ConfigFormat::Jsonc);
    }

    #[test]
    fn test_discover_falls_back_to_json() {
        let dir = TempDir::new().unwrap();
        let json = write_file(&dir, "config.json", VALID_JSON);

        let file = ConfigFile::discover(dir.path()).unwrap();
        assert_eq!(file.path(), json);
        assert_eq!(file.load().unwrap().osm_data.overpass_timeout, 25);
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = TempDir::new().unwrap();
        let result = ConfigFile::discover(dir.path());
        assert!(matches!(result, Err(ConfigError::NoConfigFile { .. })));
    }

    #[test]
    fn test_decode_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "config.json", r#"{"osmData": 1}"#);

        let err = ConfigFile::new(&path).unwrap().load().unwrap_err();
        assert!(err.to_string().contains("config.json"), "{err}");
    }
}
