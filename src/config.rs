//! Runtime configuration: endpoints, theme, and mouse support.
//!
//! Defaults point at the published NYC datasets. With the `config` feature a TOML
//! file may override them; command-line flags override both.

use crate::data::{Endpoints, SAT_SCORES_URL, SCHOOLS_URL};
use crate::error::{Result, SchoolsError};
use crate::render::ui::ThemeName;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schools_url: String,
    pub scores_url: String,
    pub theme: ThemeName,
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schools_url: SCHOOLS_URL.to_string(),
            scores_url: SAT_SCORES_URL.to_string(),
            theme: ThemeName::default(),
            mouse: true,
        }
    }
}

impl Config {
    /// Load configuration from `explicit`, or from the default location if present.
    ///
    /// A missing file at the default location is not an error; a missing explicit
    /// file is.
    #[cfg(feature = "config")]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let text = std::fs::read_to_string(&path).map_err(|e| {
            SchoolsError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        log::info!("using configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    #[cfg(not(feature = "config"))]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Err(SchoolsError::config(format!(
                "cannot read {}: built without configuration file support",
                path.display()
            ))),
            None => Ok(Self::default()),
        }
    }

    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SchoolsError::config(e.to_string()))
    }

    /// `<config_dir>/nycschools/config.toml`
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nycschools").join("config.toml"))
    }

    #[cfg(not(feature = "config"))]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Reject endpoints that are not http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("schools_url", &self.schools_url),
            ("scores_url", &self.scores_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SchoolsError::invalid_argument(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            schools: self.schools_url.clone(),
            sat_scores: self.scores_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_published_endpoints() {
        let config = Config::default();
        assert_eq!(config.endpoints(), Endpoints::default());
        assert_eq!(config.theme, ThemeName::Dark);
        assert!(config.mouse);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        let config = Config {
            scores_url: "ftp://example.com/sat.json".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scores_url"));
    }

    #[cfg(feature = "config")]
    mod file {
        use super::*;
        use std::io::Write;

        #[test]
        fn partial_file_keeps_defaults() {
            let config = Config::from_toml_str(
                r#"
                theme = "high-contrast"
                mouse = false
                "#,
            )
            .unwrap();
            assert_eq!(config.theme, ThemeName::HighContrast);
            assert!(!config.mouse);
            assert_eq!(config.schools_url, SCHOOLS_URL);
        }

        #[test]
        fn unknown_keys_and_bad_values_are_config_errors() {
            let err = Config::from_toml_str("colour = \"red\"").unwrap_err();
            assert!(matches!(err, SchoolsError::ConfigError { .. }));

            let err = Config::from_toml_str("theme = \"neon\"").unwrap_err();
            assert!(matches!(err, SchoolsError::ConfigError { .. }));
        }

        #[test]
        fn loads_explicit_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "schools_url = \"http://127.0.0.1:8080/schools.json\"").unwrap();

            let config = Config::load(Some(file.path())).unwrap();
            assert_eq!(config.schools_url, "http://127.0.0.1:8080/schools.json");
            assert_eq!(config.scores_url, SAT_SCORES_URL);
        }

        #[test]
        fn missing_explicit_file_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
            assert!(matches!(err, SchoolsError::ConfigError { .. }));
        }
    }
}
