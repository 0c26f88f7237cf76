use config::Config as CConfig;
use serde::{Deserialize, Serialize};

use crate::conf::{ListingConfig, ServerConfig};
use crate::core::CanopyError::{self, ConfigParsingError};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, CanopyError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Config, CanopyError> {
        let config = CConfig::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_correct_toml() {
        let toml = r#"
        [server]
        host = "127.0.0.1"
        port = 3000

        [listing]
        index = "file_paths"
        default_depth = 2
        "#;
        let conf = Config::from_str(toml);
        assert_eq!(
            conf,
            Ok(Config {
                server: ServerConfig {
                    host: String::from("127.0.0.1"),
                    port: 3000,
                },
                listing: ListingConfig {
                    index: String::from("file_paths"),
                    default_depth: 2,
                },
            })
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let conf = Config::from_str("").unwrap();
        assert_eq!(conf, Config::default());
        assert_eq!(conf.listing.index, "file_browse");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
        [server]
        hosst = "127.0.0.1"
        "#;
        assert!(Config::from_str(toml).is_err());
    }
}
