//! Configuration loading for `tsdecl.toml`.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::parser::{Language, Parser};
use crate::usage::UsageOptions;

pub const CONFIG_FILENAME: &str = "tsdecl.toml";

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["parser", "usages"];
const KNOWN_PARSER_KEYS: &[&str] = &["language", "decorators"];
const KNOWN_USAGES_KEYS: &[&str] = &["parameters", "member_names"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub usages: UsageOptions,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// Flavor used by `parse_source`.
    pub language: Language,
    pub decorators: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            decorators: true,
        }
    }
}

impl ParserConfig {
    pub fn parser(&self, language: Language) -> Parser {
        Parser::builder()
            .language(language)
            .decorators(self.decorators)
            .build()
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn read(path: &Path) -> Result<(String, Config), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    Ok((content, config))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    read(path).map(|(_, config)| config)
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let (content, config) = read(path)?;
    let warnings = detect_unknown_keys(&content);

    Ok(ConfigResult { config, warnings })
}

fn detect_unknown_keys(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return warnings,
    };

    let known_top: HashSet<&str> = KNOWN_TOP_LEVEL_KEYS.iter().copied().collect();
    for key in table.keys() {
        if !known_top.contains(key.as_str()) {
            warnings.push(format!("Unknown config option: '{}'", key));
        }
    }

    for (section, known) in [("parser", KNOWN_PARSER_KEYS), ("usages", KNOWN_USAGES_KEYS)] {
        if let Some(toml::Value::Table(entries)) = table.get(section) {
            for key in entries.keys() {
                if !known.contains(&key.as_str()) {
                    warnings.push(format!("Unknown config option in [{}]: '{}'", section, key));
                }
            }
        }
    }

    warnings
}

pub fn load_config_or_default(start_dir: &Path) -> Config {
    find_config_file(start_dir)
        .and_then(|path| load_config(&path).ok())
        .unwrap_or_default()
}
