// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Flat Configuration
//!
//! Window settings can come from several places and are merged by precedence
//! into a single flat key/value map before being turned into a typed config.
//!
//! ## Configuration Sources (Priority: Low to High)
//!
//! 1. **RustDefault** - Built-in Rust defaults
//! 2. **ConfigFile** - TOML or YAML file, nested tables flattened with `.`
//! 3. **Properties** - Properties supplied in code (highest priority)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use windowflow::core::config::{FlatConfig, PropertySource};
//!
//! let mut config = FlatConfig::from_toml_str("[window]\nsize = \"50ms\"\nslide = \"20ms\"")?;
//! config.set("window.slide", "10ms", PropertySource::Properties);
//! assert_eq!(config.get("window.slide").unwrap(), "10ms");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{FlowError, FlowResult};

/// Property source identifier with priority ordering
///
/// Higher priority sources override lower priority sources during configuration merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySource {
    /// Rust code defaults (priority: 0)
    RustDefault,
    /// TOML or YAML configuration file (priority: 1)
    ConfigFile,
    /// Properties passed in code (priority: 2)
    Properties,
}

impl PropertySource {
    /// Get numeric priority for comparison (higher = more important)
    #[inline]
    pub const fn priority(&self) -> u8 {
        match self {
            PropertySource::RustDefault => 0,
            PropertySource::ConfigFile => 1,
            PropertySource::Properties => 2,
        }
    }

    #[inline]
    pub const fn description(&self) -> &'static str {
        match self {
            PropertySource::RustDefault => "Rust default",
            PropertySource::ConfigFile => "configuration file",
            PropertySource::Properties => "properties",
        }
    }
}

/// Flat key-value configuration with source tracking
#[derive(Debug, Clone, Default)]
pub struct FlatConfig {
    properties: HashMap<String, String>,
    sources: HashMap<String, PropertySource>,
}

impl FlatConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property with source tracking and priority-based override
    ///
    /// A later value from the same source replaces the earlier one; a value
    /// from a lower priority source never replaces a higher priority one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, source: PropertySource) {
        let key = key.into();

        if let Some(existing_source) = self.sources.get(&key) {
            if existing_source.priority() > source.priority() {
                return;
            }
        }

        self.properties.insert(key.clone(), value.into());
        self.sources.insert(key, source);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }

    /// Get a property value with its source
    #[inline]
    pub fn get_with_source(&self, key: &str) -> Option<(&String, PropertySource)> {
        self.properties
            .get(key)
            .and_then(|value| self.sources.get(key).map(|source| (value, *source)))
    }

    /// Merge another configuration into this one (respects priorities)
    pub fn merge(&mut self, other: &FlatConfig) {
        for (key, value) in &other.properties {
            if let Some(source) = other.sources.get(key) {
                self.set(key.clone(), value.clone(), *source);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build a configuration from code-supplied properties
    pub fn from_properties(properties: &HashMap<String, String>) -> Self {
        let mut config = Self::new();
        for (key, value) in properties {
            config.set(key.clone(), value.clone(), PropertySource::Properties);
        }
        config
    }

    pub fn from_toml_str(content: &str) -> FlowResult<Self> {
        let tree: BTreeMap<String, RawValue> = toml::from_str(content)
            .map_err(|e| FlowError::configuration(format!("Invalid TOML configuration: {}", e)))?;
        Ok(Self::from_tree(tree))
    }

    pub fn from_yaml_str(content: &str) -> FlowResult<Self> {
        let tree: BTreeMap<String, RawValue> = serde_yaml::from_str(content)
            .map_err(|e| FlowError::configuration(format!("Invalid YAML configuration: {}", e)))?;
        Ok(Self::from_tree(tree))
    }

    /// Load a configuration file, choosing the format by extension
    ///
    /// `.toml` is parsed as TOML, `.yaml`/`.yml` as YAML. Anything else is rejected.
    pub fn from_file(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path)?;
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(FlowError::configuration(format!(
                "Unsupported configuration file '{}': expected .toml, .yaml or .yml",
                path.display()
            ))),
        }
    }

    fn from_tree(tree: BTreeMap<String, RawValue>) -> Self {
        let mut config = Self::new();
        for (key, value) in tree {
            value.flatten_into(key, &mut config);
        }
        config
    }
}

/// Format-agnostic view of a parsed configuration document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Table(BTreeMap<String, RawValue>),
}

impl RawValue {
    fn flatten_into(self, key: String, config: &mut FlatConfig) {
        let value = match self {
            RawValue::Bool(b) => b.to_string(),
            RawValue::Int(i) => i.to_string(),
            RawValue::Float(f) => f.to_string(),
            RawValue::Str(s) => s,
            RawValue::Table(table) => {
                for (child, value) in table {
                    value.flatten_into(format!("{}.{}", key, child), config);
                }
                return;
            }
        };
        config.set(key, value, PropertySource::ConfigFile);
    }
}
