//! Settings files
//!
//! A TOML file can preset the Start prolog, any Global item and the
//! formatting options. Single settings can also be overridden by dotted key,
//! e.g. `global.author=Jane`, which is how the command line passes them.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{IgesError, Result};
use crate::global::GlobalParameters;
use crate::types::ModelUnits;

/// Root of a settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgesSettings {
    #[serde(default)]
    pub start: StartSettings,
    #[serde(default)]
    pub global: GlobalSettings,
    #[serde(default)]
    pub format: FormatSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartSettings {
    #[serde(default)]
    pub prolog: Vec<String>,
}

/// Global items; unset keys keep their defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalSettings {
    pub parameter_delimiter: Option<String>,
    pub record_delimiter: Option<String>,
    /// Sender and receiver product id
    pub product_id: Option<String>,
    pub file_name: Option<String>,
    pub native_system_id: Option<String>,
    pub preprocessor_version: Option<String>,
    pub integer_bits: Option<i64>,
    pub sp_magnitude: Option<i64>,
    pub sp_significance: Option<i64>,
    pub dp_magnitude: Option<i64>,
    pub dp_significance: Option<i64>,
    pub model_space_scale: Option<f64>,
    pub units: Option<String>,
    pub max_line_weight_grads: Option<i64>,
    pub max_line_weight_width: Option<f64>,
    pub min_resolution: Option<f64>,
    pub max_coordinate_value: Option<f64>,
    pub author: Option<String>,
    pub organization: Option<String>,
    pub version_flag: Option<i64>,
    pub drafting_standard: Option<i64>,
    pub application_protocol: Option<String>,
    /// Fixed `YYYYMMDD.HHMMSS` stamp instead of the current time
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatSettings {
    pub line_length: Option<usize>,
    /// Entity type numbers whose records get two trailing zeros
    pub extended_data: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    #[serde(default = "LoggingSettings::default_level")]
    pub level: String,
}

impl LoggingSettings {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl IgesSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| IgesError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| IgesError::InvalidConfiguration(err.to_string()))
    }

    /// Copy every configured value into `global`
    ///
    /// `global` is only modified when all values are valid.
    pub fn apply(&self, global: &mut GlobalParameters) -> Result<()> {
        let mut updated = global.clone();
        let g = &self.global;

        if let Some(value) = &g.parameter_delimiter {
            updated.parameter_delimiter = single_char("global.parameter_delimiter", value)?;
        }
        if let Some(value) = &g.record_delimiter {
            updated.record_delimiter = single_char("global.record_delimiter", value)?;
        }
        if let Some(value) = &g.product_id {
            updated.set_product_id(value.as_str());
        }
        if let Some(value) = &g.file_name {
            updated.file_name = value.clone();
        }
        if let Some(value) = &g.native_system_id {
            updated.native_system_id = value.clone();
        }
        if let Some(value) = &g.preprocessor_version {
            updated.preprocessor_version = value.clone();
        }
        if let Some(value) = g.integer_bits {
            updated.integer_bits = value;
        }
        if let Some(value) = g.sp_magnitude {
            updated.sp_magnitude = value;
        }
        if let Some(value) = g.sp_significance {
            updated.sp_significance = value;
        }
        if let Some(value) = g.dp_magnitude {
            updated.dp_magnitude = value;
        }
        if let Some(value) = g.dp_significance {
            updated.dp_significance = value;
        }
        if let Some(value) = g.model_space_scale {
            updated.model_space_scale = value;
        }
        if let Some(value) = &g.units {
            updated.units = ModelUnits::from_str(value)?;
        }
        if let Some(value) = g.max_line_weight_grads {
            updated.max_line_weight_grads = value;
        }
        if let Some(value) = g.max_line_weight_width {
            updated.max_line_weight_width = value;
        }
        if let Some(value) = g.min_resolution {
            updated.min_resolution = value;
        }
        if let Some(value) = g.max_coordinate_value {
            updated.max_coordinate_value = value;
        }
        if let Some(value) = &g.author {
            updated.author = value.clone();
        }
        if let Some(value) = &g.organization {
            updated.organization = value.clone();
        }
        if let Some(value) = g.version_flag {
            updated.version_flag = value;
        }
        if let Some(value) = g.drafting_standard {
            updated.drafting_standard = value;
        }
        if let Some(value) = &g.application_protocol {
            updated.application_protocol = value.clone();
        }
        if let Some(value) = &g.timestamp {
            updated.set_timestamp(value.as_str());
        }

        if let Some(value) = self.format.line_length {
            updated.line_length = value;
        }
        if let Some(types) = &self.format.extended_data {
            updated.extended_data_types = types.iter().copied().collect();
        }

        updated.validate()?;
        *global = updated;
        Ok(())
    }
}

/// Set one value by dotted key, e.g. `global.author`
///
/// `global` is only modified when the key is known, the value parses and the
/// result still validates.
pub fn apply_override(global: &mut GlobalParameters, key: &str, value: &str) -> Result<()> {
    let mut updated = global.clone();
    match key {
        "global.parameter_delimiter" => updated.parameter_delimiter = single_char(key, value)?,
        "global.record_delimiter" => updated.record_delimiter = single_char(key, value)?,
        "global.product_id" => updated.set_product_id(value),
        "global.sender_product_id" => updated.sender_product_id = value.to_string(),
        "global.receiver_product_id" => updated.receiver_product_id = value.to_string(),
        "global.file_name" => updated.file_name = value.to_string(),
        "global.native_system_id" => updated.native_system_id = value.to_string(),
        "global.preprocessor_version" => updated.preprocessor_version = value.to_string(),
        "global.integer_bits" => updated.integer_bits = parse(key, value)?,
        "global.sp_magnitude" => updated.sp_magnitude = parse(key, value)?,
        "global.sp_significance" => updated.sp_significance = parse(key, value)?,
        "global.dp_magnitude" => updated.dp_magnitude = parse(key, value)?,
        "global.dp_significance" => updated.dp_significance = parse(key, value)?,
        "global.model_space_scale" => updated.model_space_scale = parse(key, value)?,
        "global.units" => updated.units = ModelUnits::from_str(value)?,
        "global.max_line_weight_grads" => updated.max_line_weight_grads = parse(key, value)?,
        "global.max_line_weight_width" => updated.max_line_weight_width = parse(key, value)?,
        "global.min_resolution" => updated.min_resolution = parse(key, value)?,
        "global.max_coordinate_value" => updated.max_coordinate_value = parse(key, value)?,
        "global.author" => updated.author = value.to_string(),
        "global.organization" => updated.organization = value.to_string(),
        "global.version_flag" => updated.version_flag = parse(key, value)?,
        "global.drafting_standard" => updated.drafting_standard = parse(key, value)?,
        "global.application_protocol" => updated.application_protocol = value.to_string(),
        "global.timestamp" => updated.set_timestamp(value),
        "format.line_length" => updated.line_length = parse(key, value)?,
        "format.extended_data" => updated.extended_data_types = parse_type_list(key, value)?,
        _ => {
            return Err(IgesError::InvalidConfiguration(format!(
                "unknown setting {key:?}"
            )))
        }
    }
    updated.validate()?;
    *global = updated;
    Ok(())
}

/// Split `key=value` as given on the command line
pub fn split_override(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| {
            IgesError::InvalidConfiguration(format!("override {pair:?} is not key=value"))
        })
}

fn single_char(key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(IgesError::InvalidConfiguration(format!(
            "{key} must be a single character, got {value:?}"
        ))),
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        IgesError::InvalidConfiguration(format!("{key} cannot be set to {value:?}"))
    })
}

fn parse_type_list(key: &str, value: &str) -> Result<BTreeSet<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse(key, item))
        .collect()
}
