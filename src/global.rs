//! Global section parameters
//!
//! The Global section carries 26 document-wide items: delimiters, product
//! identification, numeric precision, units and timestamps. The same struct
//! also holds the formatting options the encoder reads while compiling
//! entities, so one value describes how a whole document is written.

use std::collections::BTreeSet;

use crate::error::{IgesError, Result};
use crate::io::iges::{LineWrapper, ValueFormatter};
use crate::types::{ModelUnits, Value};

/// Timestamp layout of Global items 18 and 25
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d.%H%M%S";

/// Default wrap width of the Global section
pub const DEFAULT_LINE_LENGTH: usize = 65;

/// Largest wrap width that still leaves room for the Parameter back pointer
pub const MAX_LINE_LENGTH: usize = 65;

const MIN_LINE_LENGTH: usize = 4;

/// Current local time in IGES timestamp layout
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Document-wide Global section items and formatting options
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalParameters {
    pub parameter_delimiter: char,
    pub record_delimiter: char,
    pub sender_product_id: String,
    pub file_name: String,
    pub native_system_id: String,
    pub preprocessor_version: String,
    pub integer_bits: i64,
    pub sp_magnitude: i64,
    pub sp_significance: i64,
    pub dp_magnitude: i64,
    /// Also the significant-digit count used for every real parameter
    pub dp_significance: i64,
    pub receiver_product_id: String,
    pub model_space_scale: f64,
    pub units: ModelUnits,
    pub max_line_weight_grads: i64,
    pub max_line_weight_width: f64,
    pub generated_at: String,
    pub min_resolution: f64,
    pub max_coordinate_value: f64,
    pub author: String,
    pub organization: String,
    pub version_flag: i64,
    pub drafting_standard: i64,
    pub created_at: String,
    pub application_protocol: String,

    /// Wrap width of the Global section; Parameter lines use two columns less
    pub line_length: usize,
    /// Entity type numbers whose records get two trailing zero parameters
    pub extended_data_types: BTreeSet<i64>,
}

impl GlobalParameters {
    /// Defaults stamped with the current local time
    pub fn new() -> Self {
        let now = timestamp_now();
        Self {
            parameter_delimiter: ',',
            record_delimiter: ';',
            sender_product_id: "IGESFile".to_string(),
            file_name: "IGESFile.igs".to_string(),
            native_system_id: "igesrust".to_string(),
            preprocessor_version: crate::VERSION.to_string(),
            integer_bits: 32,
            sp_magnitude: 38,
            sp_significance: 6,
            dp_magnitude: 38,
            dp_significance: ValueFormatter::DEFAULT_SIGNIFICANT_DIGITS as i64,
            receiver_product_id: "IGESFile".to_string(),
            model_space_scale: 1.0,
            units: ModelUnits::default(),
            max_line_weight_grads: 1,
            max_line_weight_width: 16.0,
            generated_at: now.clone(),
            min_resolution: 0.0001,
            max_coordinate_value: 1000.0,
            author: "IGESAuthor".to_string(),
            organization: String::new(),
            version_flag: 11,
            drafting_standard: 0,
            created_at: now,
            application_protocol: "0".to_string(),
            line_length: DEFAULT_LINE_LENGTH,
            extended_data_types: BTreeSet::new(),
        }
    }

    /// Replace both timestamps, for reproducible output
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.set_timestamp(timestamp);
        self
    }

    pub fn set_timestamp(&mut self, timestamp: impl Into<String>) {
        let timestamp = timestamp.into();
        self.generated_at = timestamp.clone();
        self.created_at = timestamp;
    }

    /// Use one product id for both sender and receiver
    pub fn set_product_id(&mut self, product_id: impl Into<String>) {
        let product_id = product_id.into();
        self.sender_product_id = product_id.clone();
        self.receiver_product_id = product_id;
    }

    /// Wrap width of Parameter-section data
    pub fn parameter_width(&self) -> usize {
        self.line_length.saturating_sub(2)
    }

    /// Whether records of `entity_type` carry the two extended-data zeros
    pub fn extended_data_for(&self, entity_type: i64) -> bool {
        self.extended_data_types.contains(&entity_type)
    }

    /// Formatter using the double-precision significance
    pub fn formatter(&self) -> ValueFormatter {
        ValueFormatter::new(usize::try_from(self.dp_significance).unwrap_or(1))
    }

    /// Check the settings the encoder depends on
    pub fn validate(&self) -> Result<()> {
        for (name, delimiter) in [
            ("parameter delimiter", self.parameter_delimiter),
            ("record delimiter", self.record_delimiter),
        ] {
            if !delimiter.is_ascii_graphic() || delimiter.is_ascii_digit() || delimiter == 'H' {
                return Err(IgesError::InvalidConfiguration(format!(
                    "{name} {delimiter:?} must be a printable ASCII character other than a digit or 'H'"
                )));
            }
        }
        if self.parameter_delimiter == self.record_delimiter {
            return Err(IgesError::InvalidConfiguration(format!(
                "parameter and record delimiters are both {:?}",
                self.parameter_delimiter
            )));
        }
        if !(MIN_LINE_LENGTH..=MAX_LINE_LENGTH).contains(&self.line_length) {
            return Err(IgesError::InvalidConfiguration(format!(
                "line length {} outside {MIN_LINE_LENGTH}..={MAX_LINE_LENGTH}",
                self.line_length
            )));
        }
        let max_digits = ValueFormatter::MAX_SIGNIFICANT_DIGITS as i64;
        if !(1..=max_digits).contains(&self.dp_significance) {
            return Err(IgesError::InvalidConfiguration(format!(
                "double precision significance {} outside 1..={max_digits}",
                self.dp_significance
            )));
        }
        Ok(())
    }

    /// The 26 Global items in section order
    pub fn items(&self) -> Vec<Value> {
        vec![
            Value::from(self.parameter_delimiter.to_string()),
            Value::from(self.record_delimiter.to_string()),
            Value::from(self.sender_product_id.as_str()),
            Value::from(self.file_name.as_str()),
            Value::from(self.native_system_id.as_str()),
            Value::from(self.preprocessor_version.as_str()),
            Value::from(self.integer_bits),
            Value::from(self.sp_magnitude),
            Value::from(self.sp_significance),
            Value::from(self.dp_magnitude),
            Value::from(self.dp_significance),
            Value::from(self.receiver_product_id.as_str()),
            Value::from(self.model_space_scale),
            Value::from(self.units.flag()),
            Value::from(self.units.name()),
            Value::from(self.max_line_weight_grads),
            Value::from(self.max_line_weight_width),
            Value::from(self.generated_at.as_str()),
            Value::from(self.min_resolution),
            Value::from(self.max_coordinate_value),
            Value::from(self.author.as_str()),
            Value::from(self.organization.as_str()),
            Value::from(self.version_flag),
            Value::from(self.drafting_standard),
            Value::from(self.created_at.as_str()),
            Value::from(self.application_protocol.as_str()),
        ]
    }

    /// Global section data lines, wrapped at `line_length`
    pub fn render_lines(&self) -> Result<Vec<String>> {
        self.validate()?;
        let formatter = self.formatter();
        let tokens = self
            .items()
            .iter()
            .map(|value| formatter.format(value))
            .collect::<Result<Vec<_>>>()?;
        LineWrapper::new(self.parameter_delimiter, self.record_delimiter, self.line_length)?
            .wrap(&tokens)
    }
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> GlobalParameters {
        GlobalParameters::new().with_timestamp("20240102.030405")
    }

    #[test]
    fn test_item_count() {
        assert_eq!(fixed().items().len(), 26);
    }

    #[test]
    fn test_timestamp_layout() {
        let stamp = timestamp_now();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'.');
        assert!(stamp.chars().filter(|c| *c != '.').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_render_lines() {
        let lines = fixed().render_lines().unwrap();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|line| line.len() <= DEFAULT_LINE_LENGTH));
        assert!(lines[0].starts_with("1H,,1H;,8HIGESFile,"));
        assert!(lines.last().unwrap().ends_with(';'));
        let joined = lines.concat();
        assert!(joined.contains("15H20240102.030405"));
        assert!(joined.contains(",2,2HMM,"));
    }

    #[test]
    fn test_extended_data_lookup() {
        let mut global = fixed();
        assert!(!global.extended_data_for(116));
        global.extended_data_types.insert(116);
        assert!(global.extended_data_for(116));
        assert!(!global.extended_data_for(110));
    }

    #[test]
    fn test_parameter_width() {
        assert_eq!(fixed().parameter_width(), 63);
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut global = fixed();
        global.record_delimiter = ',';
        assert!(matches!(global.validate(), Err(IgesError::InvalidConfiguration(_))));

        let mut global = fixed();
        global.parameter_delimiter = '5';
        assert!(global.validate().is_err());

        let mut global = fixed();
        global.line_length = 70;
        assert!(global.validate().is_err());

        let mut global = fixed();
        global.dp_significance = 0;
        assert!(global.validate().is_err());

        assert!(fixed().validate().is_ok());
    }

    #[test]
    fn test_product_id_sets_both() {
        let mut global = fixed();
        global.set_product_id("PART-7");
        assert_eq!(global.sender_product_id, "PART-7");
        assert_eq!(global.receiver_product_id, "PART-7");
    }
}
