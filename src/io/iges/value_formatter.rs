//! Parameter value to IGES token conversion

use crate::error::{IgesError, Result};
use crate::types::Value;

/// Converts typed values into IGES parameter tokens
///
/// Formatting is a pure function of the value and the significant-digit
/// setting, which comes from the owning document's Global section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormatter {
    significant_digits: usize,
}

impl ValueFormatter {
    pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 8;

    /// Most digits an f64 can carry meaningfully
    pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

    /// Create a formatter; the digit count is clamped to 1..=17
    pub fn new(significant_digits: usize) -> Self {
        Self {
            significant_digits: significant_digits.clamp(1, Self::MAX_SIGNIFICANT_DIGITS),
        }
    }

    pub fn significant_digits(&self) -> usize {
        self.significant_digits
    }

    /// Format one value as a token
    pub fn format(&self, value: &Value) -> Result<String> {
        match value {
            Value::String(s) => self.format_string(s),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Real(r) => self.format_real(*r),
            Value::Pointer(Some(pointer)) => Ok(pointer.line().to_string()),
            Value::Pointer(None) => Err(IgesError::UnsupportedValueType(
                "unresolved pointer has no line number".to_string(),
            )),
            Value::Default => Ok(String::new()),
        }
    }

    /// Hollerith string: `{count}H{chars}`
    pub fn format_string(&self, s: &str) -> Result<String> {
        if !s.is_ascii() {
            return Err(IgesError::UnsupportedValueType(format!(
                "string {s:?} contains non-ASCII characters"
            )));
        }
        Ok(format!("{}H{}", s.len(), s))
    }

    /// Real rounded to the configured significant digits
    ///
    /// Trailing zeros are dropped and the shorter of plain and exponent
    /// notation wins, plain on ties: `15.0` -> `15`, `0.0001` -> `1E-4`.
    pub fn format_real(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(IgesError::UnsupportedValueType(format!(
                "real {value} is not finite"
            )));
        }
        if value == 0.0 {
            return Ok("0".to_string());
        }

        // "-d.ddddddde-5"
        let scientific = format!("{:.*e}", self.significant_digits - 1, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .ok_or_else(|| IgesError::Custom(format!("unexpected float rendering {scientific}")))?;
        let exponent: i32 = exponent
            .parse()
            .map_err(|_| IgesError::Custom(format!("unexpected float exponent {exponent}")))?;

        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let digits = match digits.trim_end_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        let plain = plain_notation(digits, exponent);
        let exponential = exponent_notation(digits, exponent);
        let body = if exponential.len() < plain.len() {
            exponential
        } else {
            plain
        };

        Ok(if value < 0.0 { format!("-{body}") } else { body })
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIGNIFICANT_DIGITS)
    }
}

/// `digits` is d1 d2 d3 ... meaning d1.d2d3... x 10^exponent
fn plain_notation(digits: &str, exponent: i32) -> String {
    let count = digits.len() as i32;
    if exponent >= count - 1 {
        let zeros = (exponent - (count - 1)) as usize;
        format!("{digits}{}", "0".repeat(zeros))
    } else if exponent >= 0 {
        let split = (exponent + 1) as usize;
        format!("{}.{}", &digits[..split], &digits[split..])
    } else {
        let zeros = (-exponent - 1) as usize;
        format!("0.{}{digits}", "0".repeat(zeros))
    }
}

fn exponent_notation(digits: &str, exponent: i32) -> String {
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{first}E{exponent}")
    } else {
        format!("{first}.{rest}E{exponent}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DirectoryPointer;

    fn real(value: f64) -> String {
        ValueFormatter::default().format_real(value).unwrap()
    }

    #[test]
    fn test_hollerith_string() {
        let formatter = ValueFormatter::default();
        assert_eq!(formatter.format(&Value::from("PERSON")).unwrap(), "6HPERSON");
        assert_eq!(formatter.format(&Value::from("")).unwrap(), "0H");
        assert_eq!(formatter.format(&Value::from("a,b;c")).unwrap(), "5Ha,b;c");
    }

    #[test]
    fn test_non_ascii_string_rejected() {
        let err = ValueFormatter::default().format(&Value::from("µm")).unwrap_err();
        assert!(matches!(err, IgesError::UnsupportedValueType(_)));
    }

    #[test]
    fn test_integers() {
        let formatter = ValueFormatter::default();
        assert_eq!(formatter.format(&Value::from(116)).unwrap(), "116");
        assert_eq!(formatter.format(&Value::from(-42)).unwrap(), "-42");
        assert_eq!(formatter.format(&Value::from(0)).unwrap(), "0");
    }

    #[test]
    fn test_reals_plain() {
        assert_eq!(real(3.5), "3.5");
        assert_eq!(real(15.0), "15");
        assert_eq!(real(0.0), "0");
        assert_eq!(real(-0.0), "0");
        assert_eq!(real(-2.25), "-2.25");
        assert_eq!(real(100.0), "100");
        assert_eq!(real(0.1), "0.1");
        assert_eq!(real(20.4857), "20.4857");
    }

    #[test]
    fn test_reals_rounded_to_precision() {
        assert_eq!(real(std::f64::consts::PI), "3.1415927");
        assert_eq!(real(1.0 / 3.0), "0.33333333");
        assert_eq!(real(123456789.0), "123456790");
        let four = ValueFormatter::new(4);
        assert_eq!(four.format_real(std::f64::consts::E).unwrap(), "2.718");
    }

    #[test]
    fn test_reals_exponent_when_shorter() {
        assert_eq!(real(1.0e10), "1E10");
        assert_eq!(real(0.0001), "1E-4");
        assert_eq!(real(-1.5e-7), "-1.5E-7");
        assert_eq!(real(0.001), "1E-3");
        assert_eq!(real(0.01), "0.01");
    }

    #[test]
    fn test_non_finite_rejected() {
        let formatter = ValueFormatter::default();
        assert!(matches!(
            formatter.format(&Value::Real(f64::NAN)),
            Err(IgesError::UnsupportedValueType(_))
        ));
        assert!(formatter.format(&Value::Real(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_pointers_and_defaults() {
        let formatter = ValueFormatter::default();
        let pointer = DirectoryPointer::new(9).unwrap();
        assert_eq!(formatter.format(&Value::from(pointer)).unwrap(), "9");
        assert!(formatter.format(&Value::Pointer(None)).is_err());
        assert_eq!(formatter.format(&Value::Default).unwrap(), "");
    }

    #[test]
    fn test_precision_is_clamped() {
        assert_eq!(ValueFormatter::new(0).significant_digits(), 1);
        assert_eq!(ValueFormatter::new(40).significant_digits(), 17);
    }
}
