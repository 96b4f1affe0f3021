//! Model space units (Global section items 14 and 15)

use std::str::FromStr;

use crate::error::IgesError;

/// Unit of model space coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelUnits {
    Inches,
    #[default]
    Millimeters,
    Feet,
    Miles,
    Meters,
    Kilometers,
    Mils,
    Microns,
    Centimeters,
    Microinches,
}

impl ModelUnits {
    /// Units flag (Global item 14)
    pub fn flag(&self) -> i64 {
        match self {
            ModelUnits::Inches => 1,
            ModelUnits::Millimeters => 2,
            ModelUnits::Feet => 4,
            ModelUnits::Miles => 5,
            ModelUnits::Meters => 6,
            ModelUnits::Kilometers => 7,
            ModelUnits::Mils => 8,
            ModelUnits::Microns => 9,
            ModelUnits::Centimeters => 10,
            ModelUnits::Microinches => 11,
        }
    }

    /// Units name (Global item 15)
    pub fn name(&self) -> &'static str {
        match self {
            ModelUnits::Inches => "IN",
            ModelUnits::Millimeters => "MM",
            ModelUnits::Feet => "FT",
            ModelUnits::Miles => "MI",
            ModelUnits::Meters => "M",
            ModelUnits::Kilometers => "KM",
            ModelUnits::Mils => "MIL",
            ModelUnits::Microns => "UM",
            ModelUnits::Centimeters => "CM",
            ModelUnits::Microinches => "UIN",
        }
    }
}

impl FromStr for ModelUnits {
    type Err = IgesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" | "INCH" => Ok(ModelUnits::Inches),
            "MM" => Ok(ModelUnits::Millimeters),
            "FT" => Ok(ModelUnits::Feet),
            "MI" => Ok(ModelUnits::Miles),
            "M" => Ok(ModelUnits::Meters),
            "KM" => Ok(ModelUnits::Kilometers),
            "MIL" => Ok(ModelUnits::Mils),
            "UM" => Ok(ModelUnits::Microns),
            "CM" => Ok(ModelUnits::Centimeters),
            "UIN" => Ok(ModelUnits::Microinches),
            other => Err(IgesError::InvalidConfiguration(format!(
                "unknown units name {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_millimeters() {
        let units = ModelUnits::default();
        assert_eq!(units.flag(), 2);
        assert_eq!(units.name(), "MM");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("in".parse::<ModelUnits>().unwrap(), ModelUnits::Inches);
        assert_eq!("UM".parse::<ModelUnits>().unwrap(), ModelUnits::Microns);
        assert!("furlong".parse::<ModelUnits>().is_err());
    }
}
