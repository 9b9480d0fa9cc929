//! Geographic detail levels and boundary resolution.
//!
//! A `Resolution` is a (level, precision) pair with a numeric zoom-like
//! code from 1 (world_low) to 15 (city_high). The ordering is coarse to
//! fine within a level and is only used for numeric coercion; codes are
//! never compared across levels.

use crate::error::GeoError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Administrative level of a geographic feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    City,
    County,
    State,
    Country,
    World,
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::County => write!(f, "county"),
            Self::State => write!(f, "state"),
            Self::Country => write!(f, "country"),
            Self::World => write!(f, "world"),
        }
    }
}

impl FromStr for LevelKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Self::City),
            "county" => Ok(Self::County),
            "state" => Ok(Self::State),
            "country" => Ok(Self::Country),
            "world" => Ok(Self::World),
            other => Err(GeoError::InvalidResolution(other.to_string())),
        }
    }
}

/// Requested geometry precision for boundary payloads.
///
/// Codes run coarse→fine: world_low = 1 up to city_high = 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    WorldLow,
    WorldMedium,
    WorldHigh,
    CountryLow,
    CountryMedium,
    CountryHigh,
    StateLow,
    StateMedium,
    StateHigh,
    CountyLow,
    CountyMedium,
    CountyHigh,
    CityLow,
    CityMedium,
    CityHigh,
}

impl Resolution {
    /// Numeric code of this resolution, in 1..=15.
    pub fn code(self) -> u8 {
        match self {
            Self::WorldLow => 1,
            Self::WorldMedium => 2,
            Self::WorldHigh => 3,
            Self::CountryLow => 4,
            Self::CountryMedium => 5,
            Self::CountryHigh => 6,
            Self::StateLow => 7,
            Self::StateMedium => 8,
            Self::StateHigh => 9,
            Self::CountyLow => 10,
            Self::CountyMedium => 11,
            Self::CountyHigh => 12,
            Self::CityLow => 13,
            Self::CityMedium => 14,
            Self::CityHigh => 15,
        }
    }

    /// The level this resolution belongs to.
    pub fn level(self) -> LevelKind {
        match self.code() {
            1..=3 => LevelKind::World,
            4..=6 => LevelKind::Country,
            7..=9 => LevelKind::State,
            10..=12 => LevelKind::County,
            _ => LevelKind::City,
        }
    }
}

// The wire carries the numeric code, not the variant name.
impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl FromStr for Resolution {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resolution(s)
    }
}

/// Parse a resolution token.
///
/// Accepts a bare level name ("city", "county", "state", "country",
/// "world"), defaulting to that level's medium precision, or a compound
/// `<level>_<precision>` form such as "city_high".
pub fn parse_resolution(token: &str) -> Result<Resolution, GeoError> {
    let res = match token {
        "city" | "city_medium" => Resolution::CityMedium,
        "city_low" => Resolution::CityLow,
        "city_high" => Resolution::CityHigh,
        "county" | "county_medium" => Resolution::CountyMedium,
        "county_low" => Resolution::CountyLow,
        "county_high" => Resolution::CountyHigh,
        "state" | "state_medium" => Resolution::StateMedium,
        "state_low" => Resolution::StateLow,
        "state_high" => Resolution::StateHigh,
        "country" | "country_medium" => Resolution::CountryMedium,
        "country_low" => Resolution::CountryLow,
        "country_high" => Resolution::CountryHigh,
        "world" | "world_medium" => Resolution::WorldMedium,
        "world_low" => Resolution::WorldLow,
        "world_high" => Resolution::WorldHigh,
        other => return Err(GeoError::InvalidResolution(other.to_string())),
    };
    Ok(res)
}

/// Coerce a numeric zoom-like code onto the matching `Resolution`.
///
/// Codes outside 1..=15 are rejected. An already-typed `Resolution` needs
/// no coercion and passes through unchanged.
pub fn coerce_resolution(code: i64) -> Result<Resolution, GeoError> {
    let res = match code {
        1 => Resolution::WorldLow,
        2 => Resolution::WorldMedium,
        3 => Resolution::WorldHigh,
        4 => Resolution::CountryLow,
        5 => Resolution::CountryMedium,
        6 => Resolution::CountryHigh,
        7 => Resolution::StateLow,
        8 => Resolution::StateMedium,
        9 => Resolution::StateHigh,
        10 => Resolution::CountyLow,
        11 => Resolution::CountyMedium,
        12 => Resolution::CountyHigh,
        13 => Resolution::CityLow,
        14 => Resolution::CityMedium,
        15 => Resolution::CityHigh,
        out_of_range => {
            return Err(GeoError::InvalidResolution(out_of_range.to_string()));
        }
    };
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_level_defaults_to_medium() {
        assert_eq!(parse_resolution("city").unwrap(), Resolution::CityMedium);
        assert_eq!(parse_resolution("county").unwrap(), Resolution::CountyMedium);
        assert_eq!(parse_resolution("state").unwrap(), Resolution::StateMedium);
        assert_eq!(parse_resolution("country").unwrap(), Resolution::CountryMedium);
        assert_eq!(parse_resolution("world").unwrap(), Resolution::WorldMedium);
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(parse_resolution("city_high").unwrap(), Resolution::CityHigh);
        assert_eq!(parse_resolution("world_low").unwrap(), Resolution::WorldLow);
        assert_eq!(parse_resolution("state_medium").unwrap(), Resolution::StateMedium);
    }

    #[test]
    fn test_parse_unknown_token() {
        assert!(matches!(
            parse_resolution("continent"),
            Err(GeoError::InvalidResolution(_))
        ));
        assert!(matches!(
            parse_resolution("city_highest"),
            Err(GeoError::InvalidResolution(_))
        ));
        assert!(matches!(
            parse_resolution(""),
            Err(GeoError::InvalidResolution(_))
        ));
    }

    #[test]
    fn test_coerce_full_range() {
        for code in 1..=15 {
            let res = coerce_resolution(code).unwrap();
            assert_eq!(i64::from(res.code()), code);
        }
    }

    #[test]
    fn test_coerce_out_of_range() {
        assert!(matches!(
            coerce_resolution(0),
            Err(GeoError::InvalidResolution(_))
        ));
        assert!(matches!(
            coerce_resolution(16),
            Err(GeoError::InvalidResolution(_))
        ));
        assert!(matches!(
            coerce_resolution(-3),
            Err(GeoError::InvalidResolution(_))
        ));
    }

    #[test]
    fn test_resolution_level() {
        assert_eq!(Resolution::WorldHigh.level(), LevelKind::World);
        assert_eq!(Resolution::CountyHigh.level(), LevelKind::County);
        assert_eq!(Resolution::CityLow.level(), LevelKind::City);
    }

    #[test]
    fn test_level_kind_round_trip() {
        for name in ["city", "county", "state", "country", "world"] {
            let level: LevelKind = name.parse().unwrap();
            assert_eq!(level.to_string(), name);
        }
        assert!("planet".parse::<LevelKind>().is_err());
    }
}
