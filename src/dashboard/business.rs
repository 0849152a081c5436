//! Business types shown on the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active vertical on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    #[serde(rename = "barber")]
    Barbershop,
    Restaurant,
}

impl BusinessType {
    /// All business types in tab order
    pub const ALL: [BusinessType; 2] = [BusinessType::Barbershop, BusinessType::Restaurant];

    /// Tab key, also used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            BusinessType::Barbershop => "barber",
            BusinessType::Restaurant => "restaurant",
        }
    }

    /// Title shown above the booking list
    pub fn title(&self) -> &'static str {
        match self {
            BusinessType::Barbershop => "Barbershop",
            BusinessType::Restaurant => "Restaurant",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown business type string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown business type: {0} (expected barber or restaurant)")]
pub struct ParseBusinessError(pub String);

impl FromStr for BusinessType {
    type Err = ParseBusinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "barber" | "barbershop" => Ok(BusinessType::Barbershop),
            "restaurant" => Ok(BusinessType::Restaurant),
            _ => Err(ParseBusinessError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("barber".parse(), Ok(BusinessType::Barbershop));
        assert_eq!("Restaurant".parse(), Ok(BusinessType::Restaurant));
        assert!("cafe".parse::<BusinessType>().is_err());
    }

    #[test]
    fn test_serde_uses_tab_keys() {
        let json = serde_json::to_string(&BusinessType::Barbershop).unwrap();
        assert_eq!(json, "\"barber\"");
        let restored: BusinessType = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(restored, BusinessType::Restaurant);
    }
}
