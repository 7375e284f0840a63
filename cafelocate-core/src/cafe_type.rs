//! Café categories shared by requests, snapshots and predictions.
//!
//! The first four variants are the categories a caller may request an
//! analysis for. The remaining variants extend the label space a trained
//! classifier may emit.
//!
//! # Examples
//! ```
//! use cafelocate_core::CafeType;
//!
//! assert_eq!(CafeType::Bakery.as_str(), "bakery");
//! assert_eq!(CafeType::Bakery.display_name(), "Bakery Café");
//! assert_eq!("juice_bar".parse::<CafeType>(), Ok(CafeType::JuiceBar));
//! ```

use thiserror::Error;

/// A category of café.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CafeType {
    /// Espresso-led coffee shops.
    CoffeeShop,
    /// Bakeries with seating.
    Bakery,
    /// Dessert and pastry shops.
    DessertShop,
    /// Restaurant cafés.
    Restaurant,
    /// Juice and smoothie bars.
    JuiceBar,
    /// Ice cream parlours.
    IceCream,
    /// Café bars serving alcohol.
    CafeBar,
    /// Internet cafés.
    InternetCafe,
}

/// Error returned when a string names no known café type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cafe type '{0}'")]
pub struct UnknownCafeType(pub String);

impl CafeType {
    /// Every café type, in label-space order.
    pub const ALL: [Self; 8] = [
        Self::CoffeeShop,
        Self::Bakery,
        Self::DessertShop,
        Self::Restaurant,
        Self::JuiceBar,
        Self::IceCream,
        Self::CafeBar,
        Self::InternetCafe,
    ];

    /// Café types an analysis may be requested for.
    pub const REQUESTABLE: [Self; 4] = [
        Self::CoffeeShop,
        Self::Bakery,
        Self::DessertShop,
        Self::Restaurant,
    ];

    /// Return the snake-case identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoffeeShop => "coffee_shop",
            Self::Bakery => "bakery",
            Self::DessertShop => "dessert_shop",
            Self::Restaurant => "restaurant",
            Self::JuiceBar => "juice_bar",
            Self::IceCream => "ice_cream",
            Self::CafeBar => "cafe_bar",
            Self::InternetCafe => "internet_cafe",
        }
    }

    /// Return the human-readable name shown in reports.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CoffeeShop => "Coffee Shop",
            Self::Bakery => "Bakery Café",
            Self::DessertShop => "Dessert Shop",
            Self::Restaurant => "Restaurant Café",
            Self::JuiceBar => "Juice Bar",
            Self::IceCream => "Ice Cream Parlor",
            Self::CafeBar => "Café Bar",
            Self::InternetCafe => "Internet Café",
        }
    }

    /// Report whether an analysis may be requested for this type.
    pub const fn is_requestable(self) -> bool {
        matches!(
            self,
            Self::CoffeeShop | Self::Bakery | Self::DessertShop | Self::Restaurant
        )
    }
}

impl std::fmt::Display for CafeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CafeType {
    type Err = UnknownCafeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| UnknownCafeType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        for kind in CafeType::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn parsing_round_trips_every_label() {
        for kind in CafeType::ALL {
            assert_eq!(CafeType::from_str(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(CafeType::from_str(" Coffee_Shop "), Ok(CafeType::CoffeeShop));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = CafeType::from_str("tea_house").unwrap_err();
        assert!(err.to_string().contains("unknown cafe type"));
    }

    #[test]
    fn only_the_first_four_are_requestable() {
        let requestable: Vec<_> = CafeType::ALL
            .into_iter()
            .filter(|kind| kind.is_requestable())
            .collect();
        assert_eq!(requestable, CafeType::REQUESTABLE);
    }
}
