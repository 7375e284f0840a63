//! Plain-language readings of a score and its inputs.

/// Score at or above which a site is recommended.
pub const RECOMMENDATION_THRESHOLD: u8 = 60;

/// Overall strength of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LocationStrength {
    /// Score of 80 or more.
    Excellent,
    /// Score of 60 to 79.
    Good,
    /// Score of 40 to 59.
    Fair,
    /// Score below 40.
    Poor,
}

impl LocationStrength {
    /// Classify a suitability score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// How crowded the local café market is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CompetitionLevel {
    /// Fewer than 5 competitors.
    Low,
    /// 5 to 14 competitors.
    Moderate,
    /// 15 or more competitors.
    High,
}

impl CompetitionLevel {
    /// Classify a competitor count.
    #[must_use]
    pub const fn from_competitors(count: usize) -> Self {
        match count {
            0..=4 => Self::Low,
            5..=14 => Self::Moderate,
            _ => Self::High,
        }
    }
}

/// Foot traffic implied by population density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MarketPotential {
    /// Density above 15 000 people per km².
    High,
    /// Density above 8 000 people per km².
    Moderate,
    /// Anything sparser.
    Low,
}

impl MarketPotential {
    /// Classify a population density.
    #[must_use]
    pub fn from_density(density: f64) -> Self {
        if density > 15_000.0 {
            Self::High
        } else if density > 8_000.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Summary readings shown alongside a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insights {
    /// Reading of the score.
    pub location_strength: LocationStrength,
    /// Reading of the competitor count.
    pub competition: CompetitionLevel,
    /// Reading of the density.
    pub market_potential: MarketPotential,
    /// Whether the score reaches [`RECOMMENDATION_THRESHOLD`].
    pub recommended: bool,
}

impl Insights {
    /// Derive insights from a score and the inputs behind it.
    #[must_use]
    pub fn new(score: u8, competitor_count: usize, population_density: f64) -> Self {
        Self {
            location_strength: LocationStrength::from_score(score),
            competition: CompetitionLevel::from_competitors(competitor_count),
            market_potential: MarketPotential::from_density(population_density),
            recommended: score >= RECOMMENDATION_THRESHOLD,
        }
    }
}
