//! Administrative wards with census population.

use thiserror::Error;

use crate::Boundary;

/// An administrative ward.
///
/// Wards are assumed not to overlap; nothing enforces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ward {
    /// Unique ward number.
    pub ward_number: u32,
    /// Census population.
    pub population: u64,
    /// Area in square kilometres.
    pub area_sqkm: f64,
    /// People per square kilometre.
    pub population_density: f64,
    /// Ward outline, if digitised.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary: Option<Boundary>,
}

/// Errors returned by [`Ward::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WardError {
    /// The ward area was zero, negative or not finite.
    #[error("ward {ward_number} area must be a positive number of km² (got {area_sqkm})")]
    InvalidArea {
        /// Ward the area belongs to.
        ward_number: u32,
        /// Supplied area.
        area_sqkm: f64,
    },
}

impl Ward {
    /// Validate and construct a [`Ward`], deriving its density.
    ///
    /// # Examples
    /// ```
    /// use cafelocate_core::Ward;
    ///
    /// # fn main() -> Result<(), cafelocate_core::WardError> {
    /// let ward = Ward::new(7, 40_000, 2.0, None)?;
    /// assert_eq!(ward.population_density, 20_000.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        ward_number: u32,
        population: u64,
        area_sqkm: f64,
        boundary: Option<Boundary>,
    ) -> Result<Self, WardError> {
        if !area_sqkm.is_finite() || area_sqkm <= 0.0 {
            return Err(WardError::InvalidArea {
                ward_number,
                area_sqkm,
            });
        }
        let population_density = population as f64 / area_sqkm;
        Ok(Self {
            ward_number,
            population,
            area_sqkm,
            population_density,
            boundary,
        })
    }
}
