//! Read-only collections handed to each analysis.

use crate::{Amenity, Cafe, Road, Ward};

/// The entity collections an analysis reads.
///
/// Snapshots are supplied fresh by the storage collaborator for each call
/// and never mutated. Ward order matters: containment returns the first
/// match.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Café snapshots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cafes: Vec<Cafe>,
    /// Ward snapshots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wards: Vec<Ward>,
    /// Road snapshots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roads: Vec<Road>,
    /// Amenity snapshots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amenities: Vec<Amenity>,
}

impl Snapshot {
    /// Count cafés with no usable coordinates.
    ///
    /// These are left out of every spatial result.
    pub fn unlocated_cafe_count(&self) -> usize {
        self.cafes
            .iter()
            .filter(|cafe| cafe.coordinate().is_none())
            .count()
    }
}
