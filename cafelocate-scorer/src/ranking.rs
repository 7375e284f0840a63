//! Ranking nearby cafés by rating and review volume.

use cafelocate_core::Cafe;

/// A café with its ranking key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCafe<'a> {
    cafe: &'a Cafe,
    ranking_key: f64,
}

impl<'a> RankedCafe<'a> {
    /// The ranked café.
    #[must_use]
    pub const fn cafe(&self) -> &'a Cafe {
        self.cafe
    }

    /// The key the café was ranked by.
    #[must_use]
    pub const fn ranking_key(&self) -> f64 {
        self.ranking_key
    }
}

/// Compute `rating × ln(max(reviews, 1) + 1)`.
///
/// Unrated cafés score zero however many reviews they have.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "ranking key is a float product")]
pub fn ranking_key(cafe: &Cafe) -> f64 {
    let rating = cafe.rating.filter(|rating| rating.is_finite()).unwrap_or(0.0);
    let reviews = f64::from(cafe.review_count.max(1));
    rating * (reviews + 1.0).ln()
}

/// Return at most `n` cafés, highest ranking key first.
///
/// The sort is stable: cafés with equal keys keep their input order.
///
/// # Examples
/// ```
/// use cafelocate_core::{Cafe, CafeType};
/// use cafelocate_scorer::rank_top_n;
///
/// let cafes = vec![
///     Cafe::new(1, "Quiet", CafeType::Bakery).with_rating(4.0, 3),
///     Cafe::new(2, "Busy", CafeType::Bakery).with_rating(4.0, 300),
///     Cafe::new(3, "New", CafeType::Bakery),
/// ];
/// let top: Vec<_> = rank_top_n(&cafes, 2).iter().map(|ranked| ranked.cafe().id).collect();
/// assert_eq!(top, vec![2, 1]);
/// ```
pub fn rank_top_n<'a, I>(cafes: I, n: usize) -> Vec<RankedCafe<'a>>
where
    I: IntoIterator<Item = &'a Cafe>,
{
    let mut ranked: Vec<_> = cafes
        .into_iter()
        .map(|cafe| RankedCafe {
            cafe,
            ranking_key: ranking_key(cafe),
        })
        .collect();
    ranked.sort_by(|a, b| b.ranking_key.total_cmp(&a.ranking_key));
    ranked.truncate(n);
    ranked
}
