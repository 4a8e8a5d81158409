//! API layer search filter types.

use serde::{Deserialize, Serialize};

/// Optional constraints for the property search. Absent fields apply no
/// constraint; the default value matches everything.
///
/// Prices are given in whole dollars and compared against the stored
/// cents column. `minimum_rating` filters on the per-property review
/// average, which excludes never-reviewed properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Case-insensitive substring match on the city name.
    pub city: Option<String>,
    /// Only properties listed by this user.
    pub owner_id: Option<i32>,
    /// Strict lower bound on the nightly price, in dollars.
    pub minimum_price_per_night: Option<i32>,
    /// Strict upper bound on the nightly price, in dollars.
    pub maximum_price_per_night: Option<i32>,
    /// Strict lower bound on the average review rating.
    pub minimum_rating: Option<i16>,
}

impl PropertySearch {
    /// True when no filter field is set.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.owner_id.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}
