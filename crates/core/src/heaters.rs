use thiserror::Error;

use crate::Nearest;

/// Errors that can occur when building a heater set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeatersError {
    #[error("heater set is empty")]
    Empty,
}

/// An owned, sorted, non-empty set of heater coordinates.
///
/// Construction sorts a copy of the caller's coordinates and drops
/// duplicates, so the caller's data is never reordered. Once built, the set
/// answers nearest-heater queries in `O(log M)` and can be reused across any
/// number of houses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Heaters {
    sorted: Vec<i64>,
}

impl Heaters {
    /// Creates a heater set from coordinates in any order.
    ///
    /// # Errors
    ///
    /// Returns [`HeatersError::Empty`] if no coordinates are given.
    pub fn new<I>(coords: I) -> Result<Self, HeatersError>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let mut sorted: Vec<i64> = coords.into_iter().map(Into::into).collect();
        if sorted.is_empty() {
            return Err(HeatersError::Empty);
        }

        sorted.sort_unstable();
        sorted.dedup();

        Ok(Self { sorted })
    }

    /// Returns the distinct heater coordinates in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.sorted
    }

    /// Returns the number of distinct heater coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`; a heater set holds at least one heater.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the lowest heater coordinate.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.sorted[0]
    }

    /// Returns the highest heater coordinate.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Returns the index of the first heater at or after `house`.
    ///
    /// The result is in `0..=len()`; `len()` means every heater lies before
    /// the house.
    #[must_use]
    pub fn lower_bound(&self, house: i64) -> usize {
        self.sorted.partition_point(|&heater| heater < house)
    }

    /// Finds the heater closest to `house`.
    ///
    /// Only the heaters on either side of the lower bound can be closest.
    /// On a tie the lower-coordinate heater is reported.
    #[must_use]
    pub fn nearest(&self, house: i64) -> Nearest {
        let index = self.lower_bound(house);
        if index == self.sorted.len() {
            return Nearest::new(house, self.max());
        }

        let after = Nearest::new(house, self.sorted[index]);
        match index.checked_sub(1) {
            Some(prev) => Nearest::new(house, self.sorted[prev]).closer(after),
            None => after,
        }
    }

    /// Returns `true` if some heater lies within `radius` of `house`.
    #[must_use]
    pub fn covers(&self, house: i64, radius: u64) -> bool {
        self.nearest(house).distance <= radius
    }

    /// Returns `true` if every house lies within `radius` of some heater.
    ///
    /// Vacuously `true` for no houses.
    pub fn covers_all<I>(&self, houses: I, radius: u64) -> bool
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        houses
            .into_iter()
            .all(|house| self.covers(house.into(), radius))
    }
}

impl TryFrom<Vec<i64>> for Heaters {
    type Error = HeatersError;

    fn try_from(coords: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl TryFrom<&[i64]> for Heaters {
    type Error = HeatersError;

    fn try_from(coords: &[i64]) -> Result<Self, Self::Error> {
        Self::new(coords.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heaters(coords: &[i64]) -> Heaters {
        Heaters::try_from(coords).expect("non-empty heaters")
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Heaters::new(Vec::<i64>::new()), Err(HeatersError::Empty));
    }

    #[test]
    fn sorts_and_dedups_a_copy() {
        let coords = vec![9, -3, 4, 9, 4];
        let set = heaters(&coords);

        assert_eq!(set.as_slice(), &[-3, 4, 9]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.min(), -3);
        assert_eq!(set.max(), 9);

        // Caller's data is untouched.
        assert_eq!(coords, vec![9, -3, 4, 9, 4]);
    }

    #[test]
    fn accepts_narrower_integers() {
        let coords: [i32; 3] = [3, 1, 2];
        let set = Heaters::new(coords).expect("non-empty heaters");
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn lower_bound_is_leftmost_insertion_point() {
        let set = heaters(&[2, 4, 6]);

        assert_eq!(set.lower_bound(1), 0);
        assert_eq!(set.lower_bound(2), 0);
        assert_eq!(set.lower_bound(3), 1);
        assert_eq!(set.lower_bound(4), 1);
        assert_eq!(set.lower_bound(6), 2);
        assert_eq!(set.lower_bound(7), 3);
    }

    #[test]
    fn nearest_before_all_heaters() {
        let set = heaters(&[10, 20]);
        assert_eq!(set.nearest(-5), Nearest::new(-5, 10));
    }

    #[test]
    fn nearest_after_all_heaters() {
        let set = heaters(&[10, 20]);
        assert_eq!(set.nearest(31), Nearest::new(31, 20));
    }

    #[test]
    fn nearest_between_heaters() {
        let set = heaters(&[10, 20]);

        assert_eq!(set.nearest(12).heater, 10);
        assert_eq!(set.nearest(18).heater, 20);
        assert_eq!(set.nearest(15), Nearest::new(15, 10));
    }

    #[test]
    fn nearest_on_a_heater_is_zero() {
        let set = heaters(&[10, 20]);
        assert_eq!(set.nearest(20).distance, 0);
    }

    #[test]
    fn nearest_at_coordinate_extremes() {
        let set = heaters(&[i64::MAX]);
        assert_eq!(set.nearest(i64::MIN).distance, u64::MAX);

        let set = heaters(&[i64::MIN]);
        assert_eq!(set.nearest(i64::MAX).distance, u64::MAX);
    }

    #[test]
    fn coverage_predicate() {
        let set = heaters(&[2]);

        assert!(set.covers(3, 1));
        assert!(!set.covers(4, 1));
        assert!(set.covers_all([1, 2, 3], 1));
        assert!(!set.covers_all([1, 2, 3], 0));
        assert!(set.covers_all(Vec::<i64>::new(), 0));
    }
}
