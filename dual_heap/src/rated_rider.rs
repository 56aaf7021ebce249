use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A rider with a running average of the star ratings they gave.
///
/// Riders are ordered by average rating only, so they can be kept in a [`DualHeap`]
/// to find the harshest and the most generous rider at once.
///
/// ```
/// use dual_heap::{DualHeap, RatedRider};
///
/// let mut heap = DualHeap::new();
/// heap.insert(RatedRider::new("Ana", 4, 4.5)).unwrap();
/// heap.insert(RatedRider::new("Bo", 10, 2.0)).unwrap();
///
/// let mut newcomer = RatedRider::new("Cy", 0, 0.0);
/// newcomer.apply_rating(5);
/// heap.insert(newcomer).unwrap();
///
/// assert_eq!(heap.extract_max().unwrap().name(), "Cy");
/// assert_eq!(heap.extract_min().unwrap().name(), "Bo");
/// ```
///
/// [`DualHeap`]: struct.DualHeap.html
#[derive(Clone, Debug)]
pub struct RatedRider {
    name: String,
    rides: u64,
    average_rating: f64,
    // Sum of all stars ever given
    total_rating: f64,
}

impl RatedRider {
    pub fn new(name: impl Into<String>, previous_rides: u64, average_rating: f64) -> Self {
        Self {
            name: name.into(),
            rides: previous_rides,
            average_rating,
            total_rating: previous_rides as f64 * average_rating,
        }
    }

    /// Counts one more ride rated with `stars` and recomputes the average.
    pub fn apply_rating(&mut self, stars: u64) {
        self.rides += 1;
        self.total_rating += stars as f64;
        self.average_rating = self.total_rating / self.rides as f64;
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rides(&self) -> u64 {
        self.rides
    }

    #[inline]
    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }
}

impl PartialEq for RatedRider {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RatedRider {}

impl PartialOrd for RatedRider {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RatedRider {
    fn cmp(&self, other: &Self) -> Ordering {
        self.average_rating.total_cmp(&other.average_rating)
    }
}

impl Display for RatedRider {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "Name: {} Previous Rides: {} Average Review: {}",
            self.name, self.rides, self.average_rating
        )
    }
}
