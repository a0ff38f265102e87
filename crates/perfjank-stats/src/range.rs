use serde::{Deserialize, Serialize};

/// Running minimum/maximum over a set of values.
///
/// A range starts out empty and widens as values are added. While empty,
/// [`min`](Self::min) and [`max`](Self::max) return `None`.
///
/// # Examples
///
/// ```
/// use perfjank_stats::range::ValueRange;
///
/// let mut range = ValueRange::new();
/// assert!(range.is_empty());
///
/// range.add_value(3.0);
/// range.add_value(-1.0);
/// assert_eq!(range.min(), Some(-1.0));
/// assert_eq!(range.max(), Some(3.0));
/// assert_eq!(range.duration(), 4.0);
/// ```
///
/// An empty range serializes as `{"min": null, "max": null}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "SerializedRange", from = "SerializedRange")]
pub struct ValueRange {
    min: f64,
    max: f64,
}

/// Wire form of [`ValueRange`], without the infinite sentinels of an empty
/// range (JSON has no infinities).
#[derive(Serialize, Deserialize)]
struct SerializedRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl From<ValueRange> for SerializedRange {
    fn from(range: ValueRange) -> Self {
        Self {
            min: range.min(),
            max: range.max(),
        }
    }
}

impl From<SerializedRange> for ValueRange {
    fn from(serialized: SerializedRange) -> Self {
        Self::from_values(serialized.min.into_iter().chain(serialized.max))
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueRange {
    /// Creates an empty range.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Creates the smallest range containing every value.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfjank_stats::range::ValueRange;
    ///
    /// let range = ValueRange::from_values([4.0, 2.0, 8.0]);
    /// assert_eq!(range.min(), Some(2.0));
    /// assert_eq!(range.max(), Some(8.0));
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range = Self::new();
        for value in values {
            range.add_value(value);
        }
        range
    }

    /// Widens the range so that it contains `value`.
    pub fn add_value(&mut self, value: f64) {
        self.min = f64::min(self.min, value);
        self.max = f64::max(self.max, value);
    }

    /// Widens the range so that it contains all of `other`.
    ///
    /// Adding an empty range has no effect.
    pub fn add_range(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.add_value(other.min);
        self.add_value(other.max);
    }

    /// Returns `true` if no value has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns the smallest value seen, or `None` if the range is empty.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.min)
    }

    /// Returns the largest value seen, or `None` if the range is empty.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.max)
    }

    /// Returns `max - min`, or `0.0` for an empty range.
    #[must_use]
    pub fn duration(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Returns the midpoint of the range, or `None` if the range is empty.
    #[must_use]
    pub fn center(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.min + 0.5 * (self.max - self.min))
    }

    /// Returns `true` if `value` lies in the closed interval `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}
