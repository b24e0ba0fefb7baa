//! The set of alternative values proposed for one recognized span.

use super::calendar::Calendar;
use super::shape::Shape;
use super::value::TemporalValue;
use serde::Serialize;
use std::fmt;

/// Ordered alternatives the engine proposed for the same span of text.
///
/// Order follows the engine's emission order and is significant for equality.
/// Two resolutions are equal only if they hold the same number of values and
/// the values are pairwise equal in order. [`Resolution::zip_eq`] offers the
/// lenient prefix comparison used when replaying recorded fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(bound = "")]
pub struct Resolution<C: Calendar> {
    values: Vec<TemporalValue<C>>,
}

impl<C: Calendar> Resolution<C> {
    /// Creates a resolution from values in emission order.
    #[must_use]
    pub const fn new(values: Vec<TemporalValue<C>>) -> Self {
        Self { values }
    }

    /// The values in emission order.
    #[must_use]
    pub fn values(&self) -> &[TemporalValue<C>] {
        &self.values
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no value survived construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&TemporalValue<C>> {
        self.values.first()
    }

    /// Iterates over the values of a given shape.
    pub fn of_shape(&self, shape: Shape) -> impl Iterator<Item = &TemporalValue<C>> {
        self.values.iter().filter(move |v| v.shape() == shape)
    }

    /// Compares pairwise up to the shorter of the two sequences.
    ///
    /// Unmatched tails are ignored, so `[a, b, c]` and `[a, b]` compare equal.
    /// Only use this where recorded fixtures list fewer alternatives than the
    /// engine produces.
    #[must_use]
    pub fn zip_eq(&self, other: &Self) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a == b)
    }

    /// Consumes the resolution, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<TemporalValue<C>> {
        self.values
    }
}

impl<C: Calendar> IntoIterator for Resolution<C> {
    type Item = TemporalValue<C>;
    type IntoIter = std::vec::IntoIter<TemporalValue<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, C: Calendar> IntoIterator for &'a Resolution<C> {
    type Item = &'a TemporalValue<C>;
    type IntoIter = std::slice::Iter<'a, TemporalValue<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<C: Calendar> fmt::Display for Resolution<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::PreciseCalendar;
    use crate::models::value::TemporalKind;

    fn set(timex: &str) -> TemporalValue<PreciseCalendar> {
        TemporalValue::new(timex, TemporalKind::Set)
    }

    #[test]
    fn test_equal_sequences() {
        let a = Resolution::new(vec![set("P1W"), set("P1D")]);
        let b = Resolution::new(vec![set("P1W"), set("P1D")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_is_significant() {
        let a = Resolution::new(vec![set("P1W"), set("P1D")]);
        let b = Resolution::new(vec![set("P1D"), set("P1W")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_length_mismatch_is_not_equal() {
        let longer = Resolution::new(vec![set("P1W"), set("P1D"), set("PT1H")]);
        let shorter = Resolution::new(vec![set("P1W"), set("P1D")]);
        assert_ne!(longer, shorter);
        assert!(longer.zip_eq(&shorter));
        assert!(shorter.zip_eq(&longer));
    }

    #[test]
    fn test_zip_eq_detects_prefix_mismatch() {
        let a = Resolution::new(vec![set("P1W"), set("P1D")]);
        let b = Resolution::new(vec![set("P1W"), set("PT1H")]);
        assert!(!a.zip_eq(&b));
    }

    #[test]
    fn test_of_shape() {
        let resolution = Resolution::new(vec![set("P1W"), set("P1D")]);
        assert_eq!(resolution.of_shape(Shape::Set).count(), 2);
        assert_eq!(resolution.of_shape(Shape::Date).count(), 0);
    }

    #[test]
    fn test_display_one_value_per_line() {
        let resolution = Resolution::new(vec![set("P1W"), set("P1D")]);
        assert_eq!(
            resolution.to_string(),
            "Timex: P1W set: set\nTimex: P1D set: set"
        );
    }
}
