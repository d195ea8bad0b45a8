//! Interval relations between bounding boxes.

use crate::model::{Axis, Rect, Span};

/// Relation of one interval to another, reduced to what matters for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalRelation {
    /// The first interval ends, with margin to spare, before the second starts
    Precedes,
    /// The first interval ends within tolerance of where the second starts
    Meets,
    /// The first interval starts first and ends inside the second
    Overlaps,
    /// Any other configuration (equal, contains, during, inverse relations)
    Other,
}

impl IntervalRelation {
    /// Whether the relation places the first interval before the second.
    pub fn is_before(self) -> bool {
        !matches!(self, IntervalRelation::Other)
    }
}

/// Classify the relation of `a` to `b` along `axis`.
///
/// Not commutative: swapping `a` and `b` yields the inverse relation, which
/// folds into [`IntervalRelation::Other`].
pub fn relation(axis: Axis, a: &Rect, b: &Rect, tolerance: f64) -> IntervalRelation {
    classify(a.span(axis), b.span(axis), tolerance)
}

/// Classify two spans. Checks run in a fixed order; the first match wins.
pub fn classify(a: Span, b: Span, t: f64) -> IntervalRelation {
    let near = |x: f64, y: f64| (x - y).abs() <= t;

    // Equal
    if near(a.lo, b.lo) && near(a.hi, b.hi) {
        return IntervalRelation::Other;
    }

    if near(a.hi, b.lo) {
        return IntervalRelation::Meets;
    }

    // Met by
    if near(a.lo, b.hi) {
        return IntervalRelation::Other;
    }

    if a.lo < b.lo - t && b.lo + t < a.hi && a.hi < b.hi - t {
        return IntervalRelation::Overlaps;
    }

    if a.hi + t < b.lo {
        return IntervalRelation::Precedes;
    }

    IntervalRelation::Other
}
