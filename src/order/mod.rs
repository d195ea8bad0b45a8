//! Reading-order reconstruction.
//!
//! Ordering a page runs in three steps:
//!
//! 1. [`relation`] classifies how two boxes relate along one axis.
//! 2. [`PrecedenceGraph::build`] adds an edge `i -> j` whenever item `i`
//!    precedes, meets, or overlaps item `j` on either axis.
//! 3. [`Linearizer`] drains the graph, emitting the node with the most
//!    outstanding successors first.
//!
//! Everything here is pure and cannot fail. The graph for a page lives only
//! for the duration of the ordering call.
//!
//! # Example
//!
//! ```
//! use doclint::model::Rect;
//! use doclint::order::reading_order;
//!
//! let blocks = [
//!     Rect::new(0.0, 40.0, 100.0, 50.0)?,
//!     Rect::new(0.0, 0.0, 100.0, 10.0)?,
//! ];
//! let order: Vec<usize> = reading_order(&blocks, 5.0).collect();
//! assert_eq!(order, vec![1, 0]);
//! # Ok::<(), doclint::Error>(())
//! ```

mod graph;
mod linearize;
mod relation;

pub use graph::{is_before, PrecedenceGraph};
pub use linearize::Linearizer;
pub use relation::{classify, relation, IntervalRelation};

use crate::model::{Bounded, PageLayout, Primitive};

/// Default tolerance, in page units, for near-touching boxes.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Compute the reading order of a set of items as a sequence of indices.
pub fn reading_order<T: Bounded>(items: &[T], tolerance: f64) -> Linearizer {
    Linearizer::new(PrecedenceGraph::build(items, tolerance))
}

/// Move a page's primitives into reading order.
pub fn order_page(page: PageLayout, tolerance: f64) -> Vec<Primitive> {
    let order: Vec<usize> = reading_order(&page.primitives, tolerance).collect();
    log::trace!("Page {} reading order: {:?}", page.number, order);

    let mut slots: Vec<Option<Primitive>> = page.primitives.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|index| slots.get_mut(index).and_then(Option::take))
        .collect()
}
