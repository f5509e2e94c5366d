//! # Overview
//!
//! This crate provides an implementation of the [Zhang-Shasha algorithm][zhang-shasha], which
//! computes the exact edit distance between two ordered labeled trees, that is the lowest total
//! cost of node insertions, deletions and relabelings that transforms one tree into the other,
//! according to a user-defined measure for the cost of turning one label into another.
//!
//! Trees are either types that implement [Tree], or arbitrary node handles together with
//! accessors for their children and labels, see [distance_by].
//!
//! [zhang-shasha]:  https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use zhang_shasha::*;
//!
//! let page = SimpleNode::new("html")
//!     .with_child(SimpleNode::new("head")
//!         .with_child(SimpleNode::new("title")))
//!     .with_child(SimpleNode::new("body")
//!         .with_child(SimpleNode::new("p"))
//!         .with_child(SimpleNode::new("div")));
//!
//! let edited = SimpleNode::new("html")
//!     .with_child(SimpleNode::new("body")
//!         .with_child(SimpleNode::new("p"))
//!         .with_child(SimpleNode::new("span")));
//!
//! // Remove "head" and "title", then relabel "div" into "span".
//! assert_eq!(distance(&page, &edited, UnitCost), 3);
//!
//! // The same edits, each weighed by the number of characters it touches.
//! assert_eq!(distance(&page, &edited, Levenshtein), 4 + 5 + 4);
//!
//! // Or any other measure, such as one that makes removals free.
//! let keep = |a: Option<&&&str>, b: Option<&&&str>| match (a, b) {
//!     (_, None) => 0,
//!     (None, Some(_)) => 1,
//!     (Some(a), Some(b)) => usize::from(a != b),
//! };
//!
//! assert_eq!(distance(&page, &edited, keep), 1);
//! ```

mod annotate;
mod cost;
mod distance;
mod simple;
mod tree;

pub use annotate::*;
pub use cost::*;
pub use distance::*;
pub use simple::*;
pub use tree::*;
