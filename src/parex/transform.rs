//! Structure-preserving transforms on expression trees
//!
//! Each transform is a pure function from one tree to a new tree; the input
//! is never mutated. All three are driven by single-letter operation codes
//! through the [processor](crate::parex::processor).
//!
//! - `reversed` - full recursive mirror of element order at every depth
//! - `flattened` - all groups collapsed to their leaf sequence, at all depths
//! - `simplified` - one-layer, left-biased collapse (the subtle one; see the
//!   module docs in `simplify`)

pub mod flatten;
pub mod reverse;
pub mod simplify;
