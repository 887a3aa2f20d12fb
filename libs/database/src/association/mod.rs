//! Replace-the-set semantics for many-to-many join tables.
//!
//! A parent's child set is replaced by computing the minimal add/remove delta
//! against the stored rows and applying it under row locks on the caller's
//! transaction. Identical input produces zero writes.

mod delta;
mod reconcile;

pub use delta::AssociationDelta;
pub use reconcile::{AssociationError, AssociationTable, reconcile};
