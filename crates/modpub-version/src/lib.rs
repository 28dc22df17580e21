//! Game version model and constraint matching for mod publishing
//!
//! This crate provides parsing and total ordering for the version strings a
//! Minecraft-style runtime publishes (releases, pre-releases, release
//! candidates, betas and week-dated snapshots), plus a small constraint
//! language for declaring which of those versions an artifact supports.

pub mod constraint;
mod version;

pub use constraint::{
    CaretConstraint, CompositeConstraint, ExactConstraint, InvalidConstraint, OrConstraint,
    RangeConstraint, TildeConstraint, VersionConstraint, VersionConstraintParser,
};
pub use version::{Version, VersionKind};
