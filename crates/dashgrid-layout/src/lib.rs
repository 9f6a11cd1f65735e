#![forbid(unsafe_code)]

//! Layout model and solvers for the dashboard grid.
//!
//! This crate provides the pieces the gesture runtime plans with:
//!
//! - [`Widget`] - a placed unit on the 12-column grid
//! - [`WidgetTypeRegistry`] - host-side lookup of per-type size limits
//! - [`collision`] - stable-order overlap queries
//! - [`reflow`] - greedy downward-cascade planning for resizes
//!
//! The committed widget list is the invariant this crate protects: in
//! non-preview state, no two visible widgets overlap. Reflow either finds
//! an arrangement that keeps that true or rejects the change outright.

pub mod collision;
pub mod reflow;
pub mod widget;

pub use collision::{find_colliding, is_vacant};
pub use reflow::{ReflowOutcome, reflow};
pub use widget::{
    SizeConstraints, StaticRegistry, Widget, WidgetId, WidgetTypeInfo, WidgetTypeRegistry,
};
