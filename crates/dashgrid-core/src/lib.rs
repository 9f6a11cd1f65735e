#![forbid(unsafe_code)]

//! Core: grid geometry, pixel metrics, and pointer events for dashgrid.

pub mod event;
pub mod geometry;

pub use event::{PointerDevice, PointerEvent, PointerId, PointerKind, PointerPosition};
pub use geometry::{
    GRID_COLUMNS, GridDelta, GridMetrics, GridRect, PixelRect, Size, clamp_span,
};
