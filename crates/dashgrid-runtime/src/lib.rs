#![forbid(unsafe_code)]

//! Gesture runtime for the dashboard grid.
//!
//! Pointer events come in, committed widget lists come out:
//!
//! - [`ResizeController`] - the resize gesture state machine
//! - [`DragController`] - the drag-swap gesture
//! - [`LayoutSurface`] - owner of the committed list, hit testing,
//!   pointer routing, and the `apply_resize`/`apply_swap` command entry
//!   points
//! - [`NotificationSink`]/[`PersistenceSink`] - outbound host contracts
//!
//! Single-threaded by design: one gesture at a time, commits only at
//! gesture boundaries.

pub mod drag;
pub mod notify;
pub mod resize;
pub mod surface;

pub use drag::{DragController, SwapOutcome};
pub use notify::{LayoutNotice, NotificationSink, PersistenceSink};
pub use resize::{ResizeController, ResizeEdge, ResizeOutcome, ResizePreview};
pub use surface::{
    AffordanceFlags, CommitOutcome, Highlight, HitTarget, LayoutSurface, SurfaceConfig,
    WidgetPlacement,
};
