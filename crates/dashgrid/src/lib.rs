#![forbid(unsafe_code)]

//! Dashgrid public facade crate.
//!
//! Re-exports the dashboard grid layout engine behind one dependency. The
//! engine places resizable, draggable widgets on a fixed 12-column grid,
//! detects overlap, and reflows neighbors downward when a resize needs
//! room; the host supplies pointer events, a widget-type registry, and
//! sinks for notifications and persistence.

// --- Core re-exports -------------------------------------------------------

pub use dashgrid_core::event::{
    PointerDevice, PointerEvent, PointerId, PointerKind, PointerPosition,
};
pub use dashgrid_core::geometry::{
    GRID_COLUMNS, GridDelta, GridMetrics, GridRect, PixelRect, Size,
};

// --- Layout re-exports -----------------------------------------------------

pub use dashgrid_layout::collision::{find_colliding, is_vacant};
pub use dashgrid_layout::reflow::{ReflowOutcome, reflow};
pub use dashgrid_layout::widget::{
    SizeConstraints, StaticRegistry, Widget, WidgetId, WidgetTypeInfo, WidgetTypeRegistry,
};

// --- Runtime re-exports ----------------------------------------------------

pub use dashgrid_runtime::{
    AffordanceFlags, CommitOutcome, DragController, Highlight, HitTarget, LayoutNotice,
    LayoutSurface, NotificationSink, PersistenceSink, ResizeController, ResizeEdge,
    ResizeOutcome, ResizePreview, SurfaceConfig, SwapOutcome, WidgetPlacement,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        GridMetrics, GridRect, LayoutNotice, LayoutSurface, NotificationSink, PersistenceSink,
        PointerEvent, PointerId, ResizeEdge, Size, SizeConstraints, SurfaceConfig, Widget,
        WidgetId, WidgetTypeRegistry,
    };
}
