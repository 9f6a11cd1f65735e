#![forbid(unsafe_code)]

//! The resize gesture state machine.
//!
//! `Idle → Resizing → {committed, reverted, unchanged} → Idle`, driven by
//! the layout surface from pointer events but fully testable without them.
//!
//! # Invariants
//!
//! 1. At most one gesture is active; `begin` while resizing is ignored.
//! 2. Mid-gesture state (candidate rect, collision set) is private to the
//!    gesture and never touches the committed widget list.
//! 3. The grid delta is recomputed from the gesture-start origin on every
//!    tick, so per-tick rounding error cannot accumulate.
//! 4. `finish` always reaches a terminal outcome; pointer-leave routes
//!    through the same path as pointer-up, so a gesture is never silently
//!    abandoned with a live preview.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Widget removed mid-gesture | Concurrent host mutation | Gesture abandoned (`Unchanged`) |
//! | Reflow rejected | Locked widget in the cascade | Full revert (`Reverted`) |
//! | Candidate equals start rect | Pointer never left the cell | `Unchanged`, no event |

use dashgrid_core::event::PointerPosition;
use dashgrid_core::geometry::{GRID_COLUMNS, GridMetrics, GridRect};
use dashgrid_layout::collision::find_colliding;
use dashgrid_layout::reflow::{ReflowOutcome, reflow};
use dashgrid_layout::widget::{SizeConstraints, Widget, WidgetId};

/// Which edge of the widget the gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Right edge: width changes, height fixed.
    Right,
    /// Bottom edge: height changes, width fixed.
    Bottom,
    /// Bottom-right corner: both change.
    Corner,
}

impl ResizeEdge {
    /// True if this edge adjusts the width.
    #[must_use]
    pub const fn affects_width(&self) -> bool {
        matches!(self, Self::Right | Self::Corner)
    }

    /// True if this edge adjusts the height.
    #[must_use]
    pub const fn affects_height(&self) -> bool {
        matches!(self, Self::Bottom | Self::Corner)
    }
}

/// Live feedback for the active resize, recomputed on every pointer move.
///
/// Purely visual: discarded when the gesture ends, whether committed or
/// not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizePreview {
    /// The rect the widget would take if released now.
    pub candidate: GridRect,
    /// Widgets currently overlapping the candidate, stable input order.
    pub colliding: Vec<WidgetId>,
    /// True if any colliding widget is locked; releasing now would revert.
    pub blocked: bool,
}

/// Terminal outcome of a resize gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Nothing to commit: no active gesture, a stale widget, or a
    /// candidate identical to the starting rect.
    Unchanged,
    /// The candidate (plus any reflow displacements) is the new committed
    /// state.
    Committed {
        /// Full updated widget list.
        widgets: Vec<Widget>,
        /// Ids displaced by reflow, empty for a collision-free resize.
        moved: Vec<WidgetId>,
    },
    /// Reflow could not make room; the widget springs back to its
    /// starting rect and the committed list is untouched.
    Reverted,
}

#[derive(Debug, Clone)]
enum ResizePhase {
    Idle,
    Resizing {
        widget: WidgetId,
        edge: ResizeEdge,
        start_rect: GridRect,
        constraints: SizeConstraints,
        origin_px: PointerPosition,
        candidate: GridRect,
    },
}

/// Orchestrates one pointer-drag resize gesture at a time.
#[derive(Debug, Clone)]
pub struct ResizeController {
    phase: ResizePhase,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: ResizePhase::Idle,
        }
    }

    /// True while a gesture is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, ResizePhase::Resizing { .. })
    }

    /// The widget being resized, if any.
    #[must_use]
    pub fn active_widget(&self) -> Option<WidgetId> {
        match &self.phase {
            ResizePhase::Resizing { widget, .. } => Some(*widget),
            ResizePhase::Idle => None,
        }
    }

    /// Pointer-down on a resize handle. Returns `false` (and does
    /// nothing) if a gesture is already active.
    pub fn begin(&mut self, widget: &Widget, edge: ResizeEdge, origin_px: PointerPosition) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = ResizePhase::Resizing {
            widget: widget.id,
            edge,
            start_rect: widget.rect,
            constraints: widget.constraints,
            origin_px,
            candidate: widget.rect,
        };
        true
    }

    /// Pointer-move tick: rebuild the candidate rect and collision set.
    ///
    /// Read-only with respect to the committed list; `widgets` is only
    /// consulted for the live collision highlight.
    pub fn update(
        &mut self,
        current_px: PointerPosition,
        metrics: &GridMetrics,
        widgets: &[Widget],
    ) -> Option<ResizePreview> {
        let ResizePhase::Resizing {
            widget,
            edge,
            start_rect,
            constraints,
            origin_px,
            candidate,
        } = &mut self.phase
        else {
            return None;
        };

        let (dx, dy) = current_px.delta_from(*origin_px);
        let delta = metrics.grid_delta(dx, dy);

        let mut w = start_rect.w;
        if edge.affects_width() {
            let raw = (start_rect.w as i32 + delta.d_cols).max(1) as u16;
            w = constraints.clamp_width(raw);
            // Keep the right edge on the grid; rows are unbounded but
            // columns are not.
            w = w.min(GRID_COLUMNS.saturating_sub(start_rect.x).max(1));
        }
        let mut h = start_rect.h;
        if edge.affects_height() {
            let raw = (start_rect.h as i32 + delta.d_rows).max(1) as u16;
            h = constraints.clamp_height(raw);
        }

        *candidate = GridRect::new(start_rect.x, start_rect.y, w, h);

        let colliding = find_colliding(candidate, widgets, *widget);
        let blocked = colliding.iter().any(|id| {
            widgets
                .iter()
                .any(|other| other.id == *id && other.locked)
        });

        Some(ResizePreview {
            candidate: *candidate,
            colliding,
            blocked,
        })
    }

    /// Pointer-up (or pointer-leave): resolve the gesture.
    ///
    /// Runs the reflow planner if the candidate collides. Either way the
    /// controller is idle afterwards.
    pub fn finish(&mut self, widgets: &[Widget]) -> ResizeOutcome {
        let phase = std::mem::replace(&mut self.phase, ResizePhase::Idle);
        let ResizePhase::Resizing {
            widget,
            start_rect,
            candidate,
            ..
        } = phase
        else {
            return ResizeOutcome::Unchanged;
        };

        // Widget removed while the gesture was in flight: benign race,
        // nothing to commit.
        if !widgets.iter().any(|w| w.id == widget) {
            return ResizeOutcome::Unchanged;
        }

        if candidate == start_rect {
            return ResizeOutcome::Unchanged;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "resize_finish",
            widget = widget.0,
            w = candidate.w,
            h = candidate.h
        )
        .entered();

        match reflow(widgets, widget, candidate) {
            ReflowOutcome::Applied { widgets, moved } => {
                ResizeOutcome::Committed { widgets, moved }
            }
            ReflowOutcome::Rejected => ResizeOutcome::Reverted,
        }
    }
}
