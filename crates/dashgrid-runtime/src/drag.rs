#![forbid(unsafe_code)]

//! The drag-swap gesture.
//!
//! Dragging a widget by its handle and dropping it on another widget's
//! handle swaps their rects wholesale. This is deliberately simpler than
//! resize-reflow: the occupied area before and after a swap is identical,
//! so no third widget can be disturbed and no collision pass is needed.

use dashgrid_layout::widget::{Widget, WidgetId};

/// Terminal outcome of a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Both rects were exchanged.
    Swapped {
        /// Full updated widget list.
        widgets: Vec<Widget>,
    },
    /// Nothing happened: dropped on self, on nothing, on a locked widget,
    /// or a participant id went stale.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    Idle,
    Dragging { source: WidgetId },
}

/// Orchestrates one drag-swap gesture at a time.
#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// True while a drag is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// The widget being dragged, if any.
    #[must_use]
    pub fn source(&self) -> Option<WidgetId> {
        match self.phase {
            DragPhase::Dragging { source } => Some(source),
            DragPhase::Idle => None,
        }
    }

    /// Pointer-down on a drag handle. Returns `false` (and does nothing)
    /// if a gesture is already active.
    pub fn begin(&mut self, source: WidgetId) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = DragPhase::Dragging { source };
        true
    }

    /// Release with no valid target: the drag evaporates.
    pub fn abort(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Drop the dragged widget onto `target`, swapping the two rects.
    ///
    /// The controller is idle afterwards regardless of outcome. Stale ids
    /// are a benign race (the widget was removed mid-drag) and ignored.
    pub fn drop_on(&mut self, target: WidgetId, widgets: &[Widget]) -> SwapOutcome {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        let DragPhase::Dragging { source } = phase else {
            return SwapOutcome::Ignored;
        };

        if source == target {
            return SwapOutcome::Ignored;
        }
        let Some(src_idx) = widgets.iter().position(|w| w.id == source) else {
            return SwapOutcome::Ignored;
        };
        let Some(dst_idx) = widgets.iter().position(|w| w.id == target) else {
            return SwapOutcome::Ignored;
        };
        // A swap relocates both ends, and locked widgets are never
        // relocated.
        if widgets[src_idx].locked || widgets[dst_idx].locked {
            return SwapOutcome::Ignored;
        }

        let mut updated = widgets.to_vec();
        let src_rect = updated[src_idx].rect;
        updated[src_idx].rect = updated[dst_idx].rect;
        updated[dst_idx].rect = src_rect;

        #[cfg(feature = "tracing")]
        tracing::debug!(source = source.0, target = target.0, "widgets swapped");

        SwapOutcome::Swapped { widgets: updated }
    }
}
