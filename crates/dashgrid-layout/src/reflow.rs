#![forbid(unsafe_code)]

//! Reflow planning: make room for a widget whose rect is about to change.
//!
//! When applying a new rect would collide with neighbors, the planner
//! shifts the colliding widgets straight down rather than rejecting the
//! change. The heuristic is greedy and deterministic, not an optimizer:
//!
//! 1. Every widget colliding with the new rect is pushed to the row just
//!    below it (`y = new_rect.bottom()`), keeping its width and height.
//! 2. Each pushed widget is then re-checked against everything else; any
//!    widget it now overlaps is pushed below *it* in turn, so a stack of
//!    widgets cascades downward instead of stopping at the first free row.
//! 3. A collision with a locked widget rejects the whole plan. Locked
//!    widgets are never relocated; they may only be the reason other
//!    widgets end up further down.
//!
//! Downward-only relocation is what makes this terminate: rows are
//! unbounded while columns are fixed, so "make room below" always has a
//! feasible target, and every shift strictly increases the shifted
//! widget's `y`.

use crate::collision::find_colliding;
use crate::widget::{Widget, WidgetId};
use dashgrid_core::geometry::GridRect;
use std::collections::VecDeque;

/// Result of a reflow attempt.
///
/// Rejection is a normal outcome, not an error: the caller reverts the
/// gesture and the committed widget list is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflowOutcome {
    /// A non-overlapping arrangement was found.
    Applied {
        /// The full widget list with the moving widget and all displaced
        /// widgets updated.
        widgets: Vec<Widget>,
        /// Ids of every widget that was displaced (excluding the moving
        /// widget itself), in displacement order, de-duplicated.
        moved: Vec<WidgetId>,
    },
    /// Satisfying the new rect would require relocating a locked widget,
    /// or the moving id is stale.
    Rejected,
}

impl ReflowOutcome {
    /// True if a plan was found.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Apply `new_rect` to `moving`, displacing colliding widgets downward.
///
/// On rejection the input list is untouched (the returned outcome carries
/// no partial state). A `moving` id not present in `widgets` is rejected;
/// the caller treats that as a benign stale reference.
#[must_use]
pub fn reflow(widgets: &[Widget], moving: WidgetId, new_rect: GridRect) -> ReflowOutcome {
    let Some(moving_idx) = widgets.iter().position(|w| w.id == moving) else {
        return ReflowOutcome::Rejected;
    };

    let mut plan: Vec<Widget> = widgets.to_vec();
    plan[moving_idx].rect = new_rect;

    let mut moved: Vec<WidgetId> = Vec::new();
    // Guard against runaway cascades; each widget may be shifted at most
    // once per widget in the set. Downward-only shifts make this
    // unreachable in practice.
    let mut shifts = vec![0usize; plan.len()];
    let cap = plan.len();

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(moving_idx);

    while let Some(pusher_idx) = queue.pop_front() {
        if !plan[pusher_idx].visible {
            continue;
        }
        let pusher_rect = plan[pusher_idx].rect;
        let colliding = find_colliding(&pusher_rect, &plan, plan[pusher_idx].id);

        for id in colliding {
            // Shifts never reorder the list, so the index stays valid.
            let Some(idx) = plan.iter().position(|w| w.id == id) else {
                continue;
            };
            if plan[idx].locked {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    moving = moving.0,
                    blocked_by = id.0,
                    "reflow rejected: would relocate a locked widget"
                );
                return ReflowOutcome::Rejected;
            }
            shifts[idx] += 1;
            if shifts[idx] > cap {
                return ReflowOutcome::Rejected;
            }
            // Minimal downward shift that clears the pusher. Overlap
            // guarantees the new y is strictly greater than the old one.
            plan[idx].rect = plan[idx].rect.with_y(pusher_rect.bottom());
            if !moved.contains(&id) {
                moved.push(id);
            }
            queue.push_back(idx);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(moving = moving.0, displaced = moved.len(), "reflow applied");

    ReflowOutcome::Applied {
        widgets: plan,
        moved,
    }
}
