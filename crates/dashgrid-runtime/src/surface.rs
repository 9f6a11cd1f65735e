#![forbid(unsafe_code)]

//! The layout surface: owner of the committed widget list.
//!
//! The surface is the single writer. Pointer events route through the
//! gesture controllers, but every mutation of the committed `Vec<Widget>`
//! funnels through the two command entry points ([`LayoutSurface::apply_resize`],
//! [`LayoutSurface::apply_swap`]) and one private commit, which also emits
//! the snapshot to the persistence sink and reflow notices to the
//! notification sink. Rendering derives from [`LayoutSurface::placements`]
//! on the latest snapshot; nothing mutates a widget in place from outside.
//!
//! Everything here is synchronous and single-threaded: at most one gesture
//! is active, and a gesture's terminal transition collapses back to idle
//! before the next pointer-down can be processed. The gesture belongs to
//! the pointer that started it; events from any other [`PointerId`] are
//! ignored until the gesture resolves. If this engine is ever driven from
//! multiple threads, all calls must be confined to one task.
//!
//! A gesture is never silently abandoned: pointer-up, pointer-leave, and
//! leaving edit mode all resolve a pending candidate through the same
//! commit-or-revert path.

use crate::drag::{DragController, SwapOutcome};
use crate::notify::{LayoutNotice, NotificationSink, PersistenceSink};
use crate::resize::{ResizeController, ResizeEdge, ResizeOutcome, ResizePreview};
use bitflags::bitflags;
use dashgrid_core::event::{PointerEvent, PointerId, PointerKind, PointerPosition};
use dashgrid_core::geometry::{GRID_COLUMNS, GridMetrics, GridRect, PixelRect};
use dashgrid_layout::reflow::{ReflowOutcome, reflow};
use dashgrid_layout::widget::{Widget, WidgetId};

bitflags! {
    /// Edit-mode affordances a widget exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AffordanceFlags: u8 {
        /// Drag handle (top strip). Locked widgets never expose it.
        const DRAG = 1 << 0;
        /// Right-edge resize handle.
        const RESIZE_RIGHT = 1 << 1;
        /// Bottom-edge resize handle.
        const RESIZE_BOTTOM = 1 << 2;
        /// Bottom-right corner resize handle.
        const RESIZE_CORNER = 1 << 3;
    }
}

/// Visual state of a widget during a live preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Not involved in the active gesture.
    #[default]
    None,
    /// Would be displaced (or is the hovered swap target) if the gesture
    /// committed now.
    WillMove,
    /// In the way of a gesture that would be rejected (a locked widget is
    /// in the cascade).
    Blocked,
}

/// One visible widget, resolved to pixels for the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetPlacement {
    pub id: WidgetId,
    /// Pixel placement derived from the widget's grid rect.
    pub rect: PixelRect,
    /// Which handles to render.
    pub affordances: AffordanceFlags,
    /// Live-preview highlight.
    pub highlight: Highlight,
}

/// What a pixel position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The drag handle (top strip) of a widget.
    DragHandle(WidgetId),
    /// A resize handle of a widget.
    ResizeHandle(WidgetId, ResizeEdge),
    /// The widget body.
    Body(WidgetId),
}

impl HitTarget {
    /// The widget this target belongs to.
    #[must_use]
    pub const fn widget(&self) -> WidgetId {
        match self {
            Self::DragHandle(id) | Self::ResizeHandle(id, _) | Self::Body(id) => *id,
        }
    }
}

/// Outcome of a command entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The change was committed.
    Committed {
        /// Widgets displaced by reflow (empty for swaps and collision-free
        /// resizes).
        moved: Vec<WidgetId>,
    },
    /// The change was rejected and nothing was written.
    Rejected,
    /// Nothing to do (stale id, unchanged rect, invalid swap).
    Noop,
}

/// Host-tunable surface parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Fixed row height in pixels (columns derive from the viewport).
    pub row_height_px: f32,
    /// Height of the drag-handle strip at the top of each widget.
    pub drag_handle_px: f32,
    /// Thickness of the resize zones along the right/bottom edges.
    pub resize_handle_px: f32,
    /// Whether edit affordances are active.
    pub edit_mode: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            row_height_px: 40.0,
            drag_handle_px: 24.0,
            resize_handle_px: 12.0,
            edit_mode: false,
        }
    }
}

impl SurfaceConfig {
    /// Set the fixed row height.
    #[must_use]
    pub const fn with_row_height(mut self, px: f32) -> Self {
        self.row_height_px = px;
        self
    }

    /// Set the drag-handle strip height.
    #[must_use]
    pub const fn with_drag_handle(mut self, px: f32) -> Self {
        self.drag_handle_px = px;
        self
    }

    /// Set the resize-zone thickness.
    #[must_use]
    pub const fn with_resize_handle(mut self, px: f32) -> Self {
        self.resize_handle_px = px;
        self
    }

    /// Start in edit mode.
    #[must_use]
    pub const fn editing(mut self) -> Self {
        self.edit_mode = true;
        self
    }
}

#[derive(Debug, Clone)]
enum Gesture {
    None,
    Resize(ResizeController),
    Drag(DragController),
}

/// The visible grid: renders widgets at their rects and dispatches
/// gestures to the controllers.
pub struct LayoutSurface {
    widgets: Vec<Widget>,
    metrics: GridMetrics,
    config: SurfaceConfig,
    gesture: Gesture,
    /// The pointer that owns the active gesture.
    gesture_pointer: Option<PointerId>,
    /// Live resize feedback; gesture-scoped, discarded on finish.
    preview: Option<ResizePreview>,
    /// Swap target currently hovered during a drag.
    drag_hover: Option<WidgetId>,
    notifications: Option<Box<dyn NotificationSink>>,
    persistence: Option<Box<dyn PersistenceSink>>,
}

impl std::fmt::Debug for LayoutSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSurface")
            .field("widgets", &self.widgets)
            .field("metrics", &self.metrics)
            .field("config", &self.config)
            .field("gesture", &self.gesture)
            .field("gesture_pointer", &self.gesture_pointer)
            .field("preview", &self.preview)
            .field("drag_hover", &self.drag_hover)
            .finish()
    }
}

impl LayoutSurface {
    /// Create a surface for a viewport width, with no widgets yet.
    #[must_use]
    pub fn new(viewport_width_px: f32, config: SurfaceConfig) -> Self {
        Self {
            widgets: Vec::new(),
            metrics: GridMetrics::from_viewport(viewport_width_px, config.row_height_px),
            config,
            gesture: Gesture::None,
            gesture_pointer: None,
            preview: None,
            drag_hover: None,
            notifications: None,
            persistence: None,
        }
    }

    /// Attach the host's notification sink.
    #[must_use]
    pub fn with_notifications(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.notifications = Some(sink);
        self
    }

    /// Attach the host's persistence sink.
    #[must_use]
    pub fn with_persistence(mut self, sink: Box<dyn PersistenceSink>) -> Self {
        self.persistence = Some(sink);
        self
    }

    /// Replace the widget list (layout loaded, widget added/removed).
    ///
    /// Any in-flight gesture is dropped with its preview; the incoming
    /// list is the new authority.
    pub fn set_widgets(&mut self, widgets: Vec<Widget>) {
        self.widgets = widgets;
        self.gesture = Gesture::None;
        self.gesture_pointer = None;
        self.preview = None;
        self.drag_hover = None;
    }

    /// The committed widget list.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Grid metrics currently in effect.
    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Recompute column width after a viewport resize.
    pub fn set_viewport_width(&mut self, viewport_width_px: f32) {
        self.metrics = GridMetrics::from_viewport(viewport_width_px, self.config.row_height_px);
    }

    /// Toggle edit mode.
    ///
    /// Leaving edit mode resolves any active gesture through the normal
    /// commit path first, exactly as pointer-up or pointer-leave would: a
    /// pending resize candidate is committed (or reverted if blocked), a
    /// drag evaporates.
    pub fn set_edit_mode(&mut self, on: bool) {
        if !on {
            match std::mem::replace(&mut self.gesture, Gesture::None) {
                Gesture::Resize(mut ctl) => {
                    let outcome = ctl.finish(&self.widgets);
                    self.resolve_resize(outcome);
                }
                Gesture::Drag(mut ctl) => ctl.abort(),
                Gesture::None => {}
            }
            self.gesture_pointer = None;
            self.preview = None;
            self.drag_hover = None;
        }
        self.config.edit_mode = on;
    }

    /// True while a drag or resize gesture is in flight.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        !matches!(self.gesture, Gesture::None)
    }

    /// True if `id` is in the live preview's collision set.
    #[must_use]
    pub fn is_colliding(&self, id: WidgetId) -> bool {
        self.preview
            .as_ref()
            .is_some_and(|p| p.colliding.contains(&id))
    }

    // --- rendering ---

    /// Visible widgets resolved to pixel placements for the host renderer.
    #[must_use]
    pub fn placements(&self) -> Vec<WidgetPlacement> {
        self.widgets
            .iter()
            .filter(|w| w.visible)
            .map(|w| WidgetPlacement {
                id: w.id,
                rect: self.metrics.pixel_rect(&w.rect),
                affordances: self.affordances(w),
                highlight: self.highlight_for(w.id),
            })
            .collect()
    }

    fn affordances(&self, widget: &Widget) -> AffordanceFlags {
        if !self.config.edit_mode {
            return AffordanceFlags::empty();
        }
        let mut flags = AffordanceFlags::RESIZE_RIGHT
            | AffordanceFlags::RESIZE_BOTTOM
            | AffordanceFlags::RESIZE_CORNER;
        if !widget.locked {
            flags |= AffordanceFlags::DRAG;
        }
        flags
    }

    fn highlight_for(&self, id: WidgetId) -> Highlight {
        if let Some(preview) = &self.preview {
            if preview.colliding.contains(&id) {
                return if preview.blocked {
                    Highlight::Blocked
                } else {
                    Highlight::WillMove
                };
            }
        }
        if self.drag_hover == Some(id) {
            return Highlight::WillMove;
        }
        Highlight::None
    }

    // --- hit testing ---

    /// Resolve a pixel position to a widget zone.
    ///
    /// Outside edit mode everything is `Body`; locked widgets never
    /// resolve to a drag handle.
    #[must_use]
    pub fn hit_test(&self, pos: PointerPosition) -> Option<HitTarget> {
        for w in self.widgets.iter().filter(|w| w.visible) {
            let rect = self.metrics.pixel_rect(&w.rect);
            if !rect.contains(pos.x, pos.y) {
                continue;
            }
            if !self.config.edit_mode {
                return Some(HitTarget::Body(w.id));
            }

            let in_right = pos.x >= rect.x + rect.w - self.config.resize_handle_px;
            let in_bottom = pos.y >= rect.y + rect.h - self.config.resize_handle_px;
            let target = if in_right && in_bottom {
                HitTarget::ResizeHandle(w.id, ResizeEdge::Corner)
            } else if in_right {
                HitTarget::ResizeHandle(w.id, ResizeEdge::Right)
            } else if in_bottom {
                HitTarget::ResizeHandle(w.id, ResizeEdge::Bottom)
            } else if !w.locked && pos.y < rect.y + self.config.drag_handle_px {
                HitTarget::DragHandle(w.id)
            } else {
                HitTarget::Body(w.id)
            };
            return Some(target);
        }
        None
    }

    // --- pointer routing ---

    /// Dispatch a pointer event to the active (or a new) gesture.
    ///
    /// Only the pointer that started the gesture may advance or resolve
    /// it; mid-gesture events from other pointers are dropped.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.gesture_active() && self.gesture_pointer != Some(event.pointer) {
            return;
        }
        match event.kind {
            PointerKind::Down => self.pointer_down(event.pointer, event.position),
            PointerKind::Moved => self.pointer_moved(event.position),
            // Pointer-leave routes through the same commit path as
            // pointer-up; gestures are never silently abandoned.
            PointerKind::Up | PointerKind::Left => self.pointer_up(event.position),
        }
    }

    fn pointer_down(&mut self, pointer: PointerId, pos: PointerPosition) {
        if self.gesture_active() {
            return;
        }
        match self.hit_test(pos) {
            Some(HitTarget::ResizeHandle(id, edge)) => {
                let Some(widget) = self.widgets.iter().find(|w| w.id == id) else {
                    return;
                };
                let mut ctl = ResizeController::new();
                if ctl.begin(widget, edge, pos) {
                    self.gesture = Gesture::Resize(ctl);
                    self.gesture_pointer = Some(pointer);
                }
            }
            Some(HitTarget::DragHandle(id)) => {
                let mut ctl = DragController::new();
                if ctl.begin(id) {
                    self.gesture = Gesture::Drag(ctl);
                    self.gesture_pointer = Some(pointer);
                }
            }
            Some(HitTarget::Body(_)) | None => {}
        }
    }

    fn pointer_moved(&mut self, pos: PointerPosition) {
        match &mut self.gesture {
            Gesture::Resize(ctl) => {
                self.preview = ctl.update(pos, &self.metrics, &self.widgets);
            }
            Gesture::Drag(ctl) => {
                let source = ctl.source();
                self.drag_hover = match self.hit_test(pos) {
                    Some(HitTarget::DragHandle(id)) if Some(id) != source => Some(id),
                    _ => None,
                };
            }
            Gesture::None => {}
        }
    }

    fn pointer_up(&mut self, pos: PointerPosition) {
        self.gesture_pointer = None;
        match std::mem::replace(&mut self.gesture, Gesture::None) {
            Gesture::Resize(mut ctl) => {
                let outcome = ctl.finish(&self.widgets);
                self.resolve_resize(outcome);
                self.preview = None;
            }
            Gesture::Drag(mut ctl) => {
                // A swap requires releasing over another widget's drag
                // handle; anywhere else the drag evaporates.
                match self.hit_test(pos) {
                    Some(HitTarget::DragHandle(target)) => {
                        if let SwapOutcome::Swapped { widgets } =
                            ctl.drop_on(target, &self.widgets)
                        {
                            self.commit(widgets, Vec::new());
                        }
                    }
                    _ => ctl.abort(),
                }
                self.drag_hover = None;
            }
            Gesture::None => {}
        }
    }

    // --- commands ---

    /// Resize `id` to `new_rect`, reflowing neighbors as needed.
    ///
    /// The programmatic equivalent of a resize gesture; all the same
    /// rules apply: the requested size is clamped to the widget's
    /// constraints and to the 12-column grid before planning, stale ids
    /// and unchanged rects are no-ops, and a locked widget in the cascade
    /// rejects the whole change.
    pub fn apply_resize(&mut self, id: WidgetId, new_rect: GridRect) -> CommitOutcome {
        let Some(current) = self.widgets.iter().find(|w| w.id == id) else {
            return CommitOutcome::Noop;
        };
        let mut w = current.constraints.clamp_width(new_rect.w.max(1));
        w = w.min(GRID_COLUMNS.saturating_sub(new_rect.x).max(1));
        let h = current.constraints.clamp_height(new_rect.h.max(1));
        let candidate = GridRect::new(new_rect.x, new_rect.y, w, h);
        if current.rect == candidate {
            return CommitOutcome::Noop;
        }
        match reflow(&self.widgets, id, candidate) {
            ReflowOutcome::Applied { widgets, moved } => {
                let out = moved.clone();
                self.commit(widgets, moved);
                CommitOutcome::Committed { moved: out }
            }
            ReflowOutcome::Rejected => {
                self.notify(LayoutNotice::ResizeRejected);
                CommitOutcome::Rejected
            }
        }
    }

    /// Swap the rects of `a` and `b`.
    ///
    /// The programmatic equivalent of a drag gesture; same rules (self,
    /// stale, or locked participants are no-ops).
    pub fn apply_swap(&mut self, a: WidgetId, b: WidgetId) -> CommitOutcome {
        let mut ctl = DragController::new();
        ctl.begin(a);
        match ctl.drop_on(b, &self.widgets) {
            SwapOutcome::Swapped { widgets } => {
                self.commit(widgets, Vec::new());
                CommitOutcome::Committed { moved: Vec::new() }
            }
            SwapOutcome::Ignored => CommitOutcome::Noop,
        }
    }

    fn resolve_resize(&mut self, outcome: ResizeOutcome) {
        match outcome {
            ResizeOutcome::Committed { widgets, moved } => self.commit(widgets, moved),
            ResizeOutcome::Reverted => self.notify(LayoutNotice::ResizeRejected),
            ResizeOutcome::Unchanged => {}
        }
    }

    /// The single write path for the committed list.
    fn commit(&mut self, widgets: Vec<Widget>, moved: Vec<WidgetId>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("commit", displaced = moved.len()).entered();

        self.widgets = widgets;
        if !moved.is_empty() {
            self.notify(LayoutNotice::WidgetsReflowed { count: moved.len() });
        }
        if let Some(sink) = &mut self.persistence {
            sink.save(&self.widgets);
        }
    }

    fn notify(&mut self, notice: LayoutNotice) {
        if let Some(sink) = &mut self.notifications {
            sink.notify(notice);
        }
    }
}
