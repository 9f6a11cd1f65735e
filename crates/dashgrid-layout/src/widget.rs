#![forbid(unsafe_code)]

//! The widget model: what the layout engine places on the grid.
//!
//! Widgets are created and destroyed by the host (layout loaded, widget
//! added or removed); the engine only ever *repositions* them. While the
//! surface is mounted the engine owns every widget's rect exclusively, and
//! all mutation funnels through the surface's command entry points.

use dashgrid_core::geometry::{GridRect, Size, clamp_span};
use std::collections::HashMap;

/// Stable unique identifier for a placed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Size limits for a widget, resolved from its declared type.
///
/// Maxima of `None` mean unbounded. The registry is responsible for
/// keeping `min <= max`; the engine does not validate this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeConstraints {
    /// Minimum size in cells.
    pub min: Size,
    /// Maximum width in cells, unbounded if `None`.
    pub max_w: Option<u16>,
    /// Maximum height in cells, unbounded if `None`.
    pub max_h: Option<u16>,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            min: Size::new(1, 1),
            max_w: None,
            max_h: None,
        }
    }
}

impl SizeConstraints {
    /// Create constraints with a minimum size and no maxima.
    #[must_use]
    pub const fn at_least(min_w: u16, min_h: u16) -> Self {
        Self {
            min: Size::new(min_w, min_h),
            max_w: None,
            max_h: None,
        }
    }

    /// Set a maximum size.
    #[must_use]
    pub const fn with_max(mut self, max_w: u16, max_h: u16) -> Self {
        self.max_w = Some(max_w);
        self.max_h = Some(max_h);
        self
    }

    /// Clamp a candidate width. Never below one cell.
    #[must_use]
    pub fn clamp_width(&self, w: u16) -> u16 {
        clamp_span(w, self.min.w.max(1), self.max_w)
    }

    /// Clamp a candidate height. Never below one cell.
    #[must_use]
    pub fn clamp_height(&self, h: u16) -> u16 {
        clamp_span(h, self.min.h.max(1), self.max_h)
    }
}

/// A placed unit on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Widget {
    /// Stable identifier, assigned by the host.
    pub id: WidgetId,
    /// Position and size in grid cells.
    pub rect: GridRect,
    /// Invisible widgets are excluded from rendering and from
    /// collision/reflow consideration.
    pub visible: bool,
    /// Locked widgets may not be dragged or removed, and are never
    /// themselves relocated by reflow. They can still force other widgets
    /// to flow around them.
    pub locked: bool,
    /// Size limits resolved from the widget's declared type.
    pub constraints: SizeConstraints,
}

impl Widget {
    /// Create a visible, unlocked widget with default constraints.
    #[must_use]
    pub fn new(id: WidgetId, rect: GridRect) -> Self {
        Self {
            id,
            rect,
            visible: true,
            locked: false,
            constraints: SizeConstraints::default(),
        }
    }

    /// Set size constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: SizeConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Mark the widget locked.
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Mark the widget hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Size metadata a widget type declares to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTypeInfo {
    /// Smallest size the widget can render at.
    pub min_size: Size,
    /// Largest useful size, unbounded if `None`.
    pub max_size: Option<Size>,
}

impl WidgetTypeInfo {
    /// Convert to the constraints the engine clamps with.
    #[must_use]
    pub fn constraints(&self) -> SizeConstraints {
        SizeConstraints {
            min: self.min_size,
            max_w: self.max_size.map(|s| s.w),
            max_h: self.max_size.map(|s| s.h),
        }
    }
}

/// Lookup of widget-type metadata by declared component name.
///
/// Implemented by the host; queried once per widget when a layout is
/// loaded to resolve [`SizeConstraints`].
pub trait WidgetTypeRegistry {
    /// Metadata for a declared type, `None` if unknown.
    fn type_info(&self, type_name: &str) -> Option<WidgetTypeInfo>;

    /// Constraints for a declared type, defaulting for unknown types.
    fn resolve_constraints(&self, type_name: &str) -> SizeConstraints {
        self.type_info(type_name)
            .map(|info| info.constraints())
            .unwrap_or_default()
    }
}

/// Simple in-memory registry backed by a map.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    types: HashMap<String, WidgetTypeInfo>,
}

impl StaticRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget type.
    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, info: WidgetTypeInfo) -> Self {
        self.types.insert(name.into(), info);
        self
    }
}

impl WidgetTypeRegistry for StaticRegistry {
    fn type_info(&self, type_name: &str) -> Option<WidgetTypeInfo> {
        self.types.get(type_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constraints_allow_anything_above_one_cell() {
        let c = SizeConstraints::default();
        assert_eq!(c.clamp_width(0), 1);
        assert_eq!(c.clamp_width(40), 40);
        assert_eq!(c.clamp_height(500), 500);
    }

    #[test]
    fn constraints_clamp_to_maxima() {
        let c = SizeConstraints::at_least(2, 2).with_max(6, 4);
        assert_eq!(c.clamp_width(1), 2);
        assert_eq!(c.clamp_width(9), 6);
        assert_eq!(c.clamp_height(3), 3);
        assert_eq!(c.clamp_height(10), 4);
    }

    #[test]
    fn widget_builders() {
        let w = Widget::new(WidgetId(1), GridRect::new(0, 0, 4, 2))
            .locked()
            .with_constraints(SizeConstraints::at_least(2, 1));
        assert!(w.visible);
        assert!(w.locked);
        assert_eq!(w.constraints.min, Size::new(2, 1));

        let hidden = Widget::new(WidgetId(2), GridRect::new(0, 0, 1, 1)).hidden();
        assert!(!hidden.visible);
    }

    #[test]
    fn registry_resolves_declared_types() {
        let registry = StaticRegistry::new().with_type(
            "applications-chart",
            WidgetTypeInfo {
                min_size: Size::new(3, 2),
                max_size: Some(Size::new(12, 8)),
            },
        );

        let c = registry.resolve_constraints("applications-chart");
        assert_eq!(c.min, Size::new(3, 2));
        assert_eq!(c.max_w, Some(12));
        assert_eq!(c.max_h, Some(8));
    }

    #[test]
    fn registry_defaults_for_unknown_type() {
        let registry = StaticRegistry::new();
        assert_eq!(
            registry.resolve_constraints("no-such-widget"),
            SizeConstraints::default()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn widget_round_trips_through_json() {
        let w = Widget::new(WidgetId(7), GridRect::new(4, 0, 4, 2))
            .with_constraints(SizeConstraints::at_least(2, 2));
        let json = serde_json::to_string(&w).unwrap();
        let back: Widget = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
