#![forbid(unsafe_code)]

//! Grid geometry primitives.
//!
//! Widgets live on a fixed-column grid: [`GRID_COLUMNS`] columns wide,
//! unbounded rows growing downward. All placement math is done in whole
//! grid cells ([`GridRect`]); conversion to and from pixels happens only at
//! the edges of the engine, through [`GridMetrics`].

/// Number of columns in the dashboard grid. Rows are unbounded.
pub const GRID_COLUMNS: u16 = 12;

/// A widget's position and size in grid-cell units.
///
/// `x`, `y` is the top-left cell (0-indexed); `w`, `h` are spans. The
/// engine only ever produces rects with `w >= 1` and `h >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub w: u16,
    /// Height in cells.
    pub h: u16,
}

impl GridRect {
    /// Create a new rect.
    #[inline]
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.w as u32 * self.h as u32
    }

    /// Check if a cell is inside the rect.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict axis-aligned overlap test.
    ///
    /// Rects that merely touch (share a boundary line, zero-area
    /// intersection) do **not** overlap.
    #[inline]
    pub const fn overlaps(&self, other: &GridRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The same rect with a different top edge.
    #[inline]
    pub const fn with_y(&self, y: u16) -> Self {
        Self { y, ..*self }
    }

    /// Size component of the rect.
    #[inline]
    pub const fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }
}

/// A width/height pair in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in cells.
    pub w: u16,
    /// Height in cells.
    pub h: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }
}

/// A signed displacement in whole grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDelta {
    /// Column displacement (positive = right).
    pub d_cols: i32,
    /// Row displacement (positive = down).
    pub d_rows: i32,
}

/// A widget's placement in pixels, derived from its [`GridRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PixelRect {
    /// Check if a pixel position is inside the rect.
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, matching the
    /// cell convention of [`GridRect::contains`].
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Pixel sizing of the grid, supplied by the host viewport.
///
/// The engine never measures anything itself: the host hands over the
/// current column width (`viewport_width / GRID_COLUMNS`) and a fixed row
/// height, and all conversion goes through here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Width of one grid column in pixels.
    pub column_width_px: f32,
    /// Height of one grid row in pixels.
    pub row_height_px: f32,
}

impl GridMetrics {
    /// Create metrics from explicit column/row pixel sizes.
    #[must_use]
    pub const fn new(column_width_px: f32, row_height_px: f32) -> Self {
        Self {
            column_width_px,
            row_height_px,
        }
    }

    /// Create metrics from a viewport width and a fixed row height.
    #[must_use]
    pub fn from_viewport(viewport_width_px: f32, row_height_px: f32) -> Self {
        Self {
            column_width_px: viewport_width_px / GRID_COLUMNS as f32,
            row_height_px,
        }
    }

    /// Convert a cumulative pixel delta to whole grid cells.
    ///
    /// Rounds to the **nearest** cell, so pointer jitter below half a cell
    /// maps to zero. Callers must pass the delta from the gesture-start
    /// origin, not a per-tick increment, so rounding error never
    /// accumulates across ticks.
    #[must_use]
    pub fn grid_delta(&self, dx_px: f32, dy_px: f32) -> GridDelta {
        GridDelta {
            d_cols: (dx_px / self.column_width_px).round() as i32,
            d_rows: (dy_px / self.row_height_px).round() as i32,
        }
    }

    /// Pixel placement for a grid rect.
    #[must_use]
    pub fn pixel_rect(&self, rect: &GridRect) -> PixelRect {
        PixelRect {
            x: rect.x as f32 * self.column_width_px,
            y: rect.y as f32 * self.row_height_px,
            w: rect.w as f32 * self.column_width_px,
            h: rect.h as f32 * self.row_height_px,
        }
    }
}

/// Clamp a span to `[min, max]`, where `max = None` means unbounded.
#[inline]
#[must_use]
pub fn clamp_span(value: u16, min: u16, max: Option<u16>) -> u16 {
    let clamped = value.max(min);
    match max {
        Some(max) => clamped.min(max),
        None => clamped,
    }
}
