#![forbid(unsafe_code)]

//! Device-agnostic pointer events.
//!
//! The engine never talks to a real input source. The host translates
//! whatever it receives (mouse, touch, pen) into [`PointerEvent`]s in
//! viewport pixel coordinates and feeds them to the layout surface.
//!
//! # Design Notes
//!
//! - Positions are f32 pixels; grid quantization happens later, in one
//!   place, via `GridMetrics`.
//! - There is no button field: the dashboard only reacts to the primary
//!   button/contact, and the host filters the rest.

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pixel delta from `origin` to `self` as `(dx, dy)`.
    #[must_use]
    pub fn delta_from(&self, origin: PointerPosition) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Identifies one pointer across its down/move/up sequence.
///
/// A single-mouse host uses [`PointerId::PRIMARY`] throughout; a
/// multi-touch host assigns one id per contact so the surface can tell
/// the gesture's pointer apart from stray fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The id a single-pointer host uses for everything.
    pub const PRIMARY: Self = Self(0);
}

/// The kind of input device behind a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerDevice {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button/contact pressed.
    Down,
    /// Pointer moved (with or without contact).
    Moved,
    /// Primary button/contact released.
    Up,
    /// Pointer left the surface. Routed through the same commit path as
    /// `Up`; gestures are never silently abandoned.
    Left,
}

/// A single pointer event in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub kind: PointerKind,
    /// Position in viewport pixels.
    pub position: PointerPosition,
    /// Originating device.
    pub device: PointerDevice,
    /// Which pointer this event belongs to.
    pub pointer: PointerId,
}

impl PointerEvent {
    /// Create a new event from the primary (mouse) pointer.
    #[must_use]
    pub const fn new(kind: PointerKind, position: PointerPosition) -> Self {
        Self {
            kind,
            position,
            device: PointerDevice::Mouse,
            pointer: PointerId::PRIMARY,
        }
    }

    /// Set the originating device.
    #[must_use]
    pub const fn with_device(mut self, device: PointerDevice) -> Self {
        self.device = device;
        self
    }

    /// Set the pointer id (multi-touch hosts).
    #[must_use]
    pub const fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }

    /// Shorthand for a down event at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, PointerPosition::new(x, y))
    }

    /// Shorthand for a move event at `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Moved, PointerPosition::new(x, y))
    }

    /// Shorthand for an up event at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, PointerPosition::new(x, y))
    }
}
