#![forbid(unsafe_code)]

//! Fire-and-forget outbound contracts of the layout surface.
//!
//! Both sinks are implemented by the host: notifications end up in
//! whatever toast/snackbar plumbing the application uses, and persistence
//! saves the committed widget list wherever layouts live. The engine
//! itself never reads or writes storage.

use dashgrid_layout::widget::Widget;

/// A user-facing notice about a committed or rejected layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutNotice {
    /// A resize was committed and displaced other widgets.
    WidgetsReflowed {
        /// How many widgets were moved to make room.
        count: usize,
    },
    /// A resize was rejected outright and the widget sprang back.
    ResizeRejected,
}

impl LayoutNotice {
    /// Human-readable message for the default toast rendering.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::WidgetsReflowed { count: 1 } => "1 widget was moved to make room".to_string(),
            Self::WidgetsReflowed { count } => {
                format!("{count} widgets were moved to make room")
            }
            Self::ResizeRejected => "Not enough room: a locked widget is in the way".to_string(),
        }
    }
}

/// Receives user-facing notices after commits and rejections.
pub trait NotificationSink {
    /// Deliver a notice. Must not call back into the surface.
    fn notify(&mut self, notice: LayoutNotice);
}

/// Receives the full committed widget list after every change.
pub trait PersistenceSink {
    /// Save a committed snapshot. Must not call back into the surface.
    fn save(&mut self, widgets: &[Widget]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pluralize() {
        assert_eq!(
            LayoutNotice::WidgetsReflowed { count: 1 }.message(),
            "1 widget was moved to make room"
        );
        assert_eq!(
            LayoutNotice::WidgetsReflowed { count: 3 }.message(),
            "3 widgets were moved to make room"
        );
        assert!(LayoutNotice::ResizeRejected.message().contains("locked"));
    }
}
