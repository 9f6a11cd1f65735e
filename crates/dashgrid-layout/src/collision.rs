#![forbid(unsafe_code)]

//! Collision detection over the committed widget set.

use crate::widget::{Widget, WidgetId};
use dashgrid_core::geometry::GridRect;

/// All visible widgets whose rect overlaps `candidate`.
///
/// `exclude` names the widget being moved or resized, which naturally
/// overlaps itself. The result preserves the relative order of the input
/// list (stable filter), so downstream reflow tie-breaks are reproducible.
#[must_use]
pub fn find_colliding(candidate: &GridRect, widgets: &[Widget], exclude: WidgetId) -> Vec<WidgetId> {
    widgets
        .iter()
        .filter(|w| w.id != exclude && w.visible && w.rect.overlaps(candidate))
        .map(|w| w.id)
        .collect()
}

/// True if `candidate` collides with nothing (other than `exclude`).
#[must_use]
pub fn is_vacant(candidate: &GridRect, widgets: &[Widget], exclude: WidgetId) -> bool {
    !widgets
        .iter()
        .any(|w| w.id != exclude && w.visible && w.rect.overlaps(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(id: u64, x: u16, y: u16, w: u16, h: u16) -> Widget {
        Widget::new(WidgetId(id), GridRect::new(x, y, w, h))
    }

    #[test]
    fn finds_overlapping_widgets_in_input_order() {
        let widgets = vec![
            widget(1, 0, 0, 4, 2),
            widget(2, 4, 0, 4, 2),
            widget(3, 8, 0, 4, 2),
            widget(4, 3, 1, 6, 2),
        ];
        let candidate = GridRect::new(2, 0, 8, 2);
        assert_eq!(
            find_colliding(&candidate, &widgets, WidgetId(99)),
            vec![WidgetId(1), WidgetId(2), WidgetId(3), WidgetId(4)]
        );
    }

    #[test]
    fn excludes_self_even_when_candidate_is_own_rect() {
        let widgets = vec![widget(1, 0, 0, 4, 2), widget(2, 6, 0, 4, 2)];
        let own = widgets[0].rect;
        assert!(find_colliding(&own, &widgets, WidgetId(1)).is_empty());
    }

    #[test]
    fn skips_invisible_widgets() {
        let widgets = vec![
            widget(1, 0, 0, 4, 2),
            Widget::new(WidgetId(2), GridRect::new(1, 0, 4, 2)).hidden(),
        ];
        let candidate = GridRect::new(0, 0, 6, 2);
        assert_eq!(
            find_colliding(&candidate, &widgets, WidgetId(1)),
            Vec::<WidgetId>::new()
        );
    }

    #[test]
    fn touching_widgets_are_not_colliding() {
        let widgets = vec![widget(1, 2, 0, 2, 2)];
        let candidate = GridRect::new(0, 0, 2, 2);
        assert!(find_colliding(&candidate, &widgets, WidgetId(99)).is_empty());
        assert!(is_vacant(&candidate, &widgets, WidgetId(99)));
    }

    #[test]
    fn is_vacant_detects_occupied_space() {
        let widgets = vec![widget(1, 0, 0, 4, 2)];
        assert!(!is_vacant(&GridRect::new(3, 1, 2, 2), &widgets, WidgetId(9)));
        assert!(is_vacant(&GridRect::new(4, 0, 2, 2), &widgets, WidgetId(9)));
    }
}
