//! Render planning for a swiped row.
//!
//! [`render_plan`] maps the row's current horizontal offset and its action
//! lists to a [`RowRenderPlan`]: how far the content is displaced, which
//! panel (if either) is visible, how wide it is, and where each action slot
//! sits inside it. The plan is pure data; painting and hit testing both
//! consume it so they can never disagree.

use crate::action::SwipeAction;
use crate::geometry::{Point, Rect};

/// Width of one action's content column.
pub const ACTION_CONTENT_WIDTH: f32 = 70.0;

/// Horizontal spacing between action slots in a panel.
pub const ACTION_SPACING: f32 = 8.0;

/// Maximum number of wrapped lines for an action title.
pub const TITLE_MAX_LINES: u32 = 3;

/// Inset subtracted from the offset magnitude for the trailing panel.
pub const RIGHT_PANEL_INSET: f32 = 40.0;

/// Inset subtracted from the offset magnitude for the leading panel.
pub const LEFT_PANEL_INSET: f32 = 10.0;

/// Which side of the row a panel is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSide {
    /// The leading panel, revealed by swiping right.
    Left,
    /// The trailing panel, revealed by swiping left.
    Right,
}

/// One action's slot inside a panel, in panel-local coordinates.
#[derive(Debug, Clone)]
pub struct ActionSlot<'a> {
    /// Position within the panel's action list.
    pub index: usize,
    /// The action occupying this slot.
    pub action: &'a SwipeAction,
    /// The slot's rectangle, relative to the panel's origin.
    pub rect: Rect,
}

/// The visible panel: its side, its current width, and its slots.
#[derive(Debug, Clone)]
pub struct PanelPlan<'a> {
    pub side: PanelSide,
    /// Current revealed width; grows as the drag progresses.
    pub width: f32,
    pub slots: Vec<ActionSlot<'a>>,
}

impl<'a> PanelPlan<'a> {
    /// Find the slot containing a panel-local point.
    pub fn slot_at(&self, point: Point) -> Option<&ActionSlot<'a>> {
        self.slots.iter().find(|slot| slot.rect.contains(point))
    }
}

/// The complete drawing description for a row at one offset.
#[derive(Debug, Clone)]
pub struct RowRenderPlan<'a> {
    /// How far the row content is displaced from its resting position.
    pub content_offset: f32,
    /// The visible panel, or `None` when the row is at rest.
    pub panel: Option<PanelPlan<'a>>,
}

/// Compute the render plan for a row.
///
/// A negative offset reveals the trailing panel at width
/// `|offset + 40|`; a positive offset reveals the leading panel at width
/// `|offset - 10|`; at zero neither panel is visible. Slots are laid out
/// left to right in list order, 70 units wide with 8 units between them,
/// spanning the full row height.
pub fn render_plan<'a>(
    offset: f32,
    left_actions: &'a [SwipeAction],
    right_actions: &'a [SwipeAction],
    row_height: f32,
) -> RowRenderPlan<'a> {
    let panel = if offset < 0.0 {
        Some(build_panel(
            PanelSide::Right,
            (offset + RIGHT_PANEL_INSET).abs(),
            right_actions,
            row_height,
        ))
    } else if offset > 0.0 {
        Some(build_panel(
            PanelSide::Left,
            (offset - LEFT_PANEL_INSET).abs(),
            left_actions,
            row_height,
        ))
    } else {
        None
    };

    RowRenderPlan {
        content_offset: offset,
        panel,
    }
}

fn build_panel(
    side: PanelSide,
    width: f32,
    actions: &[SwipeAction],
    row_height: f32,
) -> PanelPlan<'_> {
    let slots = actions
        .iter()
        .enumerate()
        .map(|(index, action)| ActionSlot {
            index,
            action,
            rect: Rect::new(
                index as f32 * (ACTION_CONTENT_WIDTH + ACTION_SPACING),
                0.0,
                ACTION_CONTENT_WIDTH,
                row_height,
            ),
        })
        .collect();

    PanelPlan { side, width, slots }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(n: usize) -> Vec<SwipeAction> {
        (0..n)
            .map(|i| SwipeAction::new(format!("Action {i}"), "gear", || {}))
            .collect()
    }

    #[test]
    fn test_resting_row_has_no_panel() {
        let right = actions(2);
        let plan = render_plan(0.0, &[], &right, 90.0);
        assert_eq!(plan.content_offset, 0.0);
        assert!(plan.panel.is_none());
    }

    #[test]
    fn test_negative_offset_reveals_trailing_panel() {
        let right = actions(2);
        let plan = render_plan(-120.0, &[], &right, 90.0);
        let panel = plan.panel.expect("panel");
        assert_eq!(panel.side, PanelSide::Right);
        assert_eq!(panel.width, 80.0);
        assert_eq!(panel.slots.len(), 2);
    }

    #[test]
    fn test_positive_offset_reveals_leading_panel() {
        let left = actions(1);
        let plan = render_plan(90.0, &left, &[], 90.0);
        let panel = plan.panel.expect("panel");
        assert_eq!(panel.side, PanelSide::Left);
        assert_eq!(panel.width, 80.0);
    }

    #[test]
    fn test_slot_layout() {
        let right = actions(3);
        let plan = render_plan(-200.0, &[], &right, 90.0);
        let panel = plan.panel.expect("panel");

        assert_eq!(panel.slots[0].rect, Rect::new(0.0, 0.0, 70.0, 90.0));
        assert_eq!(panel.slots[1].rect, Rect::new(78.0, 0.0, 70.0, 90.0));
        assert_eq!(panel.slots[2].rect, Rect::new(156.0, 0.0, 70.0, 90.0));
        assert_eq!(panel.slots[2].action.id(), right[2].id());
    }

    #[test]
    fn test_slot_hit_testing() {
        let right = actions(2);
        let plan = render_plan(-160.0, &[], &right, 90.0);
        let panel = plan.panel.expect("panel");

        let hit = panel.slot_at(Point::new(35.0, 45.0)).expect("slot 0");
        assert_eq!(hit.index, 0);
        let hit = panel.slot_at(Point::new(100.0, 45.0)).expect("slot 1");
        assert_eq!(hit.index, 1);
        // In the gap between slots.
        assert!(panel.slot_at(Point::new(74.0, 45.0)).is_none());
    }

    #[test]
    fn test_small_drag_can_exceed_offset_magnitude() {
        // A shallow trailing drag still shows a wider panel because of the
        // 40-unit inset.
        let right = actions(1);
        let plan = render_plan(-10.0, &[], &right, 90.0);
        assert_eq!(plan.panel.expect("panel").width, 30.0);
    }
}
