//! Swipeable row widget implementation.
//!
//! This module provides [`SwipeableRow`], a list-row widget that reveals
//! action panels behind its content when the user drags it horizontally.
//!
//! # Example
//!
//! ```ignore
//! use sideswipe::{Color, SwipeAction, SwipeableRow};
//!
//! let delete = SwipeAction::new("Delete", "trash", || println!("deleted"))
//!     .with_background(Color::from_rgb8(215, 38, 56));
//!
//! let mut row = SwipeableRow::new(
//!     |ctx| { /* paint the row content */ },
//!     vec![delete],
//! );
//!
//! row.panel_opened.connect(|&side| {
//!     println!("opened {side:?} panel");
//! });
//! ```

use sideswipe_core::{Object, ObjectId, Signal};

use crate::action::{ActionId, SwipeAction};
use crate::animation::OffsetAnimation;
use crate::base::WidgetBase;
use crate::events::{
    DragGestureEvent, GestureState, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
use crate::geometry::{Point, SizeHint, SizePolicy, SizePolicyPair};
use crate::gesture::{DragEndOutcome, DragTracker};
use crate::paint::{PaintContext, RoundedRect, TextStyle};
use crate::plan::{
    ACTION_CONTENT_WIDTH, PanelSide, RowRenderPlan, TITLE_MAX_LINES, render_plan,
};
use crate::traits::Widget;

/// Width one action contributes to a settled panel.
pub const ACTION_SLOT_WIDTH: f32 = 80.0;

/// Drag translation magnitude required to open a panel on release.
pub const OPEN_THRESHOLD: f32 = 50.0;

/// Maximum number of actions a settled panel accounts for.
pub const MAX_VISIBLE_ACTIONS: usize = 4;

/// Default row height.
pub const DEFAULT_ROW_HEIGHT: f32 = 90.0;

/// Vertical gap between an action's icon and its title.
const ICON_TITLE_GAP: f32 = 6.0;

/// A row that slides horizontally to reveal action panels.
///
/// The row tracks a single horizontal offset. During a drag the offset
/// follows the finger one-to-one; on release it settles to a resting
/// position determined by the drag direction and the number of actions on
/// that side, or back to zero when the drag was too shallow.
///
/// # Signals
///
/// - `offset_changed(f32)`: Emitted whenever the offset actually changes
/// - `panel_opened(PanelSide)`: Emitted when a release commits to opening a panel
/// - `panel_closed(())`: Emitted when a release commits to closing
/// - `action_invoked(ActionId)`: Emitted after a tapped action's callback ran
pub struct SwipeableRow {
    /// Widget base.
    base: WidgetBase,

    /// Paints the row's foreground content.
    content: Box<dyn Fn(&mut PaintContext<'_>) + Send + Sync>,

    /// Actions revealed by swiping right.
    left_actions: Vec<SwipeAction>,

    /// Actions revealed by swiping left.
    right_actions: Vec<SwipeAction>,

    /// Preferred row height.
    frame_height: f32,

    /// Current horizontal displacement of the content.
    offset: f32,

    /// Whether a drag is in progress.
    dragging: bool,

    /// Most recent drag translation, for cancellation.
    last_translation: Option<f32>,

    /// Settle animation toward the resting offset.
    animation: OffsetAnimation,

    /// Classifies raw mouse input into taps and drags.
    tracker: DragTracker,

    /// Signal emitted when the offset changes.
    pub offset_changed: Signal<f32>,

    /// Signal emitted when a release commits to opening a panel.
    pub panel_opened: Signal<PanelSide>,

    /// Signal emitted when a release commits to closing.
    pub panel_closed: Signal<()>,

    /// Signal emitted after an action's callback ran.
    pub action_invoked: Signal<ActionId>,
}

impl SwipeableRow {
    /// Create a row with the given content painter and trailing actions.
    pub fn new(
        content: impl Fn(&mut PaintContext<'_>) + Send + Sync + 'static,
        right_actions: Vec<SwipeAction>,
    ) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_size_policy(SizePolicyPair::new(
            SizePolicy::Expanding,
            SizePolicy::Fixed,
        ));

        Self {
            base,
            content: Box::new(content),
            left_actions: Vec::new(),
            right_actions,
            frame_height: DEFAULT_ROW_HEIGHT,
            offset: 0.0,
            dragging: false,
            last_translation: None,
            animation: OffsetAnimation::new(),
            tracker: DragTracker::new(),
            offset_changed: Signal::new(),
            panel_opened: Signal::new(),
            panel_closed: Signal::new(),
            action_invoked: Signal::new(),
        }
    }

    /// Set the leading actions using builder pattern.
    pub fn with_left_actions(mut self, actions: Vec<SwipeAction>) -> Self {
        self.left_actions = actions;
        self
    }

    /// Set the row height using builder pattern.
    pub fn with_frame_height(mut self, height: f32) -> Self {
        self.frame_height = height.max(0.0);
        self
    }

    /// Actions revealed by swiping right.
    pub fn left_actions(&self) -> &[SwipeAction] {
        &self.left_actions
    }

    /// Actions revealed by swiping left.
    pub fn right_actions(&self) -> &[SwipeAction] {
        &self.right_actions
    }

    /// The preferred row height.
    #[inline]
    pub fn frame_height(&self) -> f32 {
        self.frame_height
    }

    /// The current horizontal displacement of the content.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The offset the row is heading toward: the settle target while an
    /// animation runs, otherwise the current offset.
    pub fn target_offset(&self) -> f32 {
        if self.animation.is_running() {
            self.animation.target()
        } else {
            self.offset
        }
    }

    /// The resting offset a drag ending at `translation` settles to.
    ///
    /// A pull past the threshold opens the panel on that side, sized for up
    /// to four actions; anything shallower closes the row.
    pub fn resting_offset(&self, translation: f32) -> f32 {
        if translation <= -OPEN_THRESHOLD {
            self.right_actions.len().min(MAX_VISIBLE_ACTIONS) as f32 * -ACTION_SLOT_WIDTH
        } else if translation > OPEN_THRESHOLD {
            self.left_actions.len().min(MAX_VISIBLE_ACTIONS) as f32 * ACTION_SLOT_WIDTH
        } else {
            0.0
        }
    }

    /// Compute the drawing description for the current offset.
    pub fn render_plan(&self) -> RowRenderPlan<'_> {
        render_plan(
            self.offset,
            &self.left_actions,
            &self.right_actions,
            self.base.rect().height(),
        )
    }

    /// Snap the row back to rest immediately, without animating.
    ///
    /// Called when the row leaves the view so it reappears closed.
    pub fn reset(&mut self) {
        tracing::debug!(target: "sideswipe::row", "reset to rest");
        self.animation.stop();
        self.tracker.cancel();
        self.dragging = false;
        self.last_translation = None;
        self.set_offset(0.0);
    }

    /// Advance the settle animation by one frame.
    ///
    /// Returns `true` while the animation is still running and another frame
    /// is needed.
    pub fn advance_animation(&mut self) -> bool {
        if let Some(value) = self.animation.update() {
            self.set_offset(value);
        }
        self.animation.is_running()
    }

    /// Complete any running settle animation immediately.
    pub fn finish_animation(&mut self) {
        if let Some(value) = self.animation.finish() {
            self.set_offset(value);
        }
    }

    fn set_offset(&mut self, value: f32) {
        if (self.offset - value).abs() > f32::EPSILON {
            self.offset = value;
            self.base.update();
            self.offset_changed.emit(value);
        }
    }

    fn animate_to(&mut self, target: f32) {
        if !self.animation.start(self.offset, target) {
            // Already at the target.
            self.set_offset(target);
        }
    }

    /// Commit the drag that ended at `translation` to a resting position.
    fn settle(&mut self, translation: f32) {
        let target = self.resting_offset(translation);
        tracing::debug!(
            target: "sideswipe::row",
            translation,
            resting = target,
            "drag ended"
        );
        self.animate_to(target);

        if target < 0.0 {
            self.panel_opened.emit(PanelSide::Right);
        } else if target > 0.0 {
            self.panel_opened.emit(PanelSide::Left);
        } else {
            self.panel_closed.emit(());
        }
    }

    fn handle_drag(&mut self, event: &DragGestureEvent) -> bool {
        match event.state {
            GestureState::Started => {
                tracing::trace!(target: "sideswipe::row", "drag started");
                self.animation.stop();
                self.last_translation = None;
                true
            }
            GestureState::Updated => {
                self.dragging = true;
                let tx = event.translation.x;
                tracing::trace!(target: "sideswipe::row", translation = tx, "drag update");
                self.last_translation = Some(tx);
                // A zero translation sample carries no direction; keep the
                // current offset.
                if tx != 0.0 {
                    self.set_offset(tx);
                }
                true
            }
            GestureState::Ended => {
                self.dragging = false;
                self.settle(event.translation.x);
                self.last_translation = None;
                true
            }
            GestureState::Cancelled => {
                self.dragging = false;
                // Treat a cancellation like a release at the last known
                // translation; with no samples the row just closes.
                let translation = self.last_translation.take().unwrap_or(0.0);
                self.settle(translation);
                true
            }
        }
    }

    fn handle_tap(&mut self, pos: Point) -> bool {
        let row_width = self.base.rect().width();
        let plan = self.render_plan();
        let Some(panel) = plan.panel else {
            return false;
        };

        // Panels are anchored to the edge they slide out from.
        let panel_x = match panel.side {
            PanelSide::Left => 0.0,
            PanelSide::Right => row_width - panel.width,
        };
        let local = Point::new(pos.x - panel_x, pos.y);
        if local.x < 0.0 || local.x >= panel.width {
            return false;
        }

        let Some(slot) = panel.slot_at(local) else {
            return false;
        };
        let action = slot.action;
        let id = action.id();
        tracing::debug!(
            target: "sideswipe::row",
            action = %id,
            title = action.title(),
            "action tapped"
        );
        action.invoke();
        self.action_invoked.emit(id);
        true
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if let Some(drag) = self.tracker.begin(event.local_pos) {
            self.handle_drag(&drag);
        }
        true
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if let Some(drag) = self.tracker.move_to(event.local_pos) {
            self.handle_drag(&drag)
        } else {
            false
        }
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        match self.tracker.end(event.local_pos) {
            Some(DragEndOutcome::Tap(tap)) => {
                self.handle_tap(tap.local_pos);
                true
            }
            Some(DragEndOutcome::Drag(drag)) => self.handle_drag(&drag),
            None => false,
        }
    }

    fn paint_panel(&self, ctx: &mut PaintContext<'_>, plan: &RowRenderPlan<'_>) {
        let Some(panel) = &plan.panel else {
            return;
        };
        let panel_x = match panel.side {
            PanelSide::Left => 0.0,
            PanelSide::Right => ctx.width() - panel.width,
        };

        for slot in &panel.slots {
            let rect = slot.rect.translated(panel_x, 0.0);
            let action = slot.action;

            let button = RoundedRect::new(rect, action.corner_radius());
            ctx.painter().fill_rounded_rect(button, action.background());

            // Icon centered above the title.
            let center_x = rect.origin.x + rect.width() / 2.0;
            let mid_y = rect.origin.y + rect.height() / 2.0;
            ctx.painter().draw_glyph(
                action.icon(),
                Point::new(center_x, mid_y - ICON_TITLE_GAP),
                action.foreground(),
            );
            let style = TextStyle {
                color: action.foreground(),
                max_width: ACTION_CONTENT_WIDTH,
                max_lines: TITLE_MAX_LINES,
            };
            ctx.painter().draw_text(
                action.title(),
                Point::new(rect.origin.x, mid_y + ICON_TITLE_GAP),
                &style,
            );
        }
    }
}

impl Object for SwipeableRow {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for SwipeableRow {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(320.0, self.frame_height)
            .with_minimum_dimensions(ACTION_CONTENT_WIDTH, self.frame_height)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let plan = self.render_plan();
        self.paint_panel(ctx, &plan);
        // Content slides over the panel.
        let content = &self.content;
        ctx.with_offset(Point::new(plan.content_offset, 0.0), |shifted| {
            content(shifted);
        });
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => {
                let e = *e;
                if self.handle_mouse_press(&e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::MouseMove(e) => {
                let e = *e;
                if self.handle_mouse_move(&e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::MouseRelease(e) => {
                let e = *e;
                if self.handle_mouse_release(&e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::DragGesture(e) => {
                let e = *e;
                if self.handle_drag(&e) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::TapGesture(e) => {
                let pos = e.local_pos;
                if self.handle_tap(pos) {
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::Hide(_) => {
                self.reset();
                event.accept();
                return true;
            }
            _ => {}
        }
        false
    }
}

// Ensure SwipeableRow is Send + Sync
static_assertions::assert_impl_all!(SwipeableRow: Send, Sync);
