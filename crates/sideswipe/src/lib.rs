//! Sideswipe: a swipe-to-reveal row widget.
//!
//! Sideswipe provides [`SwipeableRow`], a list-row widget whose content
//! slides horizontally to reveal panels of actions behind it, in the style
//! of mail and messaging apps. The row tracks a drag one-to-one, settles to
//! a per-side resting position on release, and exposes signals for every
//! state change.
//!
//! # Architecture
//!
//! - [`SwipeAction`] describes one revealed button: title, icon glyph,
//!   colors, and the callback to run when it is tapped.
//! - [`SwipeableRow`] owns the gesture state machine and the current offset.
//! - [`render_plan`] turns an offset plus the action lists into pure data
//!   ([`RowRenderPlan`]) that painting and hit testing both consume.
//! - The host supplies the actual drawing by implementing [`Painter`].
//!
//! # Example
//!
//! ```
//! use sideswipe::{Color, SwipeAction, SwipeableRow};
//!
//! sideswipe_core::init_global_registry();
//!
//! let delete = SwipeAction::new("Delete", "trash", || println!("deleted"))
//!     .with_background(Color::from_rgb8(215, 38, 56));
//!
//! let row = SwipeableRow::new(|_ctx| { /* paint the row content */ }, vec![delete]);
//! assert_eq!(row.offset(), 0.0);
//! ```

pub mod action;
pub mod animation;
pub mod base;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod paint;
pub mod plan;
pub mod platform;
pub mod row;
pub mod traits;

pub use action::{ActionId, SwipeAction};
pub use animation::{DEFAULT_SETTLE_DURATION, Easing, OffsetAnimation, ease, lerp_eased};
pub use base::WidgetBase;
pub use events::{
    DragGestureEvent, EventBase, GestureState, HideEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, MouseReleaseEvent, ShowEvent, TapGestureEvent, WidgetEvent,
};
pub use geometry::{Point, Rect, Size, SizeHint, SizePolicy, SizePolicyPair};
pub use gesture::{DEFAULT_TAP_SLOP, DragEndOutcome, DragTracker};
pub use paint::{Color, PaintContext, Painter, RoundedRect, Stroke, TextStyle};
pub use plan::{
    ACTION_CONTENT_WIDTH, ACTION_SPACING, ActionSlot, LEFT_PANEL_INSET, PanelPlan, PanelSide,
    RIGHT_PANEL_INSET, RowRenderPlan, TITLE_MAX_LINES, render_plan,
};
pub use platform::gesture_state_from_touch_phase;
pub use row::{
    ACTION_SLOT_WIDTH, DEFAULT_ROW_HEIGHT, MAX_VISIBLE_ACTIONS, OPEN_THRESHOLD, SwipeableRow,
};
pub use traits::Widget;
