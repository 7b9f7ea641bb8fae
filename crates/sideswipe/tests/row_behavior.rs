//! End-to-end behavior tests for the swipeable row.
//!
//! These drive the row through its public event interface the way a host
//! would: gesture events in, signals and render plans out.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use sideswipe::{
    Color, DragGestureEvent, GestureState, HideEvent, PaintContext, Painter, PanelSide, Point,
    Rect, RoundedRect, Stroke, SwipeAction, SwipeableRow, TextStyle, Widget, WidgetEvent,
};
use sideswipe_core::init_global_registry;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    init_global_registry();
}

fn make_row(left: usize, right: usize) -> SwipeableRow {
    let left: Vec<_> = (0..left)
        .map(|i| SwipeAction::new(format!("Left {i}"), "tray", || {}))
        .collect();
    let right: Vec<_> = (0..right)
        .map(|i| {
            SwipeAction::new(format!("Right {i}"), "trash", || {})
                .with_background(Color::from_rgb8(215, 38, 56))
        })
        .collect();
    let mut row = SwipeableRow::new(|_| {}, right).with_left_actions(left);
    row.set_geometry(Rect::new(0.0, 0.0, 375.0, 90.0));
    row
}

fn send_drag(row: &mut SwipeableRow, translation: f32, state: GestureState) {
    let mut event = WidgetEvent::DragGesture(DragGestureEvent::new(
        Point::new(translation, 0.0),
        Point::ZERO,
        state,
    ));
    assert!(row.event(&mut event));
}

fn swipe(row: &mut SwipeableRow, translation: f32) {
    send_drag(row, 0.0, GestureState::Started);
    send_drag(row, translation, GestureState::Updated);
    send_drag(row, translation, GestureState::Ended);
    row.finish_animation();
}

#[test]
fn trailing_swipe_opens_right_panel() {
    setup();
    let mut row = make_row(0, 2);

    swipe(&mut row, -70.0);

    assert_eq!(row.offset(), -160.0);
    let plan = row.render_plan();
    let panel = plan.panel.expect("panel");
    assert_eq!(panel.side, PanelSide::Right);
    assert_eq!(panel.width, 120.0);
    assert_eq!(panel.slots.len(), 2);
}

#[test]
fn leading_swipe_opens_left_panel() {
    setup();
    let mut row = make_row(3, 0);

    swipe(&mut row, 60.0);

    assert_eq!(row.offset(), 240.0);
    let panel = row.render_plan().panel.expect("panel");
    assert_eq!(panel.side, PanelSide::Left);
    assert_eq!(panel.width, 230.0);
    assert_eq!(panel.slots.len(), 3);
}

#[test]
fn settle_width_caps_at_four_actions() {
    setup();
    let mut row = make_row(0, 6);

    swipe(&mut row, -200.0);

    assert_eq!(row.offset(), -320.0);
    // All actions still get slots; the cap only bounds the resting offset.
    assert_eq!(row.render_plan().panel.expect("panel").slots.len(), 6);
}

#[test]
fn shallow_swipe_closes_again() {
    setup();
    let mut row = make_row(0, 2);

    swipe(&mut row, -70.0);
    assert_eq!(row.offset(), -160.0);

    swipe(&mut row, -20.0);
    assert_eq!(row.offset(), 0.0);
    assert!(row.render_plan().panel.is_none());
}

#[test]
fn repeated_release_settles_to_same_offset() {
    setup();
    let mut row = make_row(0, 2);

    swipe(&mut row, -70.0);
    send_drag(&mut row, -70.0, GestureState::Ended);
    row.finish_animation();
    assert_eq!(row.offset(), -160.0);
}

#[test]
fn drag_updates_are_applied_synchronously() {
    setup();
    let mut row = make_row(0, 2);
    let seen = Arc::new(AtomicI32::new(0));
    let probe = Arc::clone(&seen);
    row.offset_changed.connect(move |&offset| {
        probe.store(offset as i32, Ordering::SeqCst);
    });

    send_drag(&mut row, 0.0, GestureState::Started);
    for tx in [-10.0, -25.0, -40.0, -55.0] {
        send_drag(&mut row, tx, GestureState::Updated);
        // Each sample lands before the next one is delivered.
        assert_eq!(row.offset(), tx);
        assert_eq!(seen.load(Ordering::SeqCst), tx as i32);
    }
}

#[test]
fn leaving_the_view_resets_immediately() {
    setup();
    let mut row = make_row(0, 2);

    // Mid-drag, nowhere near settled.
    send_drag(&mut row, 0.0, GestureState::Started);
    send_drag(&mut row, -120.0, GestureState::Updated);
    assert_eq!(row.offset(), -120.0);

    let mut hide = WidgetEvent::Hide(HideEvent::new());
    assert!(row.event(&mut hide));
    assert_eq!(row.offset(), 0.0);
    assert!(!row.is_dragging());
    // Nothing left to animate.
    assert!(!row.advance_animation());
}

#[test]
fn tapped_action_runs_its_callback() {
    setup();
    let archived = Arc::new(AtomicI32::new(0));
    let probe = Arc::clone(&archived);
    let archive = SwipeAction::new("Archive", "archivebox", move || {
        probe.fetch_add(1, Ordering::SeqCst);
    });
    let delete = SwipeAction::new("Delete", "trash", || {});

    let mut row = SwipeableRow::new(|_| {}, vec![archive, delete]);
    row.set_geometry(Rect::new(0.0, 0.0, 375.0, 90.0));
    swipe(&mut row, -170.0);
    assert_eq!(row.offset(), -160.0);

    // Panel width 120, anchored at the trailing edge of the 375-wide row;
    // the second slot spans panel-local x 78..148.
    let mut tap = WidgetEvent::TapGesture(sideswipe::TapGestureEvent::new(Point::new(
        375.0 - 120.0 + 30.0,
        45.0,
    )));
    assert!(row.event(&mut tap));
    assert!(tap.is_accepted());
    assert_eq!(archived.load(Ordering::SeqCst), 1);
}

/// Records painter calls so a test can assert on the draw sequence.
#[derive(Default)]
struct RecordingPainter {
    fills: Vec<(Rect, Color)>,
    glyphs: Vec<String>,
    texts: Vec<String>,
    offsets: Vec<Point>,
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }

    fn fill_rounded_rect(&mut self, rrect: RoundedRect, color: Color) {
        self.fills.push((rrect.rect, color));
    }

    fn stroke_rounded_rect(&mut self, _rrect: RoundedRect, _stroke: &Stroke) {}

    fn draw_text(&mut self, text: &str, _origin: Point, _style: &TextStyle) {
        self.texts.push(text.to_string());
    }

    fn draw_glyph(&mut self, glyph: &str, _origin: Point, _color: Color) {
        self.glyphs.push(glyph.to_string());
    }

    fn push_offset(&mut self, offset: Point) {
        self.offsets.push(offset);
    }

    fn pop_offset(&mut self) {}
}

#[test]
fn painting_an_open_row_draws_panel_and_shifted_content() {
    setup();
    let mut row = make_row(0, 2);
    swipe(&mut row, -70.0);

    let mut painter = RecordingPainter::default();
    let mut ctx = PaintContext::new(&mut painter, Rect::new(0.0, 0.0, 375.0, 90.0));
    row.paint(&mut ctx);

    // One button fill per action, in list order.
    assert_eq!(painter.fills.len(), 2);
    assert_eq!(painter.glyphs, vec!["trash", "trash"]);
    assert_eq!(painter.texts, vec!["Right 0", "Right 1"]);
    // Content was painted displaced by the offset.
    assert_eq!(painter.offsets, vec![Point::new(-160.0, 0.0)]);
}

#[test]
fn painting_a_resting_row_draws_no_panel() {
    setup();
    let row = make_row(2, 2);

    let mut painter = RecordingPainter::default();
    let mut ctx = PaintContext::new(&mut painter, Rect::new(0.0, 0.0, 375.0, 90.0));
    row.paint(&mut ctx);

    assert!(painter.fills.is_empty());
    assert!(painter.glyphs.is_empty());
    assert_eq!(painter.offsets, vec![Point::ZERO]);
}
