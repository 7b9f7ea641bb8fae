//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait implemented by every UI element
//! in Sideswipe.
//!
//! # Key Types
//!
//! - [`Widget`] - Base trait for all UI elements
//! - [`crate::paint::PaintContext`] - Rendering context passed to [`Widget::paint`]
//! - [`crate::base::WidgetBase`] - Common implementation for widgets

use sideswipe_core::Object;

use crate::base::WidgetBase;
use crate::events::WidgetEvent;
use crate::geometry::{Rect, Size, SizeHint, SizePolicyPair};
use crate::paint::PaintContext;

/// The core trait for all widgets.
///
/// `Widget` extends [`Object`] with geometry, layout negotiation, painting,
/// and event handling. Most methods have default implementations that
/// delegate to the widget's [`WidgetBase`].
///
/// # Example
///
/// ```ignore
/// use sideswipe::{PaintContext, SizeHint, Widget, WidgetBase};
/// use sideswipe_core::{Object, ObjectId};
///
/// struct ColorBox {
///     base: WidgetBase,
/// }
///
/// impl Object for ColorBox {
///     fn object_id(&self) -> ObjectId {
///         self.base.object_id()
///     }
/// }
///
/// impl Widget for ColorBox {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::from_dimensions(100.0, 100.0)
///     }
///
///     fn paint(&self, ctx: &mut PaintContext<'_>) {
///         // draw through ctx.painter()
///     }
/// }
/// ```
pub trait Widget: Object + Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    ///
    /// This tells layout managers what size the widget prefers. The actual
    /// size assigned may differ based on the layout and size policy.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    ///
    /// The painter is already translated so that (0, 0) is the top-left
    /// corner of the widget. Use `ctx.rect()` to get the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event. Accept the event and return `true` if handled.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Set the widget's size.
    fn set_size(&mut self, size: Size) {
        self.widget_base_mut().set_size(size);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Get the widget's size policy.
    fn size_policy(&self) -> SizePolicyPair {
        self.widget_base().size_policy()
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set the widget's visibility.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set the widget's enabled state.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Request a repaint of this widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }
}
