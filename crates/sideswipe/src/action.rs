//! Action descriptors for swipe panels.
//!
//! A [`SwipeAction`] describes one button revealed behind a row: its label,
//! icon glyph, colors, and the callback to run when the user taps it. The
//! descriptor is immutable once built; to change an action, replace it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::paint::Color;

static NEXT_ACTION_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an action, independent of its position in a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u64);

impl ActionId {
    fn next() -> Self {
        Self(NEXT_ACTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value, e.g. for logging.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// An immutable description of one swipe action.
///
/// Clones share the same [`ActionId`] and callback, so a cloned descriptor
/// still refers to the same logical action.
#[derive(Clone)]
pub struct SwipeAction {
    id: ActionId,
    title: String,
    icon: String,
    background: Color,
    foreground: Color,
    corner_radius: f32,
    on_invoke: Arc<dyn Fn() + Send + Sync>,
}

impl SwipeAction {
    /// Create an action with the given title, icon glyph, and callback.
    ///
    /// Colors default to a white foreground on a black background with
    /// square corners; use the `with_*` builders to customize.
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        on_invoke: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: ActionId::next(),
            title: title.into(),
            icon: icon.into(),
            background: Color::BLACK,
            foreground: Color::WHITE,
            corner_radius: 0.0,
            on_invoke: Arc::new(on_invoke),
        }
    }

    /// Set the fill color of the action's button.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the color of the title and icon.
    pub fn with_foreground(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self
    }

    /// Set the corner radius of the action's button. Clamped to be
    /// non-negative.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius.max(0.0);
        self
    }

    /// The action's stable identity.
    #[inline]
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// The title shown under the icon.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The icon glyph shown above the title.
    #[inline]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The fill color of the action's button.
    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// The color of the title and icon.
    #[inline]
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// The corner radius of the action's button.
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Run the action's callback.
    ///
    /// Panics from the callback propagate to the caller.
    pub fn invoke(&self) {
        (self.on_invoke)();
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("corner_radius", &self.corner_radius)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicI32;

    #[test]
    fn test_ids_are_unique() {
        let a = SwipeAction::new("Archive", "archivebox", || {});
        let b = SwipeAction::new("Archive", "archivebox", || {});
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_shares_identity_and_callback() {
        let count = Arc::new(AtomicI32::new(0));
        let counter = Arc::clone(&count);
        let action = SwipeAction::new("Delete", "trash", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let copy = action.clone();

        assert_eq!(action.id(), copy.id());
        action.invoke();
        copy.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_builders() {
        let action = SwipeAction::new("Flag", "flag", || {})
            .with_background(Color::from_rgb8(255, 149, 0))
            .with_foreground(Color::WHITE)
            .with_corner_radius(-2.0);
        assert_eq!(action.background(), Color::from_rgb8(255, 149, 0));
        assert_eq!(action.corner_radius(), 0.0);
        assert_eq!(action.title(), "Flag");
        assert_eq!(action.icon(), "flag");
    }
}
