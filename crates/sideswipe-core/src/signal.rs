//! Signal/slot system for Sideswipe.
//!
//! A type-safe, Qt-inspired signal/slot mechanism. Signals are emitted by
//! objects when their state changes, and connected slots (closures) are
//! invoked in response. Slots run directly on the emitting thread; the
//! library itself is single-threaded and event-driven, so there is no
//! queued/cross-thread dispatch here.
//!
//! # Example
//!
//! ```
//! use sideswipe_core::Signal;
//!
//! let offset_changed = Signal::<f32>::new();
//!
//! let conn_id = offset_changed.connect(|offset| {
//!     println!("offset is now {offset}");
//! });
//!
//! offset_changed.emit(-160.0);
//! offset_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this id to disconnect a specific connection via
    /// [`Signal::disconnect`]. The id remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a
/// reference to the provided arguments, in connection order.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple for multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection id.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during
    /// initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Slots are cloned out of the connection table before invocation so a
    /// slot may connect or disconnect other slots without deadlocking.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "sideswipe_core::signal", "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<_> = {
            let connections = self.connections.lock();
            tracing::trace!(
                target: "sideswipe_core::signal",
                connection_count = connections.len(),
                "emitting signal"
            );
            connections.values().map(|c| c.slot.clone()).collect()
        };

        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(AtomicI32::new(0));
        let received_clone = received.clone();

        signal.connect(move |&value| {
            received_clone.store(value, Ordering::SeqCst);
        });

        signal.emit(42);
        assert_eq!(received.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicI32::new(0));
        let count_clone = count.clone();

        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // A second disconnect of the same id is a no-op.
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<i32>::new();
        let sum = Arc::new(AtomicI32::new(0));

        for _ in 0..3 {
            let sum_clone = sum.clone();
            signal.connect(move |&value| {
                sum_clone.fetch_add(value, Ordering::SeqCst);
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit(10);
        assert_eq!(sum.load(Ordering::SeqCst), 30);
    }

    #[test]
    fn test_blocked() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicI32::new(0));
        let count_clone = count.clone();

        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }
}
