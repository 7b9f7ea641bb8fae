//! Core systems for the Sideswipe widget library.
//!
//! This crate provides the foundational components shared by Sideswipe
//! widgets:
//!
//! - **Object Model**: parent-child ownership and naming via a global
//!   registry
//! - **Signal/Slot System**: type-safe change notification
//!
//! # Signal/Slot Example
//!
//! ```
//! use sideswipe_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod object;
pub mod signal;

pub use object::{
    Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult,
    SharedObjectRegistry, global_registry, init_global_registry,
};
pub use signal::{ConnectionId, Signal};
