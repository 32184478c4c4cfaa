//! Core systems for separated-list.
//!
//! This crate provides the foundational pieces the adapters are built on:
//!
//! - **Signal/Slot System**: Type-safe change notification between adapters
//! - **Logging**: `tracing` target names for filtering adapter diagnostics
//!
//! # Signal/Slot Example
//!
//! ```
//! use separated_list_core::Signal;
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

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
