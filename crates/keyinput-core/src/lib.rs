//! Key Input Core Library
//!
//! This crate provides platform-independent handling of key-down and mouse
//! events: a managed text input accumulator with special-key handlers and a
//! regex acceptance filter, and a mouse tracker with current/previous
//! positions. Hosts adapt their native events through the [`KeyboardEvent`]
//! and [`MouseEvent`] traits.

pub mod accumulator;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod key;
pub mod mouse;
pub mod wasm;

// Re-export commonly used types for convenience
pub use accumulator::{KeyInputAccumulator, KeyInputOptions, KeyOutcome, SpecialKeyAction};
pub use dispatch::SerialDispatcher;
pub use error::{KeyInputError, KeyInputResult};
pub use filter::{AcceptFilter, DEFAULT_ACCEPT_PATTERN};
pub use key::{KeyEvent, KeyboardEvent};
pub use mouse::{
    MouseEvent, MouseEventKind, MouseOptions, MousePosition, MouseTracker, PointerEvent,
};

// Re-export serialisable types when wasm feature is enabled
#[cfg(feature = "wasm")]
pub use wasm::{handle_key_json, KeyInputConfig, WasmKeyEvent, WasmKeyOutcome};
