//! Platform abstraction layer
//!
//! Hosts feed pointer/touch events into an `InputManager`; the update pass
//! only ever asks whether a touch is active.

pub mod input;

pub use input::{InputManager, PointerState, Touch};
