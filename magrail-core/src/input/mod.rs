//! Manual button inputs
//!
//! Raw pin samples are filtered by a [`Debouncer`] and exposed as press
//! and release edges that last exactly one poll.

pub mod buttons;
pub mod debounce;

pub use buttons::Buttons;
pub use debounce::{DebouncedInput, Debouncer};
