//! Voice input: utterance classification and the background listening loop.
//!
//! The speech engine itself is external; it only has to implement
//! [`Recognizer`], a three-call surface (start, stop, blocking next
//! utterance). [`VoiceSession`] runs the engine on its own thread, classifies
//! each utterance as a weight reading, a command phrase or noise, and hands
//! the outcome to the caller-supplied [`VoiceHandler`]. The session starts
//! paused; [`VoiceControl::proceed`] begins listening.

mod classify;
mod session;

pub use classify::{classify, Classification, WeightRange};
pub use session::{Recognizer, VoiceControl, VoiceHandler, VoiceSession};

/// End the packing session.
pub const COMMAND_END: &str = "command_end";
/// Select the next sample.
pub const COMMAND_NEXT: &str = "command_next";
/// Select the previous sample.
pub const COMMAND_PREVIOUS: &str = "command_back";
