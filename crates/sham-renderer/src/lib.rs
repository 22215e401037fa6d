//! Transcript renderers for the SHAM chat overlay.
//!
//! [`Transcript`] is the display list itself; [`ConsoleTranscript`] mirrors
//! it onto a terminal while the overlay is visible.

pub mod console;
pub mod transcript;

pub use console::ConsoleTranscript;
pub use transcript::Transcript;
