//! Prompt and input module
//!
//! [`resolve`] holds the default/validation rules for a single answer and
//! does no I/O. [`Prompter`] drives a terminal (or any reader/writer pair)
//! and applies those rules to each line the user types.

pub mod resolve;
pub mod terminal;

pub use resolve::*;
pub use terminal::*;
