//!
//! JSON message protocol spoken with the embedding application shell.
//!

mod message;

pub use message::*;
