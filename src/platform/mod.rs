//! Platform abstraction layer
//!
//! The core never polls devices itself. A platform supplies player commands
//! through [`InputSource`], drained once per frame.

pub mod input;

pub use input::{InputSource, ScriptedInput};
