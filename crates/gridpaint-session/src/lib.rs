#![forbid(unsafe_code)]

//! Session layer: the command history log and the line interpreter.

pub mod command;
pub mod history;

pub use command::{Outcome, Reply, interpret};
pub use history::History;
