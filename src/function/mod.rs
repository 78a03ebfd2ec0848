//! Lambda handler for incoming orders

pub mod handler;

pub use handler::{handler, process_order};
