//! Trigon engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binary:
//! device/surface setup, the triangle renderer, the window loop, and logging.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod paint;
pub mod render;
