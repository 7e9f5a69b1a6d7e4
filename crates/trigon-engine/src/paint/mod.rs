//! Color types shared by renderers and apps.

mod color;

pub use color::ColorRgba;
