//! Rendering layer.
//!
//! Widgets never talk to the terminal: they push paint commands into a
//! [`painter::Painter`], and the host hands each finished frame to a
//! [`backend::Surface`].

pub mod backend;
pub mod geom;
pub mod painter;
pub mod style;
