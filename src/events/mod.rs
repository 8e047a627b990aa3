pub mod pointer;
pub mod resize;

pub use pointer::{wire_pointermove, PointerWiring};
pub use resize::wire_window_resize;
