//! Core-Geometrie: Layout-Richtung, Padding, Dimensionen und Übergänge.

pub mod dimensions;
pub mod layout;
pub mod transition;

pub use dimensions::{Dimensions, LayoutInput};
pub use layout::{LayoutDirection, Padding};
pub use transition::{Easing, OffsetTransition, TransitionSample, TransitionSpec};
