//! Options-Row Engine.
//! Geometrie und Zustandsautomat einer segmentierten Auswahlzeile,
//! unabhängig vom UI-Framework.

pub mod app;
pub mod core;
pub mod error;
pub mod shared;

pub use app::{
    replay_drag, thumb_labels, ControllerPhase, ControllerState, DragGestureHandler,
    OptionItem, OptionsController, OptionsIntent,
};
pub use core::{
    Dimensions, Easing, LayoutDirection, LayoutInput, OffsetTransition, Padding,
    TransitionSample, TransitionSpec,
};
pub use error::{OptionsError, OptionsResult};
pub use shared::OptionsRowOptions;
