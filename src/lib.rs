//! Options-Row: segmentierte Auswahlzeile mit verschiebbarem Thumb.
//! Die Engine (Geometrie, Controller) wird re-exportiert, `ui` bindet sie an egui an.

pub mod ui;

pub use options_row_engine as engine;
pub use options_row_engine::{
    ControllerPhase, Dimensions, DragGestureHandler, Easing, LayoutDirection, LayoutInput,
    OptionItem, OptionsController, OptionsError, OptionsIntent, OptionsResult,
    OptionsRowOptions, Padding, TransitionSpec,
};
pub use ui::{OptionsRow, OptionsRowResponse};
