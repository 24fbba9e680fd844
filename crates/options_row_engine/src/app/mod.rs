//! Application-Layer: Controller, Zustand, Intents und Gesten-Schnittstelle.

pub mod controller;
pub mod events;
pub mod gesture;
pub mod state;

pub use controller::OptionsController;
pub use events::OptionsIntent;
pub use gesture::{replay_drag, DragGestureHandler};
pub use state::{thumb_labels, ControllerPhase, ControllerState, OptionItem};
