//! Geteilte Konfiguration zwischen Engine und UI-Adapter.

pub mod options;

pub use options::OptionsRowOptions;
pub use options::{ACTIVE_TRACK_MIN_WIDTH, CONTAINER_HEIGHT, CONTENT_PADDING};
