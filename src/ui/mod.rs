//! egui-Adapter: Gestenquelle, Widget-Zustand und Zeichnen.
//!
//! Aufgeteilt in:
//! - `input`: egui-Response → `OptionsIntent` (Gestenquelle)
//! - `row`: `OptionsRow`, hält Host-Zustand und Controller über Frames
//! - `paint`: Container, Track-Füllungen, Texte und Thumb

pub mod input;
mod paint;
pub mod row;

pub use input::{GestureSource, HitContext, PointerFrame};
pub use row::{OptionsRow, OptionsRowResponse};
