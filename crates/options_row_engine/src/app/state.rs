//! Zustandsdaten des Controllers und Options-Deskriptoren.

/// Eine auswählbare Option der Zeile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    /// Text auf dem Thumb, solange die Option gewählt ist
    pub thumb_text: String,
    /// Text in der Track-Zelle
    pub track_text: String,
}

impl OptionItem {
    /// Option mit identischem Thumb- und Track-Text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            thumb_text: text.clone(),
            track_text: text,
        }
    }

    pub fn with_track_text(mut self, track_text: impl Into<String>) -> Self {
        self.track_text = track_text.into();
        self
    }
}

/// Liefert die Thumb-Labels einer Optionsliste in Reihenfolge.
pub fn thumb_labels(items: &[OptionItem]) -> Vec<String> {
    items.iter().map(|item| item.thumb_text.clone()).collect()
}

/// Konzeptueller Zustand des Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    /// Offset liegt auf einer Sektion, keine Geste aktiv
    Committed,
    /// Offset folgt frei dem Zeiger
    Dragging,
    /// Ein Übergang zum Ziel-Offset läuft
    Settling,
}

/// Veränderlicher Zustand einer Optionszeile
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    /// Gewählter Index in `[0, option_count - 1]`
    pub selected_index: usize,
    /// Offset der Thumb-Startkante in Pixeln
    pub offset_x: f32,
    /// Thumb wird gerade gezogen
    pub is_dragging: bool,
    /// Zwischengespeichertes Label des gewählten Index
    pub thumb_label: String,
}
