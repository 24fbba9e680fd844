/// Eingaben aus UI/System an den Controller.
/// Intents enthalten keine Mutationslogik; der Controller setzt sie um.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionsIntent {
    /// Track-Zelle angetippt
    SlotTapped { index: usize },
    /// Ziehgeste auf dem Thumb begonnen
    DragStarted,
    /// Thumb um Delta verschoben (Start-relativ, Pixel)
    DragMoved { delta: f32 },
    /// Ziehgeste beendet
    DragEnded,
    /// Frame-Takt des Hosts (Sekunden)
    FrameTick { now: f64 },
}
