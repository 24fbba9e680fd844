//! Schnittstelle zur Gestenquelle.
//!
//! Die Engine kennt nur diese drei Einstiegspunkte; wie eine horizontale
//! Ziehgeste erkannt wird, entscheidet der Host.

/// Empfänger einer horizontalen Ziehgeste.
///
/// Reihenfolge pro Geste: `drag_start`, beliebig viele `drag_move`,
/// genau ein `drag_end`.
pub trait DragGestureHandler {
    fn drag_start(&mut self);

    /// `delta` ist Start-relativ (positiv = weg vom Zeilenanfang).
    fn drag_move(&mut self, delta: f32);

    fn drag_end(&mut self);
}

/// Spielt eine aufgezeichnete Geste auf einem Handler ab.
pub fn replay_drag<H: DragGestureHandler + ?Sized>(handler: &mut H, deltas: &[f32]) {
    handler.drag_start();
    for delta in deltas {
        handler.drag_move(*delta);
    }
    handler.drag_end();
}
