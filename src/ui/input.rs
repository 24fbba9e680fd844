//! Gestenquelle: egui-Zeigerzustand → `OptionsIntent`.
//!
//! Gezogen wird nur, wenn der Drag auf dem Thumb beginnt; Klicks auf
//! Track-Zellen werden zu `SlotTapped`. Ist die Zeile nicht verschiebbar,
//! entstehen überhaupt keine Drag-Intents.

use options_row_engine::{Dimensions, LayoutDirection, OptionsController, OptionsIntent};

/// Zeigerzustand eines Frames, aus der egui-Response gelesen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    /// Primärer Drag hat in diesem Frame begonnen
    pub drag_started: bool,
    /// Horizontale Zeigerbewegung während eines Drags (Screen-Punkte)
    pub drag_delta_x: f32,
    /// Primärer Drag endete in diesem Frame
    pub drag_stopped: bool,
    /// X-Position des Drückens, das den Drag ausgelöst hat
    pub press_origin_x: Option<f32>,
    /// X-Position eines Klicks in diesem Frame
    pub clicked_x: Option<f32>,
}

impl PointerFrame {
    /// Liest den Zeigerzustand aus der Response der Zeile.
    pub fn from_response(response: &egui::Response) -> Self {
        let primary = egui::PointerButton::Primary;
        // press_origin() liefert die exakte Druckposition vor der Drag-Schwelle.
        let press_origin_x = response
            .ctx
            .input(|i| i.pointer.press_origin())
            .map(|pos| pos.x);

        Self {
            drag_started: response.drag_started_by(primary),
            drag_delta_x: if response.dragged_by(primary) {
                response.drag_delta().x
            } else {
                0.0
            },
            drag_stopped: response.drag_stopped_by(primary),
            press_origin_x,
            clicked_x: if response.clicked() {
                response.interact_pointer_pos().map(|pos| pos.x)
            } else {
                None
            },
        }
    }
}

/// Bündelt die Geometrie für Trefferprüfungen eines Frames.
#[derive(Debug, Clone, Copy)]
pub struct HitContext<'a> {
    /// Linke Kante der Zeile (Screen)
    pub min_x: f32,
    /// Rechte Kante der Zeile (Screen)
    pub max_x: f32,
    pub dimensions: &'a Dimensions,
    /// Aktueller Thumb-Offset (Start-relativ)
    pub offset_x: f32,
}

impl<'a> HitContext<'a> {
    pub fn new(rect: egui::Rect, controller: &'a OptionsController) -> Self {
        Self {
            min_x: rect.min.x,
            max_x: rect.max.x,
            dimensions: controller.dimensions(),
            offset_x: controller.offset_x(),
        }
    }

    /// Rechnet eine Screen-X-Position in eine Start-relative Position um.
    pub fn to_start_relative(&self, screen_x: f32) -> f32 {
        match self.dimensions.direction {
            LayoutDirection::LeftToRight => screen_x - self.min_x,
            LayoutDirection::RightToLeft => self.max_x - screen_x,
        }
    }

    /// Liegt die Start-relative Position auf dem ruhenden Thumb?
    pub fn hits_thumb(&self, position: f32) -> bool {
        position >= self.offset_x && position <= self.offset_x + self.dimensions.thumb_width
    }
}

/// Verwaltet den Gesten-Zustand zwischen Frames.
#[derive(Debug, Default)]
pub struct GestureSource {
    thumb_drag_active: bool,
}

impl GestureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Läuft gerade ein Drag, der auf dem Thumb begonnen hat?
    pub fn is_dragging(&self) -> bool {
        self.thumb_drag_active
    }

    /// Vergisst einen laufenden Drag, z.B. nachdem der Controller neu
    /// aufgebaut wurde. Weitere Deltas dieses Drückens werden ignoriert.
    pub fn reset(&mut self) {
        self.thumb_drag_active = false;
    }

    /// Übersetzt den Zeigerzustand eines Frames in Intents.
    pub fn collect_intents(
        &mut self,
        frame: &PointerFrame,
        hit: &HitContext<'_>,
        draggable: bool,
    ) -> Vec<OptionsIntent> {
        let mut intents = Vec::new();

        if draggable {
            self.handle_drag(frame, hit, &mut intents);
        } else if self.thumb_drag_active {
            // Während eines Drags deaktiviert: Geste sauber abschließen.
            self.thumb_drag_active = false;
            intents.push(OptionsIntent::DragEnded);
        }

        if let Some(screen_x) = frame.clicked_x {
            let position = hit.to_start_relative(screen_x);
            if let Some(index) = hit.dimensions.slot_at(position) {
                intents.push(OptionsIntent::SlotTapped { index });
            }
        }

        intents
    }

    fn handle_drag(
        &mut self,
        frame: &PointerFrame,
        hit: &HitContext<'_>,
        intents: &mut Vec<OptionsIntent>,
    ) {
        if frame.drag_started {
            let on_thumb = frame
                .press_origin_x
                .map(|x| hit.hits_thumb(hit.to_start_relative(x)))
                .unwrap_or(false);
            if on_thumb {
                self.thumb_drag_active = true;
                intents.push(OptionsIntent::DragStarted);
            }
        }

        if self.thumb_drag_active && frame.drag_delta_x != 0.0 {
            intents.push(OptionsIntent::DragMoved {
                delta: hit.dimensions.direction.to_start_relative(frame.drag_delta_x),
            });
        }

        if frame.drag_stopped && self.thumb_drag_active {
            self.thumb_drag_active = false;
            intents.push(OptionsIntent::DragEnded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use options_row_engine::{LayoutInput, Padding};

    fn dims(direction: LayoutDirection) -> Dimensions {
        let input =
            LayoutInput::new(300.0, 64.0, Padding::all(8.0), 5).with_direction(direction);
        Dimensions::compute(&input).expect("Geometrie sollte gültig sein")
    }

    fn hit(dimensions: &Dimensions) -> HitContext<'_> {
        HitContext {
            min_x: 100.0,
            max_x: 400.0,
            dimensions,
            offset_x: dimensions.calculate_offset(0),
        }
    }

    #[test]
    fn test_rtl_positions_are_mirrored() {
        let dimensions = dims(LayoutDirection::RightToLeft);
        let hit = hit(&dimensions);
        assert_eq!(hit.to_start_relative(390.0), 10.0);
        assert!(hit.hits_thumb(10.0));
    }

    #[test]
    fn test_drag_outside_thumb_is_ignored() {
        let dimensions = dims(LayoutDirection::LeftToRight);
        let hit = hit(&dimensions);
        let mut source = GestureSource::new();

        let frame = PointerFrame {
            drag_started: true,
            drag_delta_x: 5.0,
            press_origin_x: Some(300.0),
            ..PointerFrame::default()
        };
        assert!(source.collect_intents(&frame, &hit, true).is_empty());
        assert!(!source.is_dragging());
    }
}
