//! egui-Widget einer Optionszeile.
//!
//! `OptionsRow` hält den Host-Zustand (Optionen, gewählter Index,
//! Konfiguration) über Frames hinweg und baut den Controller neu auf,
//! sobald sich die Geometrie ändert.

use super::input::{GestureSource, HitContext, PointerFrame};
use super::paint;
use options_row_engine::{
    thumb_labels, Dimensions, LayoutInput, OptionItem, OptionsController, OptionsError,
    OptionsResult, OptionsRowOptions,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Benachrichtigungen, die die Controller-Callbacks während eines Frames sammeln.
#[derive(Debug, Default)]
struct Notifications {
    changed: Vec<usize>,
    drag_ended: Option<usize>,
}

/// Ergebnis eines `OptionsRow::show`-Aufrufs
#[derive(Debug)]
pub struct OptionsRowResponse {
    /// egui-Response der gesamten Zeile
    pub response: egui::Response,
    /// Alle Auswahl-Benachrichtigungen dieses Frames, in Reihenfolge
    /// (Wiederholungen desselben Index sind möglich)
    pub changed_indices: Vec<usize>,
    /// Index, mit dem eine Ziehgeste in diesem Frame endete
    pub drag_ended: Option<usize>,
    /// Gewählter Index nach diesem Frame
    pub selected_index: usize,
}

impl OptionsRowResponse {
    /// Gab es in diesem Frame mindestens eine Auswahl-Benachrichtigung?
    pub fn changed(&self) -> bool {
        !self.changed_indices.is_empty()
    }
}

/// Zustand einer segmentierten Auswahlzeile
#[derive(Debug)]
pub struct OptionsRow {
    items: Vec<OptionItem>,
    options: OptionsRowOptions,
    selected_index: usize,
    controller: Option<OptionsController>,
    gesture_source: GestureSource,
    notifications: Rc<RefCell<Notifications>>,
}

fn validate_selection(items: &[OptionItem], selected_index: usize) -> OptionsResult<()> {
    if items.is_empty() {
        return Err(OptionsError::InvalidArgument(
            "leere Optionsliste".to_string(),
        ));
    }
    if selected_index >= items.len() {
        return Err(OptionsError::OutOfRange {
            index: selected_index,
            count: items.len(),
        });
    }
    Ok(())
}

impl OptionsRow {
    /// Erstellt eine Zeile. Fehler werden sofort gemeldet, nicht erst beim Zeichnen.
    pub fn new(
        items: Vec<OptionItem>,
        selected_index: usize,
        options: OptionsRowOptions,
    ) -> OptionsResult<Self> {
        validate_selection(&items, selected_index)?;
        Ok(Self {
            items,
            options,
            selected_index,
            controller: None,
            gesture_source: GestureSource::new(),
            notifications: Rc::new(RefCell::new(Notifications::default())),
        })
    }

    pub fn items(&self) -> &[OptionItem] {
        &self.items
    }

    pub fn options(&self) -> &OptionsRowOptions {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Controller des letzten Frames (`None` vor dem ersten `show`).
    pub fn controller(&self) -> Option<&OptionsController> {
        self.controller.as_ref()
    }

    /// Übernimmt neue Optionen.
    ///
    /// Geometrie-Änderungen erkennt der nächste Frame über `Dimensions`;
    /// reine Darstellungs-Optionen lassen Auswahl und Übergang unberührt.
    pub fn set_options(&mut self, options: OptionsRowOptions) {
        if let Some(controller) = self.controller.as_mut() {
            controller.set_transition_spec(options.transition_spec());
        }
        self.options = options;
    }

    /// Ersetzt die Optionsliste samt gewähltem Index.
    pub fn set_items(&mut self, items: Vec<OptionItem>, selected_index: usize) -> OptionsResult<()> {
        validate_selection(&items, selected_index)?;
        self.items = items;
        self.selected_index = selected_index;
        self.controller = None;
        self.gesture_source.reset();
        Ok(())
    }

    /// Setzt den Index programmatisch (z.B. aus dem Host-Zustand).
    pub fn select(&mut self, index: usize, animate: bool) -> OptionsResult<()> {
        if index >= self.items.len() {
            return Err(OptionsError::OutOfRange {
                index,
                count: self.items.len(),
            });
        }
        if let Some(controller) = self.controller.as_mut() {
            controller.set_index(index, animate)?;
            if !controller.is_dragging() {
                self.gesture_source.reset();
            }
        }
        self.selected_index = index;
        Ok(())
    }

    /// Layout-Eingabe für eine gegebene Breite (egui rechnet in logischen Punkten).
    pub fn layout_input(&self, width: f32) -> LayoutInput {
        LayoutInput::new(
            width,
            self.options.container_height,
            self.options.content_padding,
            self.items.len(),
        )
        .with_direction(self.options.layout_direction)
    }

    /// Zeichnet die Zeile und verarbeitet die Eingaben dieses Frames.
    pub fn show(&mut self, ui: &mut egui::Ui) -> OptionsRowResponse {
        // Ohne Verschiebbarkeit meldet egui gar keine Drags.
        let sense = if self.options.draggable {
            egui::Sense::click_and_drag()
        } else {
            egui::Sense::click()
        };
        let size = egui::vec2(ui.available_width(), self.options.container_height);
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if let Err(e) = self.sync_controller(rect.width()) {
            log::error!("Optionszeile kann nicht aufgebaut werden: {e}");
            self.controller = None;
            self.gesture_source.reset();
            paint::paint_container(ui, rect);
            return self.finish(response);
        }
        let Some(controller) = self.controller.as_mut() else {
            paint::paint_container(ui, rect);
            return self.finish(response);
        };

        let frame = PointerFrame::from_response(&response);
        let hit = HitContext::new(rect, controller);
        let intents = self
            .gesture_source
            .collect_intents(&frame, &hit, self.options.draggable);
        for intent in intents {
            if let Err(e) = controller.handle_intent(intent) {
                log::error!("Intent {intent:?} fehlgeschlagen: {e}");
            }
        }

        let now = ui.input(|i| i.time);
        if controller.tick(now) {
            ui.ctx().request_repaint();
        }

        paint::paint_row(ui, rect, response.id, controller, &self.items, &self.options);
        self.selected_index = controller.selected_index();
        self.finish(response)
    }

    /// Baut den Controller auf oder initialisiert ihn bei geänderter Geometrie neu.
    fn sync_controller(&mut self, width: f32) -> OptionsResult<()> {
        let dimensions = Dimensions::compute(&self.layout_input(width))?;

        if let Some(controller) = self.controller.as_mut() {
            if controller.dimensions() != &dimensions {
                controller.reinitialize(
                    dimensions,
                    thumb_labels(&self.items),
                    self.selected_index,
                )?;
                self.gesture_source.reset();
            }
            return Ok(());
        }

        let changed_sink = Rc::clone(&self.notifications);
        let ended_sink = Rc::clone(&self.notifications);
        let mut controller = OptionsController::new(
            dimensions,
            thumb_labels(&self.items),
            move |index| changed_sink.borrow_mut().changed.push(index),
        )?
        .with_drag_end_callback(move |index| {
            let mut notifications = ended_sink.borrow_mut();
            notifications.changed.push(index);
            notifications.drag_ended = Some(index);
        })
        .with_transition_spec(self.options.transition_spec());

        controller.set_index(self.selected_index, false)?;
        log::debug!(
            "Controller aufgebaut: {} Optionen, Index {}",
            self.items.len(),
            self.selected_index
        );
        self.controller = Some(controller);
        Ok(())
    }

    fn finish(&mut self, response: egui::Response) -> OptionsRowResponse {
        let notifications = std::mem::take(&mut *self.notifications.borrow_mut());
        OptionsRowResponse {
            response,
            changed_indices: notifications.changed,
            drag_ended: notifications.drag_ended,
            selected_index: self.selected_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<OptionItem> {
        ["S", "M", "L", "XL"].into_iter().map(OptionItem::new).collect()
    }

    fn run_frame(ctx: &egui::Context, row: &mut OptionsRow, width: f32) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 200.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                row.show(ui);
            });
        });
    }

    /// Startet einen Drag auf dem Thumb, wie es die Gestenquelle täte.
    fn start_thumb_drag(row: &mut OptionsRow) {
        let Some(controller) = row.controller.as_mut() else {
            panic!("Controller fehlt");
        };
        let dims = *controller.dimensions();
        let hit = HitContext {
            min_x: 0.0,
            max_x: dims.container_width,
            dimensions: &dims,
            offset_x: controller.offset_x(),
        };
        let frame = PointerFrame {
            drag_started: true,
            drag_delta_x: 10.0,
            press_origin_x: Some(controller.offset_x() + 1.0),
            ..PointerFrame::default()
        };
        for intent in row.gesture_source.collect_intents(&frame, &hit, true) {
            controller.handle_intent(intent).expect("Intent sollte gelingen");
        }
        assert!(row.gesture_source.is_dragging());
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_animated_select_ends_gesture_in_both_state_machines() {
        let ctx = egui::Context::default();
        let mut row =
            OptionsRow::new(items(), 0, OptionsRowOptions::default()).expect("gültige Zeile");
        run_frame(&ctx, &mut row, 400.0);
        start_thumb_drag(&mut row);

        row.select(3, true).expect("Index 3 ist gültig");
        assert!(!row.gesture_source.is_dragging());
        assert!(row.controller().is_some_and(|c| !c.is_dragging()));
    }

    #[test]
    fn test_resize_during_drag_resets_gesture_source() {
        let ctx = egui::Context::default();
        let mut row =
            OptionsRow::new(items(), 1, OptionsRowOptions::default()).expect("gültige Zeile");
        run_frame(&ctx, &mut row, 400.0);
        start_thumb_drag(&mut row);

        run_frame(&ctx, &mut row, 600.0);
        assert!(!row.gesture_source.is_dragging());
        let controller = row.controller().expect("Controller vorhanden");
        assert!(!controller.is_dragging());
        assert_eq!(controller.offset_x(), controller.dimensions().calculate_offset(1));
    }

    #[test]
    fn test_set_items_during_drag_resets_gesture_source() {
        let ctx = egui::Context::default();
        let mut row =
            OptionsRow::new(items(), 0, OptionsRowOptions::default()).expect("gültige Zeile");
        run_frame(&ctx, &mut row, 400.0);
        start_thumb_drag(&mut row);

        row.set_items(items(), 2).expect("gültige Liste");
        assert!(!row.gesture_source.is_dragging());
    }
}
