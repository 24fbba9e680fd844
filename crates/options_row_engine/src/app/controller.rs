//! Controller der Optionszeile: Auswahl-Index, Thumb-Offset und Übergänge.
//!
//! ```text
//! Committed -> Dragging   (drag_start)
//! Committed -> Settling   (set_index mit animate = true)
//! Dragging  -> Settling   (drag_end, Snap auf die nächste Sektion)
//! Settling  -> Dragging   (drag_start bricht den Übergang ab)
//! Settling  -> Settling   (neuer set_index ersetzt den laufenden Übergang)
//! Settling  -> Committed  (Übergang abgeschlossen)
//! ```

use super::events::OptionsIntent;
use super::gesture::DragGestureHandler;
use super::state::{ControllerPhase, ControllerState};
use crate::core::{Dimensions, OffsetTransition, TransitionSpec};
use crate::error::{OptionsError, OptionsResult};
use glam::Vec2;
use std::fmt;

type IndexCallback = Box<dyn FnMut(usize)>;

/// Koordiniert Auswahl, Thumb-Position und Gesten einer Optionszeile.
///
/// Gehört genau einer Zeile und wird nur vom UI-Thread verändert.
/// Callbacks werden synchron innerhalb der auslösenden Operation aufgerufen.
pub struct OptionsController {
    dimensions: Dimensions,
    thumb_labels: Vec<String>,
    state: ControllerState,
    settling: Option<OffsetTransition>,
    transition_spec: TransitionSpec,
    on_index_change: IndexCallback,
    /// Ohne eigenen Callback erhält `on_index_change` auch das Drag-Ende.
    on_drag_end: Option<IndexCallback>,
}

impl fmt::Debug for OptionsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionsController")
            .field("dimensions", &self.dimensions)
            .field("thumb_labels", &self.thumb_labels)
            .field("state", &self.state)
            .field("settling", &self.settling)
            .field("transition_spec", &self.transition_spec)
            .finish_non_exhaustive()
    }
}

fn validate_labels(dimensions: &Dimensions, thumb_labels: &[String]) -> OptionsResult<()> {
    if thumb_labels.is_empty() {
        return Err(OptionsError::invalid("leere Optionsliste"));
    }
    if thumb_labels.len() != dimensions.option_count {
        return Err(OptionsError::invalid(format!(
            "{} Labels für {} Sektionen",
            thumb_labels.len(),
            dimensions.option_count
        )));
    }
    Ok(())
}

impl OptionsController {
    /// Erstellt einen Controller mit Index 0 und Offset am Zeilenanfang.
    ///
    /// Der Callback wird hier noch nicht aufgerufen; der Host setzt den
    /// Start-Index üblicherweise direkt danach per `set_index(i, false)`.
    pub fn new(
        dimensions: Dimensions,
        thumb_labels: Vec<String>,
        on_index_change: impl FnMut(usize) + 'static,
    ) -> OptionsResult<Self> {
        validate_labels(&dimensions, &thumb_labels)?;

        let state = ControllerState {
            selected_index: 0,
            offset_x: dimensions.start_padding,
            is_dragging: false,
            thumb_label: thumb_labels[0].clone(),
        };

        Ok(Self {
            dimensions,
            thumb_labels,
            state,
            settling: None,
            transition_spec: TransitionSpec::default(),
            on_index_change: Box::new(on_index_change),
            on_drag_end: None,
        })
    }

    /// Registriert einen eigenen Callback für das Drag-Ende.
    pub fn with_drag_end_callback(mut self, on_drag_end: impl FnMut(usize) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(on_drag_end));
        self
    }

    /// Setzt Dauer und Easing für animierte Übergänge.
    pub fn with_transition_spec(mut self, spec: TransitionSpec) -> Self {
        self.transition_spec = spec;
        self
    }

    /// Ersetzt Dauer und Easing für künftige Übergänge; ein laufender bleibt unverändert.
    pub fn set_transition_spec(&mut self, spec: TransitionSpec) {
        self.transition_spec = spec;
    }

    pub fn transition_spec(&self) -> TransitionSpec {
        self.transition_spec
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn thumb_labels(&self) -> &[String] {
        &self.thumb_labels
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    pub fn offset_x(&self) -> f32 {
        self.state.offset_x
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn thumb_label(&self) -> &str {
        &self.state.thumb_label
    }

    /// Läuft gerade ein (nicht abgebrochener) Übergang?
    pub fn is_settling(&self) -> bool {
        self.settling
            .as_ref()
            .is_some_and(|transition| !transition.is_cancelled())
    }

    pub fn phase(&self) -> ControllerPhase {
        if self.state.is_dragging {
            ControllerPhase::Dragging
        } else if self.is_settling() {
            ControllerPhase::Settling
        } else {
            ControllerPhase::Committed
        }
    }

    /// Breite der aktiven Track-Füllung beim aktuellen Offset.
    pub fn active_track_width(&self) -> f32 {
        self.dimensions.active_track_width(self.state.offset_x)
    }

    /// Breite der inaktiven Track-Füllung beim aktuellen Offset.
    pub fn inactive_track_width(&self) -> f32 {
        self.dimensions.inactive_track_width(self.state.offset_x)
    }

    /// Aktuelle Soll-Größe des Thumbs (vergrößert während des Ziehens).
    pub fn thumb_size(&self) -> Vec2 {
        self.dimensions.thumb_size(self.state.is_dragging)
    }

    /// Setzt den gewählten Index.
    ///
    /// Auswahl, Label und Callback werden sofort aktualisiert. Ohne Animation
    /// springt der Offset exakt auf die Sektion, mit Animation wird ein
    /// Übergang geplant, der einen laufenden ersetzt.
    pub fn set_index(&mut self, index: usize, animate: bool) -> OptionsResult<()> {
        if index >= self.dimensions.option_count {
            return Err(OptionsError::OutOfRange {
                index,
                count: self.dimensions.option_count,
            });
        }
        self.commit(index, animate);
        Ok(())
    }

    /// Beginnt eine Ziehgeste und bricht einen laufenden Übergang ab.
    pub fn drag_start(&mut self) {
        self.cancel_settling();
        self.state.is_dragging = true;
        log::debug!("Drag gestartet bei Offset {:.2}", self.state.offset_x);
    }

    /// Verschiebt den Thumb um `delta` Pixel (Start-relativ).
    ///
    /// Jedes Delta wird einzeln auf `[0, max_offset]` begrenzt, nicht erst die
    /// Summe mehrerer Deltas. Der Callback feuert bei jedem Aufruf, auch wenn
    /// sich der Index nicht ändert. Nicht-endliche Deltas lassen den Offset
    /// unverändert, melden aber trotzdem den aktuellen Index.
    pub fn drag_delta(&mut self, delta: f32) {
        if !self.state.is_dragging {
            log::warn!("drag_delta ohne aktive Ziehgeste ignoriert");
            return;
        }
        if !delta.is_finite() {
            log::warn!("Nicht-endliches Drag-Delta ignoriert: {delta}");
            (self.on_index_change)(self.state.selected_index);
            return;
        }

        self.state.offset_x = (self.state.offset_x + delta).clamp(0.0, self.dimensions.max_offset);
        let index = self.dimensions.nearest_index(self.state.offset_x);
        self.select(index);
        log::trace!(
            "Drag-Delta {delta:.2} -> Offset {:.2}, Index {index}",
            self.state.offset_x
        );
        (self.on_index_change)(index);
    }

    /// Beendet die Ziehgeste und rastet animiert auf die nächste Sektion ein.
    pub fn drag_end(&mut self) {
        if !self.state.is_dragging {
            log::warn!("drag_end ohne aktive Ziehgeste ignoriert");
            return;
        }

        self.state.is_dragging = false;
        let index = self.state.selected_index;
        log::debug!("Drag beendet auf Index {index}");
        match self.on_drag_end.as_mut() {
            Some(on_drag_end) => on_drag_end(index),
            None => (self.on_index_change)(index),
        }
        self.commit(index, true);
    }

    /// Tastet den laufenden Übergang zum Zeitpunkt `now` (Sekunden) ab.
    ///
    /// Liefert `true`, solange der Übergang noch läuft.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(transition) = self.settling.as_mut() else {
            return false;
        };

        match transition.sample(now) {
            None => {
                self.settling = None;
                false
            }
            Some(sample) => {
                self.state.offset_x = sample.value;
                if sample.finished {
                    self.settling = None;
                    log::debug!("Übergang abgeschlossen bei Offset {:.2}", sample.value);
                }
                !sample.finished
            }
        }
    }

    /// Setzt einen UI-Intent um.
    pub fn handle_intent(&mut self, intent: OptionsIntent) -> OptionsResult<()> {
        match intent {
            OptionsIntent::SlotTapped { index } => self.set_index(index, true)?,
            OptionsIntent::DragStarted => self.drag_start(),
            OptionsIntent::DragMoved { delta } => self.drag_delta(delta),
            OptionsIntent::DragEnded => self.drag_end(),
            OptionsIntent::FrameTick { now } => {
                self.tick(now);
            }
        }
        Ok(())
    }

    /// Initialisiert den Controller nach einer Geometrie-Änderung neu.
    ///
    /// Geste und Übergang werden verworfen, danach springt der Thumb ohne
    /// Animation auf `selected_index` (inklusive Callback).
    pub fn reinitialize(
        &mut self,
        dimensions: Dimensions,
        thumb_labels: Vec<String>,
        selected_index: usize,
    ) -> OptionsResult<()> {
        validate_labels(&dimensions, &thumb_labels)?;
        if selected_index >= dimensions.option_count {
            return Err(OptionsError::OutOfRange {
                index: selected_index,
                count: dimensions.option_count,
            });
        }

        log::debug!(
            "Controller neu initialisiert: {} Optionen, Sektion {:.2}px",
            dimensions.option_count,
            dimensions.section_width
        );
        self.settling = None;
        self.state.is_dragging = false;
        self.dimensions = dimensions;
        self.thumb_labels = thumb_labels;
        self.commit(selected_index, false);
        Ok(())
    }

    /// Übernimmt einen bereits geprüften Index.
    fn commit(&mut self, index: usize, animate: bool) {
        self.select(index);
        (self.on_index_change)(index);

        let target = self.dimensions.calculate_offset(index);
        if animate {
            if self.state.is_dragging {
                log::debug!("Ziehgeste durch set_index beendet");
                self.state.is_dragging = false;
            }
            self.settling = Some(OffsetTransition::new(
                self.state.offset_x,
                target,
                self.transition_spec,
            ));
        } else {
            self.cancel_settling();
            self.state.offset_x = target;
        }
    }

    fn select(&mut self, index: usize) {
        self.state.selected_index = index;
        self.state.thumb_label.clone_from(&self.thumb_labels[index]);
    }

    fn cancel_settling(&mut self) {
        if let Some(transition) = self.settling.as_mut() {
            if !transition.is_cancelled() {
                transition.cancel();
                log::debug!("Laufender Übergang abgebrochen");
            }
        }
    }
}

impl DragGestureHandler for OptionsController {
    fn drag_start(&mut self) {
        OptionsController::drag_start(self);
    }

    fn drag_move(&mut self, delta: f32) {
        self.drag_delta(delta);
    }

    fn drag_end(&mut self) {
        OptionsController::drag_end(self);
    }
}
