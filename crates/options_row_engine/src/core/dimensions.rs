//! Geometrie der Optionszeile: Sektionen, Thumb-Größe und Offset-Grenzen.
//!
//! `Dimensions` ist ein unveränderlicher Schnappschuss. Er wird neu berechnet,
//! sobald sich Containergröße, Padding, Optionsanzahl oder Leserichtung ändern.
//! Alle Werte liegen in physischen Pixeln; Offsets werden vom Zeilenanfang
//! (Start-Kante) aus gemessen.

use super::layout::{LayoutDirection, Padding};
use crate::error::{OptionsError, OptionsResult};
use glam::Vec2;

/// Eingabewerte für die Geometrie-Berechnung (logische Einheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// Verfügbare Containerbreite
    pub container_width: f32,
    /// Containerhöhe
    pub container_height: f32,
    /// Innenabstand der Zeile
    pub padding: Padding,
    /// Anzahl der Optionen (mindestens 1)
    pub option_count: usize,
    /// Leserichtung für Start/Ende-Auflösung
    pub direction: LayoutDirection,
    /// Umrechnungsfaktor logische Einheit → physisches Pixel
    pub density: f32,
}

impl LayoutInput {
    /// Erstellt eine Eingabe mit Links-nach-Rechts-Layout und Dichte 1.0.
    pub fn new(
        container_width: f32,
        container_height: f32,
        padding: Padding,
        option_count: usize,
    ) -> Self {
        Self {
            container_width,
            container_height,
            padding,
            option_count,
            direction: LayoutDirection::LeftToRight,
            density: 1.0,
        }
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }
}

/// Abgeleitete Layout-Konstanten der Zeile
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct Dimensions {
    /// Breite einer Sektion (nutzbare Breite / Optionsanzahl)
    pub section_width: f32,
    /// Thumb-Breite während des Ziehens (Sektion + vertikales Padding)
    pub max_section_width: f32,
    /// Thumb-Breite in Ruhe
    pub thumb_width: f32,
    /// Thumb-Höhe in Ruhe
    pub thumb_height: f32,
    /// Thumb-Höhe während des Ziehens (volle Containerhöhe)
    pub max_height: f32,
    /// Größter zulässiger Thumb-Offset beim Ziehen
    pub max_offset: f32,
    /// Padding am Zeilenanfang
    pub start_padding: f32,
    /// Padding am Zeilenende
    pub end_padding: f32,
    /// Summe aus Start- und End-Padding
    pub horizontal_padding: f32,
    /// Summe aus oberem und unterem Padding
    pub vertical_padding: f32,
    /// Padding oben (für das Zeichnen der Track-Zellen)
    pub top_padding: f32,
    /// Gesamtbreite des Containers
    pub container_width: f32,
    /// Breite aller Track-Zellen zusammen
    pub track_width: f32,
    /// Anzahl der Optionen
    pub option_count: usize,
    /// Leserichtung, mit der Start/Ende aufgelöst wurden
    pub direction: LayoutDirection,
    /// Umrechnungsfaktor logische Einheit → physisches Pixel
    pub density: f32,
}

impl Dimensions {
    /// Berechnet die Geometrie aus den Layout-Eingaben.
    ///
    /// Schlägt mit `InvalidArgument` fehl, wenn keine Option vorhanden ist,
    /// Eingaben nicht endlich sind oder nach Abzug des Paddings keine
    /// positive Breite übrig bleibt.
    pub fn compute(input: &LayoutInput) -> OptionsResult<Self> {
        if input.option_count == 0 {
            return Err(OptionsError::invalid("mindestens eine Option erforderlich"));
        }
        if !(input.density.is_finite() && input.density > 0.0) {
            return Err(OptionsError::invalid(format!(
                "Dichte muss positiv sein, erhalten: {}",
                input.density
            )));
        }
        if !input.container_width.is_finite() || !input.container_height.is_finite() {
            return Err(OptionsError::invalid("Containergröße muss endlich sein"));
        }
        if !input.padding.is_valid() {
            return Err(OptionsError::invalid(
                "Padding muss endlich und nicht negativ sein",
            ));
        }

        let density = input.density;
        let direction = input.direction;
        let start_padding = input.padding.start(direction) * density;
        let end_padding = input.padding.end(direction) * density;
        let horizontal_padding = start_padding + end_padding;
        let top_padding = input.padding.top() * density;
        let vertical_padding = input.padding.vertical() * density;
        let container_width = input.container_width * density;
        let max_height = input.container_height * density;

        let track_width = container_width - horizontal_padding;
        if track_width <= 0.0 {
            return Err(OptionsError::invalid(format!(
                "Containerbreite {} reicht nicht für Padding {}",
                container_width, horizontal_padding
            )));
        }

        let section_width = track_width / input.option_count as f32;
        let thumb_width = section_width;
        let thumb_height = (max_height - vertical_padding).max(0.0);
        let max_section_width = section_width + vertical_padding;
        // Der gezogene Thumb wächst um das vertikale Padding in die Breite.
        let max_offset = (container_width - thumb_width - vertical_padding).max(0.0);

        Ok(Self {
            section_width,
            max_section_width,
            thumb_width,
            thumb_height,
            max_height,
            max_offset,
            start_padding,
            end_padding,
            horizontal_padding,
            vertical_padding,
            top_padding,
            container_width,
            track_width,
            option_count: input.option_count,
            direction,
            density,
        })
    }

    /// Exakter Offset der Sektion `index`.
    pub fn calculate_offset(&self, index: usize) -> f32 {
        self.start_padding + self.section_width * index as f32
    }

    /// Nächstgelegener Index zu einem Offset.
    ///
    /// Rundet kaufmännisch (halbe Werte von Null weg) und begrenzt
    /// auf `[0, option_count - 1]`.
    pub fn nearest_index(&self, offset: f32) -> usize {
        let raw = ((offset - self.start_padding) / self.section_width).round();
        if raw.is_nan() {
            return 0;
        }
        raw.clamp(0.0, self.last_index() as f32) as usize
    }

    /// Trefferprüfung einer Start-relativen Position gegen die Track-Zellen.
    /// Liefert `None` innerhalb des Paddings.
    pub fn slot_at(&self, position: f32) -> Option<usize> {
        let local = position - self.start_padding;
        if !(0.0..self.track_width).contains(&local) {
            return None;
        }
        Some(((local / self.section_width).floor() as usize).min(self.last_index()))
    }

    /// Breite der aktiven Track-Füllung (vom Start bis zur Thumb-Mitte).
    pub fn active_track_width(&self, offset: f32) -> f32 {
        (offset + self.section_width / 2.0).max(0.0)
    }

    /// Breite der inaktiven Track-Füllung (von der Thumb-Mitte bis zum Ende).
    pub fn inactive_track_width(&self, offset: f32) -> f32 {
        (self.container_width - offset - self.section_width / 2.0).max(0.0)
    }

    /// Thumb-Größe in Ruhe bzw. während des Ziehens.
    pub fn thumb_size(&self, dragging: bool) -> Vec2 {
        if dragging {
            Vec2::new(self.max_section_width, self.max_height)
        } else {
            Vec2::new(self.thumb_width, self.thumb_height)
        }
    }

    /// Rechnet physische Pixel zurück in logische Einheiten.
    pub fn to_logical(&self, px: f32) -> f32 {
        px / self.density
    }

    /// Größter gültiger Index
    pub fn last_index(&self) -> usize {
        self.option_count - 1
    }
}
