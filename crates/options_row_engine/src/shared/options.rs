//! Zentrale Konfiguration einer Optionszeile.
//!
//! `OptionsRowOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Easing, LayoutDirection, Padding, TransitionSpec};
use serde::{Deserialize, Serialize};

// ── Layout ──────────────────────────────────────────────────────────

/// Standard-Höhe des Containers in logischen Einheiten.
pub const CONTAINER_HEIGHT: f32 = 64.0;
/// Standard-Innenabstand auf allen vier Seiten.
pub const CONTENT_PADDING: f32 = 8.0;

// ── Track ───────────────────────────────────────────────────────────

/// Mindestbreite der aktiven Track-Füllung.
pub const ACTIVE_TRACK_MIN_WIDTH: f32 = 50.0;

// ── Animation ───────────────────────────────────────────────────────

/// Dauer eines Snap-Übergangs in Sekunden.
pub const TRANSITION_DURATION_SECS: f64 = TransitionSpec::DEFAULT_DURATION_SECS;
/// Dauer der Thumb-Vergrößerung beim Ziehen in Sekunden.
pub const THUMB_RESIZE_SECS: f32 = 0.15;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen einer Zeile.
/// Wird als `options_row.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionsRowOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Höhe der gesamten Zeile
    pub container_height: f32,
    /// Innenabstand um Track und Thumb
    pub content_padding: Padding,
    /// Leserichtung
    #[serde(default)]
    pub layout_direction: LayoutDirection,

    // ── Interaktion ─────────────────────────────────────────────
    /// Thumb per Ziehen verschiebbar
    pub draggable: bool,

    // ── Track ───────────────────────────────────────────────────
    /// Aktive Track-Füllung zeichnen (nur Darstellung)
    pub active_track_visible: bool,
    /// Inaktive Track-Füllung zeichnen (nur Darstellung)
    pub inactive_track_visible: bool,
    /// Mindestbreite der aktiven Füllung
    #[serde(default = "default_active_track_min_width")]
    pub active_track_min_width: f32,

    // ── Animation ───────────────────────────────────────────────
    /// Dauer des Snap-Übergangs in Sekunden
    pub transition_duration_secs: f64,
    /// Easing des Snap-Übergangs
    #[serde(default)]
    pub transition_easing: Easing,
    /// Dauer der Thumb-Vergrößerung in Sekunden
    #[serde(default = "default_thumb_resize_secs")]
    pub thumb_resize_secs: f32,
}

impl Default for OptionsRowOptions {
    fn default() -> Self {
        Self {
            container_height: CONTAINER_HEIGHT,
            content_padding: Padding::all(CONTENT_PADDING),
            layout_direction: LayoutDirection::LeftToRight,

            draggable: true,

            active_track_visible: true,
            inactive_track_visible: false,
            active_track_min_width: ACTIVE_TRACK_MIN_WIDTH,

            transition_duration_secs: TRANSITION_DURATION_SECS,
            transition_easing: Easing::FastOutSlowIn,
            thumb_resize_secs: THUMB_RESIZE_SECS,
        }
    }
}

/// Serde-Default für `active_track_min_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_active_track_min_width() -> f32 {
    ACTIVE_TRACK_MIN_WIDTH
}

/// Serde-Default für `thumb_resize_secs` (Abwärtskompatibilität).
fn default_thumb_resize_secs() -> f32 {
    THUMB_RESIZE_SECS
}

impl OptionsRowOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("options_row"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("options_row.toml")
    }

    /// Übergangs-Parameter für den Controller.
    pub fn transition_spec(&self) -> TransitionSpec {
        TransitionSpec::new(self.transition_duration_secs.max(0.0), self.transition_easing)
    }
}
