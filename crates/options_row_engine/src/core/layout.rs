//! Leserichtung und richtungsabhängiges Padding.

use serde::{Deserialize, Serialize};

/// Horizontale Leserichtung der Zeile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// Rechnet ein physisches X-Delta (positiv = nach rechts) in ein
    /// Start-relatives Delta (positiv = weg vom Zeilenanfang) um.
    pub fn to_start_relative(self, physical_dx: f32) -> f32 {
        match self {
            Self::LeftToRight => physical_dx,
            Self::RightToLeft => -physical_dx,
        }
    }
}

/// Vierseitiges Padding in logischen Einheiten.
///
/// `Relative` beschreibt Start/Ende und folgt der Leserichtung,
/// `Absolute` beschreibt Links/Rechts und wird erst über die
/// Leserichtung in Start/Ende aufgelöst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Padding {
    Relative {
        start: f32,
        top: f32,
        end: f32,
        bottom: f32,
    },
    Absolute {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
}

impl Padding {
    /// Gleiches Padding auf allen vier Seiten
    pub fn all(value: f32) -> Self {
        Self::Relative {
            start: value,
            top: value,
            end: value,
            bottom: value,
        }
    }

    /// Getrenntes horizontales und vertikales Padding
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::Relative {
            start: horizontal,
            top: vertical,
            end: horizontal,
            bottom: vertical,
        }
    }

    /// Padding am Zeilenanfang für die gegebene Leserichtung.
    pub fn start(&self, direction: LayoutDirection) -> f32 {
        match (*self, direction) {
            (Self::Relative { start, .. }, _) => start,
            (Self::Absolute { left, .. }, LayoutDirection::LeftToRight) => left,
            (Self::Absolute { right, .. }, LayoutDirection::RightToLeft) => right,
        }
    }

    /// Padding am Zeilenende für die gegebene Leserichtung.
    pub fn end(&self, direction: LayoutDirection) -> f32 {
        match (*self, direction) {
            (Self::Relative { end, .. }, _) => end,
            (Self::Absolute { right, .. }, LayoutDirection::LeftToRight) => right,
            (Self::Absolute { left, .. }, LayoutDirection::RightToLeft) => left,
        }
    }

    pub fn top(&self) -> f32 {
        match *self {
            Self::Relative { top, .. } | Self::Absolute { top, .. } => top,
        }
    }

    pub fn bottom(&self) -> f32 {
        match *self {
            Self::Relative { bottom, .. } | Self::Absolute { bottom, .. } => bottom,
        }
    }

    /// Summe aus Start- und End-Padding
    pub fn horizontal(&self, direction: LayoutDirection) -> f32 {
        self.start(direction) + self.end(direction)
    }

    /// Summe aus oberem und unterem Padding
    pub fn vertical(&self) -> f32 {
        self.top() + self.bottom()
    }

    pub(crate) fn is_valid(&self) -> bool {
        let values = match *self {
            Self::Relative {
                start,
                top,
                end,
                bottom,
            } => [start, top, end, bottom],
            Self::Absolute {
                left,
                top,
                right,
                bottom,
            } => [left, top, right, bottom],
        };
        values.iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::all(0.0)
    }
}
