//! Zeitgesteuerte Offset-Übergänge mit Easing.
//!
//! Ein `OffsetTransition` wird vom Host pro Frame mit der aktuellen Zeit
//! abgetastet. Die erste Abtastung legt den Startzeitpunkt fest, sodass beim
//! Planen keine Uhr benötigt wird.

use serde::{Deserialize, Serialize};

/// Easing-Kurven für Offset-Übergänge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    /// Kubische Bézier-Kurve (0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
}

impl Easing {
    /// Wendet die Kurve auf einen Fortschritt in `[0, 1]` an.
    pub fn apply(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

fn bezier_component(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

/// Löst x(t) = `x` per Bisektion und liefert y(t).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..32 {
        let current = bezier_component(t, x1, x2);
        if (current - x).abs() < 1e-6 {
            break;
        }
        if current < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier_component(t, y1, y2)
}

/// Dauer und Kurve eines Übergangs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Dauer in Sekunden (0 = sofort am Ziel)
    pub duration_secs: f64,
    pub easing: Easing,
}

impl TransitionSpec {
    /// Standarddauer eines Snap-Übergangs in Sekunden.
    pub const DEFAULT_DURATION_SECS: f64 = 0.3;

    pub fn new(duration_secs: f64, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_SECS, Easing::default())
    }
}

/// Ergebnis einer Abtastung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSample {
    pub value: f32,
    pub finished: bool,
}

/// Abbrechbarer Übergang von einem Start- zu einem Ziel-Offset
#[derive(Debug, Clone)]
pub struct OffsetTransition {
    from: f32,
    to: f32,
    spec: TransitionSpec,
    started_at: Option<f64>,
    cancelled: bool,
}

impl OffsetTransition {
    pub fn new(from: f32, to: f32, spec: TransitionSpec) -> Self {
        Self {
            from,
            to,
            spec,
            started_at: None,
            cancelled: false,
        }
    }

    /// Markiert den Übergang als abgebrochen; weitere Abtastungen liefern `None`.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Tastet den Übergang zum Zeitpunkt `now` (Sekunden) ab.
    ///
    /// Nach Ablauf der Dauer wird exakt der Ziel-Offset geliefert.
    pub fn sample(&mut self, now: f64) -> Option<TransitionSample> {
        if self.cancelled {
            return None;
        }

        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = (now - started_at).max(0.0);
        if self.spec.duration_secs <= 0.0 || elapsed >= self.spec.duration_secs {
            return Some(TransitionSample {
                value: self.to,
                finished: true,
            });
        }

        let fraction = (elapsed / self.spec.duration_secs) as f32;
        let eased = self.spec.easing.apply(fraction);
        Some(TransitionSample {
            value: self.from + (self.to - self.from) * eased,
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::FastOutSlowIn] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
            assert_relative_eq!(easing.apply(-3.0), 0.0);
            assert_relative_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_fast_out_slow_in_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::FastOutSlowIn.apply(step as f32 / 100.0);
            assert!(value >= previous - 1e-5, "Kurve fällt bei Schritt {step}");
            previous = value;
        }
        // Langsames Auslaufen: in der Mitte schon deutlich mehr als die Hälfte
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.6);
    }

    #[test]
    fn test_first_sample_starts_at_origin() {
        let mut transition =
            OffsetTransition::new(10.0, 110.0, TransitionSpec::new(1.0, Easing::Linear));
        let first = transition.sample(5.0).expect("nicht abgebrochen");
        assert_relative_eq!(first.value, 10.0);
        assert!(!first.finished);

        let half = transition.sample(5.5).expect("nicht abgebrochen");
        assert_relative_eq!(half.value, 60.0);
    }

    #[test]
    fn test_finishes_exactly_at_target() {
        let mut transition = OffsetTransition::new(0.0, 121.6, TransitionSpec::default());
        transition.sample(0.0);
        let last = transition.sample(10.0).expect("nicht abgebrochen");
        assert!(last.finished);
        assert_eq!(last.value, 121.6);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut transition =
            OffsetTransition::new(0.0, 42.0, TransitionSpec::new(0.0, Easing::Linear));
        let sample = transition.sample(3.0).expect("nicht abgebrochen");
        assert!(sample.finished);
        assert_eq!(sample.value, 42.0);
    }

    #[test]
    fn test_cancelled_transition_yields_nothing() {
        let mut transition = OffsetTransition::new(0.0, 42.0, TransitionSpec::default());
        transition.cancel();
        assert!(transition.is_cancelled());
        assert!(transition.sample(0.0).is_none());
    }
}
