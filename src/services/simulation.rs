//! Simulation overlay timing.

// Row math converts between f64 phases and u16 terminal rows
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::time::{Duration, Instant};

use crate::models::ElementKind;

/// Clock driving the looping simulation overlay.
///
/// Starts when simulation mode is switched on and resets when it is switched
/// off, so every run begins with all traffic at the top of its lane.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    started: Option<Instant>,
}

impl SimulationClock {
    /// Creates a stopped clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { started: None }
    }

    /// Whether the clock is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Starts or stops the clock to match the simulation toggle.
    pub fn sync(&mut self, simulating: bool) {
        match (simulating, self.started) {
            (true, None) => self.started = Some(Instant::now()),
            (false, Some(_)) => self.started = None,
            _ => {}
        }
    }

    /// Time since the clock started, zero when stopped.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |start| start.elapsed())
    }
}

/// Fraction (0.0..1.0) of the current loop for a kind, `None` for static kinds.
#[must_use]
pub fn animation_phase(kind: ElementKind, elapsed: Duration) -> Option<f64> {
    let period = kind.animation_period()?.as_secs_f64();
    Some((elapsed.as_secs_f64() % period) / period)
}

/// Row at which to draw a segment's icon within `height` rows.
///
/// Animated kinds travel from the top row to the bottom row over one loop;
/// static kinds sit in the middle.
#[must_use]
pub fn icon_row(phase: Option<f64>, height: u16) -> u16 {
    if height == 0 {
        return 0;
    }
    match phase {
        Some(phase) => {
            let row = (phase.clamp(0.0, 1.0) * f64::from(height)).floor() as u16;
            row.min(height - 1)
        }
        None => height / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_static_kinds() {
        let elapsed = Duration::from_secs(3);
        assert_eq!(animation_phase(ElementKind::Sidewalk, elapsed), None);
        assert_eq!(animation_phase(ElementKind::Parking, elapsed), None);
        assert_eq!(animation_phase(ElementKind::Median, elapsed), None);
    }

    #[test]
    fn test_phase_wraps_each_period() {
        let phase = animation_phase(ElementKind::Car, Duration::from_secs(5)).unwrap();
        assert!((phase - 0.5).abs() < 1e-9);

        let phase = animation_phase(ElementKind::Car, Duration::from_secs(15)).unwrap();
        assert!((phase - 0.5).abs() < 1e-9);

        let phase = animation_phase(ElementKind::Bus, Duration::from_secs(7)).unwrap();
        assert!(phase.abs() < 1e-9);
    }

    #[test]
    fn test_bus_loops_faster_than_bike() {
        let elapsed = Duration::from_secs(4);
        let bus = animation_phase(ElementKind::Bus, elapsed).unwrap();
        let bike = animation_phase(ElementKind::Bike, elapsed).unwrap();
        assert!(bus > bike);
    }

    #[test]
    fn test_icon_row() {
        assert_eq!(icon_row(None, 10), 5);
        assert_eq!(icon_row(Some(0.0), 10), 0);
        assert_eq!(icon_row(Some(0.55), 10), 5);
        assert_eq!(icon_row(Some(0.999), 10), 9);
        assert_eq!(icon_row(Some(1.0), 10), 9);
        assert_eq!(icon_row(Some(0.5), 0), 0);
    }

    #[test]
    fn test_clock_sync() {
        let mut clock = SimulationClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);

        clock.sync(true);
        assert!(clock.is_running());

        clock.sync(false);
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
