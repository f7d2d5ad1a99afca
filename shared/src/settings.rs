use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SPIN_DURATION_SECS, MAX_SPIN_DURATION_SECS, SPIN_DURATION_STEP_SECS};

/// User-adjustable spin settings. Kept in memory for the session.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub spin_duration_secs: f64,
    pub music_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            spin_duration_secs: DEFAULT_SPIN_DURATION_SECS,
            music_enabled: true,
        }
    }
}

impl GameSettings {
    /// Clamps into `[0, 6]` and snaps to the nearest half second.
    /// Non-finite input keeps the current value.
    pub fn set_spin_duration(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        let clamped = secs.clamp(0.0, MAX_SPIN_DURATION_SECS);
        self.spin_duration_secs = (clamped / SPIN_DURATION_STEP_SECS).round() * SPIN_DURATION_STEP_SECS;
    }

    pub fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
    }

    pub fn spin_duration_ms(&self) -> f64 {
        self.spin_duration_secs * 1000.0
    }

    pub fn duration_label(&self) -> String {
        if self.spin_duration_secs == 0.0 {
            "Instant".to_string()
        } else {
            format!("{}s", self.spin_duration_secs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.spin_duration_secs, 4.0);
        assert!(settings.music_enabled);
        assert_eq!(settings.duration_label(), "4s");
    }

    #[test]
    fn test_duration_clamps_and_snaps() {
        let mut settings = GameSettings::default();
        settings.set_spin_duration(2.3);
        assert_eq!(settings.spin_duration_secs, 2.5);
        assert_eq!(settings.duration_label(), "2.5s");

        settings.set_spin_duration(9.0);
        assert_eq!(settings.spin_duration_secs, 6.0);

        settings.set_spin_duration(-1.0);
        assert_eq!(settings.spin_duration_secs, 0.0);
        assert_eq!(settings.duration_label(), "Instant");

        settings.set_spin_duration(f64::NAN);
        assert_eq!(settings.spin_duration_secs, 0.0);
    }

    #[test]
    fn test_toggle_music() {
        let mut settings = GameSettings::default();
        settings.toggle_music();
        assert!(!settings.music_enabled);
        assert_eq!(settings.spin_duration_ms(), 4000.0);
    }
}
