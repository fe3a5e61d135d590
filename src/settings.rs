//! Game settings and preferences
//!
//! Persisted separately from completion progress in LocalStorage.

use serde::{Deserialize, Serialize};

/// Density of the star-dust net drawn down the middle of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NetDensity {
    Sparse,
    #[default]
    Normal,
    Dense,
}

impl NetDensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetDensity::Sparse => "Sparse",
            NetDensity::Normal => "Normal",
            NetDensity::Dense => "Dense",
        }
    }

    /// Next density in the settings button cycle
    pub fn next(self) -> Self {
        match self {
            NetDensity::Sparse => NetDensity::Normal,
            NetDensity::Normal => NetDensity::Dense,
            NetDensity::Dense => NetDensity::Sparse,
        }
    }

    /// Stars drawn per frame
    pub fn star_count(&self) -> usize {
        match self {
            NetDensity::Sparse => 40,
            NetDensity::Normal => 100,
            NetDensity::Dense => 200,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Star-dust net density
    pub net_density: NetDensity,
    /// Reduced motion (net stars hold still instead of twinkling)
    pub reduced_motion: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Paddle hit volume relative to other effects
    pub hit_volume: f32,
    /// Mute everything
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            net_density: NetDensity::Normal,
            reduced_motion: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            hit_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective star count for the net
    pub fn star_count(&self) -> usize {
        self.net_density.star_count()
    }

    /// Whether net stars are re-scattered every frame
    pub fn twinkle(&self) -> bool {
        !self.reduced_motion
    }

    /// Effective effects volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Flip mute, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Step the net to the next density
    pub fn cycle_net_density(&mut self) -> NetDensity {
        self.net_density = self.net_density.next();
        self.net_density
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "star_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_net_matches_classic_board() {
        assert_eq!(Settings::default().star_count(), 100);
    }

    #[test]
    fn test_muted_volume_is_zero() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_volume(), 0.0);
        assert!((Settings::default().effective_volume() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"muted": true}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.net_density, NetDensity::Normal);
    }

    #[test]
    fn test_toggle_mute_silences_and_restores() {
        let mut settings = Settings::default();
        assert!(settings.toggle_mute());
        assert_eq!(settings.effective_volume(), 0.0);
        assert!(!settings.toggle_mute());
        assert!(settings.effective_volume() > 0.0);
    }

    #[test]
    fn test_density_cycle_wraps() {
        let mut settings = Settings::default();
        assert_eq!(settings.cycle_net_density(), NetDensity::Dense);
        assert_eq!(settings.star_count(), 200);
        assert_eq!(settings.cycle_net_density(), NetDensity::Sparse);
        assert_eq!(settings.cycle_net_density(), NetDensity::Normal);
        assert_eq!(settings.net_density.as_str(), "Normal");
    }

    #[test]
    fn test_saved_json_reloads() {
        let mut settings = Settings::default();
        settings.toggle_mute();
        settings.cycle_net_density();
        let json = serde_json::to_string(&settings).unwrap();
        let reloaded: Settings = serde_json::from_str(&json).unwrap();
        assert!(reloaded.muted);
        assert_eq!(reloaded.net_density, NetDensity::Dense);
    }
}
