//! Audio preferences
//!
//! Persisted as primitive values next to the best score.

use crate::persistence::{Error, Storage};

/// Player preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.6,
            muted: false,
        }
    }
}

impl Settings {
    const MUTED_KEY: &'static str = "pcbb_audio_muted";
    const VOLUME_KEY: &'static str = "pcbb_audio_volume";

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Load settings; anything missing or unreadable keeps its default
    pub fn load(storage: &dyn Storage) -> Self {
        let mut settings = Self::default();

        match storage.get(Self::MUTED_KEY) {
            Ok(Some(raw)) => settings.muted = raw == "1",
            Ok(None) => {}
            Err(e) => log::warn!("Mute setting unavailable: {}", e),
        }

        match storage.get(Self::VOLUME_KEY) {
            Ok(Some(raw)) => match parse_volume(&raw) {
                Ok(vol) => settings.set_master_volume(vol),
                Err(e) => log::warn!("{}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Volume setting unavailable: {}", e),
        }

        log::info!(
            "Settings: volume {:.2}, muted {}",
            settings.master_volume,
            settings.muted
        );
        settings
    }

    /// Save settings; failures are logged and dropped
    pub fn save(&self, storage: &mut dyn Storage) {
        let muted = if self.muted { "1" } else { "0" };
        if let Err(e) = storage.set(Self::MUTED_KEY, muted) {
            log::warn!("Could not save mute setting: {}", e);
        }
        if let Err(e) = storage.set(Self::VOLUME_KEY, &self.master_volume.to_string()) {
            log::warn!("Could not save volume setting: {}", e);
        }
    }
}

fn parse_volume(raw: &str) -> Result<f32, Error> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::InvalidValue {
            key: Settings::VOLUME_KEY.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_defaults_when_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(Settings::load(&storage), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            master_volume: 0.25,
            muted: true,
        };
        settings.save(&mut storage);
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_volume_clamped_and_validated() {
        let mut storage = MemoryStorage::new();
        storage.set("pcbb_audio_volume", "7").unwrap();
        assert_eq!(Settings::load(&storage).master_volume, 1.0);
        storage.set("pcbb_audio_volume", "NaN").unwrap();
        assert_eq!(Settings::load(&storage).master_volume, 0.6);
    }
}
