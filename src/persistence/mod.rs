//! Primitive key/value persistence and the best score
//!
//! Features:
//! - LocalStorage backend on the web, in-memory elsewhere
//! - Failures are typed, logged and otherwise ignored by callers

pub mod storage;

pub use storage::{Error, MemoryStorage, Result, Storage};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

/// Best score record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore(pub u64);

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "pcbb_best_score";

    /// Read the stored best score; missing or unreadable values count as 0
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<u64>() {
                Ok(score) => {
                    log::info!("Loaded best score {}", score);
                    BestScore(score)
                }
                Err(_) => {
                    log::warn!("Ignoring malformed best score {:?}", raw);
                    BestScore(0)
                }
            },
            Ok(None) => BestScore(0),
            Err(e) => {
                log::warn!("Best score unavailable: {}", e);
                BestScore(0)
            }
        }
    }

    /// Write the best score; failures are logged and dropped
    pub fn store(&self, storage: &mut dyn Storage) {
        if let Err(e) = storage.set(Self::STORAGE_KEY, &self.0.to_string()) {
            log::warn!("Could not save best score: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A backend that always fails
    struct Broken;

    impl Storage for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Backend("quota exceeded".into()))
        }
    }

    #[test]
    fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(BestScore::load(&storage), BestScore(0));
        BestScore(1234).store(&mut storage);
        assert_eq!(BestScore::load(&storage), BestScore(1234));
    }

    #[test]
    fn test_malformed_value_is_zero() {
        let mut storage = MemoryStorage::new();
        storage.set(BestScore::STORAGE_KEY, "lots").unwrap();
        assert_eq!(BestScore::load(&storage), BestScore(0));
    }

    #[test]
    fn test_broken_backend_degrades_silently() {
        let mut storage = Broken;
        assert_eq!(BestScore::load(&storage), BestScore(0));
        BestScore(10).store(&mut storage);
    }
}
