//! Browser entry point
//!
//! The page owns the canvas, DOM HUD and key listeners. Each animation frame
//! it calls [`WebGame::frame`] and reads the JSON snapshots back.

use wasm_bindgen::prelude::*;

use crate::audio::AudioManager;
use crate::persistence::{BestScore, LocalStorage};
use crate::platform::{FrameClock, InputState, KeyMap};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, World, tick};
use crate::view::{HudSnapshot, ViewModel};

#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: InputState,
    clock: FrameClock,
    audio: AudioManager,
    storage: LocalStorage,
    settings: Settings,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let storage = LocalStorage::new();
        let settings = Settings::load(&storage);
        let best = BestScore::load(&storage);
        let seed = js_sys::Date::now() as u64;

        let mut state =
            GameState::with_world(seed, World::new(width, height)).with_best_score(best.0);
        state.muted = settings.muted;
        log::info!("Burger Blitz ready (seed {})", seed);

        WebGame {
            state,
            input: InputState::new(KeyMap::default()),
            clock: FrameClock::new(),
            audio: AudioManager::new(&settings),
            storage,
            settings,
        }
    }

    /// Returns true if the key is bound and the page should prevent default
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        // First gesture unlocks audio
        self.audio.resume();
        self.input.key_down(key, repeat)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    /// Tab hidden or window blurred
    pub fn blur(&mut self) {
        self.input.release_all();
        if self.state.phase.is_running() {
            self.input.request_pause();
            log::info!("Auto-paused (focus lost)");
        }
        self.clock.reset();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(World::new(width, height));
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.settings.set_master_volume(volume);
        self.audio.set_master_volume(self.settings.master_volume);
        self.settings.save(&mut self.storage);
    }

    /// Advance one animation frame
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.delta(now_ms);
        let input = self.input.take();
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            self.audio.handle(&event);
            match event {
                GameEvent::NewBestScore { score } => BestScore(score).store(&mut self.storage),
                GameEvent::MuteToggled { muted } => {
                    self.settings.muted = muted;
                    self.settings.save(&mut self.storage);
                }
                _ => {}
            }
        }
    }

    pub fn view_json(&self) -> String {
        serde_json::to_string(&ViewModel::from_state(&self.state)).unwrap_or_default()
    }

    pub fn hud_json(&self) -> String {
        serde_json::to_string(&HudSnapshot::from_state(&self.state)).unwrap_or_default()
    }
}
