//! Procedural sound cues
//!
//! Every sound is a short list of synthesized notes - no audio files.
//! [`sound_for`] maps game events to notes on any target; on the web the
//! [`AudioManager`] plays them through the Web Audio API.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One synthesized note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Start frequency (Hz)
    pub freq: f32,
    /// Glide target for sweeps
    pub end_freq: Option<f32>,
    /// Offset from the cue start (seconds)
    pub start: f64,
    pub duration: f64,
    pub wave: Wave,
    /// Relative loudness (0.0 - 1.0) before master volume
    pub gain: f32,
}

/// A complete cue
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub notes: Vec<Note>,
}

impl Sound {
    fn tone(freq: f32, duration: f64, wave: Wave, gain: f32) -> Self {
        Self {
            notes: vec![Note {
                freq,
                end_freq: None,
                start: 0.0,
                duration,
                wave,
                gain,
            }],
        }
    }

    fn sweep(from: f32, to: f32, duration: f64, wave: Wave, gain: f32) -> Self {
        Self {
            notes: vec![Note {
                freq: from,
                end_freq: Some(to),
                start: 0.0,
                duration,
                wave,
                gain,
            }],
        }
    }

    /// Notes played one after another
    fn arpeggio(freqs: &[f32], note_len: f64, wave: Wave, gain: f32) -> Self {
        Self {
            notes: freqs
                .iter()
                .enumerate()
                .map(|(i, &freq)| Note {
                    freq,
                    end_freq: None,
                    start: i as f64 * note_len,
                    duration: note_len,
                    wave,
                    gain,
                })
                .collect(),
        }
    }

    /// Total length in seconds
    pub fn length(&self) -> f64 {
        self.notes
            .iter()
            .map(|n| n.start + n.duration)
            .fold(0.0, f64::max)
    }
}

/// Pitch of a matched catch climbs a semitone per combo step, up to an octave
fn match_pitch(combo: u32) -> f32 {
    let steps = combo.saturating_sub(1).min(12) as f32;
    440.0 * 2f32.powf(steps / 12.0)
}

/// Sound for an event, if it has one
pub fn sound_for(event: &GameEvent) -> Option<Sound> {
    let sound = match event {
        GameEvent::CatchMatch { combo } => {
            Sound::tone(match_pitch(*combo), 0.09, Wave::Triangle, 0.8)
        }
        GameEvent::CatchMismatch => Sound::tone(160.0, 0.12, Wave::Square, 0.5),
        GameEvent::MismatchEcho => Sound::tone(120.0, 0.12, Wave::Square, 0.5),
        GameEvent::CatchRotten => Sound::sweep(300.0, 80.0, 0.3, Wave::Sawtooth, 0.6),
        GameEvent::CatchGolden => {
            Sound::arpeggio(&[784.0, 988.0, 1175.0, 1568.0], 0.07, Wave::Sine, 0.7)
        }
        GameEvent::OrderComplete { .. } => {
            Sound::arpeggio(&[523.0, 659.0, 784.0, 1047.0], 0.11, Wave::Triangle, 0.8)
        }
        GameEvent::LevelUp { .. } => Sound::sweep(400.0, 1200.0, 0.35, Wave::Square, 0.5),
        GameEvent::PauseToggled { paused } => {
            Sound::tone(if *paused { 330.0 } else { 440.0 }, 0.06, Wave::Sine, 0.6)
        }
        GameEvent::MuteToggled { .. } => Sound::tone(660.0, 0.06, Wave::Sine, 0.6),
        GameEvent::GameOver { .. } => {
            Sound::arpeggio(&[392.0, 330.0, 262.0, 196.0], 0.18, Wave::Sine, 0.8)
        }
        GameEvent::NewBestScore { .. } => {
            Sound::arpeggio(&[500.0, 600.0, 700.0, 800.0, 1000.0], 0.08, Wave::Triangle, 0.6)
        }
        GameEvent::OrderStarted { .. } => return None,
    };
    Some(sound)
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Note, Sound, Wave, sound_for};
    use crate::settings::Settings;
    use crate::sim::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: settings.master_volume,
                muted: settings.muted,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        /// React to a game event
        pub fn handle(&mut self, event: &GameEvent) {
            if let GameEvent::MuteToggled { muted } = event {
                self.set_muted(*muted);
            }
            if let Some(sound) = sound_for(event) {
                self.play(&sound);
            }
        }

        /// Play a sound
        pub fn play(&self, sound: &Sound) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let now = ctx.current_time();
            for note in &sound.notes {
                self.play_note(ctx, note, now, vol);
            }
        }

        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_note(&self, ctx: &AudioContext, note: &Note, now: f64, vol: f32) {
            let osc_type = match note.wave {
                Wave::Sine => OscillatorType::Sine,
                Wave::Square => OscillatorType::Square,
                Wave::Triangle => OscillatorType::Triangle,
                Wave::Sawtooth => OscillatorType::Sawtooth,
            };
            let Some((osc, gain)) = self.create_osc(ctx, note.freq, osc_type) else {
                return;
            };
            let t = now + note.start;
            let end = t + note.duration;

            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain()
                .linear_ramp_to_value_at_time(vol * note.gain, t + 0.01)
                .ok();
            if let Some(to) = note.end_freq {
                osc.frequency().set_value_at_time(note.freq, t).ok();
                osc.frequency().linear_ramp_to_value_at_time(to, end).ok();
                gain.gain().exponential_ramp_to_value_at_time(0.0001, end).ok();
            } else {
                gain.gain().linear_ramp_to_value_at_time(0.0001, end).ok();
            }

            osc.start_with_when(t).ok();
            osc.stop_with_when(end + 0.02).ok();
        }
    }
}
