//! Web Audio backend

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::{Note, SoundEffect, Waveform};
use crate::settings::Settings;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    hit_volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
            hit_volume: settings.hit_volume.clamp(0.0, 1.0),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Pick up changed volume or mute
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
        self.hit_volume = settings.hit_volume.clamp(0.0, 1.0);
    }

    /// Play a sound effect without waiting for it
    pub fn play(&self, effect: SoundEffect) {
        let mut vol = self.volume;
        if effect == SoundEffect::PaddleHit {
            vol *= self.hit_volume;
        }
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        for note in effect.notes() {
            self.play_note(ctx, note, vol);
        }
    }

    /// Create an oscillator with gain envelope
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

    fn play_note(&self, ctx: &AudioContext, note: &Note, vol: f32) {
        let osc_type = match note.wave {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Triangle => OscillatorType::Triangle,
        };
        let Some((osc, gain)) = self.create_osc(ctx, note.freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + note.delay;

        gain.gain().set_value_at_time(vol * note.gain, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + note.decay)
            .ok();
        if let Some(end_freq) = note.glide_to {
            osc.frequency().set_value_at_time(note.freq, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(end_freq, t + note.decay)
                .ok();
        }

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + note.decay + 0.05).ok();
    }
}
