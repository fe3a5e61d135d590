//! Sound cues for simulation events
//!
//! Procedurally generated effects - no audio files needed. Each effect is a
//! short sequence of enveloped oscillator notes; the Web Audio backend just
//! plays them.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::{GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Player scored a point
    PlayerPoint,
    /// Opponent scored a point
    OpponentPoint,
    /// Player won the match
    Winner,
    /// Opponent won the match
    Loser,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// One enveloped tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Start frequency (Hz)
    pub freq: f32,
    /// Frequency at the end of the note, if it glides
    pub glide_to: Option<f32>,
    /// Offset from the effect start (seconds)
    pub delay: f64,
    /// Length of the decay (seconds)
    pub decay: f64,
    /// Peak gain before volume scaling
    pub gain: f32,
    pub wave: Waveform,
}

impl Note {
    const fn tone(freq: f32, delay: f64, decay: f64, gain: f32, wave: Waveform) -> Self {
        Self {
            freq,
            glide_to: None,
            delay,
            decay,
            gain,
            wave,
        }
    }
}

const PADDLE_HIT: &[Note] = &[Note {
    freq: 150.0,
    glide_to: Some(60.0),
    delay: 0.0,
    decay: 0.1,
    gain: 0.6,
    wave: Waveform::Sine,
}];

const PLAYER_POINT: &[Note] = &[
    Note::tone(600.0, 0.0, 0.15, 0.25, Waveform::Sine),
    Note::tone(800.0, 0.08, 0.15, 0.25, Waveform::Sine),
    Note::tone(1000.0, 0.16, 0.15, 0.25, Waveform::Sine),
];

const OPPONENT_POINT: &[Note] = &[
    Note::tone(500.0, 0.0, 0.15, 0.25, Waveform::Square),
    Note::tone(350.0, 0.1, 0.2, 0.25, Waveform::Square),
];

const WINNER: &[Note] = &[
    Note::tone(500.0, 0.0, 0.25, 0.25, Waveform::Triangle),
    Note::tone(600.0, 0.08, 0.25, 0.25, Waveform::Triangle),
    Note::tone(700.0, 0.16, 0.25, 0.25, Waveform::Triangle),
    Note::tone(800.0, 0.24, 0.25, 0.25, Waveform::Triangle),
    Note::tone(1000.0, 0.32, 0.25, 0.25, Waveform::Triangle),
];

const LOSER: &[Note] = &[
    Note::tone(400.0, 0.0, 0.3, 0.3, Waveform::Sine),
    Note::tone(350.0, 0.2, 0.3, 0.3, Waveform::Sine),
    Note::tone(300.0, 0.4, 0.3, 0.3, Waveform::Sine),
    Note::tone(200.0, 0.6, 0.3, 0.3, Waveform::Sine),
];

impl SoundEffect {
    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::PointScored { side: Side::Left } => SoundEffect::PlayerPoint,
            GameEvent::PointScored { side: Side::Right } => SoundEffect::OpponentPoint,
            GameEvent::GameWon => SoundEffect::Winner,
            GameEvent::GameLost => SoundEffect::Loser,
        }
    }

    pub fn notes(&self) -> &'static [Note] {
        match self {
            SoundEffect::PaddleHit => PADDLE_HIT,
            SoundEffect::PlayerPoint => PLAYER_POINT,
            SoundEffect::OpponentPoint => OPPONENT_POINT,
            SoundEffect::Winner => WINNER,
            SoundEffect::Loser => LOSER,
        }
    }

    /// Total length including the last note's tail (seconds)
    pub fn duration(&self) -> f64 {
        self.notes()
            .iter()
            .map(|n| n.delay + n.decay)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_cues_differ_by_side() {
        let player = SoundEffect::for_event(&GameEvent::PointScored { side: Side::Left });
        let opponent = SoundEffect::for_event(&GameEvent::PointScored { side: Side::Right });
        assert_eq!(player, SoundEffect::PlayerPoint);
        assert_eq!(opponent, SoundEffect::OpponentPoint);
        assert_ne!(player.notes(), opponent.notes());
    }

    #[test]
    fn test_both_paddles_share_hit_cue() {
        for side in [Side::Left, Side::Right] {
            assert_eq!(
                SoundEffect::for_event(&GameEvent::PaddleHit { side }),
                SoundEffect::PaddleHit
            );
        }
    }

    #[test]
    fn test_hit_is_short() {
        assert!(SoundEffect::PaddleHit.duration() < 0.2);
        assert!(SoundEffect::Loser.duration() > SoundEffect::PaddleHit.duration());
    }
}
