use log::{debug, warn};
use thiserror::Error;

use crate::constants::{FADE_STEP, MUSIC_VOLUME};
use crate::random::RandomSource;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    #[error("playback was rejected: {0}")]
    PlayRejected(String),
    #[error("no audio output available")]
    Unavailable,
}

/// Playback primitive the deck drives. Volume is in `[0, 1]`.
pub trait AudioChannel {
    fn set_source(&mut self, track: &str);
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    /// Stops playback and drops the loaded source.
    fn release(&mut self);
}

/// Next track after `current` finished: any other track when there is more
/// than one, otherwise the first.
pub fn next_track_index(current: usize, len: usize, unit_draw: f64) -> usize {
    if len <= 1 {
        return 0;
    }
    let offset = (unit_draw * (len - 1) as f64).floor() as usize;
    (offset.min(len - 2) + current + 1) % len
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStatus {
    Fading(f64),
    Silent,
    /// Tick arrived with no fade running.
    Idle,
}

/// Background music tied to the spin lifecycle.
///
/// `H` is the handle of the repeating timer that drives [`fade_tick`](Self::fade_tick).
/// The deck owns at most one; dropping a handle must cancel its timer, so
/// replacing or clearing it is all the cancellation needed.
pub struct MusicDeck<C, H> {
    channel: C,
    tracks: Vec<String>,
    current: usize,
    fade: Option<H>,
}

impl<C: AudioChannel, H> MusicDeck<C, H> {
    pub fn new<R: RandomSource + ?Sized>(mut channel: C, tracks: Vec<String>, rng: &mut R) -> Self {
        let current = if tracks.is_empty() { 0 } else { rng.next_index(tracks.len()) };
        if let Some(track) = tracks.get(current) {
            channel.set_source(track);
        }
        channel.set_volume(MUSIC_VOLUME);
        Self {
            channel,
            tracks,
            current,
            fade: None,
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn current_track(&self) -> Option<&str> {
        self.tracks.get(self.current).map(String::as_str)
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Cancels any fade, restores volume and starts the current track.
    /// Playback failures are logged; the spin goes on without music.
    pub fn on_spin_start(&mut self, music_enabled: bool) {
        if !music_enabled {
            return;
        }
        self.cancel_fade();
        if self.tracks.is_empty() {
            debug!("No tracks available, spinning without music");
            return;
        }
        self.channel.set_volume(MUSIC_VOLUME);
        if let Err(e) = self.channel.play() {
            warn!("Audio play failed: {}", e);
        }
    }

    /// Installs the timer for a new fade-out, cancelling the previous one.
    pub fn begin_fade(&mut self, handle: H) {
        self.fade = Some(handle);
    }

    pub fn cancel_fade(&mut self) {
        self.fade = None;
    }

    pub fn fade_tick(&mut self) -> FadeStatus {
        if self.fade.is_none() {
            return FadeStatus::Idle;
        }
        let volume = self.channel.volume();
        if volume > FADE_STEP {
            let next = volume - FADE_STEP;
            self.channel.set_volume(next);
            FadeStatus::Fading(next)
        } else {
            self.channel.set_volume(0.0);
            self.channel.pause();
            self.fade = None;
            FadeStatus::Silent
        }
    }

    /// Natural end of a track: move to another one and keep playing only
    /// while a spin is in flight.
    pub fn on_track_ended<R: RandomSource + ?Sized>(&mut self, rng: &mut R, is_spinning: bool) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = next_track_index(self.current, self.tracks.len(), rng.next_unit());
        let track = &self.tracks[self.current];
        debug!("Advancing to track {}", track);
        self.channel.set_source(track);

        if is_spinning {
            if let Err(e) = self.channel.play() {
                warn!("Audio play failed: {}", e);
            }
        }
    }

    /// View teardown: stop sound and cancel the fade timer.
    pub fn release(&mut self) {
        self.cancel_fade();
        self.channel.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::random::SequenceRandom;

    #[derive(Default)]
    struct FakeChannel {
        source: Option<String>,
        volume: f64,
        playing: bool,
        plays: u32,
        reject: bool,
    }

    impl AudioChannel for FakeChannel {
        fn set_source(&mut self, track: &str) {
            self.source = Some(track.to_string());
        }

        fn play(&mut self) -> Result<(), AudioError> {
            if self.reject {
                return Err(AudioError::PlayRejected("autoplay blocked".to_string()));
            }
            self.playing = true;
            self.plays += 1;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn volume(&self) -> f64 {
            self.volume
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn release(&mut self) {
            self.playing = false;
            self.source = None;
        }
    }

    /// Flags itself when dropped, like a cancelled timer.
    struct TimerHandle(Rc<Cell<bool>>);

    impl Drop for TimerHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    fn tracks() -> Vec<String> {
        vec!["a.mp3".to_string(), "b.mp3".to_string(), "c.mp3".to_string()]
    }

    fn deck(rng: &mut SequenceRandom) -> MusicDeck<FakeChannel, TimerHandle> {
        MusicDeck::new(FakeChannel::default(), tracks(), rng)
    }

    #[test]
    fn test_next_track_never_repeats() {
        for current in 0..3 {
            for draw in [0.0, 0.49, 0.5, 0.999] {
                assert_ne!(next_track_index(current, 3, draw), current);
            }
        }
        assert_eq!(next_track_index(0, 1, 0.7), 0);
        assert_eq!(next_track_index(0, 0, 0.7), 0);
        assert_eq!(next_track_index(2, 3, 0.0), 0);
    }

    #[test]
    fn test_initial_track_is_random() {
        let mut rng = SequenceRandom::new(vec![0.5]);
        let deck = deck(&mut rng);
        assert_eq!(deck.current_track(), Some("b.mp3"));
        assert_eq!(deck.channel().volume, MUSIC_VOLUME);
    }

    #[test]
    fn test_spin_start_respects_music_toggle() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck = deck(&mut rng);
        deck.on_spin_start(false);
        assert!(!deck.channel().playing);
        deck.on_spin_start(true);
        assert!(deck.channel().playing);
    }

    #[test]
    fn test_fade_runs_to_silence() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck = deck(&mut rng);
        deck.on_spin_start(true);

        let cancelled = Rc::new(Cell::new(false));
        deck.begin_fade(TimerHandle(cancelled.clone()));

        let mut ticks = 0;
        loop {
            ticks += 1;
            match deck.fade_tick() {
                FadeStatus::Fading(volume) => assert!(volume > 0.0),
                FadeStatus::Silent => break,
                FadeStatus::Idle => panic!("fade stopped early"),
            }
        }
        assert_eq!(ticks, 14);
        assert_eq!(deck.channel().volume, 0.0);
        assert!(!deck.channel().playing);
        assert!(cancelled.get());
        assert!(!deck.is_fading());
        assert_eq!(deck.fade_tick(), FadeStatus::Idle);
    }

    #[test]
    fn test_new_spin_cancels_fade() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck = deck(&mut rng);
        deck.on_spin_start(true);

        let cancelled = Rc::new(Cell::new(false));
        deck.begin_fade(TimerHandle(cancelled.clone()));
        deck.fade_tick();
        deck.fade_tick();

        deck.on_spin_start(true);
        assert!(cancelled.get());
        assert_eq!(deck.channel().volume, MUSIC_VOLUME);
        assert!(deck.channel().playing);
    }

    #[test]
    fn test_replacing_fade_cancels_previous() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck = deck(&mut rng);
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        deck.begin_fade(TimerHandle(first.clone()));
        deck.begin_fade(TimerHandle(second.clone()));
        assert!(first.get());
        assert!(!second.get());
    }

    #[test]
    fn test_play_failure_is_not_fatal() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck: MusicDeck<FakeChannel, TimerHandle> = MusicDeck::new(
            FakeChannel { reject: true, ..FakeChannel::default() },
            tracks(),
            &mut rng,
        );
        deck.on_spin_start(true);
        assert!(!deck.channel().playing);
    }

    #[test]
    fn test_track_end_plays_only_while_spinning() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck = deck(&mut rng);
        assert_eq!(deck.current_track(), Some("a.mp3"));

        deck.on_track_ended(&mut rng, false);
        assert_eq!(deck.current_track(), Some("b.mp3"));
        assert_eq!(deck.channel().source.as_deref(), Some("b.mp3"));
        assert_eq!(deck.channel().plays, 0);

        deck.on_track_ended(&mut rng, true);
        assert_eq!(deck.current_track(), Some("c.mp3"));
        assert_eq!(deck.channel().plays, 1);
    }

    #[test]
    fn test_empty_inventory_is_silent() {
        let mut rng = SequenceRandom::new(vec![0.3]);
        let mut deck: MusicDeck<FakeChannel, TimerHandle> =
            MusicDeck::new(FakeChannel::default(), vec![], &mut rng);
        deck.on_spin_start(true);
        deck.on_track_ended(&mut rng, true);
        assert_eq!(deck.current_track(), None);
        assert_eq!(deck.channel().plays, 0);
    }

    #[test]
    fn test_release_stops_everything() {
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut deck = deck(&mut rng);
        deck.on_spin_start(true);
        let cancelled = Rc::new(Cell::new(false));
        deck.begin_fade(TimerHandle(cancelled.clone()));
        deck.release();
        assert!(cancelled.get());
        assert!(!deck.channel().playing);
        assert_eq!(deck.channel().source, None);
    }
}
