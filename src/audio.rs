//! Audio sink contract and event dispatch
//!
//! The simulation never plays audio itself. It reports sound events and a music
//! cue per frame; [`dispatch`] hands them to whatever [`AudioSink`] the frame
//! loop was built with. Sinks swallow their own failures.

use crate::sim::{FrameOutcome, GameEvent, MusicCue, SoundKind, Track};

/// Something that can play the game's sounds and music
///
/// All calls are fire-and-forget. Redundant calls (starting music that is
/// already playing, stopping silence) must be harmless.
pub trait AudioSink {
    fn play_sound(&mut self, kind: SoundKind);
    fn start_music(&mut self, track: Track);
    fn stop_music(&mut self);
}

/// Execute a frame's sound events and music cue against a sink
pub fn dispatch<A: AudioSink + ?Sized>(outcome: &FrameOutcome, sink: &mut A) {
    for event in &outcome.events {
        if let GameEvent::Sound(kind) = event {
            sink.play_sound(*kind);
        }
    }

    match outcome.music {
        MusicCue::Play(track) => sink.start_music(track),
        MusicCue::Stop => sink.stop_music(),
    }
}

/// Sink that does nothing, for headless runs and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _kind: SoundKind) {}
    fn start_music(&mut self, _track: Track) {}
    fn stop_music(&mut self) {}
}

/// Sink that logs what a real backend would play
///
/// Tracks the playing track so music transitions are logged once rather than
/// every frame.
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    playing: Option<Track>,
    sounds_played: u64,
    muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute sound effects; music cues are still followed
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn playing(&self) -> Option<Track> {
        self.playing
    }

    pub fn sounds_played(&self) -> u64 {
        self.sounds_played
    }
}

impl AudioSink for LogAudio {
    fn play_sound(&mut self, kind: SoundKind) {
        if self.muted {
            return;
        }
        self.sounds_played += 1;
        log::debug!("Sound: {:?}", kind);
    }

    fn start_music(&mut self, track: Track) {
        if self.playing.is_none() {
            log::info!("Music started: {:?}", track);
            self.playing = Some(track);
        }
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.playing.take() {
            log::info!("Music stopped: {:?}", track);
        }
    }
}

/// Sink that records every call, for inspecting what the game asked for
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAudio {
    pub sounds: Vec<SoundKind>,
    pub music_starts: u32,
    pub music_stops: u32,
}

#[cfg(test)]
impl RecordingAudio {
    pub fn count(&self, kind: SoundKind) -> usize {
        self.sounds.iter().filter(|k| **k == kind).count()
    }
}

#[cfg(test)]
impl AudioSink for RecordingAudio {
    fn play_sound(&mut self, kind: SoundKind) {
        self.sounds.push(kind);
    }

    fn start_music(&mut self, _track: Track) {
        self.music_starts += 1;
    }

    fn stop_music(&mut self) {
        self.music_stops += 1;
    }
}
