//! Simulated playback state machine.

/// Restarting instead of skipping back applies after this many seconds.
const PREVIOUS_RESTART_THRESHOLD_SECS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) title: &'static str,
    pub(crate) artist: &'static str,
    pub(crate) duration_secs: u32,
}

pub(crate) const PLAYLIST: &[Track] = &[
    Track {
        title: "Startup Chime (Extended Mix)",
        artist: "Cruz OS",
        duration_secs: 94,
    },
    Track {
        title: "Platinum Afternoon",
        artist: "The Extensions",
        duration_secs: 187,
    },
    Track {
        title: "Rebuild Desktop",
        artist: "Finder & Friends",
        duration_secs: 156,
    },
    Track {
        title: "Sad Mac Blues",
        artist: "Error Type 11",
        duration_secs: 212,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    pub(crate) fn cycled(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Off => "Repeat: Off",
            Self::All => "Repeat: All",
            Self::One => "Repeat: One",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlayerState {
    playlist: &'static [Track],
    index: usize,
    position_secs: u32,
    volume: u8,
    repeat: RepeatMode,
    playing: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::with_playlist(PLAYLIST)
    }
}

impl PlayerState {
    pub(crate) fn with_playlist(playlist: &'static [Track]) -> Self {
        Self {
            playlist,
            index: 0,
            position_secs: 0,
            volume: 75,
            repeat: RepeatMode::Off,
            playing: false,
        }
    }

    pub(crate) fn playlist(&self) -> &'static [Track] {
        self.playlist
    }

    pub(crate) fn current_index(&self) -> usize {
        self.index
    }

    pub(crate) fn current_track(&self) -> Option<Track> {
        self.playlist.get(self.index).copied()
    }

    pub(crate) fn position_secs(&self) -> u32 {
        self.position_secs
    }

    pub(crate) fn volume(&self) -> u8 {
        self.volume
    }

    pub(crate) fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn progress_percent(&self) -> f64 {
        match self.current_track() {
            Some(track) if track.duration_secs > 0 => {
                f64::from(self.position_secs) * 100.0 / f64::from(track.duration_secs)
            }
            _ => 0.0,
        }
    }

    pub(crate) fn toggle_play(&mut self) {
        self.playing = !self.playing && !self.playlist.is_empty();
    }

    pub(crate) fn pause(&mut self) {
        self.playing = false;
    }

    pub(crate) fn stop(&mut self) {
        self.playing = false;
        self.position_secs = 0;
    }

    pub(crate) fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycled();
    }

    pub(crate) fn set_volume(&mut self, volume: f64) {
        self.volume = volume.round().clamp(0.0, 100.0) as u8;
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.playlist.len() {
            self.index = index;
            self.position_secs = 0;
        }
    }

    /// Manual skip; always wraps.
    pub(crate) fn next(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.playlist.len();
        self.position_secs = 0;
    }

    pub(crate) fn previous(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        if self.position_secs > PREVIOUS_RESTART_THRESHOLD_SECS {
            self.position_secs = 0;
            return;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.playlist.len() - 1);
        self.position_secs = 0;
    }

    pub(crate) fn seek_percent(&mut self, percent: f64) {
        let Some(track) = self.current_track() else {
            return;
        };
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        self.position_secs = (f64::from(track.duration_secs) * ratio).round() as u32;
    }

    /// Advances playback; reaching the end of the track applies the repeat policy.
    pub(crate) fn tick(&mut self, elapsed_secs: u32) {
        if !self.playing {
            return;
        }
        let Some(track) = self.current_track() else {
            self.playing = false;
            return;
        };
        self.position_secs = self.position_secs.saturating_add(elapsed_secs);
        if self.position_secs >= track.duration_secs {
            self.finish_track();
        }
    }

    fn finish_track(&mut self) {
        self.position_secs = 0;
        let is_last = self.index + 1 >= self.playlist.len();
        match self.repeat {
            RepeatMode::One => {}
            RepeatMode::All => self.index = if is_last { 0 } else { self.index + 1 },
            RepeatMode::Off if is_last => self.playing = false,
            RepeatMode::Off => self.index += 1,
        }
    }
}

pub(crate) fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
