//! Playback state machine for the media detail viewer
//!
//! The controller is deliberately decoupled from any rendering surface: it
//! tracks the play/mute flags and decides which command the bound media
//! element should execute, while the DOM adapter (`hooks::use_playback`)
//! carries the commands out. Play completion is asynchronous in the browser,
//! so its outcome is reported back through [`PlaybackController::handle_play_result`];
//! a rejected play reverts the state to paused instead of leaving the
//! indicator claiming playback.

use thiserror::Error;

/// Media element command failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The element refused to start playback (autoplay policy, codec, ...)
    #[error("play request rejected: {message}")]
    Rejected { message: String },

    /// No media element exists under the viewer's element id
    #[error("no media element bound: {element_id}")]
    MissingElement { element_id: String },
}

impl PlaybackError {
    pub fn rejected(message: impl Into<String>) -> Self {
        PlaybackError::Rejected {
            message: message.into(),
        }
    }

    pub fn missing_element(element_id: impl Into<String>) -> Self {
        PlaybackError::MissingElement {
            element_id: element_id.into(),
        }
    }
}

/// Current playback flags: two independent toggles, four reachable states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
}

/// Command for the bound media surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    SetMuted(bool),
}

/// Play/pause/mute controller for one media element.
///
/// Starts paused and unmuted. Playback toggling is optimistic: the flag
/// flips immediately so the UI responds, and a later rejection reverts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    autoplay_attempted: bool,
    pending_play: bool,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn is_muted(&self) -> bool {
        self.state.muted
    }

    /// Flip the playback flag and return the command to execute.
    ///
    /// Pausing cancels any in-flight play request: its completion will no
    /// longer change the state.
    pub fn toggle_play_pause(&mut self) -> PlaybackCommand {
        if self.state.playing {
            self.state.playing = false;
            self.pending_play = false;
            PlaybackCommand::Pause
        } else {
            self.state.playing = true;
            self.pending_play = true;
            PlaybackCommand::Play
        }
    }

    /// Flip the mute flag and return the command to execute; muting has no
    /// failure path.
    pub fn toggle_mute(&mut self) -> PlaybackCommand {
        self.state.muted = !self.state.muted;
        PlaybackCommand::SetMuted(self.state.muted)
    }

    /// One-shot autoplay request when the viewer binds its element.
    ///
    /// Unlike a user toggle this is not optimistic: the playing flag only
    /// rises once the play request succeeds, and a rejection schedules no
    /// retry. Subsequent calls return `None`.
    pub fn request_autoplay(&mut self) -> Option<PlaybackCommand> {
        if self.autoplay_attempted {
            return None;
        }
        self.autoplay_attempted = true;
        self.pending_play = true;
        Some(PlaybackCommand::Play)
    }

    /// Report the asynchronous outcome of the most recent play command.
    ///
    /// A success raises the playing flag, a failure reverts it to paused. A
    /// completion arriving after the user already paused is ignored.
    pub fn handle_play_result(&mut self, result: &Result<(), PlaybackError>) -> PlaybackState {
        if self.pending_play {
            self.pending_play = false;
            self.state.playing = result.is_ok();
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_paused_and_unmuted() {
        let controller = PlaybackController::new();

        assert!(!controller.is_playing());
        assert!(!controller.is_muted());
    }

    #[test]
    fn test_toggle_play_pause_cycle() {
        let mut controller = PlaybackController::new();

        assert_eq!(controller.toggle_play_pause(), PlaybackCommand::Play);
        assert!(controller.is_playing());

        controller.handle_play_result(&Ok(()));
        assert!(controller.is_playing());

        assert_eq!(controller.toggle_play_pause(), PlaybackCommand::Pause);
        assert!(!controller.is_playing());
    }

    /// A rejected play reverts the state instead of claiming playback
    #[test]
    fn test_play_rejection_reverts_to_paused() {
        let mut controller = PlaybackController::new();

        controller.toggle_play_pause();
        assert!(controller.is_playing(), "toggle is optimistic");

        let result = Err(PlaybackError::rejected("NotAllowedError"));
        let state = controller.handle_play_result(&result);

        assert!(!state.playing);
        assert!(!controller.is_playing());
    }

    /// Mute is independent of playback and survives a play rejection
    #[test]
    fn test_mute_is_independent() {
        let mut controller = PlaybackController::new();

        assert_eq!(controller.toggle_mute(), PlaybackCommand::SetMuted(true));
        assert!(controller.is_muted());

        controller.toggle_play_pause();
        controller.handle_play_result(&Err(PlaybackError::rejected("blocked")));

        assert!(controller.is_muted());
        assert!(!controller.is_playing());

        assert_eq!(controller.toggle_mute(), PlaybackCommand::SetMuted(false));
        assert!(!controller.is_muted());
    }

    /// All four flag combinations are reachable
    #[test]
    fn test_four_states_are_reachable() {
        let mut controller = PlaybackController::new();
        assert_eq!(controller.state(), PlaybackState { playing: false, muted: false });

        controller.toggle_mute();
        assert_eq!(controller.state(), PlaybackState { playing: false, muted: true });

        controller.toggle_play_pause();
        controller.handle_play_result(&Ok(()));
        assert_eq!(controller.state(), PlaybackState { playing: true, muted: true });

        controller.toggle_mute();
        assert_eq!(controller.state(), PlaybackState { playing: true, muted: false });
    }

    /// Autoplay fires once; later requests are refused
    #[test]
    fn test_autoplay_is_one_shot() {
        let mut controller = PlaybackController::new();

        assert_eq!(controller.request_autoplay(), Some(PlaybackCommand::Play));
        assert_eq!(controller.request_autoplay(), None);
        assert_eq!(controller.request_autoplay(), None);
    }

    /// Autoplay only claims playback once the play request succeeds
    #[test]
    fn test_autoplay_waits_for_confirmation() {
        let mut controller = PlaybackController::new();

        controller.request_autoplay();
        assert!(!controller.is_playing(), "not optimistic for autoplay");

        controller.handle_play_result(&Ok(()));
        assert!(controller.is_playing());
    }

    /// A rejected autoplay leaves the state paused with no retry
    #[test]
    fn test_autoplay_rejection_stays_paused() {
        let mut controller = PlaybackController::new();

        controller.request_autoplay();
        controller.handle_play_result(&Err(PlaybackError::rejected("NotAllowedError")));

        assert!(!controller.is_playing());
        assert_eq!(controller.request_autoplay(), None, "no retry is scheduled");
    }

    /// A play completion that arrives after the user paused must not
    /// resurrect playback
    #[test]
    fn test_stale_completion_is_ignored() {
        let mut controller = PlaybackController::new();

        controller.toggle_play_pause();
        controller.toggle_play_pause();
        assert!(!controller.is_playing());

        controller.handle_play_result(&Ok(()));
        assert!(!controller.is_playing(), "completion outlived the pause");
    }

    #[test]
    fn test_error_display() {
        let error = PlaybackError::rejected("NotAllowedError");
        assert_eq!(error.to_string(), "play request rejected: NotAllowedError");

        let error = PlaybackError::missing_element("media-player");
        assert_eq!(error.to_string(), "no media element bound: media-player");
    }
}
