use std::fmt;

use ratatui::widgets::TableState;

use crate::app::config::Config;
use crate::app::spotify::{PlaybackApi, Playlist, Track};
use crate::app::ui::Theme;

// Module declarations
pub mod auth;
pub mod cli;
pub mod config;
pub mod constructor;
pub mod event_handlers;
pub mod events;
pub mod init;
pub mod logging;
pub mod main_loop;
pub mod navigation;
pub mod playback;
pub mod spotify;
pub mod terminal;
pub mod ui;

/// Which pane currently receives navigation and select keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Playlists,
    Tracks,
}

/// Last playback intent sent to the remote player.
///
/// Updated optimistically: a failed remote call leaves the attempted
/// value in place rather than rolling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    Playing,
    #[default]
    Paused,
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackStatus::Playing => write!(f, "playing"),
            PlaybackStatus::Paused => write!(f, "paused"),
        }
    }
}

/// Dashboard state: focus, selections, playback intent and the fetched
/// playlist/track lists. Owned and mutated by the event loop only.
pub struct App<A: PlaybackApi> {
    pub running: bool,
    pub api: A,
    pub config: Config,
    pub theme: Theme,
    pub focus: Focus,
    pub playlists: Vec<Playlist>,
    pub tracks: Vec<Track>,
    pub playlist_table_state: TableState,
    pub track_table_state: TableState,
    pub status: PlaybackStatus,
    pub volume: u8,
    pub selected_track_name: String,
}

impl<A: PlaybackApi> App<A> {
    /// Swap the focused pane.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Playlists => Focus::Tracks,
            Focus::Tracks => Focus::Playlists,
        };
    }

    /// Cursor state and length of the list in the focused pane.
    pub(crate) fn focused_list_mut(&mut self) -> (&mut TableState, usize) {
        match self.focus {
            Focus::Playlists => (&mut self.playlist_table_state, self.playlists.len()),
            Focus::Tracks => (&mut self.track_table_state, self.tracks.len()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{FakeApi, app_with, playlist, track};

    #[test]
    fn test_focus_toggle_is_involution() {
        let mut app = app_with(FakeApi::default());
        let original = app.focus;

        app.toggle_focus();
        assert_ne!(app.focus, original);

        app.toggle_focus();
        assert_eq!(app.focus, original);
    }

    #[test]
    fn test_playback_status_display() {
        assert_eq!(PlaybackStatus::Playing.to_string(), "playing");
        assert_eq!(PlaybackStatus::Paused.to_string(), "paused");
    }

    #[test]
    fn test_focused_list_follows_focus() {
        let mut app = app_with(FakeApi::default());
        app.playlists = vec![playlist("p1", "One")];
        app.tracks = vec![track("t1", "A"), track("t2", "B")];

        let (_, len) = app.focused_list_mut();
        assert_eq!(len, 1);

        app.toggle_focus();
        let (_, len) = app.focused_list_mut();
        assert_eq!(len, 2);
    }
}
