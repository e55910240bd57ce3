use super::{App, Focus, PlaybackStatus};
use crate::app::logging::log_api_command;
use crate::app::spotify::PlaybackApi;

/// Trait for playback-related commands
pub trait PlaybackControls {
    async fn toggle_play_pause(&mut self);
    async fn adjust_volume(&mut self, delta: i16);
    async fn select(&mut self);
}

impl<A: PlaybackApi> PlaybackControls for App<A> {
    /// Flip between playing and paused.
    ///
    /// The local status is updated optimistically: it flips even when the
    /// remote command fails, so the UI reflects the last intent.
    async fn toggle_play_pause(&mut self) {
        let (result, next) = match self.status {
            PlaybackStatus::Playing => (self.api.pause().await, PlaybackStatus::Paused),
            PlaybackStatus::Paused => (self.api.play().await, PlaybackStatus::Playing),
        };
        self.status = next;

        match result {
            Ok(()) => log_api_command("toggle play/pause", true, None),
            Err(e) => log_api_command("toggle play/pause", false, Some(&e.to_string())),
        }
    }

    /// Change the volume by `delta` percent, clamped to 0..=100.
    ///
    /// The remote command is issued even when clamping leaves the value
    /// unchanged, matching the player's own idempotent handling.
    async fn adjust_volume(&mut self, delta: i16) {
        self.volume = (self.volume as i16 + delta).clamp(0, 100) as u8;

        match self.api.set_volume(self.volume).await {
            Ok(()) => log_api_command("set volume", true, None),
            Err(e) => log_api_command("set volume", false, Some(&e.to_string())),
        }
    }

    /// Act on the row under the cursor: load a playlist's tracks, or
    /// start playing a track.
    async fn select(&mut self) {
        match self.focus {
            Focus::Playlists => {
                let Some(playlist) = self
                    .playlist_table_state
                    .selected()
                    .and_then(|i| self.playlists.get(i))
                else {
                    return;
                };

                match self.api.playlist_tracks(&playlist.id).await {
                    Ok(tracks) => {
                        log_api_command("load playlist tracks", true, None);
                        self.track_table_state
                            .select(if tracks.is_empty() { None } else { Some(0) });
                        self.tracks = tracks;
                    }
                    Err(e) => {
                        // Keep showing the previous list on failure.
                        log_api_command("load playlist tracks", false, Some(&e.to_string()));
                    }
                }
            }
            Focus::Tracks => {
                let Some(track) = self
                    .track_table_state
                    .selected()
                    .and_then(|i| self.tracks.get(i))
                else {
                    return;
                };

                self.selected_track_name = track.name.clone();
                self.status = PlaybackStatus::Playing;

                match self.api.play_track(&track.uri).await {
                    Ok(()) => log_api_command("play track", true, None),
                    Err(e) => log_api_command("play track", false, Some(&e.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{FakeApi, app_with, playlist, track};

    #[tokio::test]
    async fn test_toggle_issues_play_when_paused() {
        let mut app = app_with(FakeApi::default());
        app.status = PlaybackStatus::Paused;

        app.toggle_play_pause().await;

        assert_eq!(app.status, PlaybackStatus::Playing);
        assert_eq!(app.api.calls.borrow().as_slice(), ["play"]);
    }

    #[tokio::test]
    async fn test_toggle_issues_pause_when_playing() {
        let mut app = app_with(FakeApi::default());
        app.status = PlaybackStatus::Playing;

        app.toggle_play_pause().await;

        assert_eq!(app.status, PlaybackStatus::Paused);
        assert_eq!(app.api.calls.borrow().as_slice(), ["pause"]);
    }

    #[tokio::test]
    async fn test_toggle_is_optimistic_on_failure() {
        let mut app = app_with(FakeApi {
            fail_commands: true,
            ..FakeApi::default()
        });

        app.toggle_play_pause().await;

        assert_eq!(app.status, PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn test_volume_clamps_at_both_ends() {
        let mut app = app_with(FakeApi::default());

        app.volume = 95;
        app.adjust_volume(10).await;
        assert_eq!(app.volume, 100);

        app.volume = 5;
        app.adjust_volume(-10).await;
        assert_eq!(app.volume, 0);
    }

    #[tokio::test]
    async fn test_volume_command_sent_even_when_clamped() {
        let mut app = app_with(FakeApi::default());
        app.volume = 100;

        app.adjust_volume(10).await;

        assert_eq!(app.volume, 100);
        assert_eq!(app.api.calls.borrow().as_slice(), ["set_volume:100"]);
    }

    #[tokio::test]
    async fn test_select_playlist_loads_tracks_and_resets_cursor() {
        let mut app = app_with(FakeApi {
            tracks: Some(vec![track("t1", "One"), track("t2", "Two")]),
            ..FakeApi::default()
        });
        app.playlists = vec![playlist("p1", "Focus")];
        app.playlist_table_state.select(Some(0));
        app.track_table_state.select(Some(5));

        app.select().await;

        assert_eq!(app.tracks.len(), 2);
        assert_eq!(app.track_table_state.selected(), Some(0));
        assert_eq!(app.api.calls.borrow().as_slice(), ["playlist_tracks:p1"]);
    }

    #[tokio::test]
    async fn test_select_empty_playlist_clears_track_cursor() {
        let mut app = app_with(FakeApi {
            tracks: Some(Vec::new()),
            ..FakeApi::default()
        });
        app.playlists = vec![playlist("p1", "Empty")];
        app.playlist_table_state.select(Some(0));
        app.track_table_state.select(Some(2));

        app.select().await;

        assert!(app.tracks.is_empty());
        assert_eq!(app.track_table_state.selected(), None);
    }

    #[tokio::test]
    async fn test_select_failure_keeps_previous_tracks() {
        let mut app = app_with(FakeApi {
            tracks: None,
            ..FakeApi::default()
        });
        app.playlists = vec![playlist("p1", "Focus")];
        app.playlist_table_state.select(Some(0));
        app.tracks = vec![track("old", "Old Track")];
        app.track_table_state.select(Some(0));

        app.select().await;

        assert_eq!(app.tracks.len(), 1);
        assert_eq!(app.track_table_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn test_select_with_no_playlists_is_a_no_op() {
        let mut app = app_with(FakeApi::default());

        app.select().await;

        assert!(app.api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_select_track_starts_playback() {
        let mut app = app_with(FakeApi::default());
        app.tracks = vec![track("spotify:track:9", "Nine")];
        app.track_table_state.select(Some(0));
        app.toggle_focus();

        app.select().await;

        assert_eq!(app.selected_track_name, "Nine");
        assert_eq!(app.status, PlaybackStatus::Playing);
        assert_eq!(
            app.api.calls.borrow().as_slice(),
            ["play_track:spotify:track:9"]
        );
    }

    #[tokio::test]
    async fn test_select_track_optimistic_on_failure() {
        let mut app = app_with(FakeApi {
            fail_commands: true,
            ..FakeApi::default()
        });
        app.tracks = vec![track("spotify:track:9", "Nine")];
        app.track_table_state.select(Some(0));
        app.toggle_focus();

        app.select().await;

        assert_eq!(app.selected_track_name, "Nine");
        assert_eq!(app.status, PlaybackStatus::Playing);
    }
}
