use super::{App, PlaybackStatus};
use crate::app::spotify::PlaybackApi;

/// Trait for initial data loading after login
pub trait AppInit {
    async fn initialize(&mut self) -> color_eyre::Result<()>;
}

impl<A: PlaybackApi> AppInit for App<A> {
    /// Fetch the initial player state and lists.
    ///
    /// An unreadable player state is not fatal (no active device behaves
    /// the same way); an unreadable playlist collection is, since the
    /// dashboard has nothing to show without it.
    async fn initialize(&mut self) -> color_eyre::Result<()> {
        match self.api.player_state().await {
            Ok(state) => {
                self.status = if state.playing {
                    PlaybackStatus::Playing
                } else {
                    PlaybackStatus::Paused
                };
                self.volume = state.volume;
            }
            Err(e) => {
                log::warn!("Could not read player state, starting from defaults: {}", e);
            }
        }

        self.playlists = self.api.playlists().await?;
        log::info!("Loaded {} playlists", self.playlists.len());

        if let Some(first) = self.playlists.first() {
            self.playlist_table_state.select(Some(0));

            // Show the first playlist's tracks right away.
            let id = first.id.clone();
            match self.api.playlist_tracks(&id).await {
                Ok(tracks) => {
                    self.track_table_state
                        .select(if tracks.is_empty() { None } else { Some(0) });
                    self.tracks = tracks;
                }
                Err(e) => {
                    log::warn!("Could not load tracks for the first playlist: {}", e);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::spotify::PlayerState;
    use crate::app::test_support::{FakeApi, app_with, playlist, track};

    #[tokio::test]
    async fn test_initialize_loads_state_playlists_and_first_tracks() {
        let mut app = app_with(FakeApi {
            player_state: Some(PlayerState {
                playing: true,
                volume: 40,
            }),
            playlists: Some(vec![playlist("p1", "Focus"), playlist("p2", "Sleep")]),
            tracks: Some(vec![track("t1", "One")]),
            ..FakeApi::default()
        });

        app.initialize().await.unwrap();

        assert_eq!(app.status, PlaybackStatus::Playing);
        assert_eq!(app.volume, 40);
        assert_eq!(app.playlists.len(), 2);
        assert_eq!(app.playlist_table_state.selected(), Some(0));
        assert_eq!(app.tracks.len(), 1);
        assert_eq!(app.track_table_state.selected(), Some(0));
        assert_eq!(
            app.api.calls.borrow().as_slice(),
            ["player_state", "playlists", "playlist_tracks:p1"]
        );
    }

    #[tokio::test]
    async fn test_player_state_failure_is_not_fatal() {
        let mut app = app_with(FakeApi {
            player_state: None,
            playlists: Some(vec![playlist("p1", "Focus")]),
            tracks: Some(Vec::new()),
            ..FakeApi::default()
        });

        app.initialize().await.unwrap();

        assert_eq!(app.status, PlaybackStatus::Paused);
        assert_eq!(app.volume, 0);
        assert_eq!(app.playlists.len(), 1);
    }

    #[tokio::test]
    async fn test_playlist_failure_is_fatal() {
        let mut app = app_with(FakeApi {
            player_state: Some(PlayerState::default()),
            playlists: None,
            ..FakeApi::default()
        });

        assert!(app.initialize().await.is_err());
    }

    #[tokio::test]
    async fn test_no_playlists_leaves_everything_unselected() {
        let mut app = app_with(FakeApi {
            player_state: Some(PlayerState::default()),
            playlists: Some(Vec::new()),
            ..FakeApi::default()
        });

        app.initialize().await.unwrap();

        assert_eq!(app.playlist_table_state.selected(), None);
        assert_eq!(app.track_table_state.selected(), None);
        assert!(app.tracks.is_empty());
    }

    #[tokio::test]
    async fn test_first_playlist_track_failure_is_not_fatal() {
        let mut app = app_with(FakeApi {
            player_state: Some(PlayerState::default()),
            playlists: Some(vec![playlist("p1", "Focus")]),
            tracks: None,
            ..FakeApi::default()
        });

        app.initialize().await.unwrap();

        assert_eq!(app.playlist_table_state.selected(), Some(0));
        assert!(app.tracks.is_empty());
        assert_eq!(app.track_table_state.selected(), None);
    }
}
