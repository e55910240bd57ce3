use ratatui::widgets::TableState;

use super::{App, Focus, PlaybackStatus};
use crate::app::config::Config;
use crate::app::spotify::PlaybackApi;
use crate::app::ui::Theme;

/// Trait for App construction
pub trait AppConstructor<A: PlaybackApi> {
    fn new(config: Config, api: A) -> Self
    where
        Self: Sized;
}

impl<A: PlaybackApi> AppConstructor<A> for App<A> {
    /// Construct a new instance of [`App`].
    ///
    /// Lists start empty and nothing is selected; `initialize` fills them
    /// in once the main loop starts.
    fn new(config: Config, api: A) -> Self {
        let theme = Theme::from_config(&config.colors);

        Self {
            running: false,
            api,
            theme,
            focus: Focus::Playlists,
            playlists: Vec::new(),
            tracks: Vec::new(),
            playlist_table_state: TableState::default(),
            track_table_state: TableState::default(),
            status: PlaybackStatus::Paused,
            volume: 0,
            selected_track_name: String::new(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{FakeApi, app_with};

    #[test]
    fn test_new_app_starts_with_nothing_selected() {
        let app = app_with(FakeApi::default());

        assert!(!app.running);
        assert_eq!(app.focus, Focus::Playlists);
        assert_eq!(app.status, PlaybackStatus::Paused);
        assert_eq!(app.volume, 0);
        assert!(app.playlists.is_empty());
        assert!(app.tracks.is_empty());
        assert_eq!(app.playlist_table_state.selected(), None);
        assert_eq!(app.track_table_state.selected(), None);
        assert!(app.selected_track_name.is_empty());
    }
}
