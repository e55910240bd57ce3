use super::App;
use crate::app::spotify::PlaybackApi;

/// Trait for cursor movement within the focused pane
pub trait Navigation {
    fn cursor_up(&mut self);
    fn cursor_down(&mut self);
}

impl<A: PlaybackApi> Navigation for App<A> {
    /// Move the cursor up one row, stopping at the top.
    fn cursor_up(&mut self) {
        let (state, len) = self.focused_list_mut();
        if len == 0 {
            return;
        }
        let current = state.selected().unwrap_or(0);
        state.select(Some(current.saturating_sub(1)));
    }

    /// Move the cursor down one row, stopping at the last entry.
    fn cursor_down(&mut self) {
        let (state, len) = self.focused_list_mut();
        if len == 0 {
            return;
        }
        let current = state.selected().unwrap_or(0);
        state.select(Some((current + 1).min(len.saturating_sub(1))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{FakeApi, app_with, playlist};

    fn app_with_playlists(count: usize) -> App<FakeApi> {
        let mut app = app_with(FakeApi::default());
        app.playlists = (0..count)
            .map(|i| playlist(&format!("p{i}"), &format!("Playlist {i}")))
            .collect();
        app.playlist_table_state.select(Some(0));
        app
    }

    #[test]
    fn test_cursor_down_stops_at_last_entry() {
        let mut app = app_with_playlists(3);

        app.cursor_down();
        app.cursor_down();
        assert_eq!(app.playlist_table_state.selected(), Some(2));

        app.cursor_down();
        assert_eq!(app.playlist_table_state.selected(), Some(2));
    }

    #[test]
    fn test_cursor_up_stops_at_top() {
        let mut app = app_with_playlists(3);

        app.cursor_up();
        assert_eq!(app.playlist_table_state.selected(), Some(0));
    }

    #[test]
    fn test_cursor_ignores_empty_list() {
        let mut app = app_with(FakeApi::default());

        app.cursor_down();
        app.cursor_up();
        assert_eq!(app.playlist_table_state.selected(), None);
    }

    #[test]
    fn test_cursor_moves_in_focused_pane_only() {
        let mut app = app_with_playlists(3);
        app.tracks = vec![
            crate::app::test_support::track("t1", "A"),
            crate::app::test_support::track("t2", "B"),
        ];
        app.track_table_state.select(Some(0));
        app.toggle_focus();

        app.cursor_down();
        assert_eq!(app.track_table_state.selected(), Some(1));
        assert_eq!(app.playlist_table_state.selected(), Some(0));
    }
}
