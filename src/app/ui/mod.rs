use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

pub mod theme;
pub mod utils;
pub mod views;

pub use theme::Theme;

use crate::app::App;
use crate::app::spotify::PlaybackApi;
use views::{render_playlists, render_status, render_tracks};

/// Draw the whole dashboard: playlist and track panes on top, status bar
/// at the bottom. Pure over the app state apart from table scroll offsets.
pub fn render<A: PlaybackApi>(frame: &mut Frame<'_>, app: &mut App<A>) {
    let vertical =
        Layout::vertical([Constraint::Percentage(80), Constraint::Percentage(20)])
            .split(frame.area());

    let horizontal =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(vertical[0]);

    render_playlists(frame, app, horizontal[0]);
    render_tracks(frame, app, horizontal[1]);
    render_status(frame, app, vertical[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{FakeApi, app_with, playlist, track};
    use crate::app::{Focus, PlaybackStatus};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(app: &mut App<FakeApi>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_shows_pane_titles_and_entries() {
        let mut app = app_with(FakeApi::default());
        app.playlists = vec![playlist("p1", "Morning Focus")];
        app.tracks = vec![track("t1", "First Song")];
        app.playlist_table_state.select(Some(0));

        let text = buffer_text(&draw(&mut app));

        assert!(text.contains("Playlists"));
        assert!(text.contains("Tracks"));
        assert!(text.contains("Morning Focus"));
        assert!(text.contains("First Song"));
    }

    #[test]
    fn test_render_status_bar_contents() {
        let mut app = app_with(FakeApi::default());
        app.selected_track_name = "Bohemian Rhapsody".to_string();
        app.status = PlaybackStatus::Playing;
        app.volume = 65;

        let text = buffer_text(&draw(&mut app));

        assert!(text.contains("Song: Bohemian Rhapsody || Status: playing || Volume 65%"));
        assert!(text.contains("[p] Play/Pause"));
        assert!(text.contains("[q] Quit"));
    }

    #[test]
    fn test_render_handles_empty_lists() {
        let mut app = app_with(FakeApi::default());

        let text = buffer_text(&draw(&mut app));

        assert!(text.contains("Playlists"));
        assert!(text.contains("Status: paused"));
    }

    #[test]
    fn test_render_leaves_selection_untouched() {
        let mut app = app_with(FakeApi::default());
        app.playlists = vec![playlist("p1", "One"), playlist("p2", "Two")];
        app.tracks = vec![track("t1", "A")];
        app.playlist_table_state.select(Some(1));
        app.track_table_state.select(Some(0));
        app.focus = Focus::Tracks;

        draw(&mut app);

        assert_eq!(app.playlist_table_state.selected(), Some(1));
        assert_eq!(app.track_table_state.selected(), Some(0));
        assert_eq!(app.focus, Focus::Tracks);
        assert_eq!(app.playlists.len(), 2);
    }

    #[test]
    fn test_render_is_deterministic_for_unchanged_state() {
        let mut app = app_with(FakeApi::default());
        app.playlists = vec![playlist("p1", "One"), playlist("p2", "Two")];
        app.tracks = vec![track("t1", "A")];
        app.playlist_table_state.select(Some(0));
        app.selected_track_name = "A".to_string();
        app.volume = 70;

        let first = draw(&mut app);
        let second = draw(&mut app);

        assert_eq!(first, second);
    }

    #[test]
    fn test_long_names_are_truncated_to_pane_width() {
        let mut app = app_with(FakeApi::default());
        let long_name = "X".repeat(200);
        app.playlists = vec![playlist("p1", &long_name)];

        // Must not panic on rows wider than the pane.
        draw(&mut app);
    }
}
