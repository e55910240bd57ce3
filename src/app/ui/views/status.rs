use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use crate::app::App;
use crate::app::spotify::PlaybackApi;

const HELP_TEXT: &str = "[p] Play/Pause [up/down] Navigate [tab] Switch Tracks/Playlists \
                         [enter] Select [+] Volume Up [-] Volume Down [q] Quit";

/// Render the status bar: current song, playback state and volume on the
/// first line, key help on the second.
pub fn render_status<A: PlaybackApi>(frame: &mut Frame<'_>, app: &App<A>, area: Rect) {
    let now_playing = format!(
        "Song: {} || Status: {} || Volume {}%",
        app.selected_track_name, app.status, app.volume
    );

    let paragraph = Paragraph::new(vec![Line::from(now_playing), Line::from(HELP_TEXT)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(app.theme.status)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(app.theme.unfocused.border),
        );

    frame.render_widget(paragraph, area);
}
