use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, BorderType, Row, Table},
};

use crate::app::spotify::PlaybackApi;
use crate::app::ui::utils::truncate_by_width;
use crate::app::{App, Focus};

/// Render the playlist pane on the left.
pub fn render_playlists<A: PlaybackApi>(frame: &mut Frame<'_>, app: &mut App<A>, area: Rect) {
    let pane = *app.theme.pane(app.focus == Focus::Playlists);

    // Two border columns don't hold text.
    let inner_width = area.width.saturating_sub(2) as usize;
    let rows: Vec<Row> = app
        .playlists
        .iter()
        .map(|playlist| Row::new([truncate_by_width(&playlist.name, inner_width)]))
        .collect();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(pane.border)
        .title(" Playlists ")
        .title_style(pane.title);

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .block(block)
        .row_highlight_style(pane.highlight);

    frame.render_stateful_widget(table, area, &mut app.playlist_table_state);
}
