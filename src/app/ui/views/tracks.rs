use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, BorderType, Row, Table},
};

use crate::app::spotify::PlaybackApi;
use crate::app::ui::utils::truncate_by_width;
use crate::app::{App, Focus};

/// Render the track pane on the right, showing the loaded playlist.
pub fn render_tracks<A: PlaybackApi>(frame: &mut Frame<'_>, app: &mut App<A>, area: Rect) {
    let pane = *app.theme.pane(app.focus == Focus::Tracks);

    let inner_width = area.width.saturating_sub(2) as usize;
    let rows: Vec<Row> = app
        .tracks
        .iter()
        .map(|track| Row::new([truncate_by_width(&track.name, inner_width)]))
        .collect();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(pane.border)
        .title(" Tracks ")
        .title_style(pane.title);

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .block(block)
        .row_highlight_style(pane.highlight);

    frame.render_stateful_widget(table, area, &mut app.track_table_state);
}
