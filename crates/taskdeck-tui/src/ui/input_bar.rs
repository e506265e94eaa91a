/*
[INPUT]:  App input buffer
[OUTPUT]: Input bar with live cursor position
[POS]:    TUI UI input component
[UPDATE]: When changing input rendering or cursor placement
*/

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use taskdeck_core::PersistenceAdapter;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub(super) fn draw_input_bar<P: PersistenceAdapter>(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &App<P>,
) {
    let widget = Paragraph::new(app.input.as_str())
        .block(Block::default().borders(Borders::ALL).title("New Task"));
    frame.render_widget(widget, area);

    // Keep the terminal cursor at the end of the buffer; input focus
    // never moves elsewhere.
    let cursor_x = area.x + 1 + app.input.width() as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position((cursor_x.min(max_x), area.y + 1));
}
