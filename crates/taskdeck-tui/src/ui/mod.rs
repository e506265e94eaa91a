/*
[INPUT]:  App state: input buffer, task list, counts, status message
[OUTPUT]: Full-frame layout with input bar, task list, and footer
[POS]:    TUI UI module root
[UPDATE]: When changing layout or panel arrangement
*/

mod input_bar;
mod task_list;

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use taskdeck_core::PersistenceAdapter;

use crate::app::App;
use self::input_bar::draw_input_bar;
use self::task_list::draw_task_list;

pub(crate) fn draw_ui<P: PersistenceAdapter>(frame: &mut ratatui::Frame, app: &mut App<P>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_input_bar(frame, layout[0], app);

    if app.tasks().is_empty() {
        draw_empty_state(frame, layout[1]);
    } else {
        draw_task_list(frame, layout[1], app);
    }

    draw_footer(frame, layout[2], app);
}

fn draw_empty_state(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    let widget = Paragraph::new("No tasks yet. Type a description and press Enter.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tasks"));
    frame.render_widget(widget, area);
}

fn draw_footer<P: PersistenceAdapter>(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &App<P>,
) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("[Enter]", key_style),
        Span::raw(" Add  "),
        Span::styled("[Tab]", key_style),
        Span::raw(" Toggle  "),
        Span::styled("[Del]", key_style),
        Span::raw(" Remove  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select  "),
        Span::styled("[Esc]", key_style),
        Span::raw(format!(" Quit  |  {}", app.status_message)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.count_summary()),
    );
    frame.render_widget(widget, area);
}
