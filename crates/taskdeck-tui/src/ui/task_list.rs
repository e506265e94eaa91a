/*
[INPUT]:  App task collection, selection state, pending-delete marks
[OUTPUT]: Task list rendered into the ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When changing row format or row styling
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};
use taskdeck_core::{PersistenceAdapter, Task};

use crate::app::App;

pub(super) fn draw_task_list<P: PersistenceAdapter>(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &mut App<P>,
) {
    let items: Vec<ListItem> = app
        .tasks()
        .iter()
        .map(|task| {
            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            let line = format!("{checkbox} {}", printable(&task.description));
            ListItem::new(line).style(row_style(task, app.is_pending_delete(task.id)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn row_style(task: &Task, pending_delete: bool) -> Style {
    if pending_delete {
        return Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::DIM);
    }
    if task.just_added {
        return Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }
    if task.completed {
        return Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    Style::default()
}

// Descriptions are stored verbatim; neutralize control characters at
// render time so no input can move the cursor or clear the screen.
fn printable(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}
