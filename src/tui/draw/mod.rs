//! TUI rendering: layout and widgets for the chat interface.

mod examples;
mod header;
mod history;
mod input;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;
use super::constants::{EXAMPLES_PANEL_WIDTH, INPUT_HEIGHT};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0]);

    // Examples left, history right.
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(EXAMPLES_PANEL_WIDTH), Constraint::Min(10)])
        .split(chunks[1]);
    examples::draw_examples(f, app, body[0]);
    history::draw_history(f, app, body[1]);

    input::draw_input_block(f, app, chunks[2]);
    input::draw_bottom_bar(f, app, chunks[3]);
}
