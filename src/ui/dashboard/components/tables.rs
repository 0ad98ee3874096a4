//! Standings table components
//!
//! Renders the driver and constructor championship tables from the same
//! section lines the headless renderer uses

use super::super::state::DashboardState;
use super::super::utils::to_ui_line;
use crate::render::{constructor_section_lines, driver_section_lines};
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn standings_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

pub fn render_driver_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = driver_section_lines(&state.snapshot.drivers)
        .iter()
        .map(to_ui_line)
        .collect();

    let table = Paragraph::new(lines).block(standings_block("DRIVER STANDINGS"));
    f.render_widget(table, area);
}

pub fn render_constructor_table(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
) {
    let lines: Vec<Line> = constructor_section_lines(&state.snapshot.constructors)
        .iter()
        .map(to_ui_line)
        .collect();

    let table = Paragraph::new(lines).block(standings_block("CONSTRUCTOR STANDINGS"));
    f.render_widget(table, area);
}
