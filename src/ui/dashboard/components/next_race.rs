//! Next race panel component

use super::super::state::DashboardState;
use super::super::utils::to_ui_line;
use crate::render::next_race_section_lines;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the next race panel, with session info appended below.
pub fn render_next_race_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = next_race_section_lines(&state.snapshot.next_race)
        .iter()
        .map(to_ui_line)
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(Line::from(Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(Color::DarkGray),
    )));

    // Uptime, in the largest useful unit
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    lines.push(Line::from(Span::styled(
        uptime_string,
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title("NEXT RACE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
