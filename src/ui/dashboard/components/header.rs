//! Dashboard header component
//!
//! Renders the title and the refresh progress gauge

use super::super::state::DashboardState;
use crate::events::CycleState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section with version and update notice
    let version = env!("CARGO_PKG_VERSION");
    let title_text = if state.update_available {
        if let Some(latest) = &state.latest_version {
            format!("PITWALL v{} -> {} UPDATE AVAILABLE", version, latest)
        } else {
            format!("PITWALL v{} - UPDATE AVAILABLE", version)
        }
    } else {
        format!("PITWALL v{} - F1 CHAMPIONSHIP DASHBOARD", version)
    };

    let title_color = if state.update_available {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an active fetch takes priority, otherwise show the
    // countdown to the next cycle
    let (progress_text, gauge_color, progress_percent) = match state.cycle_state() {
        CycleState::Fetching => {
            // Animated gauge - loops every 20 ticks for smooth animation
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "FETCHING - Updating standings".to_string(),
                Color::LightGreen,
                progress,
            )
        }
        CycleState::Waiting => {
            let info = state.refresh_info();
            if !info.refresh_due && info.interval_secs > 0 {
                let remaining_secs = info.interval_secs.saturating_sub(info.elapsed_secs);
                let progress =
                    ((info.elapsed_secs as f64 / info.interval_secs as f64) * 100.0) as u16;
                (
                    format!("WAITING - Next refresh in {}s", remaining_secs),
                    Color::LightBlue,
                    progress.min(100),
                )
            } else {
                (
                    "WAITING - Refresh due".to_string(),
                    Color::LightBlue,
                    100,
                )
            }
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
