//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Section;
use crate::render::{RowTone, TableLine};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Get a ratatui color for a section's log entries
pub fn get_section_color(section: &Option<Section>) -> Color {
    match section {
        Some(Section::Drivers) => Color::Cyan,
        Some(Section::Constructors) => Color::Yellow,
        Some(Section::NextRace) => Color::Green,
        None => Color::DarkGray,
    }
}

/// Map a table-line tone onto a ratatui style
pub fn tone_style(tone: RowTone) -> Style {
    match tone {
        RowTone::Leader => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RowTone::Podium => Style::default().fg(Color::Cyan),
        RowTone::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        RowTone::Notice => Style::default().fg(Color::DarkGray),
        RowTone::Plain => Style::default(),
    }
}

/// Convert a rendered table line into a styled ratatui line
pub fn to_ui_line(line: &TableLine) -> Line<'static> {
    Line::from(Span::styled(line.text.clone(), tone_style(line.tone)))
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages for the log panel
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out - next cycle will retry".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - next cycle will retry".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - next cycle will retry".to_string();
    }
    msg.to_string()
}
