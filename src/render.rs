//! Table formatting and plain-terminal rendering
//!
//! Everything here is pure with respect to the terminal: section contents
//! become `TableLine`s (text plus a tone), and `AnsiRenderer` writes them
//! to any `io::Write` sink under an explicit `RendererConfig`. The ratatui
//! dashboard reuses the same lines with its own styling.

use crate::consts::cli_consts::{display, refresh};
use crate::events::Section;
use crate::snapshot::{SectionStatus, Snapshot};
use crate::standings::{ConstructorStanding, DriverStanding, NextRaceInfo};
use std::io::{self, Write};

// ANSI color codes shared with the session messages
pub const COLOR_TITLE: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_LEADER: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_PODIUM: &str = "\x1b[36m"; // Cyan
pub const COLOR_ERROR: &str = "\x1b[1;31m"; // Bold Red
pub const COLOR_NOTICE: &str = "\x1b[2m"; // Dim
pub const COLOR_RESET: &str = "\x1b[0m";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Visual weight of a rendered line. The championship leader and the other
/// podium places carry accents; everything else is plain.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RowTone {
    Leader,
    Podium,
    Plain,
    Error,
    Notice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLine {
    pub tone: RowTone,
    pub text: String,
}

impl TableLine {
    fn new(tone: RowTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Accent for a 0-based table row index: row 1 is the leader, rows 2 and 3
/// share the podium accent.
pub fn accent_for_row(index: usize) -> RowTone {
    match index {
        0 => RowTone::Leader,
        1 | 2 => RowTone::Podium,
        _ => RowTone::Plain,
    }
}

/// Cut a team name down for the table column: anything longer than the
/// column keeps its first `TEAM_TRUNCATE_AT` characters plus an ellipsis.
pub fn truncate_team(name: &str) -> String {
    if name.chars().count() > display::TEAM_WIDTH {
        let head: String = name.chars().take(display::TEAM_TRUNCATE_AT).collect();
        format!("{}{}", head, display::ELLIPSIS)
    } else {
        name.to_string()
    }
}

/// Reformat a schedule time for display: a trailing `Z` becomes a ` UTC`
/// suffix. The missing-value placeholder passes through unmodified.
pub fn normalize_time(time: &str) -> String {
    if time == display::PLACEHOLDER {
        return time.to_string();
    }
    match time.strip_suffix('Z') {
        Some(head) => format!("{} UTC", head),
        None => time.to_string(),
    }
}

fn position_label(position: Option<u32>) -> String {
    match position {
        Some(p) => p.to_string(),
        None => display::POSITION_PLACEHOLDER.to_string(),
    }
}

/// Points render through f64's Display: whole scores show no decimal part,
/// half-points keep theirs.
fn format_points(points: f64) -> String {
    format!("{}", points)
}

pub fn driver_table_header() -> String {
    format!(
        "{:<pos$} {:<name$} {:<team$} {:>pts$}",
        "POS",
        "DRIVER",
        "TEAM",
        "POINTS",
        pos = display::POSITION_WIDTH,
        name = display::DRIVER_NAME_WIDTH,
        team = display::TEAM_WIDTH,
        pts = display::POINTS_WIDTH,
    )
}

pub fn format_driver_row(standing: &DriverStanding) -> String {
    format!(
        "{:<pos$} {:<name$} {:<team$} {:>pts$}",
        position_label(standing.position),
        standing.name,
        truncate_team(&standing.team),
        format_points(standing.points),
        pos = display::POSITION_WIDTH,
        name = display::DRIVER_NAME_WIDTH,
        team = display::TEAM_WIDTH,
        pts = display::POINTS_WIDTH,
    )
}

pub fn constructor_table_header() -> String {
    format!(
        "{:<pos$} {:<team$} {:>pts$}",
        "POS",
        "TEAM",
        "POINTS",
        pos = display::POSITION_WIDTH,
        team = display::CONSTRUCTOR_TEAM_WIDTH,
        pts = display::POINTS_WIDTH,
    )
}

pub fn format_constructor_row(standing: &ConstructorStanding) -> String {
    format!(
        "{:<pos$} {:<team$} {:>pts$}",
        position_label(standing.position),
        truncate_team(&standing.team),
        format_points(standing.points),
        pos = display::POSITION_WIDTH,
        team = display::CONSTRUCTOR_TEAM_WIDTH,
        pts = display::POINTS_WIDTH,
    )
}

/// The single "no data" line a section degrades to when its fetch failed
/// or the payload carried nothing.
pub fn no_data_line(section: Section) -> String {
    match section {
        Section::Drivers => "Error: No driver standings data found.".to_string(),
        Section::Constructors => "Error: No constructor standings data found.".to_string(),
        Section::NextRace => "Error: No next race info found.".to_string(),
    }
}

fn fetching_line(section: Section) -> TableLine {
    TableLine::new(RowTone::Notice, format!("Fetching {}...", section.label()))
}

fn status_lines<T>(
    status: &SectionStatus<T>,
    section: Section,
    ready: impl FnOnce(&T) -> Vec<TableLine>,
) -> Vec<TableLine> {
    match status {
        SectionStatus::Pending | SectionStatus::Fetching => vec![fetching_line(section)],
        SectionStatus::NoData => vec![TableLine::new(RowTone::Error, no_data_line(section))],
        SectionStatus::Malformed(msg) => vec![TableLine::new(RowTone::Error, msg.clone())],
        SectionStatus::Ready(value) => ready(value),
    }
}

pub fn driver_section_lines(status: &SectionStatus<Vec<DriverStanding>>) -> Vec<TableLine> {
    status_lines(status, Section::Drivers, |standings| {
        let mut lines = vec![TableLine::new(RowTone::Notice, driver_table_header())];
        lines.extend(
            standings
                .iter()
                .enumerate()
                .map(|(i, s)| TableLine::new(accent_for_row(i), format_driver_row(s))),
        );
        lines
    })
}

pub fn constructor_section_lines(
    status: &SectionStatus<Vec<ConstructorStanding>>,
) -> Vec<TableLine> {
    status_lines(status, Section::Constructors, |standings| {
        let mut lines = vec![TableLine::new(RowTone::Notice, constructor_table_header())];
        lines.extend(
            standings
                .iter()
                .enumerate()
                .map(|(i, s)| TableLine::new(accent_for_row(i), format_constructor_row(s))),
        );
        lines
    })
}

pub fn next_race_section_lines(status: &SectionStatus<NextRaceInfo>) -> Vec<TableLine> {
    status_lines(status, Section::NextRace, |info| {
        let mut lines = vec![
            TableLine::new(RowTone::Leader, format!("Race:       {}", info.race_name)),
            TableLine::new(RowTone::Plain, format!("Circuit:    {}", info.circuit_name)),
            TableLine::new(
                RowTone::Plain,
                format!(
                    "Race start: {} {}",
                    info.race.date,
                    normalize_time(&info.race.time)
                ),
            ),
        ];
        if let Some(qualy) = &info.qualifying {
            lines.push(TableLine::new(
                RowTone::Plain,
                format!("Qualifying: {} {}", qualy.date, normalize_time(&qualy.time)),
            ));
        }
        lines
    })
}

/// Explicit renderer configuration, so the sink and the escape-sequence
/// behavior are injectable rather than ambient.
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

/// Writes full dashboard frames to a `Write` sink using plain ANSI
/// sequences. Each frame clears the display and renders all three sections
/// followed by the timestamp footer.
pub struct AnsiRenderer<W: Write> {
    out: W,
    config: RendererConfig,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, config: RendererConfig) -> Self {
        Self { out, config }
    }

    fn tone_code(tone: RowTone) -> Option<&'static str> {
        match tone {
            RowTone::Leader => Some(COLOR_LEADER),
            RowTone::Podium => Some(COLOR_PODIUM),
            RowTone::Error => Some(COLOR_ERROR),
            RowTone::Notice => Some(COLOR_NOTICE),
            RowTone::Plain => None,
        }
    }

    fn write_line(&mut self, line: &TableLine) -> io::Result<()> {
        match Self::tone_code(line.tone).filter(|_| self.config.color) {
            Some(code) => writeln!(self.out, "{}{}{}", code, line.text, COLOR_RESET),
            None => writeln!(self.out, "{}", line.text),
        }
    }

    fn write_title(&mut self, title: &str) -> io::Result<()> {
        if self.config.color {
            writeln!(self.out, "{}{}{}", COLOR_TITLE, title, COLOR_RESET)
        } else {
            writeln!(self.out, "{}", title)
        }
    }

    fn write_section(&mut self, title: &str, lines: &[TableLine]) -> io::Result<()> {
        self.write_title(title)?;
        for line in lines {
            self.write_line(line)?;
        }
        writeln!(self.out)
    }

    /// Render one complete frame for the given snapshot.
    pub fn render_snapshot(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if self.config.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }

        self.write_title("F1 CHAMPIONSHIP DASHBOARD")?;
        writeln!(self.out)?;

        self.write_section("DRIVER STANDINGS", &driver_section_lines(&snapshot.drivers))?;
        self.write_section(
            "CONSTRUCTOR STANDINGS",
            &constructor_section_lines(&snapshot.constructors),
        )?;
        self.write_section("NEXT RACE", &next_race_section_lines(&snapshot.next_race))?;

        if let Some(updated) = &snapshot.last_updated {
            self.write_line(&TableLine::new(
                RowTone::Notice,
                format!("Last updated: {}", updated),
            ))?;
        }
        self.write_line(&TableLine::new(
            RowTone::Notice,
            format!(
                "Refreshing every {} seconds. Press Ctrl+C to quit.",
                refresh::REFRESH_INTERVAL_SECS
            ),
        ))?;

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::SessionSchedule;

    fn example_driver() -> DriverStanding {
        DriverStanding {
            position: Some(1),
            name: "Max Verstappen".to_string(),
            team: "Red Bull Racing Honda RBPT".to_string(),
            points: 437.0,
        }
    }

    #[test]
    fn test_truncate_team() {
        assert_eq!(
            truncate_team("Red Bull Racing Honda RBPT"),
            "Red Bull Racing Hon..."
        );
        assert_eq!(truncate_team("Red Bull Racing Hon...").chars().count(), 22);
        assert_eq!(truncate_team("Ferrari"), "Ferrari");
        // A name exactly at the column width is left alone
        assert_eq!(truncate_team("Aston Martin Aramco Me"), "Aston Martin Aramco Me");
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("13:00:00Z"), "13:00:00 UTC");
        assert_eq!(normalize_time("N/A"), "N/A");
        assert_eq!(normalize_time("13:00:00"), "13:00:00");
    }

    #[test]
    fn test_driver_row_layout() {
        let row = format_driver_row(&example_driver());
        assert!(row.starts_with("1    Max Verstappen"));
        assert!(row.contains("Red Bull Racing Hon..."));
        assert!(row.ends_with("     437"));
        // pos(4) + name(25) + team(22) + points(8) + three separators
        assert_eq!(row.chars().count(), 62);
    }

    #[test]
    fn test_unknown_position_renders_placeholder() {
        let mut standing = example_driver();
        standing.position = None;
        let row = format_driver_row(&standing);
        assert!(row.starts_with("?    "));
    }

    #[test]
    fn test_half_points_keep_their_fraction() {
        let mut standing = example_driver();
        standing.points = 206.5;
        assert!(format_driver_row(&standing).ends_with("   206.5"));
    }

    #[test]
    fn test_row_accents() {
        assert_eq!(accent_for_row(0), RowTone::Leader);
        assert_eq!(accent_for_row(1), RowTone::Podium);
        assert_eq!(accent_for_row(2), RowTone::Podium);
        assert_eq!(accent_for_row(3), RowTone::Plain);
        assert_eq!(accent_for_row(9), RowTone::Plain);
    }

    #[test]
    fn test_no_data_lines_are_exact() {
        assert_eq!(
            no_data_line(Section::NextRace),
            "Error: No next race info found."
        );
        assert_eq!(
            no_data_line(Section::Drivers),
            "Error: No driver standings data found."
        );
        assert_eq!(
            no_data_line(Section::Constructors),
            "Error: No constructor standings data found."
        );
    }

    #[test]
    fn test_failed_section_renders_one_error_line() {
        let lines = driver_section_lines(&SectionStatus::NoData);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tone, RowTone::Error);
        assert_eq!(lines[0].text, "Error: No driver standings data found.");

        let lines = next_race_section_lines(&SectionStatus::Malformed(
            "Error parsing next race info: expected value at line 1".to_string(),
        ));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.starts_with("Error parsing next race info:"));
    }

    #[test]
    fn test_ready_section_has_header_and_accented_rows() {
        let standings = vec![
            example_driver(),
            DriverStanding {
                position: Some(2),
                name: "Lando Norris".to_string(),
                team: "McLaren Mercedes".to_string(),
                points: 374.0,
            },
        ];
        let lines = driver_section_lines(&SectionStatus::Ready(standings));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].tone, RowTone::Notice);
        assert_eq!(lines[0].text, driver_table_header());
        assert_eq!(lines[1].tone, RowTone::Leader);
        assert_eq!(lines[2].tone, RowTone::Podium);
    }

    #[test]
    fn test_next_race_lines_normalize_times() {
        let info = NextRaceInfo {
            race_name: "Dutch Grand Prix".to_string(),
            circuit_name: "Circuit Zandvoort".to_string(),
            race: SessionSchedule {
                date: "2026-08-30".to_string(),
                time: "13:00:00Z".to_string(),
            },
            qualifying: None,
        };
        let lines = next_race_section_lines(&SectionStatus::Ready(info));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].text, "Race start: 2026-08-30 13:00:00 UTC");
    }

    #[test]
    fn test_renderer_writes_full_frame_with_mixed_outcomes() {
        let snapshot = Snapshot {
            cycle: 1,
            drivers: SectionStatus::Ready(vec![example_driver()]),
            constructors: SectionStatus::NoData,
            next_race: SectionStatus::Malformed(
                "Error parsing next race info: expected value".to_string(),
            ),
            last_updated: Some("2026-08-06 12:00:00".to_string()),
        };

        let mut sink = Vec::new();
        let config = RendererConfig {
            color: false,
            clear_screen: false,
        };
        AnsiRenderer::new(&mut sink, config)
            .render_snapshot(&snapshot)
            .unwrap();

        let frame = String::from_utf8(sink).unwrap();
        // The healthy section renders in full while the others degrade to
        // exactly one error line each
        assert!(frame.contains("Max Verstappen"));
        assert!(frame.contains("Error: No constructor standings data found."));
        assert!(frame.contains("Error parsing next race info: expected value"));
        assert!(frame.contains("Last updated: 2026-08-06 12:00:00"));
        assert!(!frame.contains('\x1b'));
    }

    #[test]
    fn test_renderer_color_codes_the_leader_row() {
        let snapshot = Snapshot {
            cycle: 1,
            drivers: SectionStatus::Ready(vec![example_driver()]),
            ..Default::default()
        };

        let mut sink = Vec::new();
        let config = RendererConfig {
            color: true,
            clear_screen: false,
        };
        AnsiRenderer::new(&mut sink, config)
            .render_snapshot(&snapshot)
            .unwrap();

        let frame = String::from_utf8(sink).unwrap();
        let leader_line = frame
            .lines()
            .find(|l| l.contains("Max Verstappen"))
            .unwrap();
        assert!(leader_line.starts_with(COLOR_LEADER));
        assert!(leader_line.ends_with(COLOR_RESET));
    }
}
