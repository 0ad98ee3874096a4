//! Championship standings and race schedule models
//!
//! Wire types mirror the API's JSON loosely: every field is optional, and
//! numeric fields tolerate both number and string encodings. Conversion
//! into the display types applies the typed per-field defaults, so a
//! missing field never surfaces as an error — only an undecodable document
//! does.

use crate::consts::cli_consts::display;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of the driver championship table.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStanding {
    /// Championship position as reported by the source, if known.
    pub position: Option<u32>,
    /// Driver full name, assembled from given and family name.
    pub name: String,
    /// Team name, untruncated. Truncation is a rendering concern.
    pub team: String,
    pub points: f64,
}

/// One row of the constructor championship table.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorStanding {
    pub position: Option<u32>,
    pub team: String,
    pub points: f64,
}

/// Date and time of one scheduled session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSchedule {
    pub date: String,
    pub time: String,
}

/// Metadata for the next scheduled race.
#[derive(Debug, Clone, PartialEq)]
pub struct NextRaceInfo {
    pub race_name: String,
    pub circuit_name: String,
    pub race: SessionSchedule,
    /// Present only when the payload carries a qualifying schedule.
    pub qualifying: Option<SessionSchedule>,
}

// ---------------------------------------------------------------------------
// Wire schema
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DriversChampionshipDoc {
    #[serde(default)]
    drivers_championship: Vec<DriverEntry>,
}

#[derive(Debug, Deserialize)]
struct DriverEntry {
    #[serde(default, deserialize_with = "flexible_position")]
    position: Option<u32>,
    #[serde(default)]
    driver: Option<DriverName>,
    #[serde(default)]
    team: Option<TeamRef>,
    #[serde(default, deserialize_with = "flexible_points")]
    points: f64,
}

#[derive(Debug, Deserialize)]
struct DriverName {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    surname: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    #[serde(default, rename = "teamName")]
    team_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConstructorsChampionshipDoc {
    #[serde(default)]
    constructors_championship: Vec<ConstructorEntry>,
}

#[derive(Debug, Deserialize)]
struct ConstructorEntry {
    #[serde(default, deserialize_with = "flexible_position")]
    position: Option<u32>,
    #[serde(default)]
    team: Option<TeamRef>,
    #[serde(default, deserialize_with = "flexible_points")]
    points: f64,
}

#[derive(Debug, Deserialize)]
struct NextRaceDoc {
    #[serde(default)]
    race: Vec<RaceEntry>,
}

#[derive(Debug, Deserialize)]
struct RaceEntry {
    #[serde(default, rename = "raceName")]
    race_name: Option<String>,
    #[serde(default)]
    circuit: Option<CircuitRef>,
    #[serde(default)]
    schedule: Option<RaceSchedule>,
}

#[derive(Debug, Deserialize)]
struct CircuitRef {
    #[serde(default, rename = "circuitName")]
    circuit_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RaceSchedule {
    #[serde(default)]
    race: Option<ScheduleSlot>,
    #[serde(default)]
    qualy: Option<ScheduleSlot>,
}

#[derive(Debug, Deserialize)]
struct ScheduleSlot {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    time: Option<String>,
}

/// Positions arrive as either an integer or a numeric string.
fn flexible_position<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().map(|n| n as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Points arrive as either a number or a numeric string.
fn flexible_points<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn or_placeholder(value: Option<String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => display::PLACEHOLDER.to_string(),
    }
}

impl From<DriverEntry> for DriverStanding {
    fn from(entry: DriverEntry) -> Self {
        let name = entry
            .driver
            .map(|d| {
                [d.name, d.surname]
                    .into_iter()
                    .flatten()
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();

        DriverStanding {
            position: entry.position,
            name: if name.is_empty() {
                display::PLACEHOLDER.to_string()
            } else {
                name
            },
            team: or_placeholder(entry.team.and_then(|t| t.team_name)),
            points: entry.points,
        }
    }
}

impl From<ConstructorEntry> for ConstructorStanding {
    fn from(entry: ConstructorEntry) -> Self {
        ConstructorStanding {
            position: entry.position,
            team: or_placeholder(entry.team.and_then(|t| t.team_name)),
            points: entry.points,
        }
    }
}

impl From<ScheduleSlot> for SessionSchedule {
    fn from(slot: ScheduleSlot) -> Self {
        SessionSchedule {
            date: or_placeholder(slot.date),
            time: or_placeholder(slot.time),
        }
    }
}

impl From<RaceEntry> for NextRaceInfo {
    fn from(entry: RaceEntry) -> Self {
        let (race, qualifying) = match entry.schedule {
            Some(schedule) => (
                schedule.race.map(SessionSchedule::from),
                schedule.qualy.map(SessionSchedule::from),
            ),
            None => (None, None),
        };

        NextRaceInfo {
            race_name: or_placeholder(entry.race_name),
            circuit_name: or_placeholder(entry.circuit.and_then(|c| c.circuit_name)),
            race: race.unwrap_or(SessionSchedule {
                date: display::PLACEHOLDER.to_string(),
                time: display::PLACEHOLDER.to_string(),
            }),
            qualifying,
        }
    }
}

// ---------------------------------------------------------------------------
// Document parsing
// ---------------------------------------------------------------------------

/// Parse the driver standings document, keeping at most the first
/// `MAX_ROWS` entries in source order. The source is trusted to order by
/// position; no re-sorting happens here.
pub fn parse_driver_standings(raw: &str) -> Result<Vec<DriverStanding>, serde_json::Error> {
    let doc: DriversChampionshipDoc = serde_json::from_str(raw)?;
    Ok(doc
        .drivers_championship
        .into_iter()
        .take(display::MAX_ROWS)
        .map(Into::into)
        .collect())
}

/// Parse the constructor standings document. Same slicing and ordering
/// policy as the driver table.
pub fn parse_constructor_standings(
    raw: &str,
) -> Result<Vec<ConstructorStanding>, serde_json::Error> {
    let doc: ConstructorsChampionshipDoc = serde_json::from_str(raw)?;
    Ok(doc
        .constructors_championship
        .into_iter()
        .take(display::MAX_ROWS)
        .map(Into::into)
        .collect())
}

/// Parse the next-race document. Returns `None` when the race list is
/// absent or empty.
pub fn parse_next_race(raw: &str) -> Result<Option<NextRaceInfo>, serde_json::Error> {
    let doc: NextRaceDoc = serde_json::from_str(raw)?;
    Ok(doc.race.into_iter().next().map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_driver_standings_example() {
        let raw = r#"{"drivers_championship":[{"position":1,"driver":{"name":"Max","surname":"Verstappen"},"team":{"teamName":"Red Bull Racing Honda RBPT"},"points":437}]}"#;
        let standings = parse_driver_standings(raw).unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].position, Some(1));
        assert_eq!(standings[0].name, "Max Verstappen");
        assert_eq!(standings[0].team, "Red Bull Racing Honda RBPT");
        assert_eq!(standings[0].points, 437.0);
    }

    #[test]
    fn test_driver_standings_kept_in_source_order_and_capped_at_ten() {
        let entries: Vec<String> = (1..=15)
            .map(|i| {
                format!(
                    r#"{{"position":{},"driver":{{"name":"Driver","surname":"{}"}},"team":{{"teamName":"Team"}},"points":{}}}"#,
                    i,
                    i,
                    400 - i
                )
            })
            .collect();
        let raw = format!(r#"{{"drivers_championship":[{}]}}"#, entries.join(","));

        let standings = parse_driver_standings(&raw).unwrap();
        assert_eq!(standings.len(), 10);
        let positions: Vec<_> = standings.iter().map(|s| s.position).collect();
        assert_eq!(
            positions,
            (1..=10).map(Some).collect::<Vec<_>>(),
            "entries must keep source order"
        );
    }

    #[test]
    fn test_missing_driver_name_defaults_to_placeholder() {
        let raw = r#"{"drivers_championship":[{"position":4,"team":{"teamName":"McLaren"},"points":12}]}"#;
        let standings = parse_driver_standings(raw).unwrap();
        assert_eq!(standings[0].name, "N/A");

        let raw = r#"{"drivers_championship":[{"position":4,"driver":{},"points":12}]}"#;
        let standings = parse_driver_standings(raw).unwrap();
        assert_eq!(standings[0].name, "N/A");
        assert_eq!(standings[0].team, "N/A");
    }

    #[test]
    fn test_partial_driver_name_uses_what_is_present() {
        let raw = r#"{"drivers_championship":[{"position":2,"driver":{"surname":"Norris"},"points":0}]}"#;
        let standings = parse_driver_standings(raw).unwrap();
        assert_eq!(standings[0].name, "Norris");
    }

    #[test]
    fn test_position_and_points_accept_strings() {
        let raw = r#"{"drivers_championship":[{"position":"3","driver":{"name":"Charles","surname":"Leclerc"},"team":{"teamName":"Ferrari"},"points":"206.5"}]}"#;
        let standings = parse_driver_standings(raw).unwrap();
        assert_eq!(standings[0].position, Some(3));
        assert_eq!(standings[0].points, 206.5);
    }

    #[test]
    fn test_unparseable_position_becomes_unknown() {
        let raw = r#"{"drivers_championship":[{"position":"DNF","driver":{"name":"A","surname":"B"},"points":null}]}"#;
        let standings = parse_driver_standings(raw).unwrap();
        assert_eq!(standings[0].position, None);
        assert_eq!(standings[0].points, 0.0);
    }

    #[test]
    fn test_missing_championship_key_yields_empty_list() {
        let standings = parse_driver_standings("{}").unwrap();
        assert!(standings.is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_driver_standings("not json").is_err());
        assert!(parse_constructor_standings(r#"{"constructors_championship": 3}"#).is_err());
    }

    #[test]
    fn test_parse_constructor_standings() {
        let raw = r#"{"constructors_championship":[{"position":1,"team":{"teamName":"McLaren Mercedes"},"points":516},{"position":"2","team":{"teamName":"Ferrari"},"points":"496"}]}"#;
        let standings = parse_constructor_standings(raw).unwrap();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].team, "McLaren Mercedes");
        assert_eq!(standings[1].position, Some(2));
        assert_eq!(standings[1].points, 496.0);
    }

    #[test]
    fn test_parse_next_race_with_qualifying() {
        let raw = r#"{"race":[{"raceName":"Dutch Grand Prix","circuit":{"circuitName":"Circuit Zandvoort"},"schedule":{"race":{"date":"2026-08-30","time":"13:00:00Z"},"qualy":{"date":"2026-08-29","time":"14:00:00Z"}}}]}"#;
        let race = parse_next_race(raw).unwrap().unwrap();
        assert_eq!(race.race_name, "Dutch Grand Prix");
        assert_eq!(race.circuit_name, "Circuit Zandvoort");
        assert_eq!(race.race.date, "2026-08-30");
        assert_eq!(race.race.time, "13:00:00Z");
        let qualy = race.qualifying.expect("qualifying present");
        assert_eq!(qualy.date, "2026-08-29");
    }

    #[test]
    fn test_parse_next_race_without_qualifying() {
        let raw = r#"{"race":[{"raceName":"Dutch Grand Prix","schedule":{"race":{"date":"2026-08-30"}}}]}"#;
        let race = parse_next_race(raw).unwrap().unwrap();
        assert_eq!(race.circuit_name, "N/A");
        assert_eq!(race.race.time, "N/A");
        assert!(race.qualifying.is_none());
    }

    #[test]
    fn test_parse_next_race_empty_list() {
        assert_eq!(parse_next_race(r#"{"race":[]}"#).unwrap(), None);
        assert_eq!(parse_next_race("{}").unwrap(), None);
    }
}
