//! Startup weather line
//!
//! Best-effort current conditions for the user's location, shown once with
//! the session startup messages. Location comes from IP geolocation with
//! fallback hosts; conditions come from wttr.in. Every failure path
//! degrades to a plain "Weather unavailable" string.

use reqwest::ClientBuilder;
use serde_json::Value;
use std::time::Duration;

const LOCATION_APIS: [&str; 2] = ["https://ipinfo.io/json", "https://ipapi.co/json"];

const UNAVAILABLE: &str = "Weather unavailable";

struct Location {
    city: String,
    country: String,
    /// "lat,lon" pair as reported by the geolocation API.
    loc: String,
}

async fn get_location(client: &reqwest::Client) -> Option<Location> {
    for api in LOCATION_APIS {
        let Ok(response) = client.get(api).send().await else {
            continue;
        };
        let Ok(data) = response.json::<Value>().await else {
            continue;
        };

        if let Some(city) = data.get("city").and_then(Value::as_str) {
            let country = data
                .get("country")
                .or_else(|| data.get("country_name"))
                .and_then(Value::as_str)
                .unwrap_or("XX");
            let loc = data
                .get("loc")
                .and_then(Value::as_str)
                .unwrap_or("51.5074,-0.1278");
            return Some(Location {
                city: city.to_string(),
                country: country.to_string(),
                loc: loc.to_string(),
            });
        }
    }

    None
}

async fn get_weather_data(client: &reqwest::Client, lat: &str, lon: &str) -> Option<Value> {
    let url = format!("https://wttr.in/{},{}?format=j1", lat, lon);
    let response = client
        .get(url)
        .timeout(Duration::from_secs(3))
        .send()
        .await
        .ok()?;
    response.json::<Value>().await.ok()
}

fn weather_emoji(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();

    let emoji_map: [(&str, &str); 10] = [
        ("thunder", "⛈️"),
        ("drizzle", "🌦️"),
        ("shower", "🌦️"),
        ("rain", "🌧️"),
        ("snow", "❄️"),
        ("sleet", "🌨️"),
        ("fog", "🌫️"),
        ("mist", "🌫️"),
        ("cloud", "☁️"),
        ("clear", "☀️"),
    ];

    for (key, emoji) in emoji_map {
        if condition.contains(key) {
            return emoji;
        }
    }
    if condition.contains("sunny") {
        return "☀️";
    }

    "🌤️"
}

fn format_weather_info(location: &Location, weather_data: &Value) -> String {
    let current = &weather_data["current_condition"][0];
    let (Some(temp), Some(condition)) = (
        current["temp_C"].as_str(),
        current["weatherDesc"][0]["value"].as_str(),
    ) else {
        return format!("{}, {} {}", location.city, location.country, UNAVAILABLE);
    };

    format!(
        "{}, {} {}°C {}  {}",
        location.city,
        location.country,
        temp,
        weather_emoji(condition),
        condition
    )
}

/// Fetch a one-line weather summary for the startup display.
pub async fn current_weather_line() -> String {
    let Ok(client) = ClientBuilder::new().timeout(Duration::from_secs(2)).build() else {
        return UNAVAILABLE.to_string();
    };

    let Some(location) = get_location(&client).await else {
        return UNAVAILABLE.to_string();
    };

    let Some((lat, lon)) = location.loc.split_once(',') else {
        return format!("{}, {} {}", location.city, location.country, UNAVAILABLE);
    };

    match get_weather_data(&client, lat.trim(), lon.trim()).await {
        Some(data) => format_weather_info(&location, &data),
        None => format!("{}, {} {}", location.city, location.country, UNAVAILABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weather_emoji() {
        assert_eq!(weather_emoji("Clear"), "☀️");
        assert_eq!(weather_emoji("Partly cloudy"), "☁️");
        assert_eq!(weather_emoji("Light rain shower"), "🌦️");
        assert_eq!(weather_emoji("Thunderstorm"), "⛈️");
        assert_eq!(weather_emoji("Alien fog"), "🌫️");
        assert_eq!(weather_emoji("Something else"), "🌤️");
    }

    #[test]
    fn test_format_weather_info() {
        let location = Location {
            city: "Zandvoort".to_string(),
            country: "NL".to_string(),
            loc: "52.37,4.53".to_string(),
        };
        let data = json!({
            "current_condition": [
                {"temp_C": "21", "weatherDesc": [{"value": "Sunny"}]}
            ]
        });
        assert_eq!(
            format_weather_info(&location, &data),
            "Zandvoort, NL 21°C ☀️  Sunny"
        );
    }

    #[test]
    fn test_format_weather_info_with_missing_fields() {
        let location = Location {
            city: "London".to_string(),
            country: "GB".to_string(),
            loc: "51.5,-0.1".to_string(),
        };
        let info = format_weather_info(&location, &json!({}));
        assert_eq!(info, "London, GB Weather unavailable");
    }
}
