use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different API deployments the dashboard can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public Formula 1 statistics API.
    #[default]
    Production,
    /// A custom API base URL, e.g. a local fixture server.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Production => "https://f1api.dev/api".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" | "production" => Ok(Environment::Production),
            _ if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_base_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert_eq!("".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(
            "http://localhost:8080/api/".parse::<Environment>(),
            Ok(Environment::Custom {
                api_base_url: "http://localhost:8080/api".to_string()
            })
        );
        assert!("not-a-url".parse::<Environment>().is_err());
    }

    #[test]
    fn test_api_base_url() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://f1api.dev/api"
        );
    }
}
