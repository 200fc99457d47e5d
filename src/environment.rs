use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the API deployments the dashboard can fetch repository data from.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local stub server, for development without hitting the real API.
    Local,
    /// The public GitHub REST API.
    #[default]
    Production,
}

impl Environment {
    /// Returns the search API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:9920".to_string(),
            Environment::Production => "https://api.github.com".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
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
    fn parses_known_environments_case_insensitively() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "Production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("beta".parse::<Environment>().is_err());
    }

    #[test]
    fn production_points_at_github() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.github.com"
        );
    }
}
