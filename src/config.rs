use crate::model::election::DEFAULT_TOTAL_ELECTORAL_VOTES;
use crate::model::Party;
use crate::util::{read_serialized, UtilError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Read(#[from] UtilError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// States whose residents are never relocated unless configured otherwise.
pub const DEFAULT_PROTECTED_STATES: [&str; 4] = ["AL", "AZ", "CA", "TX"];

/// Analysis settings, read from JSON and overridden from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectionConfig {
    /// Electoral votes in play. When set, loaded elections must add up to it.
    pub total_electoral_votes: Option<u32>,
    /// Party credited with tied states and tied electoral counts.
    pub tie_break: Party,
    /// States that never donate voters.
    pub protected_states: Vec<String>,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        ElectionConfig {
            total_electoral_votes: None,
            tie_break: Party::default(),
            protected_states: DEFAULT_PROTECTED_STATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ElectionConfig {
    /// Read `path` if given, otherwise start from the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = read_serialized(path)?;
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(ElectionConfig::default()),
        }
    }

    pub fn with_overrides(
        mut self,
        total: Option<u32>,
        tie_break: Option<Party>,
        protected_states: Vec<String>,
    ) -> Self {
        if total.is_some() {
            self.total_electoral_votes = total;
        }
        if let Some(tie_break) = tie_break {
            self.tie_break = tie_break;
        }
        if !protected_states.is_empty() {
            self.protected_states = protected_states;
        }
        self
    }

    /// Electoral votes used for the flip threshold.
    pub fn total(&self) -> u32 {
        self.total_electoral_votes
            .unwrap_or(DEFAULT_TOTAL_ELECTORAL_VOTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ElectionConfig::default();
        assert_eq!(config.total(), 538);
        assert_eq!(config.tie_break, Party::Democratic);
        assert_eq!(config.protected_states, vec!["AL", "AZ", "CA", "TX"]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ElectionConfig =
            serde_json::from_str(r#"{"totalElectoralVotes": 14, "tieBreak": "rep"}"#).unwrap();
        assert_eq!(config.total(), 14);
        assert_eq!(config.tie_break, Party::Republican);
        assert_eq!(config.protected_states.len(), 4);
    }

    #[test]
    fn overrides_win() {
        let config = ElectionConfig::default().with_overrides(
            Some(24),
            Some(Party::Republican),
            vec!["NY".to_string()],
        );
        assert_eq!(config.total(), 24);
        assert_eq!(config.tie_break, Party::Republican);
        assert_eq!(config.protected_states, vec!["NY"]);

        let untouched = ElectionConfig::default().with_overrides(None, None, Vec::new());
        assert_eq!(untouched, ElectionConfig::default());
    }
}
