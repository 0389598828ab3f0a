use chrono::Duration;

/// Upper bound on how long a regeneration decision may be trusted.
pub const MAX_STALENESS_WINDOW_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegenerationGuardConfig {
    pub staleness_window_secs: u64,
    /// Page size used when listing a project's reports.
    pub reports_page_limit: u32,
}

impl Default for RegenerationGuardConfig {
    fn default() -> Self {
        Self {
            staleness_window_secs: MAX_STALENESS_WINDOW_SECS,
            reports_page_limit: 50,
        }
    }
}

impl RegenerationGuardConfig {
    /// Effective staleness window, clamped to at most two minutes.
    pub fn staleness_window(&self) -> Duration {
        Duration::seconds(self.staleness_window_secs.min(MAX_STALENESS_WINDOW_SECS) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staleness_window_is_clamped() {
        let config = RegenerationGuardConfig {
            staleness_window_secs: 3600,
            ..Default::default()
        };
        assert_eq!(config.staleness_window(), Duration::seconds(120));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: RegenerationGuardConfig =
            serde_json::from_str(r#"{ "stalenessWindowSecs": 30 }"#).unwrap();
        assert_eq!(config.staleness_window(), Duration::seconds(30));
        assert_eq!(config.reports_page_limit, 50);
    }
}
