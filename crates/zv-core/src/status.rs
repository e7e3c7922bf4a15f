//! Health status shared by the agent, epidemiology and output crates.

/// A human's health status.  Reservoirs carry no status.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
}

impl HealthStatus {
    #[inline]
    pub fn is_sick(self) -> bool {
        matches!(self, HealthStatus::Sick)
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Sick    => "sick",
        }
    }

    /// Parse the label written by [`as_str`](Self::as_str) (case-insensitive).
    pub fn parse(s: &str) -> Option<HealthStatus> {
        match s.trim().to_ascii_lowercase().as_str() {
            "healthy" => Some(HealthStatus::Healthy),
            "sick"    => Some(HealthStatus::Sick),
            _ => None,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
