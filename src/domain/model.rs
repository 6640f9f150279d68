use serde::{Deserialize, Serialize};

/// Physical lanes per heat. The scb format always carries exactly this many
/// lane lines per heat, occupied or not.
pub const LANES_PER_HEAT: usize = 10;

/// Start list entry for a single lane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub name: String,
    pub team: String,
}

impl Lane {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }

    /// A lane counts as empty when no swimmer name is assigned. The team
    /// field does not matter here.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Start list for one heat of an event. Always holds exactly
/// [`LANES_PER_HEAT`] lane slots; lane index 0 is physical lane 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heat {
    /// Event number, kept verbatim from the file header.
    pub event: String,
    pub event_desc: String,
    /// 1-based heat number within the event.
    pub heat: u32,
    pub lanes: [Lane; LANES_PER_HEAT],
}

/// A swimming event: the header data plus its heats, numbered 1..=num_heats
/// with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event number token from the header. Not necessarily numeric.
    pub event: String,
    pub event_desc: String,
    pub heats: Vec<Heat>,
}

impl Event {
    pub fn num_heats(&self) -> usize {
        self.heats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_is_empty() {
        assert!(Lane::default().is_empty());
        assert!(Lane::new("", "TEAM").is_empty());
        assert!(Lane::new("   ", "TEAM").is_empty());
        assert!(!Lane::new("ONE, SOME", "").is_empty());
        assert!(!Lane::new("ONE, SOME", "TEAM").is_empty());
    }
}
