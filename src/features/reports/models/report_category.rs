use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of civic issue kinds a report can be filed under.
///
/// Wire values use the human-readable labels the product shows in its
/// dropdowns, e.g. "Open Drainage" rather than "open_drainage".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReportCategory {
    Potholes,
    #[serde(rename = "Open Drainage")]
    OpenDrainage,
    #[serde(rename = "Water Logging")]
    WaterLogging,
    #[serde(rename = "Heavy Traffic")]
    HeavyTraffic,
    #[serde(rename = "Garbage Management")]
    GarbageManagement,
    #[serde(rename = "Water/Land Pollution")]
    WaterLandPollution,
    #[serde(rename = "Streetlamp Issue")]
    StreetlampIssue,
    #[serde(rename = "Poor Roads")]
    PoorRoads,
    Other,
}

impl ReportCategory {
    /// All categories in declaration (dropdown) order.
    pub const ALL: [ReportCategory; 9] = [
        ReportCategory::Potholes,
        ReportCategory::OpenDrainage,
        ReportCategory::WaterLogging,
        ReportCategory::HeavyTraffic,
        ReportCategory::GarbageManagement,
        ReportCategory::WaterLandPollution,
        ReportCategory::StreetlampIssue,
        ReportCategory::PoorRoads,
        ReportCategory::Other,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Potholes => "Potholes",
            ReportCategory::OpenDrainage => "Open Drainage",
            ReportCategory::WaterLogging => "Water Logging",
            ReportCategory::HeavyTraffic => "Heavy Traffic",
            ReportCategory::GarbageManagement => "Garbage Management",
            ReportCategory::WaterLandPollution => "Water/Land Pollution",
            ReportCategory::StreetlampIssue => "Streetlamp Issue",
            ReportCategory::PoorRoads => "Poor Roads",
            ReportCategory::Other => "Other",
        }
    }

    /// Parse a label back into a category. `None` for unknown labels.
    pub fn from_label(label: &str) -> Option<ReportCategory> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for category in ReportCategory::ALL {
            assert_eq!(ReportCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn unknown_label_does_not_parse() {
        assert_eq!(ReportCategory::from_label("Sewage"), None);
        assert_eq!(ReportCategory::from_label("potholes"), None); // case-sensitive
        assert_eq!(ReportCategory::from_label(""), None);
    }
}
