//! Outdoor event categories

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Event category chosen by the user.
///
/// Labels are free-form: the suggested set is recognised in English and
/// Turkish, anything else is kept verbatim as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Wedding,
    Concert,
    SportsEvent,
    Festival,
    OutdoorParty,
    Picnic,
    BusinessMeeting,
    Other,
    Custom(String),
}

impl EventCategory {
    /// Suggested categories in display order
    pub const SUGGESTED: [EventCategory; 8] = [
        EventCategory::Wedding,
        EventCategory::Concert,
        EventCategory::SportsEvent,
        EventCategory::Festival,
        EventCategory::OutdoorParty,
        EventCategory::Picnic,
        EventCategory::BusinessMeeting,
        EventCategory::Other,
    ];

    /// Parse a label in either language; never fails
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        let lowered = trimmed.to_lowercase();
        Self::SUGGESTED
            .iter()
            .find(|c| c.label_en().to_lowercase() == lowered || c.label_tr().to_lowercase() == lowered)
            .cloned()
            .unwrap_or_else(|| EventCategory::Custom(trimmed.to_string()))
    }

    /// English label
    pub fn label_en(&self) -> &str {
        match self {
            EventCategory::Wedding => "Wedding",
            EventCategory::Concert => "Concert",
            EventCategory::SportsEvent => "Sports Event",
            EventCategory::Festival => "Festival",
            EventCategory::OutdoorParty => "Outdoor Party",
            EventCategory::Picnic => "Picnic",
            EventCategory::BusinessMeeting => "Business Meeting",
            EventCategory::Other => "Other",
            EventCategory::Custom(label) => label,
        }
    }

    /// Turkish label
    pub fn label_tr(&self) -> &str {
        match self {
            EventCategory::Wedding => "Düğün",
            EventCategory::Concert => "Konser",
            EventCategory::SportsEvent => "Spor Etkinliği",
            EventCategory::Festival => "Festival",
            EventCategory::OutdoorParty => "Açık Hava Partisi",
            EventCategory::Picnic => "Piknik",
            EventCategory::BusinessMeeting => "İş Toplantısı",
            EventCategory::Other => "Diğer",
            EventCategory::Custom(label) => label,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_en())
    }
}

impl Serialize for EventCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label_en())
    }
}

impl<'de> Deserialize<'de> for EventCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(EventCategory::from_label(&label))
    }
}
