//! Event recommendations derived from an analysis result
//!
//! Recommendations carry message ids only; text is rendered per language by
//! the message catalogue.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::event::EventCategory;
use super::risk::RiskLevel;

/// Presentation style of a recommendation block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Success,
    Warning,
    Danger,
    Info,
}

/// What a recommendation block is about
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RecommendationTopic {
    HeatRisk(RiskLevel),
    WindRisk(RiskLevel),
    EventChecklist(EventCategory),
}

/// Values quoted by the rendered text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecommendationFacts {
    pub date: NaiveDate,
    pub heat_index: f64,
    pub precipitation_mm: f64,
    pub wind_speed_mps: f64,
}

impl RecommendationFacts {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            date: result.target_date,
            heat_index: result.heat_index,
            precipitation_mm: result.observation.precipitation_mm,
            wind_speed_mps: result.observation.wind_speed_mps,
        }
    }
}

/// One locale-free recommendation block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub topic: RecommendationTopic,
    pub facts: RecommendationFacts,
    /// Message ids of the detail lines, in display order
    pub details: Vec<String>,
}

impl Recommendation {
    fn new(
        kind: RecommendationKind,
        topic: RecommendationTopic,
        facts: RecommendationFacts,
        details: &[&str],
    ) -> Self {
        Self {
            kind,
            topic,
            facts,
            details: details.iter().map(|id| id.to_string()).collect(),
        }
    }
}

const HEAT_LOW_DETAILS: [&str; 4] = [
    "heat.summary",
    "heat.low.ideal",
    "heat.analysis_period",
    "heat.low.reliability",
];

const HEAT_MEDIUM_DETAILS: [&str; 4] = [
    "heat.summary",
    "heat.medium.prepare",
    "heat.medium.hydration",
    "heat.medium.inform_guests",
];

const HEAT_HIGH_DETAILS: [&str; 4] = [
    "heat.summary",
    "heat.high.unsuitable",
    "heat.high.alternatives",
    "heat.high.heat_issues",
];

const WIND_HIGH_DETAILS: [&str; 3] = [
    "wind.high.secure_items",
    "wind.high.protection",
    "wind.high.monitor_gusts",
];

const WIND_MEDIUM_DETAILS: [&str; 2] = ["wind.medium.light_items", "wind.medium.secure_paper"];

/// Fixed preparation checklist for a category; empty for Other and custom labels
pub fn checklist_ids(category: &EventCategory) -> &'static [&'static str] {
    match category {
        EventCategory::Wedding => &[
            "checklist.wedding.indoor_photos",
            "checklist.wedding.attire_fabric",
            "checklist.wedding.umbrellas",
        ],
        EventCategory::Concert => &[
            "checklist.concert.stage_rain",
            "checklist.concert.sound_wind",
            "checklist.concert.electrical_safety",
        ],
        EventCategory::SportsEvent => &[
            "checklist.sports.field_conditions",
            "checklist.sports.backup_area",
            "checklist.sports.spectator_shade",
        ],
        EventCategory::Festival => &[
            "checklist.festival.tent_flooring",
            "checklist.festival.sheltered_stalls",
            "checklist.festival.emergency_plan",
        ],
        EventCategory::OutdoorParty => &[
            "checklist.party.music_equipment",
            "checklist.party.dance_floor",
            "checklist.party.lighting_backup",
        ],
        EventCategory::Picnic => &[
            "checklist.picnic.elevated_spot",
            "checklist.picnic.food_rain",
            "checklist.picnic.indoor_alternative",
        ],
        EventCategory::BusinessMeeting => &[
            "checklist.meeting.tent",
            "checklist.meeting.presentation_equipment",
            "checklist.meeting.transportation",
        ],
        EventCategory::Other | EventCategory::Custom(_) => &[],
    }
}

/// Build the recommendation blocks for an event.
///
/// Always one heat block, a wind block when wind is medium or high, then the
/// event checklist when the category has one.
pub fn recommend(category: &EventCategory, result: &AnalysisResult) -> Vec<Recommendation> {
    let facts = RecommendationFacts::from_result(result);
    let mut recommendations = Vec::with_capacity(3);

    let (kind, details): (RecommendationKind, &[&str]) = match result.risk_level {
        RiskLevel::Low => (RecommendationKind::Success, &HEAT_LOW_DETAILS[..]),
        RiskLevel::Medium => (RecommendationKind::Warning, &HEAT_MEDIUM_DETAILS[..]),
        RiskLevel::High => (RecommendationKind::Danger, &HEAT_HIGH_DETAILS[..]),
    };
    recommendations.push(Recommendation::new(
        kind,
        RecommendationTopic::HeatRisk(result.risk_level),
        facts,
        details,
    ));

    match result.wind_risk_level {
        RiskLevel::High => recommendations.push(Recommendation::new(
            RecommendationKind::Warning,
            RecommendationTopic::WindRisk(RiskLevel::High),
            facts,
            &WIND_HIGH_DETAILS,
        )),
        RiskLevel::Medium => recommendations.push(Recommendation::new(
            RecommendationKind::Info,
            RecommendationTopic::WindRisk(RiskLevel::Medium),
            facts,
            &WIND_MEDIUM_DETAILS,
        )),
        RiskLevel::Low => {}
    }

    let checklist = checklist_ids(category);
    if !checklist.is_empty() {
        recommendations.push(Recommendation::new(
            RecommendationKind::Info,
            RecommendationTopic::EventChecklist(category.clone()),
            facts,
            checklist,
        ));
    }

    recommendations
}
