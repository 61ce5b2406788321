//! Message catalogue
//!
//! Every user-facing string lives here, keyed by message id. Templates may
//! contain `{date}`, `{place}`, `{thi}`, `{precip}`, `{wind}`, `{event}`,
//! `{earliest}` and `{latest}` placeholders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AccuracyNote, DataSource, EventCategory, OutOfRangeNotice, Recommendation,
    RecommendationKind, RecommendationTopic, RiskLevel,
};
use crate::types::Language;

/// (English, Turkish) pair for a message id
fn entry(id: &str) -> Option<(&'static str, &'static str)> {
    let pair = match id {
        // Heat risk blocks
        "heat.summary" => (
            "Average THI: {thi}, Precipitation: {precip} mm/day, Wind: {wind} m/s on {date}",
            "Ortalama THI: {thi}, Yağış: {precip} mm/gün, Rüzgar: {wind} m/s {date} tarihinde",
        ),
        "heat.analysis_period" => ("Analysis period: ±2 days", "Analiz dönemi: ±2 gün"),
        "heat.low.title" => ("PERFECT CHOICE!", "MÜKEMMEL SEÇİM!"),
        "heat.low.message" => (
            "{date} has low heat stress risk for {place}",
            "{date} tarihi {place} için düşük ısı stresi riskine sahip",
        ),
        "heat.low.ideal" => (
            "Ideal conditions for outdoor events",
            "Açık hava etkinliği için ideal koşullar",
        ),
        "heat.low.reliability" => ("Data reliability: High", "Veri güvenilirliği: Yüksek"),
        "heat.medium.title" => ("MEDIUM RISK", "ORTA SEVİYE RİSK"),
        "heat.medium.message" => (
            "{date} has moderate heat stress risk",
            "{date} tarihi orta ısı stresi riski taşıyor",
        ),
        "heat.medium.prepare" => (
            "Prepare for moderate heat and humidity",
            "Orta seviye ısı ve nem için hazırlıklı olun",
        ),
        "heat.medium.hydration" => (
            "Plan hydration and shaded areas",
            "Hidrasyon ve gölgeli alanlar planlayın",
        ),
        "heat.medium.inform_guests" => (
            "Inform guests about weather conditions",
            "Misafirleri hava durumu konusunda bilgilendirin",
        ),
        "heat.high.title" => ("HIGH RISK", "YÜKSEK RİSK"),
        "heat.high.message" => (
            "{date} has high heat stress risk",
            "{date} tarihi yüksek ısı stresi riski taşıyor",
        ),
        "heat.high.unsuitable" => (
            "Not suitable for prolonged outdoor activities",
            "Uzun süreli açık hava etkinlikleri için uygun değil",
        ),
        "heat.high.alternatives" => (
            "Consider indoor alternatives or rescheduling",
            "Kapalı mekan alternatifi veya erteleme düşünün",
        ),
        "heat.high.heat_issues" => (
            "High risk of heat-related issues",
            "Isı kaynaklı sorunlar için yüksek risk",
        ),

        // Wind blocks
        "wind.high.title" => ("HIGH WIND WARNING", "YÜKSEK RÜZGAR UYARISI"),
        "wind.high.message" => (
            "High wind speed expected: {wind} m/s",
            "Yüksek rüzgar hızı bekleniyor: {wind} m/s",
        ),
        "wind.high.secure_items" => (
            "Secure loose items and decorations",
            "Gevşek eşyaları ve dekorasyonları sabitleyin",
        ),
        "wind.high.protection" => (
            "Consider wind protection for outdoor setups",
            "Açık hava düzenlemeleri için rüzgar koruması düşünün",
        ),
        "wind.high.monitor_gusts" => (
            "Monitor weather updates for wind gusts",
            "Rüzgar sağanakları için hava durumu güncellemelerini takip edin",
        ),
        "wind.medium.title" => ("MODERATE WIND", "ORTA SEVİYE RÜZGAR"),
        "wind.medium.message" => (
            "Moderate wind speed: {wind} m/s",
            "Orta seviye rüzgar hızı: {wind} m/s",
        ),
        "wind.medium.light_items" => (
            "Light items may be affected by wind",
            "Hafif eşyalar rüzgardan etkilenebilir",
        ),
        "wind.medium.secure_paper" => (
            "Consider securing paper materials and light decorations",
            "Kağıt malzemeleri ve hafif dekorasyonları sabitlemeyi düşünün",
        ),

        // Event checklists
        "checklist.title" => ("{event} SPECIFIC RECOMMENDATIONS", "{event} ÖZEL ÖNERİLERİ"),
        "checklist.message" => ("Extra preparations for {event}", "{event} için ekstra hazırlıklar:"),
        "checklist.wedding.indoor_photos" => (
            "Arrange a backup indoor venue for photos",
            "Fotoğraf çekimi için yedek iç mekan ayarlayın",
        ),
        "checklist.wedding.attire_fabric" => (
            "Choose suitable fabric for wedding attire",
            "Gelinlik için uygun kumaş seçimi yapın",
        ),
        "checklist.wedding.umbrellas" => (
            "Provide umbrellas for guests",
            "Misafirler için şemsiye bulundurun",
        ),
        "checklist.concert.stage_rain" => (
            "Protect stage equipment from rain",
            "Sahne ekipmanlarını yağmurdan koruyun",
        ),
        "checklist.concert.sound_wind" => (
            "Adjust sound system based on wind direction",
            "Ses sistemini rüzgar yönüne göre ayarlayın",
        ),
        "checklist.concert.electrical_safety" => (
            "Take extra electrical safety measures",
            "Elektrik güvenliği için ekstra önlem alın",
        ),
        "checklist.sports.field_conditions" => (
            "Continuously monitor field conditions",
            "Saha durumunu sürekli kontrol edin",
        ),
        "checklist.sports.backup_area" => (
            "Keep a backup playing area ready",
            "Yedek oyun alanı hazır bulundurun",
        ),
        "checklist.sports.spectator_shade" => (
            "Consider shade for spectator areas",
            "Seyirci alanı için gölgelik düşünün",
        ),
        "checklist.festival.tent_flooring" => (
            "Prepare waterproof flooring for tents",
            "Çadır alanı için su geçirmez zemin hazırlayın",
        ),
        "checklist.festival.sheltered_stalls" => (
            "Set up food stalls in sheltered areas",
            "Yiyecek stantlarını korunaklı alana kurun",
        ),
        "checklist.festival.emergency_plan" => (
            "Create an emergency plan",
            "Acil durum planı oluşturun",
        ),
        "checklist.party.music_equipment" => ("Protect music equipment", "Müzik ekipmanlarını koruyun"),
        "checklist.party.dance_floor" => (
            "Prepare floor for dance area",
            "Dans alanı için zemin hazırlayın",
        ),
        "checklist.party.lighting_backup" => ("Backup plan for lighting", "Işıklandırma için yedek plan"),
        "checklist.picnic.elevated_spot" => (
            "Choose elevated areas for picnic spot",
            "Piknik alanı seçerken yüksek yerleri tercih edin",
        ),
        "checklist.picnic.food_rain" => ("Protect food from rain", "Yiyecekleri yağmurdan koruyun"),
        "checklist.picnic.indoor_alternative" => (
            "Consider alternative indoor space",
            "Alternatif kapalı alan düşünün",
        ),
        "checklist.meeting.tent" => (
            "Consider tent for meeting area",
            "Toplantı alanı için çadır düşünün",
        ),
        "checklist.meeting.presentation_equipment" => (
            "Protect presentation equipment",
            "Sunum ekipmanlarını koruyun",
        ),
        "checklist.meeting.transportation" => (
            "Plan transportation for guests",
            "Misafirler için ulaşım planlayın",
        ),

        // Result labels
        "accuracy.historical" => (
            "Based on actual historical data (high accuracy)",
            "Gerçek tarihi verilere dayalıdır (yüksek doğruluk)",
        ),
        "accuracy.climatology" => (
            "Prediction based on historical climatology data",
            "Tarihi klimatoloji verilerine dayalı tahminidir",
        ),
        "accuracy.simulation" => (
            "Estimated 70-80% based on historical climatology data",
            "Tarihi klimatoloji verilerine dayalı tahmini %70-80 doğruluk",
        ),
        "source.historical" => ("NASA POWER Historical", "NASA POWER Geçmiş Veri"),
        "source.climatology" => ("NASA POWER Climatology", "NASA POWER Klimatoloji"),
        "source.simulation" => ("Simulation", "Simülasyon"),
        "risk.low" => ("LOW RISK", "DÜŞÜK RİSK"),
        "risk.medium" => ("MEDIUM RISK", "ORTA RİSK"),
        "risk.high" => ("HIGH RISK", "YÜKSEK RİSK"),

        // Exported reports
        "report.title" => ("NASA POWER Weather Report", "NASA POWER Hava Durumu Raporu"),
        "report.place" => ("Location", "Konum"),
        "report.date" => ("Date", "Tarih"),
        "report.precipitation" => ("Precipitation", "Yağış"),
        "report.temperature" => ("Temperature", "Sıcaklık"),
        "report.wind" => ("Wind Speed", "Rüzgar Hızı"),
        "report.risk" => ("Risk Level", "Risk Seviyesi"),
        "report.source" => ("Data Source", "Veri Kaynağı"),
        "report.accuracy" => ("Accuracy", "Doğruluk"),
        "report.comparison" => ("Nearby dates", "Yakın tarihler"),

        // Out-of-range notice
        "out_of_range.message" => (
            "Selected date ({date}) is beyond 3 months. NASA POWER data cannot provide reliable forecasts.",
            "Seçtiğiniz tarih ({date}) 3 aydan daha ileride. NASA POWER verileri bu tarih için güvenilir tahmin sağlayamaz.",
        ),
        "out_of_range.recommendation" => (
            "Please select a date between {earliest} and {latest}.",
            "Lütfen {earliest} - {latest} aralığında bir tarih seçin.",
        ),

        _ => return None,
    };
    Some(pair)
}

/// Raw template for a message id, or `None` for an unknown id
pub fn text(id: &str, language: Language) -> Option<&'static str> {
    entry(id).map(|(en, tr)| match language {
        Language::English => en,
        Language::Turkish => tr,
    })
}

/// Template for an id, falling back to the id itself
fn text_or_id<'a>(id: &'a str, language: Language) -> &'a str {
    text(id, language).unwrap_or(id)
}

/// Dates are always shown day first
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Values substituted into templates
#[derive(Debug, Clone, Default)]
struct Placeholders {
    values: Vec<(&'static str, String)>,
}

impl Placeholders {
    fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.push((key, value.into()));
        self
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Substitute `{key}` markers in one pass; substituted values are never rescanned
    fn render(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            output.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let substituted = after
                .find('}')
                .and_then(|close| self.lookup(&after[..close]).map(|value| (close, value)));
            match substituted {
                Some((close, value)) => {
                    output.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    output.push('{');
                    rest = after;
                }
            }
        }
        output.push_str(rest);
        output
    }
}

/// Category label in the given language
pub fn event_label(category: &EventCategory, language: Language) -> &str {
    match language {
        Language::English => category.label_en(),
        Language::Turkish => category.label_tr(),
    }
}

pub fn accuracy_text(note: AccuracyNote, language: Language) -> &'static str {
    text(note.message_id(), language).unwrap_or("")
}

pub fn source_label(source: DataSource, language: Language) -> &'static str {
    let id = match source {
        DataSource::Historical => "source.historical",
        DataSource::Climatology => "source.climatology",
        DataSource::Simulation => "source.simulation",
    };
    text(id, language).unwrap_or("")
}

pub fn risk_label(level: RiskLevel, language: Language) -> &'static str {
    let id = match level {
        RiskLevel::Low => "risk.low",
        RiskLevel::Medium => "risk.medium",
        RiskLevel::High => "risk.high",
    };
    text(id, language).unwrap_or("")
}

/// Recommendation rendered for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizedRecommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub message: String,
    pub details: Vec<String>,
}

/// Render a recommendation block in one language
pub fn localize(
    recommendation: &Recommendation,
    place: &str,
    language: Language,
) -> LocalizedRecommendation {
    let facts = &recommendation.facts;
    let event = match &recommendation.topic {
        RecommendationTopic::EventChecklist(category) => event_label(category, language).to_string(),
        _ => String::new(),
    };

    let with_event = |event: String| {
        Placeholders::default()
            .with("date", format_date(facts.date))
            .with("place", place)
            .with("thi", format!("{:.1}", facts.heat_index))
            .with("precip", format!("{:.1}", facts.precipitation_mm))
            .with("wind", format!("{:.1}", facts.wind_speed_mps))
            .with("event", event)
    };
    let placeholders = with_event(event.clone());
    let title_placeholders = with_event(event.to_uppercase());

    let (title_id, message_id) = match &recommendation.topic {
        RecommendationTopic::HeatRisk(RiskLevel::Low) => ("heat.low.title", "heat.low.message"),
        RecommendationTopic::HeatRisk(RiskLevel::Medium) => ("heat.medium.title", "heat.medium.message"),
        RecommendationTopic::HeatRisk(RiskLevel::High) => ("heat.high.title", "heat.high.message"),
        RecommendationTopic::WindRisk(RiskLevel::High) => ("wind.high.title", "wind.high.message"),
        RecommendationTopic::WindRisk(_) => ("wind.medium.title", "wind.medium.message"),
        RecommendationTopic::EventChecklist(_) => ("checklist.title", "checklist.message"),
    };

    LocalizedRecommendation {
        kind: recommendation.kind,
        title: title_placeholders.render(text_or_id(title_id, language)),
        message: placeholders.render(text_or_id(message_id, language)),
        details: recommendation
            .details
            .iter()
            .map(|id| placeholders.render(text_or_id(id, language)))
            .collect(),
    }
}

/// Notice text for a target past the reliable horizon: (message, recommendation)
pub fn out_of_range_text(notice: &OutOfRangeNotice, language: Language) -> (String, String) {
    let placeholders = Placeholders::default()
        .with("date", format_date(notice.target_date))
        .with("earliest", format_date(notice.earliest_supported))
        .with("latest", format_date(notice.latest_reliable));

    (
        placeholders.render(text_or_id("out_of_range.message", language)),
        placeholders.render(text_or_id("out_of_range.recommendation", language)),
    )
}
