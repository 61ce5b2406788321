//! Report export for analysis results

use serde::Serialize;
use shared::messages::{accuracy_text, format_date, risk_label, source_label, text};
use shared::{AnalysisResult, ComparisonPoint, Language, RiskLevel};

use crate::error::{AppError, AppResult};

/// One CSV row: a comparison point plus the target summary columns
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonCsvRow {
    pub date: String,
    pub offset: i64,
    pub precipitation: f64,
    pub wind_speed: f64,
    pub thi: f64,
    pub risk_level: RiskLevel,
    pub wind_risk_level: RiskLevel,
    pub is_selected: bool,
    pub selected_date: String,
    pub temperature: f64,
    pub thi_main: f64,
    pub precipitation_main: f64,
    pub wind_speed_main: f64,
    pub accuracy: String,
}

/// Report export service
pub struct ReportingService;

impl ReportingService {
    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }

    /// CSV rows for the comparison window of a result
    pub fn comparison_rows(
        result: &AnalysisResult,
        comparison: &[ComparisonPoint],
        language: Language,
    ) -> Vec<ComparisonCsvRow> {
        let accuracy = accuracy_text(result.accuracy, language).to_string();
        let selected_date = format_date(result.target_date);

        comparison
            .iter()
            .map(|point| ComparisonCsvRow {
                date: format_date(point.date),
                offset: point.offset,
                precipitation: point.precipitation_mm,
                wind_speed: point.wind_speed_mps,
                thi: point.heat_index,
                risk_level: point.risk_level,
                wind_risk_level: point.wind_risk_level,
                is_selected: point.is_target,
                selected_date: selected_date.clone(),
                temperature: result.observation.temperature_celsius,
                thi_main: result.heat_index,
                precipitation_main: result.observation.precipitation_mm,
                wind_speed_main: result.observation.wind_speed_mps,
                accuracy: accuracy.clone(),
            })
            .collect()
    }

    /// Fixed-field plain text report
    pub fn text_report(
        result: &AnalysisResult,
        comparison: &[ComparisonPoint],
        place: &str,
        language: Language,
    ) -> String {
        let label = |id: &str| text(id, language).unwrap_or_default();
        let obs = &result.observation;

        let mut lines = vec![
            label("report.title").to_string(),
            format!("{}: {}", label("report.place"), place),
            format!("{}: {}", label("report.date"), format_date(result.target_date)),
            format!("{}: {:.1} mm/day", label("report.precipitation"), obs.precipitation_mm),
            format!("{}: {:.1} °C", label("report.temperature"), obs.temperature_celsius),
            format!("{}: {:.1} m/s", label("report.wind"), obs.wind_speed_mps),
            format!("THI: {:.1}", result.heat_index),
            format!("{}: {}", label("report.risk"), risk_label(result.risk_level, language)),
            format!(
                "{}: {} ({})",
                label("report.source"),
                source_label(result.source, language),
                result.reference_period
            ),
            format!("{}: {}", label("report.accuracy"), accuracy_text(result.accuracy, language)),
            String::new(),
            format!("{}:", label("report.comparison")),
        ];

        lines.extend(comparison.iter().map(|point| {
            format!(
                "{}{}: {:.1} mm, {:.1} m/s, THI: {:.1}",
                format_date(point.date),
                if point.is_target { " *" } else { "" },
                point.precipitation_mm,
                point.wind_speed_mps,
                point.heat_index
            )
        }));

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }
}
