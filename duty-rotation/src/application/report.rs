use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::application::dto::MonthlyRosterReport;
use crate::error::{RosterError, RosterResult};

pub const REPORT_HEADING: &str = "Duty Roster Report";

/// レポートの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unsupported report format `{other}`; expected text|csv|json")),
        }
    }
}

impl MonthlyRosterReport {
    /// 保存時の既定ファイル名 例: Roster_November_2025.csv
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "Roster_{}.{}",
            self.title.replace(' ', "_"),
            format.extension()
        )
    }

    pub fn render(&self, format: ReportFormat) -> RosterResult<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Csv => self.render_csv(),
            ReportFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| RosterError::Render(e.to_string())),
        }
    }

    /// 端末向けの罫線付き表
    pub fn render_text(&self) -> String {
        let column_count = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(column_count) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let separator = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let pad = width - cell.chars().count();
                    format!(" {}{} ", cell, " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join("|")
        };

        let mut out = String::new();
        out.push_str(REPORT_HEADING);
        out.push('\n');
        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str(&format_row(&self.headers));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_row(row));
            out.push('\n');
        }
        out
    }

    pub fn render_csv(&self) -> RosterResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(&self.headers)
            .map_err(|e| RosterError::Render(e.to_string()))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| RosterError::Render(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| RosterError::Render(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| RosterError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    fn sample() -> MonthlyRosterReport {
        MonthlyRosterReport {
            title: "November 2025".to_string(),
            year: 2025,
            month: 10,
            headers: vec!["Member".to_string(), "W1 (26-1)".to_string()],
            week_labels: vec!["Oct 26 - Nov 1".to_string()],
            rows: vec![
                vec!["PREM MANDAL".to_string(), "Water".to_string()],
                vec!["KESHAV, JR".to_string(), "Garbage".to_string()],
            ],
        }
    }

    #[test]
    fn file_name_uses_month_and_year() {
        let report = sample();
        assert_eq!(report.file_name(ReportFormat::Csv), "Roster_November_2025.csv");
        assert_eq!(report.file_name(ReportFormat::Text), "Roster_November_2025.txt");
    }

    #[test]
    fn csv_quotes_cells_with_commas() {
        let csv = sample().render_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Member,W1 (26-1)"));
        assert_eq!(lines.next(), Some("PREM MANDAL,Water"));
        assert_eq!(lines.next(), Some("\"KESHAV, JR\",Garbage"));
    }

    #[test]
    fn text_table_aligns_columns() {
        let text = sample().render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], REPORT_HEADING);
        assert_eq!(lines[1], "November 2025");
        assert_eq!(lines[3], " Member      | W1 (26-1) ");
        assert_eq!(lines[5], " PREM MANDAL | Water     ");
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert_eq!("txt".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }
}
