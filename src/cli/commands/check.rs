//! Check command: report how every catalog line is parsed
//!
//! Exits with a failure status when any line is rejected, so the command can
//! guard catalog files in scripts.

use super::shared::{RunSummary, load_for_session};
use crate::Result;
use crate::app::models::RecordKind;
use crate::app::services::record_parser::{Dispatcher, LoadStats};
use crate::config::CatalogConfig;
use colored::*;
use tracing::info;

pub fn run_check(config: &CatalogConfig) -> Result<RunSummary> {
    let dispatcher = Dispatcher::default();
    info!(
        "Checking {} (parser order: {:?})",
        config.data_file().display(),
        dispatcher.order()
    );

    let loaded = load_for_session(config, &dispatcher)?;
    println!("{}", render_check_report(&loaded.stats));

    Ok(RunSummary {
        records: loaded.catalog.len(),
        lines_rejected: loaded.stats.lines_rejected,
        failed: !loaded.stats.is_clean(),
        ..RunSummary::default()
    })
}

/// Format load statistics for the terminal
pub fn render_check_report(stats: &LoadStats) -> String {
    let mut lines = vec![
        format!("{}", "Catalog check".bright_green().bold()),
        format!(
            "  Lines read:      {} ({} blank or comment)",
            stats.total_lines, stats.skipped_lines
        ),
        format!(
            "  Records parsed:  {} (generic {}, habitable {}, mining {})",
            stats.records_parsed,
            stats.count(RecordKind::Generic),
            stats.count(RecordKind::Habitable),
            stats.count(RecordKind::Mining),
        ),
        format!("  Lines rejected:  {}", stats.lines_rejected),
    ];

    if stats.candidate_lines() > 0 {
        lines.push(format!("  Success rate:    {:.1}%", stats.success_rate()));
    }

    for error in &stats.errors {
        lines.push(format!("  {}", error.red()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_check_report() {
        let mut stats = LoadStats::new();
        stats.total_lines = 4;
        stats.skipped_lines = 1;
        stats.record_parsed(RecordKind::Habitable);
        stats.record_parsed(RecordKind::Generic);
        stats.record_rejected(4, "generic: insufficient data");

        let report = render_check_report(&stats);

        assert!(report.contains("Lines read:      4 (1 blank or comment)"));
        assert!(report.contains("generic 1, habitable 1, mining 0"));
        assert!(report.contains("Lines rejected:  1"));
        assert!(report.contains("66.7%"));
        assert!(report.contains("Line 4: generic: insufficient data"));
    }

    #[test]
    fn test_render_check_report_empty() {
        let report = render_check_report(&LoadStats::new());
        assert!(!report.contains("Success rate"));
    }
}
