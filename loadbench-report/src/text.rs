//! Fixed-Format Text Rendering
//!
//! The banner-and-labels layout of the historical results file. Backends are
//! emitted in the order they appear in the report (registration order), never
//! map-iteration order, so rendering the same report twice is byte-identical.

use crate::report::Report;

const BANNER: &str = "########################################################";
const TITLE: &str = "######### Massive Insertion Benchmark Results ##########";

/// Render the report as the fixed-format text block.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(BANNER);
    out.push('\n');
    out.push('\n');

    for entry in &report.entries {
        out.push_str(&format!("{} execution time\n", entry.backend));
        out.push_str(&format!("Mean Value: {}\n", entry.metrics.mean_secs));
        out.push_str(&format!("STD Value: {}\n", entry.metrics.std_dev_secs));
        out.push('\n');
    }

    out.push_str(BANNER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{BackendMetrics, ReportEntry, ReportMeta};

    fn dummy_meta() -> ReportMeta {
        ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            dataset_dir: "data".to_string(),
            operation_count: 2,
            scenario_count: 2,
        }
    }

    fn dummy_entry(backend: &str, mean: f64, std_dev: f64) -> ReportEntry {
        ReportEntry {
            backend: backend.to_string(),
            metrics: BackendMetrics {
                mean_secs: mean,
                variance_secs: std_dev * std_dev,
                std_dev_secs: std_dev,
                samples: 2,
            },
        }
    }

    #[test]
    fn renders_banner_and_labeled_values() {
        let report = Report {
            meta: dummy_meta(),
            entries: vec![dummy_entry("orient", 5.0, 2.0), dummy_entry("neo4j", 3.5, 0.5)],
        };

        let text = render_text(&report);
        assert!(text.starts_with(BANNER));
        assert!(text.contains(TITLE));
        assert!(text.contains("orient execution time\nMean Value: 5\nSTD Value: 2\n"));
        assert!(text.contains("neo4j execution time\nMean Value: 3.5\nSTD Value: 0.5\n"));
        // orient was registered first, so it renders first.
        assert!(text.find("orient").unwrap() < text.find("neo4j").unwrap());
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = Report {
            meta: dummy_meta(),
            entries: vec![dummy_entry("titan", 1.25, 0.25)],
        };
        assert_eq!(render_text(&report), render_text(&report));
    }

    #[test]
    fn empty_report_still_has_banners() {
        let report = Report {
            meta: dummy_meta(),
            entries: Vec::new(),
        };
        let text = render_text(&report);
        assert!(text.starts_with(BANNER));
        assert!(text.ends_with(&format!("{}\n", BANNER)));
        assert!(!text.contains("execution time"));
    }
}
