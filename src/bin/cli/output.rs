//! Output formatting for CLI operations.

use serde_json::json;
use std::path::Path;

use iconlib::AddReport;
use iconlib::transfer::UploadReport;

use crate::OutputFormat;

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats the icons matched on disk
    fn format_matched(&self, pattern: &str, count: usize) -> String;

    /// Formats the result of editing a library
    fn format_add_report(&self, library: &Path, report: &AddReport) -> String;

    /// Formats the result of an upload
    fn format_upload(&self, host: &str, dest: &str, report: &UploadReport) -> String;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_matched(&self, pattern: &str, count: usize) -> String {
        format!("Found {} icon(s) matching {}\n", count, pattern)
    }

    fn format_add_report(&self, library: &Path, report: &AddReport) -> String {
        let mut output = format!("Library: {}\n", library.display());

        for name in &report.svgs_added {
            output.push_str(&format!("Adding svg: {}\n", name));
        }
        for name in &report.svgs_skipped {
            output.push_str(&format!("Skipping svg: {} (exists)\n", name));
        }

        for catalog in &report.catalogs {
            output.push_str(&format!("Updating: {}\n", catalog.name));
            for id in &catalog.added {
                output.push_str(&format!("  Adding Icon: {}\n", id));
            }
            for id in &catalog.replaced {
                output.push_str(&format!("  Replacing Icon: {}\n", id));
            }
            for id in &catalog.skipped {
                output.push_str(&format!("  Skipping Icon: {} (exists)\n", id));
            }
        }

        match &report.version {
            Some(version) => output.push_str(&format!("Updating: version -> {}\n", version)),
            None => output.push_str("No catalog changed; version left alone\n"),
        }

        output
    }

    fn format_upload(&self, host: &str, dest: &str, report: &UploadReport) -> String {
        format!(
            "Uploaded {} to {}:{}\n",
            humanize_bytes(report.bytes),
            host,
            dest
        )
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_matched(&self, pattern: &str, count: usize) -> String {
        json!({
            "pattern": pattern,
            "matched": count,
        })
        .to_string()
    }

    fn format_add_report(&self, library: &Path, report: &AddReport) -> String {
        let catalogs: Vec<_> = report
            .catalogs
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "added": c.added,
                    "replaced": c.replaced,
                    "skipped": c.skipped,
                })
            })
            .collect();

        serde_json::to_string_pretty(&json!({
            "library": library.display().to_string(),
            "svgs_added": report.svgs_added,
            "svgs_skipped": report.svgs_skipped,
            "catalogs": catalogs,
            "version": report.version,
            "modified": report.is_modified(),
        }))
        .unwrap_or_default()
    }

    fn format_upload(&self, host: &str, dest: &str, report: &UploadReport) -> String {
        json!({
            "host": host,
            "dest": dest,
            "welcome": report.welcome,
            "bytes": report.bytes,
        })
        .to_string()
    }
}

/// Creates a formatter for the given output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(HumanFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Converts bytes to human-readable format
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MiB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KiB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
