use colored::Colorize;

use crate::driver::RunSummary;

/// One-paragraph summary for stderr.
pub fn format_summary(summary: &RunSummary, dry_run: bool) -> String {
    let verb = if dry_run { "would change" } else { "changed" };
    let mut out = format!(
        "{} {} of {} files {}",
        "autoimport".bold(),
        summary.changed.len().to_string().green().bold(),
        summary.scanned,
        verb
    );

    for (file, error) in &summary.failed {
        out.push('\n');
        out.push_str(&format!(
            "  {} {}: {}",
            "error".red().bold(),
            file.display(),
            error
        ));
    }
    if !summary.failed.is_empty() {
        out.push('\n');
        out.push_str(
            &format!("{} files failed", summary.failed.len())
                .red()
                .to_string(),
        );
    }
    out
}
