//! Report command handler
//!
//! Writes the transcript of the current gradebook as Markdown, HTML or PDF.

use grade_tracker::config::Config;
use grade_tracker::core::models::Gradebook;
use grade_tracker::core::report::{
    HtmlReporter, MarkdownReporter, PdfReporter, ReportContext, ReportFormat, ReportGenerator,
    StudentIdentity,
};
use grade_tracker::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
///
/// # Arguments
/// * `gradebook` - Gradebook to report
/// * `identity` - Student details for the header
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html, pdf)
/// * `pdf_converter` - Optional browser used to print PDFs
/// * `config` - Configuration containing the default reports directory
pub fn run(
    gradebook: &Gradebook,
    identity: &StudentIdentity,
    output_file: Option<&Path>,
    format_str: &str,
    pdf_converter: Option<&str>,
    config: &Config,
) {
    match generate_report(gradebook, identity, output_file, format_str, pdf_converter, config) {
        Ok(path) => println!("✓ Transcript generated: {}", path.display()),
        Err(err) => {
            error!("Transcript generation failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    gradebook: &Gradebook,
    identity: &StudentIdentity,
    output_file: Option<&Path>,
    format_str: &str,
    pdf_converter: Option<&str>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format: ReportFormat = format_str.parse().map_err(|e| format!("✗ {e}"))?;

    let output_path = output_file.map_or_else(
        || Path::new(&config.paths.reports_dir).join(identity.file_name(format)),
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    let generated_on = chrono::Local::now().format("%Y-%m-%d").to_string();
    let ctx = ReportContext::new(gradebook, identity, generated_on);

    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Pdf => Box::new(
            pdf_converter.map_or_else(PdfReporter::new, PdfReporter::with_converter),
        ),
    };

    info!("Writing {format} transcript to {}", output_path.display());
    generator
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    Ok(output_path)
}
