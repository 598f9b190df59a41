//! PDF transcript generator
//!
//! Writes the HTML transcript to a temporary file and prints it with headless
//! Chrome/Chromium. Page size and the "Page i/N" footer come from the page's
//! own print CSS.

use super::html::HtmlReporter;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::debug;
use std::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Browsers tried in order when no converter is given
const CHROME_CANDIDATES: [&str; 8] = [
    "google-chrome",
    "chrome",
    "chromium",
    "chromium-browser",
    "google-chrome-stable",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
    "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
];

/// PDF transcript generator using HTML-to-PDF conversion
pub struct PdfReporter {
    /// Optional browser executable to print with
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a PDF reporter that looks for Chrome/Chromium on its own
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF reporter printing with a specific browser executable
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }

    fn detect_chrome() -> Option<&'static str> {
        CHROME_CANDIDATES.into_iter().find(|candidate| {
            Command::new(candidate)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok_and(|status| status.success())
        })
    }

    fn html_to_pdf_chrome(
        chrome_cmd: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        debug!("Printing {} with {chrome_cmd}", html_path.display());

        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            // Footer comes from the page's @page rules
            .arg("--no-pdf-header-footer")
            .arg("--run-all-compositor-stages-before-draw")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()?;

        if !status.success() {
            return Err("Chrome PDF conversion failed".into());
        }

        Ok(())
    }

    /// Render the transcript page into a fresh temporary `.html` file
    ///
    /// The file is removed when the handle is dropped.
    fn write_html_page(ctx: &ReportContext) -> Result<NamedTempFile, Box<dyn Error>> {
        let page = tempfile::Builder::new()
            .prefix("gradetrack_transcript_")
            .suffix(".html")
            .tempfile()?;
        HtmlReporter::new().generate(ctx, page.path())?;
        Ok(page)
    }

    fn convert_html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(converter) = &self.converter {
            return Self::html_to_pdf_chrome(converter, html_path, pdf_path);
        }

        if let Some(chrome) = Self::detect_chrome() {
            return Self::html_to_pdf_chrome(chrome, html_path, pdf_path);
        }

        Err("PDF conversion failed: Chrome/Chromium not found.\n\
            \n\
            To generate PDF transcripts, install Chrome or Chromium:\n\
            \n\
            • Ubuntu/Debian:  sudo apt install chromium-browser\n\
            • Fedora/RHEL:    sudo dnf install chromium\n\
            • macOS:          brew install --cask google-chrome\n\
            • Windows:        Download from https://www.google.com/chrome/\n\
            \n\
            Alternatively, point to a browser executable:\n\
              --pdf-converter /path/to/chrome\n\
            \n\
            Markdown and HTML transcripts need no browser (--format md|html).\n\
            "
        .into())
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let page = Self::write_html_page(ctx)?;
        self.convert_html_to_pdf(page.path(), output_path)
    }

    /// Returns the HTML page that gets printed
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        HtmlReporter::new().render(ctx)
    }
}
