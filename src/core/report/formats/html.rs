//! HTML transcript generator
//!
//! Produces a self-contained page with embedded CSS. The page carries print
//! rules (A4, page-numbered footer) so the PDF generator can print it as is.

use crate::core::report::{ReportContext, ReportGenerator, TermSection};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Values handed to the `transcript.html` template
#[derive(Template)]
#[template(path = "transcript.html")]
struct TranscriptPage<'a> {
    identity: Vec<(&'static str, String)>,
    generated_on: &'a str,
    overall: String,
    sections: Vec<TermSection>,
}

/// HTML transcript generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = TranscriptPage {
            identity: ctx.identity.lines(),
            generated_on: &ctx.generated_on,
            overall: ctx.overall_average(),
            sections: ctx.sections(),
        };
        Ok(page.render()?)
    }
}
