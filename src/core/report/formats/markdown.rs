//! Markdown transcript generator
//!
//! Renders the transcript as GitHub-flavoured Markdown tables.

use crate::core::report::{ReportContext, ReportGenerator, TermSection};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown transcript generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let sections = ctx.sections();

        let mut identity = String::new();
        for (label, value) in ctx.identity.lines() {
            let _ = writeln!(identity, "**{label}:** {}  ", escape(&value));
        }

        MARKDOWN_TEMPLATE
            .replace("{{identity}}", &identity)
            .replace("{{date}}", &ctx.generated_on)
            .replace("{{overall_average}}", &ctx.overall_average())
            .replace("{{details}}", &Self::generate_details_table(&sections))
            .replace(
                "{{summary}}",
                &Self::generate_summary_table(&sections, &ctx.overall_average()),
            )
    }

    /// Rows of the detail table: term, unit, course and assessment lines
    fn generate_details_table(sections: &[TermSection]) -> String {
        let mut table = String::new();

        for term in sections {
            let _ = writeln!(table, "| **{}** | | | |", escape(&term.name));
            for unit in &term.units {
                let _ = writeln!(
                    table,
                    "| *Unit: {} (Coef: {})* | | | |",
                    escape(&unit.name),
                    unit.coefficient
                );
                for course in &unit.courses {
                    let _ = writeln!(
                        table,
                        "| {} | Coef: {} | Avg: {} | |",
                        escape(&course.name),
                        course.coefficient,
                        course.average
                    );
                    for assessment in &course.assessments {
                        let _ = writeln!(
                            table,
                            "| | {} | {} | {} |",
                            escape(&assessment.name),
                            assessment.score,
                            assessment.weight
                        );
                    }
                }
            }
        }

        table
    }

    /// Term averages followed by the overall average
    fn generate_summary_table(sections: &[TermSection], overall: &str) -> String {
        let mut table = String::new();
        for term in sections {
            let _ = writeln!(table, "| {} | {} |", escape(&term.name), term.average);
        }
        let _ = writeln!(table, "| **Overall** | **{overall}** |");
        table
    }
}

/// Keep user text from breaking table cells
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
