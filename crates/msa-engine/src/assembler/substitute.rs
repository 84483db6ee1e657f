//! Literal placeholder substitution
//!
//! Fixed old → new replacement lists applied independently to two scopes: the
//! top-level paragraphs, then every table-cell paragraph (row-major,
//! cell-major). Matching is plain substring search, no regex.

use chrono::NaiveDate;
use tracing::debug;

use crate::document::{Paragraph, TemplateDocument};
use crate::types::ClientProfile;

/// Placeholder client identities baked into the template, longest form first
/// so the company suffix is never left behind.
const CLIENT_PLACEHOLDERS: &[&str] = &[
    "Katy Spring Solutions",
    "Katy Spring",
    "CLIENT_NAME",
    "{{client_name}}",
];

/// Month/year stamp the template was authored against.
const TEMPLATE_DATE_STAMP: &str = "July 2025";

/// An ordered list of literal replacements applied as one pass.
pub(crate) struct ReplacementSet {
    label: &'static str,
    pairs: Vec<(String, String)>,
}

impl ReplacementSet {
    /// Known client-identity placeholders, all mapping to the actual client
    /// name.
    pub fn client_identity(client: &ClientProfile) -> Self {
        let name = client.name.trim().to_string();
        Self {
            label: "client identity",
            pairs: CLIENT_PLACEHOLDERS
                .iter()
                .map(|old| ((*old).to_string(), name.clone()))
                .collect(),
        }
    }

    /// Date placeholders derived from the given date. The assembler passes
    /// today; tests pass a fixed date.
    pub fn dates(today: NaiveDate) -> Self {
        let month_year = today.format("%B %Y").to_string();
        let full_date = today.format("%B %d, %Y").to_string();
        Self {
            label: "dates",
            pairs: vec![
                (TEMPLATE_DATE_STAMP.to_string(), month_year.clone()),
                ("DATE_PLACEHOLDER".to_string(), full_date.clone()),
                ("{{current_date}}".to_string(), full_date),
                ("{{current_month_year}}".to_string(), month_year),
            ],
        }
    }

    /// Apply to every top-level paragraph, then every table-cell paragraph.
    pub fn apply(&self, document: &mut TemplateDocument) {
        for paragraph in document.paragraphs_mut() {
            self.apply_to_paragraph(paragraph);
        }
        for table in document.tables_mut() {
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    for paragraph in &mut cell.paragraphs {
                        self.apply_to_paragraph(paragraph);
                    }
                }
            }
        }
    }

    /// Run-scoped replacement: the paragraph matches on its concatenated
    /// text, but only runs that individually contain the whole old string are
    /// rewritten. A match split across run boundaries stays as-is.
    fn apply_to_paragraph(&self, paragraph: &mut Paragraph) {
        for (old, new) in &self.pairs {
            if !paragraph.text().contains(old.as_str()) {
                continue;
            }
            for run in &mut paragraph.runs {
                if run.text.contains(old.as_str()) {
                    run.text = run.text.replace(old.as_str(), new);
                    debug!("replaced '{old}' with '{new}' ({})", self.label);
                }
            }
        }
    }
}
