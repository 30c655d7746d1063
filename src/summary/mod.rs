//! Repository summary: the fixed-shape digest handed to the evaluator
//!
//! Section order and labels never change, and an empty section still emits
//! its label. Downstream consumers detect missing content by looking for a
//! label with an empty body, not by the label's absence.

mod gather;

pub use gather::gather_summary;

use crate::scan::CodeExcerpt;

pub const README_LABEL: &str = "[README]:";
pub const LICENSE_LABEL: &str = "[LICENSE]:";
pub const IGNORE_LABEL: &str = "[.gitignore]:";
pub const COMMIT_LABEL: &str = "[Git Commit]:";
pub const CODE_LABEL: &str = "[Code Snapshot]:";
pub const TEST_LABEL: &str = "[Test Files]:";
pub const BINARY_LABEL: &str = "[Binary Files]:";
pub const SIZE_LABEL: &str = "[Repo Size]:";
pub const TOTAL_LABEL: &str = "[Total Files]:";

/// All section labels in rendering order.
pub const SECTION_LABELS: &[&str] = &[
    README_LABEL,
    LICENSE_LABEL,
    IGNORE_LABEL,
    COMMIT_LABEL,
    CODE_LABEL,
    TEST_LABEL,
    BINARY_LABEL,
    SIZE_LABEL,
    TOTAL_LABEL,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySummary {
    pub readme: String,
    pub license: String,
    pub ignore_rules: String,
    /// Newest first
    pub commit_subjects: Vec<String>,
    pub code_excerpts: Vec<CodeExcerpt>,
    pub test_file_paths: Vec<String>,
    pub binary_file_paths: Vec<String>,
    pub total_file_count: usize,
    pub repo_size_human: String,
}

impl RepositorySummary {
    /// Render the document. Pure function of the fields.
    pub fn render(&self) -> String {
        let mut out = String::new();

        push_section(&mut out, README_LABEL, &self.readme);
        push_section(&mut out, LICENSE_LABEL, &self.license);
        push_section(&mut out, IGNORE_LABEL, &self.ignore_rules);
        push_section(&mut out, COMMIT_LABEL, &self.commit_subjects.join("\n"));

        let mut code = String::new();
        for excerpt in &self.code_excerpts {
            code.push_str(&format!("--- File: {} ---\n{}\n", excerpt.path, excerpt.text));
        }
        push_section(&mut out, CODE_LABEL, &code);

        push_section(&mut out, TEST_LABEL, &self.test_file_paths.join("\n"));
        push_section(&mut out, BINARY_LABEL, &self.binary_file_paths.join("\n"));
        push_section(&mut out, SIZE_LABEL, &self.repo_size_human);

        out.push_str(TOTAL_LABEL);
        out.push('\n');
        out.push_str(&self.total_file_count.to_string());
        out
    }
}

fn push_section(out: &mut String, label: &str, body: &str) {
    out.push_str(label);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
}

/// Body of the section labelled `label` in a rendered summary, trimmed.
///
/// Returns `None` when the label does not start a line. Sections end at the
/// next known label, so README text that happens to contain a label mid-line
/// does not split the document.
pub fn section_body<'a>(rendered: &'a str, label: &str) -> Option<&'a str> {
    let start = find_label(rendered, label)? + label.len();
    let rest = &rendered[start..];

    let label_index = SECTION_LABELS.iter().position(|l| *l == label);
    let end = label_index
        .into_iter()
        .flat_map(|i| SECTION_LABELS[i + 1..].iter())
        .filter_map(|next| find_label(rest, next))
        .min()
        .unwrap_or(rest.len());

    Some(rest[..end].trim())
}

/// Offset of the first `label` that begins a line.
fn find_label(text: &str, label: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(found) = text[pos..].find(label) {
        let at = pos + found;
        if at == 0 || text.as_bytes()[at - 1] == b'\n' {
            return Some(at);
        }
        pos = at + label.len();
    }
    None
}
