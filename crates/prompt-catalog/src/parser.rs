/// Metadata extraction for prompt documents.
///
/// Prompt files are loosely structured markdown:
/// - Title: first `# ` line
/// - Sections: `## Description`, `## Prompt`, ending at the next `#` line or EOF
/// - Bullet lists: `- ` lines directly under the `Example usage:` and
///   `Use this prompt when you want to:` anchor lines
///
/// Every field is optional. A missing marker yields an empty value; extraction
/// of the text itself never fails.
use std::path::Path;
use std::sync::LazyLock;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::AppError;
use crate::model::{iso8601, CategoryDescriptor, DocumentRecord};

pub const DESCRIPTION_CAP: usize = 300;
pub const PROMPT_PREVIEW_CAP: usize = 500;
pub const ELLIPSIS: &str = "...";

const DESCRIPTION_HEADING: &str = "## Description";
const PROMPT_HEADING: &str = "## Prompt";
const EXAMPLES_ANCHOR: &str = "Example usage:";
const USE_CASES_ANCHOR: &str = "Use this prompt when you want to:";
const BULLET: &str = "- ";

/// Tags are reported in this order, regardless of where they appear in the text.
pub const TECH_KEYWORDS: &[&str] = &[
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Express",
    "Vite",
    "Jest",
    "JUnit",
    "Maven",
    "Lombok",
    "DDD",
    "Docker",
    "CI/CD",
    "TypeScript",
    "JavaScript",
    "Python",
    "Java",
    "GitHub",
];

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^# (.*)$").expect("valid regex"));
static ID_UNSAFE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid regex"));

/// Fields derived purely from document text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
    pub prompt_preview: String,
    pub examples: Vec<String>,
    pub use_cases: Vec<String>,
    pub tags: Vec<String>,
    pub word_count: usize,
}

/// Build the full record for one file.
///
/// Only fails when the file name cannot be represented as UTF-8.
pub fn extract_record(
    content: &str,
    path: &Path,
    category: &CategoryDescriptor,
    modified: SystemTime,
) -> Result<DocumentRecord, AppError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::InvalidFileName(path.to_path_buf()))?
        .to_string();

    let metadata = extract_metadata(content);

    Ok(DocumentRecord {
        id: record_id(&category.key, &filename),
        relative_path: format!("../{}/{}", category.key, filename),
        filename,
        category: category.key.clone(),
        title: metadata.title,
        description: metadata.description,
        prompt_preview: metadata.prompt_preview,
        examples: metadata.examples,
        use_cases: metadata.use_cases,
        tags: metadata.tags,
        word_count: metadata.word_count,
        last_modified: iso8601(DateTime::<Utc>::from(modified)),
        category_info: category.info.clone(),
    })
}

pub fn extract_metadata(content: &str) -> DocumentMetadata {
    let lines: Vec<&str> = content.lines().collect();

    let title_line = find_title(&lines);
    let title = title_line
        .as_ref()
        .map(|(_, title)| title.clone())
        .unwrap_or_default();

    let description = section_body(&lines, DESCRIPTION_HEADING)
        .or_else(|| title_line.map(|(idx, _)| first_paragraph(&lines, idx)))
        .unwrap_or_default();

    let prompt_preview = section_body(&lines, PROMPT_HEADING).unwrap_or_default();

    let examples = bullet_list(&lines, EXAMPLES_ANCHOR)
        .into_iter()
        .map(|item| item.replace('"', ""))
        .collect();

    DocumentMetadata {
        title,
        description: truncate_with_ellipsis(&description, DESCRIPTION_CAP),
        prompt_preview: truncate_with_ellipsis(&prompt_preview, PROMPT_PREVIEW_CAP),
        examples,
        use_cases: bullet_list(&lines, USE_CASES_ANCHOR),
        tags: match_tags(content),
        word_count: word_count(content),
    }
}

/// `<category>_<stem>` with every character outside `[A-Za-z0-9]` in the stem
/// replaced by `_`.
pub fn record_id(category: &str, filename: &str) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    format!("{}_{}", category, ID_UNSAFE_RE.replace_all(stem, "_"))
}

/// Cut `text` to `cap` characters, appending `...` only when something was cut.
pub fn truncate_with_ellipsis(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Whitespace-delimited token count. An empty or blank document counts 0.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

fn match_tags(content: &str) -> Vec<String> {
    let haystack = content.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect()
}

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}

fn find_title(lines: &[&str]) -> Option<(usize, String)> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        TITLE_RE
            .captures(line)
            .map(|caps| (idx, caps[1].trim().to_string()))
    })
}

/// Body of the first section whose heading equals `heading`, trimmed.
fn section_body(lines: &[&str], heading: &str) -> Option<String> {
    let start = lines.iter().position(|line| line.trim_end() == heading)?;
    Some(collect_until_heading(&lines[start + 1..]))
}

/// Text between the title line and the next heading.
fn first_paragraph(lines: &[&str], title_idx: usize) -> String {
    collect_until_heading(&lines[title_idx + 1..])
}

fn collect_until_heading(lines: &[&str]) -> String {
    let end = lines
        .iter()
        .position(|line| is_heading(line))
        .unwrap_or(lines.len());
    lines[..end].join("\n").trim().to_string()
}

/// Consecutive `- ` lines directly after the first line equal to `anchor`,
/// with the marker stripped.
fn bullet_list(lines: &[&str], anchor: &str) -> Vec<String> {
    let Some(start) = lines.iter().position(|line| line.trim_end() == anchor) else {
        return Vec::new();
    };
    lines[start + 1..]
        .iter()
        .map_while(|line| line.strip_prefix(BULLET))
        .map(|item| item.to_string())
        .collect()
}
