/// Catalog assembly and output.
///
/// Every run rebuilds the whole catalog from scratch and overwrites the
/// previous artifact. Only the final write may fail the run.
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::categories::CategoryTable;
use crate::config::Config;
use crate::error::AppError;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::{iso8601, Catalog, CatalogMetadata, CategoryDescriptor, CategorySummary, DocumentRecord};
use crate::scanner;

/// Outcome of one generator run.
#[derive(Debug)]
pub struct Generated {
    pub catalog: Catalog,
    /// Categories whose directory existed under the prompt root.
    pub categories_scanned: usize,
}

/// Scan the configured root, build the catalog and write it to the output path.
pub fn generate(config: &Config, table: &CategoryTable) -> Result<Generated, AppError> {
    let mut categories_scanned = 0;
    let catalog = build_catalog(table, Utc::now(), |category| {
        let records = scanner::scan_category(&config.prompts_root, category);
        if records.is_some() {
            categories_scanned += 1;
        }
        records.unwrap_or_default()
    });
    write_catalog(&catalog, &config.output_path)?;

    Ok(Generated {
        catalog,
        categories_scanned,
    })
}

/// Aggregate records for every configured category, in configuration order.
///
/// `scan` is called exactly once per category.
pub fn build_catalog<F>(table: &CategoryTable, generated_at: DateTime<Utc>, mut scan: F) -> Catalog
where
    F: FnMut(&CategoryDescriptor) -> Vec<DocumentRecord>,
{
    let mut prompts = Vec::new();
    let mut summaries = Vec::with_capacity(table.len());

    for descriptor in table.descriptors() {
        let records = scan(descriptor);
        info!(category = %descriptor.key, count = records.len(), "category scanned");
        summaries.push(CategorySummary {
            descriptor: descriptor.clone(),
            count: records.len(),
        });
        prompts.extend(records);
    }

    sort_records(&mut prompts);
    ensure_unique_ids(&mut prompts);

    Catalog {
        metadata: CatalogMetadata {
            generated_at: iso8601(generated_at),
            total_prompts: summaries.iter().map(|s| s.count).sum(),
            categories: summaries,
        },
        prompts,
    }
}

pub fn write_catalog(catalog: &Catalog, output_path: &Path) -> Result<(), AppError> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(output_path, json).map_err(|e| AppError::io(output_path, e))
}

/// Category key, then title, then filename.
fn sort_records(records: &mut [DocumentRecord]) {
    records.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| compare_titles(&a.title, &b.title))
            .then_with(|| a.filename.cmp(&b.filename))
    });
}

/// Three levels: base letters, then accents, then case with lowercase first
/// ("apple" < "Über" < "Zebra", "resume" < "résumé", "banana" < "Banana").
fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased text with diacritics removed.
fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Suffix `_2`, `_3`, ... onto ids already taken earlier in the sequence.
fn ensure_unique_ids(records: &mut [DocumentRecord]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    for record in records.iter_mut() {
        if !seen.contains(&record.id) {
            seen.insert(record.id.clone());
            continue;
        }
        let mut n = 2;
        let mut candidate = format!("{}_{n}", record.id);
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}_{n}", record.id);
        }
        warn!(
            id = %record.id,
            file = %record.relative_path,
            renamed = %candidate,
            "duplicate prompt id"
        );
        seen.insert(candidate.clone());
        record.id = candidate;
    }
}
