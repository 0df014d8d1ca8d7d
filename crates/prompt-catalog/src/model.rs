use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Display attributes of a category, as shown by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Display name, e.g. "Python"
    pub name: String,
    /// Icon glyph, e.g. "🐍"
    pub icon: String,
    /// Color token for the badge, e.g. "bg-blue-500"
    pub color: String,
}

/// A prompt category: one subdirectory of the prompt root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    /// Directory name and stable identifier, e.g. "python"
    pub key: String,
    #[serde(flatten)]
    pub info: CategoryInfo,
}

/// Metadata extracted from one prompt document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// `<category>_<normalized file stem>`, unique within a catalog
    pub id: String,
    pub filename: String,
    pub category: String,
    /// Link target relative to the site, e.g. "../python/foo.md"
    #[serde(rename = "path")]
    pub relative_path: String,
    pub title: String,
    pub description: String,
    pub prompt_preview: String,
    pub examples: Vec<String>,
    pub use_cases: Vec<String>,
    pub tags: Vec<String>,
    pub word_count: usize,
    /// ISO-8601 modification time of the source file
    pub last_modified: String,
    pub category_info: CategoryInfo,
}

/// Per-category entry in the catalog header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub descriptor: CategoryDescriptor,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub generated_at: String,
    pub total_prompts: usize,
    pub categories: Vec<CategorySummary>,
}

/// The generated artifact consumed by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: CatalogMetadata,
    pub prompts: Vec<DocumentRecord>,
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso8601(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso8601_uses_millis_and_zulu() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(iso8601(time), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn summary_flattens_descriptor() {
        let summary = CategorySummary {
            descriptor: CategoryDescriptor {
                key: "python".to_string(),
                info: CategoryInfo {
                    name: "Python".to_string(),
                    icon: "🐍".to_string(),
                    color: "bg-blue-500".to_string(),
                },
            },
            count: 3,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "key": "python",
                "name": "Python",
                "icon": "🐍",
                "color": "bg-blue-500",
                "count": 3
            })
        );
    }

    #[test]
    fn record_fields_are_camel_case() {
        let record = DocumentRecord {
            id: "java_ddd".to_string(),
            filename: "ddd.md".to_string(),
            category: "java".to_string(),
            relative_path: "../java/ddd.md".to_string(),
            title: String::new(),
            description: String::new(),
            prompt_preview: String::new(),
            examples: Vec::new(),
            use_cases: Vec::new(),
            tags: Vec::new(),
            word_count: 0,
            last_modified: "2024-01-02T03:04:05.000Z".to_string(),
            category_info: CategoryInfo {
                name: "Java".to_string(),
                icon: "☕".to_string(),
                color: "bg-orange-500".to_string(),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["path"], "../java/ddd.md");
        assert!(!obj.contains_key("relativePath"));
        for key in [
            "promptPreview",
            "useCases",
            "wordCount",
            "lastModified",
            "categoryInfo",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}
