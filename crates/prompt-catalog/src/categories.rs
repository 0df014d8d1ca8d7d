/// Fixed prompt categories.
///
/// The table is built once at startup and passed by reference; it is never
/// mutated. Lookups for keys outside the table synthesize a generic descriptor
/// so a record always has display information.
use crate::model::{CategoryDescriptor, CategoryInfo};

/// `(key, name, icon, color)` in display order.
const FIXED_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("python", "Python", "🐍", "bg-blue-500"),
    ("typescript", "TypeScript", "📘", "bg-blue-600"),
    ("java", "Java", "☕", "bg-orange-500"),
    ("github", "GitHub", "🐙", "bg-gray-700"),
    ("engineering", "Engineering", "⚙️", "bg-green-500"),
];

const GENERIC_ICON: &str = "📄";
const GENERIC_COLOR: &str = "bg-gray-500";

#[derive(Debug, Clone)]
pub struct CategoryTable {
    descriptors: Vec<CategoryDescriptor>,
}

impl CategoryTable {
    pub fn fixed() -> Self {
        let descriptors = FIXED_CATEGORIES
            .iter()
            .map(|(key, name, icon, color)| CategoryDescriptor {
                key: key.to_string(),
                info: CategoryInfo {
                    name: name.to_string(),
                    icon: icon.to_string(),
                    color: color.to_string(),
                },
            })
            .collect();
        Self { descriptors }
    }

    /// Descriptors in configuration order.
    pub fn descriptors(&self) -> &[CategoryDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn descriptor(&self, key: &str) -> CategoryDescriptor {
        self.descriptors
            .iter()
            .find(|d| d.key == key)
            .cloned()
            .unwrap_or_else(|| generic_descriptor(key))
    }
}

fn generic_descriptor(key: &str) -> CategoryDescriptor {
    CategoryDescriptor {
        key: key.to_string(),
        info: CategoryInfo {
            name: key.to_string(),
            icon: GENERIC_ICON.to_string(),
            color: GENERIC_COLOR.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_order() {
        let table = CategoryTable::fixed();
        let keys: Vec<&str> = table.descriptors().iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, ["python", "typescript", "java", "github", "engineering"]);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn known_lookup() {
        let table = CategoryTable::fixed();
        let java = table.descriptor("java");
        assert_eq!(java.info.name, "Java");
        assert_eq!(java.info.icon, "☕");
        assert_eq!(java.info.color, "bg-orange-500");
    }

    #[test]
    fn unknown_lookup_is_synthesized() {
        let table = CategoryTable::fixed();
        let rust = table.descriptor("rust");
        assert_eq!(rust.key, "rust");
        assert_eq!(rust.info.name, "rust");
        assert_eq!(rust.info.icon, GENERIC_ICON);
        assert_eq!(rust.info.color, GENERIC_COLOR);
        assert_eq!(table.len(), 5);
    }
}
