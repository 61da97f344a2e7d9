//! Category domain models.

use serde::{Deserialize, Serialize};

use crate::errors::FieldError;

/// A category as returned by the API. Level 0 is a root category; deeper
/// levels must reference a parent on a strictly lower level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name_ar: String,
    pub name_en: String,
    /// Merchant-assigned identifier; the backend serializes it as `categoryId`.
    #[serde(rename = "categoryId", default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Form input for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name_ar: String,
    pub name_en: String,
    #[serde(rename = "categoryId")]
    pub custom_id: Option<String>,
    pub level: i32,
    pub parent_id: Option<i64>,
}

impl CategoryDraft {
    /// Validates the draft against the currently loaded category list.
    ///
    /// Returns field-level errors; an empty list means the draft may be
    /// submitted. Never fails part-way: all violations are collected.
    pub fn validate(&self, known: &[Category]) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name_ar.trim().is_empty() {
            errors.push(FieldError::new("nameAr", "Arabic name is required"));
        }
        if self.name_en.trim().is_empty() {
            errors.push(FieldError::new("nameEn", "English name is required"));
        }
        if self.level < 0 {
            errors.push(FieldError::new("level", "level must be zero or positive"));
        }

        if self.level == 0 && self.parent_id.is_some() {
            errors.push(FieldError::new(
                "parentId",
                "root category cannot have a parent",
            ));
        }

        if self.level > 0 {
            match self.parent_id {
                None => errors.push(FieldError::new(
                    "parentId",
                    "a sub-category must have a parent",
                )),
                Some(parent_id) => {
                    if let Some(parent) = known.iter().find(|c| c.id == parent_id) {
                        if parent.level >= self.level {
                            errors.push(FieldError::new(
                                "parentId",
                                "parent must sit on a strictly lower level",
                            ));
                        }
                    }
                }
            }
        }

        errors
    }
}

/// Derives a custom id from the English name: lowercase, with
/// non-alphanumeric runs collapsed into single underscores and the ends
/// trimmed. Returns `None` when nothing usable remains.
pub fn slugify_custom_id(name_en: &str) -> Option<String> {
    let mut slug = String::with_capacity(name_en.len());
    let mut last_was_separator = true; // trims leading separators
    for ch in name_en.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            slug.push(lower);
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

/// A category with its resolved children, produced by `build_tree`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    #[serde(flatten)]
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, level: i32, parent_id: Option<i64>) -> Category {
        Category {
            id,
            name_ar: format!("تصنيف {}", id),
            name_en: format!("category {}", id),
            custom_id: None,
            level,
            parent_id,
            image_url: None,
        }
    }

    fn draft(level: i32, parent_id: Option<i64>) -> CategoryDraft {
        CategoryDraft {
            name_ar: "ملابس".to_string(),
            name_en: "Clothing".to_string(),
            custom_id: None,
            level,
            parent_id,
        }
    }

    #[test]
    fn test_valid_root_draft() {
        assert!(draft(0, None).validate(&[]).is_empty());
    }

    #[test]
    fn test_missing_names_are_reported_per_field() {
        let empty = CategoryDraft::default();
        let errors = empty.validate(&[]);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"nameAr"));
        assert!(fields.contains(&"nameEn"));
    }

    #[test]
    fn test_root_with_parent_rejected() {
        let errors = draft(0, Some(7)).validate(&[category(7, 0, None)]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "root category cannot have a parent");
    }

    #[test]
    fn test_sub_category_requires_parent() {
        let errors = draft(1, None).validate(&[]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "parentId");
    }

    #[test]
    fn test_parent_must_have_strictly_lower_level() {
        let known = vec![category(1, 0, None), category(2, 1, Some(1))];
        // Same level as the draft: rejected.
        assert_eq!(draft(1, Some(2)).validate(&known).len(), 1);
        // Strictly lower level: accepted.
        assert!(draft(1, Some(1)).validate(&known).is_empty());
        assert!(draft(2, Some(2)).validate(&known).is_empty());
    }

    #[test]
    fn test_slugify_custom_id() {
        assert_eq!(
            slugify_custom_id("Men's Shoes 2"),
            Some("men_s_shoes_2".to_string())
        );
        assert_eq!(slugify_custom_id("  Bags & Wallets  "), Some("bags_wallets".to_string()));
        assert_eq!(slugify_custom_id("---"), None);
        assert_eq!(slugify_custom_id(""), None);
    }

    #[test]
    fn test_custom_id_wire_name() {
        let mut d = draft(0, None);
        d.custom_id = Some("clothing".to_string());
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["categoryId"], "clothing");
        assert_eq!(json["nameEn"], "Clothing");
    }
}
