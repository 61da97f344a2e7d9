//! Tests for the category service workflow.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::categories::{
    CategoriesApiTrait, Category, CategoryDraft, CategoryService, CategoryServiceTrait,
};
use crate::errors::{Error, Result, ValidationError};
use crate::uploads::ImageUpload;

// --- Mock categories API ---
struct MockCategoriesApi {
    categories: Mutex<Vec<Category>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MockCategoriesApi {
    fn new(categories: Vec<Category>) -> Self {
        MockCategoriesApi {
            categories: Mutex::new(categories),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CategoriesApiTrait for MockCategoriesApi {
    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create(
        &self,
        draft: &CategoryDraft,
        _icon: Option<&ImageUpload>,
    ) -> Result<Category> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut categories = self.categories.lock().unwrap();
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Category {
            id,
            name_ar: draft.name_ar.clone(),
            name_en: draft.name_en.clone(),
            custom_id: draft.custom_id.clone(),
            level: draft.level,
            parent_id: draft.parent_id,
            image_url: None,
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        draft: &CategoryDraft,
        _icon: Option<&ImageUpload>,
    ) -> Result<Category> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Category {
            id,
            name_ar: draft.name_ar.clone(),
            name_en: draft.name_en.clone(),
            custom_id: draft.custom_id.clone(),
            level: draft.level,
            parent_id: draft.parent_id,
            image_url: None,
        })
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.categories.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

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

fn service(categories: Vec<Category>) -> (CategoryService, Arc<MockCategoriesApi>) {
    let api = Arc::new(MockCategoriesApi::new(categories));
    (CategoryService::new(api.clone()), api)
}

#[tokio::test]
async fn test_tree_is_rebuilt_from_the_loaded_list() {
    let (service, _) = service(vec![
        category(1, 0, None),
        category(2, 1, Some(1)),
        category(3, 1, Some(1)),
    ]);

    let forest = service.get_category_tree().await.unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].children.len(), 2);
}

#[tokio::test]
async fn test_eligible_parents_exclude_same_level() {
    let (service, _) = service(vec![category(1, 0, None), category(2, 1, Some(1))]);

    let parents = service.get_eligible_parents(1).await.unwrap();
    let ids: Vec<i64> = parents.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1]);

    assert!(service.get_eligible_parents(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_the_api() {
    let (service, api) = service(vec![category(1, 0, None)]);

    let draft = CategoryDraft {
        name_ar: "أحذية".to_string(),
        name_en: "Shoes".to_string(),
        custom_id: None,
        level: 0,
        parent_id: Some(1),
    };

    let err = service.save_category(None, draft, None).await.unwrap_err();
    match err {
        Error::Validation(ValidationError::Form(errors)) => {
            assert_eq!(errors.0.len(), 1);
            assert_eq!(errors.0[0].field, "parentId");
        }
        other => panic!("expected form validation error, got {:?}", other),
    }
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_save_fills_custom_id_from_english_name() {
    let (service, _) = service(Vec::new());

    let draft = CategoryDraft {
        name_ar: "أحذية رجالية".to_string(),
        name_en: "Men's Shoes".to_string(),
        custom_id: None,
        level: 0,
        parent_id: None,
    };

    let created = service.save_category(None, draft, None).await.unwrap();
    assert_eq!(created.custom_id.as_deref(), Some("men_s_shoes"));
}

#[tokio::test]
async fn test_save_with_id_updates_instead_of_creating() {
    let (service, api) = service(vec![category(1, 0, None)]);

    let draft = CategoryDraft {
        name_ar: "تصنيف".to_string(),
        name_en: "Renamed".to_string(),
        custom_id: Some("renamed".to_string()),
        level: 0,
        parent_id: None,
    };

    let updated = service.save_category(Some(1), draft, None).await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(api.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_bad_icon_blocks_submission() {
    let (service, api) = service(Vec::new());

    let draft = CategoryDraft {
        name_ar: "تصنيف".to_string(),
        name_en: "Gadgets".to_string(),
        custom_id: None,
        level: 0,
        parent_id: None,
    };
    let icon = ImageUpload::new("icon.txt", "text/plain", vec![1, 2, 3]);

    assert!(service.save_category(None, draft, Some(icon)).await.is_err());
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_delete_category() {
    let (service, api) = service(vec![category(1, 0, None)]);
    service.delete_category(1).await.unwrap();
    assert!(api.categories.lock().unwrap().is_empty());
}
