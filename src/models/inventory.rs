use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::{canonical_sku, Category, Product, ProductUpdate, ProductWithCategory, NO_CATEGORY_LABEL};

/// The whole persisted document. Every operation here is a linear scan; the
/// collections are small and reloaded on each request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Inventory {
    // ── Categories ───────────────────────────────────────────────────────────

    pub fn category_exists(&self, id: i64) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn is_category_in_use(&self, id: i64) -> bool {
        self.products.iter().any(|p| p.category_id == id)
    }

    pub fn insert_category(&mut self, category: Category) -> AppResult<Category> {
        category.validate()?;
        if self.category_exists(category.id) {
            return Err(AppError::Conflict(format!(
                "Category with ID {} already exists",
                category.id
            )));
        }
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Replaces the category `id` wholesale. If the id changes, products that
    /// pointed at the old id follow it.
    pub fn update_category(&mut self, id: i64, category: Category) -> AppResult<Category> {
        category.validate()?;
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category with ID {} not found", id)))?;

        if category.id != id {
            if self.category_exists(category.id) {
                return Err(AppError::Conflict(format!(
                    "ID {} is already in use by another category",
                    category.id
                )));
            }
            for product in self.products.iter_mut().filter(|p| p.category_id == id) {
                product.category_id = category.id;
            }
        }

        self.categories[index] = category.clone();
        Ok(category)
    }

    pub fn remove_category(&mut self, id: i64) -> AppResult<Category> {
        if self.is_category_in_use(id) {
            return Err(AppError::Conflict(format!(
                "Category with ID {} cannot be deleted because it is used by existing products",
                id
            )));
        }
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category with ID {} not found", id)))?;
        Ok(self.categories.remove(index))
    }

    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    // ── Products ─────────────────────────────────────────────────────────────

    pub fn products_with_categories(&self) -> Vec<ProductWithCategory> {
        self.products
            .iter()
            .map(|p| ProductWithCategory {
                product: p.clone(),
                category_name: self
                    .category_name(p.category_id)
                    .unwrap_or(NO_CATEGORY_LABEL)
                    .to_string(),
            })
            .collect()
    }

    fn product_index(&self, sku: &str) -> Option<usize> {
        let sku = canonical_sku(sku);
        self.products.iter().position(|p| p.sku == sku)
    }

    pub fn insert_product(&mut self, mut product: Product) -> AppResult<Product> {
        // Uppercasing can change the length ("ß" -> "SS"), so check the stored form.
        product.sku = canonical_sku(&product.sku);
        product.validate()?;
        if !self.category_exists(product.category_id) {
            return Err(AppError::Reference(format!(
                "Category with ID {} does not exist",
                product.category_id
            )));
        }
        if self.product_index(&product.sku).is_some() {
            return Err(AppError::Conflict(format!(
                "SKU {} is already registered",
                product.sku
            )));
        }
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn update_product(&mut self, sku: &str, patch: &ProductUpdate) -> AppResult<Product> {
        patch.validate()?;
        let index = self
            .product_index(sku)
            .ok_or_else(|| AppError::NotFound(format!("Product with SKU {} not found", sku)))?;

        if let Some(category_id) = patch.category_id {
            if !self.category_exists(category_id) {
                return Err(AppError::Reference(format!(
                    "Category with ID {} does not exist",
                    category_id
                )));
            }
        }

        let product = &mut self.products[index];
        product.apply(patch);
        Ok(product.clone())
    }

    pub fn remove_product(&mut self, sku: &str) -> AppResult<Product> {
        let index = self
            .product_index(sku)
            .ok_or_else(|| AppError::NotFound(format!("Product with SKU {} not found", sku)))?;
        Ok(self.products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn prod(sku: &str, category_id: i64) -> Product {
        Product {
            sku: sku.to_string(),
            name: "Hammer".to_string(),
            price: 9.99,
            category_id,
        }
    }

    fn tools() -> Inventory {
        Inventory {
            categories: vec![cat(1, "Tools")],
            products: vec![],
        }
    }

    // ── Categories ────────────────────────────────────────────────────────────

    #[test]
    fn categories_listed_in_insertion_order() {
        let mut inv = Inventory::default();
        inv.insert_category(cat(3, "Garden")).unwrap();
        inv.insert_category(cat(1, "Tools")).unwrap();
        inv.insert_category(cat(2, "Paint")).unwrap();
        let ids: Vec<i64> = inv.categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn duplicate_category_id_conflicts_and_leaves_store_unchanged() {
        let mut inv = tools();
        let before = inv.clone();
        let err = inv.insert_category(cat(1, "Other")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(inv, before);
    }

    #[test]
    fn invalid_category_rejected_before_conflict_check() {
        let mut inv = tools();
        let err = inv.insert_category(cat(1, "x")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn update_category_missing_is_not_found() {
        let mut inv = tools();
        let err = inv.update_category(9, cat(9, "Nothing")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn update_category_same_id_renames() {
        let mut inv = tools();
        let updated = inv.update_category(1, cat(1, "Hand Tools")).unwrap();
        assert_eq!(updated.name, "Hand Tools");
        assert_eq!(inv.categories, vec![cat(1, "Hand Tools")]);
    }

    #[test]
    fn update_category_id_collision_conflicts() {
        let mut inv = tools();
        inv.insert_category(cat(2, "Paint")).unwrap();
        let err = inv.update_category(1, cat(2, "Tools")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(inv.categories, vec![cat(1, "Tools"), cat(2, "Paint")]);
    }

    #[test]
    fn update_category_id_change_repoints_products() {
        let mut inv = tools();
        inv.insert_product(prod("AAA", 1)).unwrap();
        inv.update_category(1, cat(5, "Tools")).unwrap();
        assert_eq!(inv.categories, vec![cat(5, "Tools")]);
        assert_eq!(inv.products[0].category_id, 5);
        assert_eq!(inv.products_with_categories()[0].category_name, "Tools");
    }

    #[test]
    fn delete_category_in_use_conflicts() {
        let mut inv = tools();
        inv.insert_product(prod("AAA", 1)).unwrap();
        let err = inv.remove_category(1).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(inv.category_exists(1));
    }

    #[test]
    fn delete_unreferenced_category() {
        let mut inv = tools();
        let removed = inv.remove_category(1).unwrap();
        assert_eq!(removed, cat(1, "Tools"));
        assert!(inv.categories.is_empty());
        assert!(matches!(inv.remove_category(1), Err(AppError::NotFound(_))));
    }

    // ── Products ──────────────────────────────────────────────────────────────

    #[test]
    fn product_with_unknown_category_is_reference_error() {
        let mut inv = tools();
        let err = inv.insert_product(prod("AAA", 42)).unwrap_err();
        assert!(matches!(err, AppError::Reference(_)));
        assert!(inv.products.is_empty());
    }

    #[test]
    fn product_sku_stored_uppercase_and_unique_case_insensitively() {
        let mut inv = tools();
        let created = inv.insert_product(prod("abc", 1)).unwrap();
        assert_eq!(created.sku, "ABC");
        let err = inv.insert_product(prod("ABC", 1)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(inv.products.len(), 1);
    }

    #[test]
    fn sku_length_checked_after_uppercasing() {
        let mut inv = tools();
        // 10 chars as typed, 20 once uppercased
        let err = inv.insert_product(prod("ßßßßßßßßßß", 1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(inv.products.is_empty());

        let created = inv.insert_product(prod("straße", 1)).unwrap();
        assert_eq!(created.sku, "STRASSE");
    }

    #[test]
    fn product_lookup_is_case_insensitive() {
        let mut inv = tools();
        inv.insert_product(prod("ABC", 1)).unwrap();
        let patch = ProductUpdate {
            name: Some("Claw Hammer".to_string()),
            ..Default::default()
        };
        assert_eq!(inv.update_product("abc", &patch).unwrap().name, "Claw Hammer");
        assert_eq!(inv.remove_product("aBc").unwrap().sku, "ABC");
        assert!(inv.products.is_empty());
    }

    #[test]
    fn partial_update_price_only() {
        let mut inv = tools();
        inv.insert_product(prod("AAA", 1)).unwrap();
        let patch = ProductUpdate {
            price: Some(19.5),
            ..Default::default()
        };
        let updated = inv.update_product("AAA", &patch).unwrap();
        assert_eq!(updated.name, "Hammer");
        assert_eq!(updated.category_id, 1);
        assert!((updated.price - 19.5).abs() < f64::EPSILON);
        assert_eq!(inv.products[0], updated);
    }

    #[test]
    fn update_product_unknown_category_leaves_record_untouched() {
        let mut inv = tools();
        inv.insert_product(prod("AAA", 1)).unwrap();
        let patch = ProductUpdate {
            price: Some(1.0),
            category_id: Some(7),
            ..Default::default()
        };
        let err = inv.update_product("AAA", &patch).unwrap_err();
        assert!(matches!(err, AppError::Reference(_)));
        assert_eq!(inv.products[0], prod("AAA", 1));
    }

    #[test]
    fn update_or_delete_missing_product_is_not_found() {
        let mut inv = tools();
        assert!(matches!(
            inv.update_product("ZZZ", &ProductUpdate::default()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(inv.remove_product("ZZZ"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn dangling_reference_gets_placeholder_name() {
        let inv = Inventory {
            categories: vec![],
            products: vec![prod("AAA", 3)],
        };
        let rows = inv.products_with_categories();
        assert_eq!(rows[0].category_name, NO_CATEGORY_LABEL);
    }

    #[test]
    fn tools_scenario() {
        let mut inv = tools();
        inv.insert_product(prod("AAA", 1)).unwrap();
        assert_eq!(inv.products_with_categories()[0].category_name, "Tools");
        assert!(matches!(inv.remove_category(1), Err(AppError::Conflict(_))));
        inv.remove_product("AAA").unwrap();
        inv.remove_category(1).unwrap();
        assert_eq!(inv, Inventory::default());
    }

    #[test]
    fn document_shape() {
        let inv: Inventory = serde_json::from_str(
            r#"{"categories":[{"id":1,"name":"Tools"}],
                "products":[{"sku":"AAA","name":"Hammer","price":9.99,"category_id":1}]}"#,
        )
        .unwrap();
        assert_eq!(inv.categories, vec![cat(1, "Tools")]);
        assert_eq!(inv.products, vec![prod("AAA", 1)]);
    }
}
