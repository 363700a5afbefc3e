use utoipa::OpenApi;

use crate::models::{Category, Product, ProductUpdate, ProductWithCategory};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FastInventory",
        description = "Product and category management API",
        version = "1.0.0"
    ),
    paths(
        crate::handlers::categories::list_categories,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
        crate::handlers::products::list_products,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
    ),
    components(
        schemas(Category, Product, ProductUpdate, ProductWithCategory)
    ),
    tags(
        (name = "categories", description = "Category management"),
        (name = "products", description = "Products, each tied to an existing category")
    )
)]
pub struct ApiDoc;
