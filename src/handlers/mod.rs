pub mod categories;
pub mod products;

use axum::{http::StatusCode, response::Html, Json};
use serde_json::json;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "fast-inventory" })))
}

pub async fn home_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html>
  <head><title>FastInventory</title></head>
  <body>
    <h1>FastInventory API</h1>
    <p>Product and category management.</p>
    <p>Interactive documentation is available at <a href='/docs'>/docs</a>.</p>
    <ul>
      <li><code>GET|POST /categories</code>, <code>PUT|DELETE /categories/{id}</code></li>
      <li><code>GET|POST /products</code>, <code>PUT|DELETE /products/{sku}</code></li>
    </ul>
  </body>
</html>
"#,
    )
}
