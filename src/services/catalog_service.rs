use crate::{
    dto::products::ProductInput,
    error::{AppError, AppResult},
    models::{self, Product},
    routes::params::ProductQuery,
    state::AppState,
};

pub async fn list(state: &AppState, query: &ProductQuery) -> AppResult<Vec<Product>> {
    let mut products = state.store.read_products().await?;

    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        let needle = q.to_lowercase();
        products.retain(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        });
    }

    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        products.retain(|p| p.category == category);
    }

    Ok(products)
}

pub async fn get(state: &AppState, id: &str) -> AppResult<Product> {
    let products = state.store.read_products().await?;
    products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound)
}

/// An input carrying the id of an existing product replaces it in place,
/// keeping its position and identity; any other input gets a fresh identity
/// and is appended. No field validation happens at this layer.
pub async fn upsert(state: &AppState, input: ProductInput) -> AppResult<Product> {
    let mut products = state.store.read_products().await?;

    let existing = input
        .id
        .as_deref()
        .and_then(|id| products.iter().position(|p| p.id == id));

    let stored = match existing {
        Some(pos) => {
            let product = with_id(products[pos].id.clone(), input);
            products[pos] = product.clone();
            product
        }
        None => {
            let id = models::fresh_id(products.iter().map(|p| p.id.as_str()));
            let product = with_id(id, input);
            products.push(product.clone());
            product
        }
    };

    state.store.write_products(&products).await?;
    Ok(stored)
}

/// Removing an unknown id leaves the collection as it was; no error.
pub async fn remove(state: &AppState, id: &str) -> AppResult<()> {
    let mut products = state.store.read_products().await?;
    products.retain(|p| p.id != id);
    state.store.write_products(&products).await?;
    Ok(())
}

/// Distinct category labels in first-seen order; drives the storefront's
/// category filter.
pub async fn categories(state: &AppState) -> AppResult<Vec<String>> {
    let products = state.store.read_products().await?;
    let mut labels: Vec<String> = Vec::new();
    for product in products {
        if !labels.contains(&product.category) {
            labels.push(product.category);
        }
    }
    Ok(labels)
}

fn with_id(id: String, input: ProductInput) -> Product {
    Product {
        id,
        name: input.name,
        description: input.description,
        price: input.price,
        images: input.images,
        category: input.category,
        videos: input.videos,
    }
}
