use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    /// Case-insensitive substring match on name and description.
    pub q: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub status: Option<String>,
}
