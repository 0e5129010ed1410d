use tracing::info;

use crate::domain::entities::ProductDraft;
use crate::domain::errors::CatalogError;

// Raw form input from the seller's "add product" screen.
pub struct ListingInput {
    pub name: String,
    pub description: String,
    pub price: String,
}

// Validates a new listing. The draft is returned to the caller, never stored.
pub fn submit_listing(input: ListingInput) -> Result<ProductDraft, CatalogError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(CatalogError::InvalidListing("name is required"));
    }

    let price = input
        .price
        .trim()
        .parse::<i64>()
        .map_err(|_| CatalogError::InvalidListing("price must be a whole number"))?;
    if price < 0 {
        return Err(CatalogError::InvalidListing("price must not be negative"));
    }

    info!(name, price, "product listing drafted");

    Ok(ProductDraft {
        name: name.to_string(),
        description: input.description.trim().to_string(),
        price,
    })
}

// Delete stub: the request is acknowledged, nothing is removed.
pub fn delete_product(product_id: u64) -> bool {
    info!(product_id, "product delete requested");
    false
}
