use tracing::debug;

use crate::domain::entities::{PaymentMethod, Product, DELIVERY_PARTNER};
use crate::domain::errors::CatalogError;
use crate::domain::ports::ProductCatalog;
use crate::domain::pricing::{CheckoutQuote, PricingConfig};

// Everything the checkout screen shows for one product.
pub struct CheckoutView {
    pub product: Product,
    pub quote: CheckoutQuote,
    pub payment_methods: Vec<PaymentMethod>,
    pub delivery_partner: &'static str,
}

// Computes a fresh quote each time checkout is opened.
pub struct QuoteCheckoutUseCase<C> {
    pub catalog: C,
    pub pricing: PricingConfig,
}

impl<C> QuoteCheckoutUseCase<C>
where
    C: ProductCatalog,
{
    pub fn execute(&self, product_id: u64) -> Result<CheckoutView, CatalogError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CatalogError::ProductNotFound(product_id))?;
        let quote = CheckoutQuote::new(product.price, &self.pricing)?;

        debug!(product_id, total = quote.total(), "checkout quoted");

        Ok(CheckoutView {
            product,
            quote,
            payment_methods: PaymentMethod::ALL.to_vec(),
            delivery_partner: DELIVERY_PARTNER,
        })
    }
}

// Payment selection is acknowledged but has no effect.
pub fn select_payment_method(method: PaymentMethod) -> PaymentMethod {
    debug!(?method, "payment method selected");
    method
}
