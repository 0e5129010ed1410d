use crate::domain::entities::Product;
use crate::domain::errors::CatalogError;
use crate::domain::ports::{LevelProvider, ProductCatalog};
use crate::domain::role::Role;

// Data rendered on a role's home screen.
pub struct HomeView {
    pub level: u32,
    pub heading: &'static str,
    pub products: Vec<Product>,
}

pub struct HomeUseCase<L, C> {
    pub levels: L,
    pub catalog: C,
}

impl<L, C> HomeUseCase<L, C>
where
    L: LevelProvider,
    C: ProductCatalog,
{
    pub fn execute(&self, role: Role) -> HomeView {
        let heading = match role {
            Role::Buyer => "Products",
            Role::Seller => "Your Products",
        };

        HomeView {
            level: self.levels.level_for(role),
            heading,
            products: self.catalog.list(),
        }
    }
}

// Looks up a single product for the details screen.
pub struct ProductDetailsUseCase<C> {
    pub catalog: C,
}

impl<C> ProductDetailsUseCase<C>
where
    C: ProductCatalog,
{
    pub fn execute(&self, product_id: u64) -> Result<Product, CatalogError> {
        self.catalog
            .get(product_id)
            .ok_or(CatalogError::ProductNotFound(product_id))
    }
}
