pub mod products_model;
pub mod products_service;
pub mod products_traits;


pub use products_model::{
    final_price, CatalogFilter, Product, ProductDraft, ProductPage, ProductSort,
};
pub use products_service::ProductService;
pub use products_traits::{ProductServiceTrait, ProductsApiTrait};
