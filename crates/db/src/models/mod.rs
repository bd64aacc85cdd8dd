pub mod product;
pub mod upcoming_product;
