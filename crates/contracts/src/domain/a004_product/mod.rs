pub mod aggregate;
pub mod recipe;

pub use aggregate::{Product, ProductColor, ProductColorId, ProductDto, ProductId};
pub use recipe::{Recipe, RecipeColor, RecipeFlower};
