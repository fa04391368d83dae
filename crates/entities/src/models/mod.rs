pub mod billboard;
pub mod category;
pub mod color;
pub mod product;
pub mod size;
