pub mod products;
pub mod register;
