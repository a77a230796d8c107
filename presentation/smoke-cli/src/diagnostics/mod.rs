pub mod driver;
pub mod reporter;
