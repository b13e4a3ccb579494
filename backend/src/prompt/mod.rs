pub mod builder;
pub mod payload;
pub mod templates;
