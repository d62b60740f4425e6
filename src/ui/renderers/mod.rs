pub mod shop;
pub mod builder;
pub mod settings;
