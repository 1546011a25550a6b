pub mod common;
pub mod food_analysis;
pub mod health;
pub mod ingredient;
pub mod recipe;
pub mod vision;
pub mod vocabulary;
