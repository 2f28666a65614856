pub mod admin;
pub mod catalog;
pub mod generation;
pub mod health;
