pub mod admin;
pub mod assets;
pub mod auth;
pub mod catalog;
pub mod generation;
pub mod options;
pub mod selection;
