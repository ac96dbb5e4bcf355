pub mod advice;
pub mod app;
pub mod config;
pub mod data;
pub mod messages;
pub mod model;
pub mod progression;
pub mod store;
pub mod view_models;

pub use app::StuttzApp;
