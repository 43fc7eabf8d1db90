#![forbid(unsafe_code)]

pub mod app;

pub use app::{AppState, build_app};
