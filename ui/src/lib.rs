#![warn(clippy::all, rust_2018_idioms)]
//! egui front end of the points admin panel.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::PointsAdminApp;
