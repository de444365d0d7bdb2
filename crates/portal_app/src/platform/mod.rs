pub mod app;
pub mod config;
pub mod controller;
pub mod effects;
pub mod logging;
pub mod page;
pub mod report;
pub mod ui;

pub use app::{run_cli, Cli};
pub use controller::UploadFormController;
