pub mod app;
pub mod logging;
pub mod utils;
pub mod views;

pub use app::Session;
pub use views::{RenderOptions, render_comparison};
