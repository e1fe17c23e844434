pub mod app;
pub mod gui;
mod util;
