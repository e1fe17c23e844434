use anyhow::{anyhow, Result};
use digiclock::gui::{ClockGui, GuiConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = GuiConfig::stopwatch();
    let native_options = config.native_options();
    let title = config.title.clone();

    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Box::new(ClockGui::new(cc, config))),
    )
    .map_err(|e| anyhow!("Failed to run stopwatch window: {}", e))
}
