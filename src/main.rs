// Salus desktop application
// Main entry point

use salus::ui::SalusApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Salus");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salus",
        options,
        Box::new(|cc| Ok(Box::new(SalusApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the UI: {err}"))?;

    Ok(())
}
