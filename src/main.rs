use egui::ViewportBuilder;
use quake_view::app::QuakeViewApp;
use quake_view::db_manager::{self, DatabaseConfig};
use quake_view::errors::AppResult;
use quake_view::quake_utilities;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    // The whole load happens before any window exists; a dead database means
    // no window at all.
    let config = DatabaseConfig::default();
    let dataset = db_manager::load_dataset(&config)?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size([800.0, 600.0])
            .with_icon(quake_utilities::load_icon()),
        ..Default::default()
    };
    eframe::run_native(
        "Earthquake Data 2023",
        options,
        Box::new(move |_cc| Ok(Box::new(QuakeViewApp::new(dataset)))),
    )?;

    Ok(())
}
