use anyhow::Result;

use galaxy_mzr::app;
use galaxy_mzr::config::PlotConfig;
use galaxy_mzr::pipeline;

fn main() -> Result<()> {
    env_logger::init();

    let config = PlotConfig::default();
    let report = pipeline::run(&config)?;
    println!("Plot saved to {}", report.output_path.display());

    if app::interactive_display_available() {
        app::show(&report)?;
    } else {
        log::info!("No interactive display; skipping viewer window");
    }
    Ok(())
}
