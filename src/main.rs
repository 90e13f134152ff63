use log::info;
use newton_fractal::{
    CliController, DEFAULT_HEIGHT, DEFAULT_WIDTH, FrameConfig, PpmFilePresenter, RayonDispatcher,
    Resolution,
};

const OUTPUT_DIR: &str = "output";
const OUTPUT_FILE: &str = "output/newton.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let resolution = Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    let config = FrameConfig::default();

    let presenter = PpmFilePresenter::new();
    let mut controller = CliController::new(presenter, RayonDispatcher);

    controller.generate(resolution, &config)?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    controller.write(OUTPUT_FILE)?;
    info!("done");

    Ok(())
}
