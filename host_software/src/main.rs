use std::env;
use std::error::Error;
use std::path::Path;

use conv_host::{load_frame, process_frame, write_frame, Frame, HostConfig};
use flexi_logger::Logger;
use log::info;

// latimea cadrului demo cand nu avem fisier de intrare
const DEMO_WIDTH: usize = 16;

fn main() -> Result<(), Box<dyn Error>> {
    // 1. configuratia: primul argument sau valorile implicite
    let config = match env::args().nth(1) {
        Some(path) => HostConfig::load(Path::new(&path))?,
        None => HostConfig::default(),
    };

    let _logger = Logger::try_with_env_or_str(&config.log_level)?.start()?;

    info!("Convolution Core: SINGLE FRAME MODE");
    info!("Kernel: {:?}, convolutie: {}", config.mode, config.convolution);

    // 2. cadrul de intrare
    let frame = match &config.input {
        Some(path) => load_frame(path)?,
        None => {
            info!("Niciun fisier de intrare, folosim cadrul demo ({} coloane)", DEMO_WIDTH);
            Frame::vertical_edge_demo(DEMO_WIDTH)
        }
    };

    // 3. simulare + verificare cu modelul software
    let result = process_frame(&frame, &config)?;

    info!("------------------------------------------------");
    info!(
        "Esantioane procesate: {} in {} cicluri",
        result.outputs.len(),
        result.cycles
    );
    info!(
        "Potriviri cu referinta: {} / {}",
        result.expected.len() - result.mismatches.min(result.expected.len()),
        result.expected.len()
    );
    info!("------------------------------------------------");

    // 4. salvare
    write_frame(&config.output, &result.to_frame(frame.width))?;
    info!("Rezultat salvat în '{}'", config.output.display());

    result.check()?;
    Ok(())
}
