use rhdl::prelude::*;
use conv_core::{ConvolutionCore, ConvInput, PIPELINE_LATENCY, PIXEL_MAX};

// magie pentru a afisa erorile din acest limbaj criptic
fn miette_report(err: RHDLError) -> String {
    let handler =
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
    let mut msg = String::new();
    if handler.render_report(&mut msg, &err).is_err() {
        msg = format!("{err}");
    }
    msg
}

// latimea randului pentru demo, line buffer-ul e simulat aici direct
const ROW_WIDTH: usize = 8;

fn run_simulation() -> Result<(), RHDLError> {
    let uut = ConvolutionCore::default();

    println!("--- Start Simulare Convolution Core ---");

    // Scenariu: margine verticala, kernel pe coloane (mode = 1), convolutie
    // doua randuri de zero, apoi trei randuri [0, 4095, 4095, 0, ...]
    let mut frame = vec![0u16; 2 * ROW_WIDTH];
    for _ in 0..3 {
        let mut row = vec![0u16; ROW_WIDTH];
        row[1] = PIXEL_MAX;
        row[2] = PIXEL_MAX;
        frame.extend(row);
    }
    frame.extend(vec![0u16; 2 * ROW_WIDTH]);

    // construim fluxul de intrari
    // taps-urile de sus vin din acelasi cadru, cu unu si doua randuri in urma
    let mut inputs = Vec::new();
    for (n, &sample) in frame.iter().enumerate() {
        let above = |rows: usize| n.checked_sub(rows * ROW_WIDTH).map_or(0, |i| frame[i]);
        inputs.push(ConvInput::accepted(sample, above(1), above(2), true, true));
    }

    // golim pipeline-ul
    for _ in 0..PIPELINE_LATENCY {
        inputs.push(ConvInput::bubble(true, true));
    }

    // .with_reset(1) -> reset in primul ciclu
    // .clock_pos_edge(100) -> perioada ceasului
    let stream = inputs.into_iter().with_reset(1).clock_pos_edge(100);

    // obiect VCD pentru colectarea semnalelor
    let vcd = uut.run(stream)?.collect::<Vcd>();

    let filename = "conv_core.vcd";
    println!("Se generează fișierul '{}'...", filename);
    vcd.dump_to_file(filename)?;

    println!("Succes! Verifică rezultatul în GTKWave.");
    println!("Semnalul 'valid' apare la 3 cicluri dupa primul esantion,");
    println!("iar 'sample' trebuie sa fie 0xFFF pe coloanele 1..4 ale randurilor cu margine.");

    Ok(())
}

fn main() {
    if let Err(e) = run_simulation() {
        println!("{}", miette_report(e));
    }
}
