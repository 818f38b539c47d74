use rhdl::prelude::*;

pub mod types;
pub mod kernel_select;
pub mod alu;
pub mod column_delay;
pub mod window;
pub mod pipeline;
pub mod output_select;

// Importăm doar numele structurilor, NU și Q/D-ul lor intern.
pub use types::{
    from_pixel, to_pixel, Accum, CapturedWindow, Coeff, ColumnHistory, ConvInput, ConvOutput,
    KernelSet, Pixel, Window3x3, PIPELINE_LATENCY, PIXEL_MAX,
};
pub use kernel_select::kernel_select;
pub use alu::{convolve, saturate, weighted_tap};
pub use column_delay::ColumnDelayChain;
pub use window::assemble_window;
pub use pipeline::PipelineRegister;
pub use output_select::{OutputSelector, SelectIn};

// nucleul complet: istorie pe coloane -> fereastra -> registru de pipeline -> alu -> selector
#[derive(Synchronous, SynchronousDQ, Clone, Debug)]
pub struct ConvolutionCore {
    columns: ColumnDelayChain,
    capture: PipelineRegister,
    select: OutputSelector,
}

impl Default for ConvolutionCore {
    fn default() -> Self {
        Self {
            columns: ColumnDelayChain::default(),
            capture: PipelineRegister::default(),
            select: OutputSelector::default(),
        }
    }
}

impl SynchronousIO for ConvolutionCore {
    type I = ConvInput;
    type O = ConvOutput;
    type Kernel = top_kernel;
}

// kernelul e tot wiring, plus alu-ul care e combinational
// Q-ul de aici este STRICT cel al ConvolutionCore
#[kernel]
pub fn top_kernel(cr: ClockReset, input: ConvInput, q: Q) -> (ConvOutput, D) {
    let mut d = D::dont_care();

    // coloana noua: [rand -2, rand -1, randul curent]
    let column = [input.row_minus2, input.row_minus1, input.sample];

    // fereastra vecinatatii esantionului care intra acum
    let window = assemble_window(q.columns, column);

    // istoria si captura se muta doar cu enable (decis in componente)
    d.columns = (input.enable, column);
    d.capture = (input.enable, window);

    // alu-ul lucreaza pe fereastra capturata in ciclul trecut
    let kernel = kernel_select(input.mode);
    let edge_strength = convolve(q.capture.window, kernel);

    d.select = SelectIn {
        advance: q.capture.valid[0],
        commit: q.capture.valid[1],
        conv_en: input.conv_en,
        magnitude: edge_strength,
        center: q.capture.window.taps[1][1],
    };

    // iesirea: etajul 3 de validitate + registrul de iesire
    let mut output = ConvOutput {
        valid: q.capture.valid[2],
        sample: q.select,
    };

    // cat timp reset-ul e activ iesirea e fortata la zero, fara sa astepte frontul
    if cr.reset.any() {
        output = ConvOutput::default();
    }

    (output, d)
}
