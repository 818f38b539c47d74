use rhdl::prelude::*;
use rhdl_fpga::core::dff::DFF;
use crate::types::{CapturedWindow, Window3x3};

// registrul de pipeline: fereastra capturata + lantul de validitate
// fereastra se captureaza doar cu enable, validitatea se muta in fiecare ciclu
#[derive(Synchronous, SynchronousDQ, Clone, Debug)]
pub struct PipelineRegister {
    window: DFF<Window3x3>,
    valid: DFF<[bool; 3]>,
}

impl Default for PipelineRegister {
    fn default() -> Self {
        Self {
            window: DFF::new(Window3x3::default()),
            valid: DFF::new([false; 3]),
        }
    }
}

// (enable, fereastra asamblata in ciclul curent)
pub type CaptureIn = (bool, Window3x3);

// interfata io
impl SynchronousIO for PipelineRegister {
    type I = CaptureIn;
    type O = CapturedWindow;
    type Kernel = pipeline_kernel;
}

#[kernel]
pub fn pipeline_kernel(_cr: ClockReset, input: CaptureIn, q: Q) -> (CapturedWindow, D) {
    let (enable, window) = input;

    let captured = CapturedWindow {
        window: q.window,
        valid: q.valid,
    };

    // captura cu poarta
    let mut next_window = q.window;
    if enable {
        next_window = window;
    }

    // shift neconditionat: stage3 <- stage2 <- stage1 <- enable
    let next_valid = [enable, q.valid[0], q.valid[1]];

    (captured, D {
        window: next_window,
        valid: next_valid,
    })
}
