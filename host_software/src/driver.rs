use std::time::Instant;

use conv_core::{from_pixel, ConvInput, ConvOutput, ConvolutionCore};
use log::{debug, info, warn};
use rhdl::prelude::*;

use crate::config::HostConfig;
use crate::error::HostError;
use crate::frame_loader::Frame;
use crate::line_buffer::LineBuffer;
use crate::reference::reference_stream;
use crate::line_buffer::RowHistory;
use crate::stimulus::{EnablePattern, Step, Stimulus};

// perioada ceasului in simulare
const CLOCK_PERIOD: u64 = 100;

// un ciclu din simulare
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRecord {
    pub in_reset: bool,
    pub input: ConvInput,
    pub output: ConvOutput,
}

#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub records: Vec<TickRecord>,
}

impl Trace {
    // esantioanele cu output_valid, in ordinea in care au iesit
    pub fn valid_outputs(&self) -> Vec<u16> {
        self.records
            .iter()
            .filter(|r| r.output.valid)
            .map(|r| from_pixel(r.output.sample))
            .collect()
    }

    // indicii ciclurilor (fara reset) in care s-a acceptat un esantion
    pub fn accepted_ticks(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.in_reset && r.input.enable)
            .map(|(i, _)| i)
            .collect()
    }

    // indicii ciclurilor cu output_valid
    pub fn valid_ticks(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.output.valid)
            .map(|(i, _)| i)
            .collect()
    }
}

// rulam nucleul pe fluxul dat, cu `reset_cycles` cicluri de reset la inceput;
// pasii Step::Reset din flux tin reset-ul activ si la mijlocul simularii
pub fn simulate(steps: Vec<Step>, reset_cycles: usize) -> Result<Trace, HostError> {
    if reset_cycles == 0 {
        return Err(HostError::NoResetCycles);
    }

    let uut = ConvolutionCore::default();
    let stream = std::iter::repeat_with(|| ResetOrData::Reset)
        .take(reset_cycles)
        .chain(steps.into_iter().map(|step| match step {
            Step::Reset => ResetOrData::Reset,
            Step::Tick(input) => ResetOrData::Data(input),
        }))
        .clock_pos_edge(CLOCK_PERIOD);

    // sample.value este (ClockReset, Input, Output)
    let records: Vec<_> = uut
        .run(stream)?
        .synchronous_sample()
        .map(|sample| TickRecord {
            in_reset: sample.value.0.reset.any(),
            input: sample.value.1,
            output: sample.value.2,
        })
        .collect();

    debug!("Simulare: {} cicluri", records.len());
    Ok(Trace { records })
}

// rezultatul pentru un cadru intreg
#[derive(Debug, Clone)]
pub struct FrameResult {
    pub outputs: Vec<u16>,
    pub expected: Vec<u16>,
    pub mismatches: usize,
    pub cycles: usize,
}

impl FrameResult {
    pub fn to_frame(&self, width: usize) -> Frame {
        Frame::from_stream(width, &self.outputs)
    }

    pub fn check(&self) -> Result<(), HostError> {
        if self.mismatches > 0 {
            return Err(HostError::ReferenceMismatch {
                mismatches: self.mismatches,
                total: self.expected.len(),
            });
        }
        Ok(())
    }
}

// cadru -> line buffer -> nucleu, comparat cu modelul software
pub fn process_frame(frame: &Frame, config: &HostConfig) -> Result<FrameResult, HostError> {
    config.validate()?;

    let row_width = config.row_width.unwrap_or(frame.width);
    if row_width != frame.width {
        warn!(
            "Latimea line buffer-ului ({}) difera de latimea cadrului ({})",
            row_width, frame.width
        );
    }

    let samples: Vec<u16> = frame.samples().collect();
    let mut history = LineBuffer::new(row_width)?;
    debug!("Line buffer de {} esantioane pe rand", history.row_width());
    let stimulus = Stimulus::build(
        &samples,
        &mut history,
        EnablePattern::from_period(config.bubble_period),
        config.mode,
        config.convolution,
    )?;

    let start = Instant::now();
    let trace = simulate(stimulus.into_steps(), config.reset_cycles)?;
    let outputs = trace.valid_outputs();
    info!(
        "Simulare terminata in {:.2?}: {} cicluri, {} iesiri valide",
        start.elapsed(),
        trace.records.len(),
        outputs.len()
    );

    let expected = reference_stream(&samples, row_width, config.mode, config.convolution);
    let mismatches = outputs
        .iter()
        .zip(expected.iter())
        .filter(|(got, want)| got != want)
        .count()
        + expected.len().abs_diff(outputs.len());

    if mismatches > 0 {
        warn!("{} iesiri difera de modelul de referinta", mismatches);
    }

    Ok(FrameResult {
        outputs,
        expected,
        mismatches,
        cycles: trace.records.len(),
    })
}
