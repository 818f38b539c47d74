use conv_core::{ConvInput, PIPELINE_LATENCY, PIXEL_MAX};
use log::{debug, trace};

use crate::config::KernelMode;
use crate::error::HostError;
use crate::line_buffer::RowHistory;

// cum apar ciclurile cu enable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnablePattern {
    // un esantion la fiecare ciclu
    Continuous,
    // o bula dupa fiecare `period` esantioane
    Bubbles { period: usize },
}

impl EnablePattern {
    pub fn from_period(period: Option<usize>) -> Self {
        match period {
            Some(period) => EnablePattern::Bubbles { period },
            None => EnablePattern::Continuous,
        }
    }
}

// un ciclu de ceas: reset activ sau intrare normala
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Reset,
    Tick(ConvInput),
}

// fluxul de cicluri trimis catre nucleu
#[derive(Debug, Clone)]
pub struct Stimulus {
    steps: Vec<Step>,
    pattern: EnablePattern,
    mode_bit: bool,
    convolution: bool,
    accepted: usize,
    // esantioane acceptate de la ultimul reset, pozitia in cadrul curent
    position: usize,
}

impl Stimulus {
    pub fn new(
        pattern: EnablePattern,
        mode: KernelMode,
        convolution: bool,
    ) -> Result<Self, HostError> {
        if let EnablePattern::Bubbles { period: 0 } = pattern {
            return Err(HostError::ZeroBubblePeriod);
        }

        Ok(Self {
            steps: Vec::new(),
            pattern,
            mode_bit: mode.select_bit(),
            convolution,
            accepted: 0,
            position: 0,
        })
    }

    // un cadru intreg, urmat de golirea pipeline-ului
    pub fn build<H: RowHistory>(
        samples: &[u16],
        history: &mut H,
        pattern: EnablePattern,
        mode: KernelMode,
        convolution: bool,
    ) -> Result<Self, HostError> {
        let mut stimulus = Self::new(pattern, mode, convolution)?;
        stimulus.push_samples(samples, history)?;
        stimulus.drain();
        Ok(stimulus)
    }

    // line buffer-ul e apelat o singura data pentru fiecare esantion acceptat, in ordine
    pub fn push_samples<H: RowHistory>(
        &mut self,
        samples: &[u16],
        history: &mut H,
    ) -> Result<(), HostError> {
        let row_width = history.row_width().max(1);
        self.steps.reserve(samples.len());

        for &sample in samples {
            let n = self.position;
            if sample > PIXEL_MAX {
                return Err(HostError::PixelOutOfRange {
                    row: n / row_width,
                    col: n % row_width,
                    value: u32::from(sample),
                });
            }

            let (row_minus1, row_minus2) = history.advance(sample);
            trace!("esantion {n}: {sample} (sus {row_minus1}, {row_minus2})");
            self.steps.push(Step::Tick(ConvInput::accepted(
                sample,
                row_minus1,
                row_minus2,
                self.mode_bit,
                self.convolution,
            )));
            self.position += 1;
            self.accepted += 1;

            if let EnablePattern::Bubbles { period } = self.pattern {
                if self.accepted % period == 0 {
                    self.bubble();
                }
            }
        }

        debug!(
            "{} esantioane adaugate, {} cicluri in total",
            samples.len(),
            self.steps.len()
        );
        Ok(())
    }

    // reset la mijlocul fluxului: nucleul si line buffer-ul pornesc amandoua de la zero
    pub fn push_reset<H: RowHistory>(&mut self, history: &mut H, cycles: usize) {
        history.clear();
        self.position = 0;
        self.steps.extend(std::iter::repeat(Step::Reset).take(cycles));
        debug!("Reset de {cycles} cicluri dupa {} esantioane", self.accepted);
    }

    // golim pipeline-ul ca sa iasa si ultimul esantion
    pub fn drain(&mut self) {
        for _ in 0..PIPELINE_LATENCY {
            self.bubble();
        }
    }

    fn bubble(&mut self) {
        self.steps
            .push(Step::Tick(ConvInput::bubble(self.mode_bit, self.convolution)));
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    // intrarile ciclurilor fara reset
    pub fn inputs(&self) -> Vec<ConvInput> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Tick(input) => Some(*input),
                Step::Reset => None,
            })
            .collect()
    }
}
