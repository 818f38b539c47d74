use rhdl::prelude::*;
use rhdl_fpga::core::dff::DFF;
use crate::types::Pixel;

#[derive(PartialEq, Debug, Digital, Default)]
pub struct SelectIn {
    // etajul 1 de validitate: fereastra capturata e valida
    pub advance: bool,
    // etajul 2 de validitate: valoarea din staged devine iesire
    pub commit: bool,
    pub conv_en: bool,
    pub magnitude: Pixel,
    pub center: Pixel,
}

// doua registre: valoarea aleasa si registrul de iesire
#[derive(Synchronous, SynchronousDQ, Clone, Debug)]
pub struct OutputSelector {
    staged: DFF<Pixel>,
    out: DFF<Pixel>,
}

impl Default for OutputSelector {
    fn default() -> Self {
        Self {
            staged: DFF::new(Pixel::default()),
            out: DFF::new(Pixel::default()),
        }
    }
}

// interfata io
impl SynchronousIO for OutputSelector {
    type I = SelectIn;
    type O = Pixel;
    type Kernel = output_select_kernel;
}

#[kernel]
pub fn output_select_kernel(_cr: ClockReset, input: SelectIn, q: Q) -> (Pixel, D) {
    // convolutie sau pixelul din centru
    let chosen = if input.conv_en { input.magnitude } else { input.center };

    let mut next_staged = q.staged;
    if input.advance {
        next_staged = chosen;
    }

    // registrul de iesire se incarca exact in frontul in care etajul 3 devine activ,
    // altfel isi tine valoarea
    let mut next_out = q.out;
    if input.commit {
        next_out = q.staged;
    }

    (q.out, D {
        staged: next_staged,
        out: next_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{from_pixel, to_pixel};

    fn select(advance: bool, commit: bool, conv_en: bool) -> SelectIn {
        SelectIn {
            advance,
            commit,
            conv_en,
            magnitude: to_pixel(700),
            center: to_pixel(55),
        }
    }

    #[test]
    fn chooses_between_center_and_magnitude() -> miette::Result<()> {
        let uut = OutputSelector::default();

        let inputs = vec![
            select(true, false, true),
            select(true, true, false),
            select(false, true, true),
            select(false, false, true),
        ];

        let input = inputs.into_iter().with_reset(1).clock_pos_edge(100);
        let outputs: Vec<_> = uut
            .run(input)?
            .synchronous_sample()
            .map(|t| from_pixel(t.value.2))
            .collect();

        // staged: 700 apoi 55, iesirea ramane in urma cu un ciclu
        assert_eq!(outputs, vec![0, 0, 0, 700, 55]);
        Ok(())
    }

    #[test]
    fn holds_without_commit() -> miette::Result<()> {
        let uut = OutputSelector::default();

        let inputs = vec![
            select(true, false, true),
            select(false, true, true),
            select(true, false, false),
            select(false, false, false),
            select(false, false, false),
        ];

        let input = inputs.into_iter().with_reset(1).clock_pos_edge(100);
        let outputs: Vec<_> = uut
            .run(input)?
            .synchronous_sample()
            .map(|t| from_pixel(t.value.2))
            .collect();

        // 55 ajunge in staged dar nu e confirmat niciodata
        assert_eq!(outputs, vec![0, 0, 0, 700, 700, 700]);
        Ok(())
    }
}
