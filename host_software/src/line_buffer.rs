use std::collections::VecDeque;

use crate::error::HostError;

// furnizorul de istorie verticala vazut de nucleu:
// pentru fiecare esantion acceptat intoarce (rand -1, rand -2) pe aceeasi coloana
// se apeleaza o singura data per esantion acceptat, niciodata pe bule
pub trait RowHistory {
    fn advance(&mut self, sample: u16) -> (u16, u16);

    // reset: toata istoria devine zero
    fn clear(&mut self);

    // cate esantioane are un rand
    fn row_width(&self) -> usize;
}

// doua linii de intarziere de cate un rand, ca un altshift_taps
#[derive(Debug, Clone)]
pub struct LineBuffer {
    row_width: usize,
    // ultimele 2 * row_width esantioane, cel mai vechi in fata
    taps: VecDeque<u16>,
}

impl LineBuffer {
    pub fn new(row_width: usize) -> Result<Self, HostError> {
        if row_width == 0 {
            return Err(HostError::ZeroRowWidth);
        }
        let mut taps = VecDeque::with_capacity(2 * row_width);
        taps.resize(2 * row_width, 0);
        Ok(Self { row_width, taps })
    }
}

impl RowHistory for LineBuffer {
    fn advance(&mut self, sample: u16) -> (u16, u16) {
        // in fata e esantionul de acum doua randuri, la mijloc cel de acum un rand
        let row_minus2 = self.taps[0];
        let row_minus1 = self.taps[self.row_width];

        self.taps.pop_front();
        self.taps.push_back(sample);

        (row_minus1, row_minus2)
    }

    fn clear(&mut self) {
        self.taps.iter_mut().for_each(|t| *t = 0);
    }

    fn row_width(&self) -> usize {
        self.row_width
    }
}
