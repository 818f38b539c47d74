use rhdl::prelude::*;
use rhdl_fpga::core::dff::DFF;
use crate::types::{ColumnHistory, Pixel};

// trei linii de intarziere pe coloane, cate doua registre fiecare
// se muta doar in ciclurile cu enable, bulele nu ating istoria
#[derive(Synchronous, SynchronousDQ, Clone, Debug)]
pub struct ColumnDelayChain {
    row_minus2: DFF<[Pixel; 2]>,
    row_minus1: DFF<[Pixel; 2]>,
    current: DFF<[Pixel; 2]>,
}

impl Default for ColumnDelayChain {
    fn default() -> Self {
        Self {
            row_minus2: DFF::new([Pixel::default(); 2]),
            row_minus1: DFF::new([Pixel::default(); 2]),
            current: DFF::new([Pixel::default(); 2]),
        }
    }
}

// (enable, [rand -2, rand -1, randul curent])
pub type ColumnIn = (bool, [Pixel; 3]);

// interfata io
impl SynchronousIO for ColumnDelayChain {
    type I = ColumnIn;
    type O = ColumnHistory;
    type Kernel = column_delay_kernel;
}

#[kernel]
pub fn column_delay_kernel(_cr: ClockReset, input: ColumnIn, q: Q) -> (ColumnHistory, D) {
    let (enable, column) = input;

    // iesirea e mereu continutul registrelor (inainte de shift)
    let history = ColumnHistory {
        rows: [q.row_minus2, q.row_minus1, q.current],
    };

    // hold state
    let mut next_minus2 = q.row_minus2;
    let mut next_minus1 = q.row_minus1;
    let mut next_current = q.current;

    // [1] <- [0], [0] <- esantionul nou
    if enable {
        next_minus2 = [column[0], q.row_minus2[0]];
        next_minus1 = [column[1], q.row_minus1[0]];
        next_current = [column[2], q.current[0]];
    }

    (history, D {
        row_minus2: next_minus2,
        row_minus1: next_minus1,
        current: next_current,
    })
}
