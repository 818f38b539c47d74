use rhdl::prelude::*;
use crate::types::*;

// selectia setului de coeficienti, pur combinational
// mod 0: gradient pe randuri (raspunde la margini orizontale)
// mod 1: gradient pe coloane (raspunde la margini verticale)
#[kernel]
pub fn kernel_select(mode: bool) -> KernelSet {
    let row_gradient = KernelSet {
        coeffs: [
            [signed(-1), signed(-2), signed(-1)],
            [signed(0), signed(0), signed(0)],
            [signed(1), signed(2), signed(1)],
        ],
    };

    let column_gradient = KernelSet {
        coeffs: [
            [signed(-1), signed(0), signed(1)],
            [signed(-2), signed(0), signed(2)],
            [signed(-1), signed(0), signed(1)],
        ],
    };

    if mode {
        column_gradient
    } else {
        row_gradient
    }
}
