use rhdl::prelude::*;
use crate::types::*;

// asamblarea ferestrei 3x3, combinational
// istoria vine din registre (coloanele -2 si -1), coloana noua vine direct de pe fire
// deci fereastra e cea de dupa shift-ul din ciclul curent, adica exact vecinatatea
// esantionului care intra acum
#[kernel]
pub fn assemble_window(history: ColumnHistory, column: [Pixel; 3]) -> Window3x3 {
    let h = history.rows;
    Window3x3 {
        taps: [
            [h[0][1], h[0][0], column[0]],
            [h[1][1], h[1][0], column[1]],
            [h[2][1], h[2][0], column[2]],
        ],
    }
}
