use rhdl::prelude::*;
use crate::types::*;

// produsul pixel * coeficient
#[kernel]
pub fn weighted_tap(pixel: Pixel, coeff: Coeff) -> Accum {
    // extindem pixelul cu zerouri pana la 24 biti si abia apoi il citim cu semn,
    // altfel 0xFFF ar deveni -1
    let wide: b24 = pixel.resize();
    let value: Accum = wide.as_signed();

    // coeficientul se extinde cu semn
    let weight: Accum = coeff.resize();

    value * weight
}

// |suma| taiat la 4095
#[kernel]
pub fn saturate(sum: Accum) -> Pixel {
    let zero: Accum = signed(0);
    let limit: Accum = signed(4095);

    let magnitude = if sum < zero { -sum } else { sum };
    let clamped = if magnitude > limit { limit } else { magnitude };

    // aici clamped e in [0, 4095], deci trunchierea la 12 biti e sigura
    let raw: b24 = clamped.as_unsigned();
    raw.resize()
}

// fereastra * kernel, element cu element, apoi magnitudinea saturata
#[kernel]
pub fn convolve(window: Window3x3, kernel: KernelSet) -> Pixel {
    let w = window.taps;
    let k = kernel.coeffs;

    // randul de sus
    let top = weighted_tap(w[0][0], k[0][0]) +
        weighted_tap(w[0][1], k[0][1]) +
        weighted_tap(w[0][2], k[0][2]);

    // randul din mijloc
    let middle = weighted_tap(w[1][0], k[1][0]) +
        weighted_tap(w[1][1], k[1][1]) +
        weighted_tap(w[1][2], k[1][2]);

    // randul de jos
    let bottom = weighted_tap(w[2][0], k[2][0]) +
        weighted_tap(w[2][1], k[2][1]) +
        weighted_tap(w[2][2], k[2][2]);

    saturate(top + middle + bottom)
}
