use conv_core::PIXEL_MAX;
use nalgebra::Matrix3;

use crate::config::KernelMode;

// modelul software al nucleului, pe numere intregi obisnuite
// il folosim ca sa verificam iesirile simularii

#[rustfmt::skip]
pub fn kernel_matrix(mode: KernelMode) -> Matrix3<i32> {
    match mode {
        KernelMode::RowGradient => Matrix3::new(
            -1, -2, -1,
             0,  0,  0,
             1,  2,  1,
        ),
        KernelMode::ColumnGradient => Matrix3::new(
            -1, 0, 1,
            -2, 0, 2,
            -1, 0, 1,
        ),
    }
}

// |suma(fereastra .* kernel)|, saturat la 4095
pub fn reference_magnitude(window: &Matrix3<i32>, mode: KernelMode) -> u16 {
    let sum = window.component_mul(&kernel_matrix(mode)).sum();
    sum.unsigned_abs().min(u32::from(PIXEL_MAX)) as u16
}

// fereastra pentru esantionul n din fluxul raster
// inainte de inceputul fluxului istoria e zero, iar intre randuri nu exista margine:
// coloanele din stanga ale inceputului de rand vin din coada randului anterior
pub fn window_at(samples: &[u16], row_width: usize, n: usize) -> Matrix3<i32> {
    Matrix3::from_fn(|r, c| {
        let back = (2 - r) * row_width + (2 - c);
        n.checked_sub(back).map_or(0, |i| i32::from(samples[i]))
    })
}

// iesirea asteptata pentru fiecare esantion acceptat, in ordine
pub fn reference_stream(
    samples: &[u16],
    row_width: usize,
    mode: KernelMode,
    convolution: bool,
) -> Vec<u16> {
    (0..samples.len())
        .map(|n| {
            let window = window_at(samples, row_width, n);
            if convolution {
                reference_magnitude(&window, mode)
            } else {
                window[(1, 1)] as u16
            }
        })
        .collect()
}
