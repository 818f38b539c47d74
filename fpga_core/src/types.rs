use rhdl::prelude::*;

// pixel pe 12 biti, fara semn
pub type Pixel = b12;

// coeficientii sunt in [-2, 2], incap in 3 biti cu semn
pub type Coeff = s3;

// acumulatorul pentru suma celor 9 produse
// un produs are nevoie de ~15 biti, suma de ~18, luam 24 ca sa fim linistiti
pub type Accum = s24;

pub const PIXEL_MAX: u16 = 4095;

// cate cicluri trec de la esantionul acceptat pana la iesirea lui
pub const PIPELINE_LATENCY: usize = 3;

// fereastra 3x3: taps[rand][coloana]
// rand 0 = doua randuri mai sus, rand 2 = randul curent
// coloana 0 = doua coloane la stanga, coloana 2 = esantionul curent
#[derive(PartialEq, Debug, Digital, Default)]
pub struct Window3x3 {
    pub taps: [[Pixel; 3]; 3],
}

#[derive(PartialEq, Debug, Digital, Default)]
pub struct KernelSet {
    pub coeffs: [[Coeff; 3]; 3],
}

// istoria pe coloane pentru cele trei fluxuri de randuri
// rows[r][0] = coloana -1, rows[r][1] = coloana -2
// r are aceeasi ordine ca in fereastra (0 = rand -2, 2 = randul curent)
#[derive(PartialEq, Debug, Digital, Default)]
pub struct ColumnHistory {
    pub rows: [[Pixel; 2]; 3],
}

// fereastra capturata + cele trei etaje de validitate
#[derive(PartialEq, Debug, Digital, Default)]
pub struct CapturedWindow {
    pub window: Window3x3,
    pub valid: [bool; 3],
}

// i/o interface

#[derive(PartialEq, Debug, Digital, Default)]
pub struct ConvInput {
    // true = ciclul asta aduce un esantion real, false = bula
    pub enable: bool,
    pub sample: Pixel,
    // ce a intors line buffer-ul pentru esantionul asta
    pub row_minus1: Pixel,
    pub row_minus2: Pixel,
    // false = gradient pe randuri, true = gradient pe coloane
    pub mode: bool,
    // true = iesirea e magnitudinea convolutiei, false = pixelul din centru
    pub conv_en: bool,
}

#[derive(PartialEq, Debug, Digital, Default)]
pub struct ConvOutput {
    pub valid: bool,
    pub sample: Pixel,
}

// u16 -> pixel, bitii peste 12 se pierd
pub fn to_pixel(value: u16) -> Pixel {
    bits(u128::from(value & PIXEL_MAX))
}

// pixel -> u16
pub fn from_pixel(value: Pixel) -> u16 {
    value.raw() as u16
}

impl Window3x3 {
    pub fn from_values(values: [[u16; 3]; 3]) -> Self {
        let mut taps = [[to_pixel(0); 3]; 3];
        for (row, src) in taps.iter_mut().zip(values.iter()) {
            for (tap, value) in row.iter_mut().zip(src.iter()) {
                *tap = to_pixel(*value);
            }
        }
        Self { taps }
    }

    pub fn center(&self) -> Pixel {
        self.taps[1][1]
    }
}

impl ConvInput {
    // esantion acceptat, cu taps-urile de la line buffer
    pub fn accepted(
        sample: u16,
        row_minus1: u16,
        row_minus2: u16,
        mode: bool,
        conv_en: bool,
    ) -> Self {
        Self {
            enable: true,
            sample: to_pixel(sample),
            row_minus1: to_pixel(row_minus1),
            row_minus2: to_pixel(row_minus2),
            mode,
            conv_en,
        }
    }

    // ciclu fara date
    pub fn bubble(mode: bool, conv_en: bool) -> Self {
        Self {
            enable: false,
            mode,
            conv_en,
            ..Self::default()
        }
    }
}
