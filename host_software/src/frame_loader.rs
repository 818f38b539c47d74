use std::fs::File;
use std::path::Path;

use conv_core::PIXEL_MAX;
use log::{debug, info};

use crate::error::HostError;

// un cadru in tonuri de gri, 12 biti, in ordine raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub rows: Vec<Vec<u16>>,
}

impl Frame {
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, HostError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(HostError::EmptyFrame),
        };

        let mut checked = Vec::with_capacity(rows.len());
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(HostError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            let mut out = Vec::with_capacity(width);
            for (c, value) in row.into_iter().enumerate() {
                if value > u32::from(PIXEL_MAX) {
                    return Err(HostError::PixelOutOfRange { row: r, col: c, value });
                }
                out.push(value as u16);
            }
            checked.push(out);
        }

        Ok(Self { width, rows: checked })
    }

    // esantioanele in ordine raster
    pub fn samples(&self) -> impl Iterator<Item = u16> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    // iesirea nucleului inapoi in randuri
    pub fn from_stream(width: usize, samples: &[u16]) -> Self {
        let rows = samples.chunks(width.max(1)).map(|c| c.to_vec()).collect();
        Self { width, rows }
    }

    // cadrul demo: doua randuri de zero, trei randuri cu margine verticala, doua randuri de zero
    pub fn vertical_edge_demo(width: usize) -> Self {
        let width = width.max(3);
        let mut rows = vec![vec![0; width]; 2];
        for _ in 0..3 {
            let mut row = vec![0; width];
            row[1] = PIXEL_MAX;
            row[2] = PIXEL_MAX;
            rows.push(row);
        }
        rows.extend(vec![vec![0; width]; 2]);
        Self { width, rows }
    }
}

// CSV fara header, fiecare linie e un rand de pixeli
pub fn load_frame(path: &Path) -> Result<Frame, HostError> {
    if !path.exists() {
        return Err(HostError::MissingFile(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: Vec<u32> = result?;
        rows.push(row);
    }

    let frame = Frame::from_rows(rows)?;
    info!(
        "Cadru incarcat din {}: {}x{}",
        path.display(),
        frame.width,
        frame.height()
    );
    Ok(frame)
}

pub fn write_frame(path: &Path, frame: &Frame) -> Result<(), HostError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for row in &frame.rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    debug!("{} randuri scrise in {}", frame.height(), path.display());
    Ok(())
}
