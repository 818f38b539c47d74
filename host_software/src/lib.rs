pub mod config;
pub mod driver;
pub mod error;
pub mod frame_loader;
pub mod line_buffer;
pub mod reference;
pub mod stimulus;

pub use config::{HostConfig, KernelMode};
pub use driver::{process_frame, simulate, FrameResult, TickRecord, Trace};
pub use error::HostError;
pub use frame_loader::{load_frame, write_frame, Frame};
pub use line_buffer::{LineBuffer, RowHistory};
pub use reference::{reference_magnitude, reference_stream};
pub use stimulus::{EnablePattern, Step, Stimulus};
