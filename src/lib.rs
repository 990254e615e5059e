// Crate root: declare modules and control visibility
pub mod converter;
pub mod debug;
pub mod error;
pub mod format;
pub mod reader;
pub mod record;
pub mod utils;

// Re-export commonly used API from the library for binaries/tests
pub use converter::{Converter, Lines, Summary};
pub use error::ConvertError;
pub use format::{CaseLabel, CaseLine, LineStyle};
pub use record::{InstructionWord, RECORD_SIZE};
pub use utils::display_path;
