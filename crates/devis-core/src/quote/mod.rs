//! Quote page field extraction and record mapping.

pub mod address;
mod assembler;
mod batch;
mod parser;
mod projection;
pub mod rules;
mod scalar;
mod warning;

pub use address::{AddressBlock, AddressSegmenter, AddressSegments};
pub use assembler::RecordAssembler;
pub use batch::{BatchReport, PageFailure, QuoteConverter};
pub use parser::{PageExtraction, PageParser, QuotePageParser};
pub use projection::project;
pub use scalar::{ScalarExtractor, ScalarFields};
pub use warning::{ExtractWarning, WarningCode};
