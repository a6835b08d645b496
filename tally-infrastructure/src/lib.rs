#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod export;

pub use error::ImportError;
pub use export::{
    ExportData, ExportGroup, ExportTransaction, ExportUser, into_groups, parse_export, read_export,
};
