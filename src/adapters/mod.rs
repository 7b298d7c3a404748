//! Adapters - Implementations of ports for concrete technologies.
//!
//! - `table` - CSV reader/writer for the table ports
//! - `delivery` - File and email result delivery channels

pub mod delivery;
pub mod table;

pub use delivery::{FileDelivery, ResendMailer};
pub use table::{CsvTableReader, CsvTableWriter};
