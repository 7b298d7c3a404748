//! Table Adapters - CSV implementations of the table ports.

mod csv_reader;
mod csv_writer;

pub use csv_reader::CsvTableReader;
pub use csv_writer::CsvTableWriter;
