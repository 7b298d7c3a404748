//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableReader` - Parses and validates a source table into matrix form
//! - `TableWriter` - Serializes the ranked result table
//! - `ResultDelivery` - Hands the written result file to the end user

mod result_delivery;
mod table_reader;
mod table_writer;

pub use result_delivery::{DeliveryError, ResultDelivery};
pub use table_reader::{ReadError, TableReader};
pub use table_writer::{TableWriter, WriteError};
