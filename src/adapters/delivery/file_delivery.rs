//! File Delivery - The default command-line result channel.
//!
//! The result file is already on disk once the writer has run; this channel
//! verifies it is actually there and announces its location.

use std::path::Path;

use tracing::info;

use crate::ports::{DeliveryError, ResultDelivery};

/// Delivery channel for the local result file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDelivery;

impl FileDelivery {
    /// Creates a new file delivery channel.
    pub fn new() -> Self {
        Self
    }
}

impl ResultDelivery for FileDelivery {
    fn deliver(&self, path: &Path) -> Result<(), DeliveryError> {
        let metadata = path.metadata().map_err(|err| {
            DeliveryError::result_unavailable(path.to_string_lossy(), err.to_string())
        })?;
        if !metadata.is_file() {
            return Err(DeliveryError::result_unavailable(
                path.to_string_lossy(),
                "not a regular file",
            ));
        }

        info!(path = %path.display(), size_bytes = metadata.len(), "results saved");
        Ok(())
    }
}
