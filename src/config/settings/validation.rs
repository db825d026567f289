// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{CheckerError, Result};

use super::Settings;

impl Settings {
    /// Reject values no command can work with.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(CheckerError::Config("limit must be at least 1".to_string()));
        }
        if self.probe_timeout_secs == 0 {
            return Err(CheckerError::Config(
                "probe_timeout_secs must be at least 1".to_string(),
            ));
        }
        if let Some(ref path) = self.catalogue_path {
            if path.as_os_str().is_empty() {
                return Err(CheckerError::Config("catalogue_path is empty".to_string()));
            }
        }
        Ok(())
    }
}
