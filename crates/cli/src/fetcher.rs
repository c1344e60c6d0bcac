// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A detail transport backed by a local JSON file.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use foia_finder::{DetailFetcher, DetailFuture, FetchError};
use foia_finder_domain::{ComponentDetail, ComponentId};
use tracing::{debug, info};

use crate::error::CliError;

/// Serves component details from a map loaded at startup.
///
/// The file maps component ids to detail payloads:
/// `{ "10": { "foia_officers": [...], ... } }`. An optional delay
/// stands in for network latency.
#[derive(Debug, Default)]
pub struct FileDetailFetcher {
    details: HashMap<ComponentId, ComponentDetail>,
    delay: Duration,
}

impl FileDetailFetcher {
    /// Creates a fetcher serving the given details.
    #[must_use]
    pub const fn new(details: HashMap<ComponentId, ComponentDetail>, delay: Duration) -> Self {
        Self { details, delay }
    }

    /// Reads the detail map from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path, delay: Duration) -> Result<Self, CliError> {
        let json: String = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let details: HashMap<ComponentId, ComponentDetail> = serde_json::from_str(&json)?;
        info!(path = %path.display(), components = details.len(), "Loaded component details");
        Ok(Self::new(details, delay))
    }
}

impl DetailFetcher for FileDetailFetcher {
    fn fetch_detail(&self, id: ComponentId) -> DetailFuture {
        debug!(component = %id, delay_ms = self.delay.as_millis(), "Serving component detail");
        let result: Result<ComponentDetail, FetchError> = self
            .details
            .get(&id)
            .cloned()
            .ok_or(FetchError::Unavailable(id));
        let delay: Duration = self.delay;
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        })
    }
}
