// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use foia_finder::CoreError;
use foia_finder_catalog::CatalogError;
use thiserror::Error;

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog could not be loaded.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The detail file could not be parsed.
    #[error("failed to parse component details: {0}")]
    Details(#[from] serde_json::Error),

    /// Resolving the pick or editing the filter failed.
    #[error("{0}")]
    Selection(#[from] CoreError),

    /// A filter option was given for an agency without a component filter.
    #[error("agency {0} is centralized and has no component filter")]
    NoFilter(String),
}
