// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The detail-fetch transport seam.

use std::sync::Arc;

use foia_finder_domain::{ComponentDetail, ComponentId};
use futures::future::BoxFuture;
use thiserror::Error;

/// Transport failures reported by a [`DetailFetcher`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The transport has no detail for this component.
    #[error("no detail available for component {0}")]
    Unavailable(ComponentId),

    /// The transport itself failed.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// A pending detail fetch.
pub type DetailFuture = BoxFuture<'static, Result<ComponentDetail, FetchError>>;

/// Asynchronously supplies component detail payloads.
///
/// Implementations must always settle the returned future, with an error
/// if necessary; the resolver relies on a failed fetch completing rather
/// than hanging. Timeouts are the implementation's concern.
pub trait DetailFetcher: Send + Sync {
    /// Starts fetching the detail payload for a component.
    fn fetch_detail(&self, id: ComponentId) -> DetailFuture;
}

impl<T: DetailFetcher + ?Sized> DetailFetcher for Arc<T> {
    fn fetch_detail(&self, id: ComponentId) -> DetailFuture {
        (**self).fetch_detail(id)
    }
}
