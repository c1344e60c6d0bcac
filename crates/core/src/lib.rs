// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Selection resolution and component filtering.
//!
//! A [`SelectionResolver`] turns user [`Pick`]s into a [`SelectionState`],
//! fetching missing component details through a [`DetailFetcher`]. When the
//! selection is an agency with more than one component, the resolver also
//! keeps a [`ComponentFilter`] used to narrow a report.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod command;
mod error;
mod fetch;
mod filter;
mod resolver;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::Pick;
pub use error::CoreError;
pub use fetch::{DetailFetcher, DetailFuture, FetchError};
pub use filter::{ComponentFilter, FilterCheckbox};
pub use resolver::{PendingResolution, Resolution, ResolveOutcome, SelectionResolver};
pub use state::SelectionState;
