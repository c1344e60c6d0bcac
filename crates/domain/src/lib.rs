// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod detail;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use detail::{ComponentDetail, FoiaPersonnel};
pub use error::DomainError;
pub use types::{Agency, AgencyComponent, AgencyId, ComponentId};
pub use validation::{validate_agency_fields, validate_component_fields};
