// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use foia_finder_domain::ComponentId;
use serde::{Deserialize, Serialize};

/// What the user just chose, as data only.
///
/// Picks are the only way to request a selection change. Abbreviations
/// and ids in a pick are always drawn from the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pick {
    /// An agency was chosen.
    Agency {
        /// The agency abbreviation.
        abbreviation: String,
    },
    /// A single agency component was chosen.
    Component {
        /// The component identifier.
        id: ComponentId,
    },
}

impl Pick {
    /// Creates an agency pick.
    #[must_use]
    pub fn agency(abbreviation: &str) -> Self {
        Self::Agency {
            abbreviation: abbreviation.to_string(),
        }
    }

    /// Creates a component pick.
    #[must_use]
    pub const fn component(id: ComponentId) -> Self {
        Self::Component { id }
    }
}
