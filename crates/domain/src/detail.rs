// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Component detail payloads.
//!
//! The catalog is loaded without these; they are fetched on demand the
//! first time a component is selected.

use serde::{Deserialize, Serialize};

/// A point of contact for FOIA requests at a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoiaPersonnel {
    /// The contact's name.
    #[serde(default)]
    pub name: Option<String>,
    /// The contact's title.
    #[serde(default)]
    pub title: Option<String>,
    /// The contact's email address, as recorded.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone numbers in the order they were recorded.
    #[serde(default)]
    pub phone: Vec<String>,
}

impl FoiaPersonnel {
    /// Returns the label shown for this contact.
    ///
    /// `"name, title"` when both are known, otherwise whichever one is
    /// known. Returns `None` when neither is.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match (non_empty(self.name.as_deref()), non_empty(self.title.as_deref())) {
            (Some(name), Some(title)) => Some(format!("{name}, {title}")),
            (Some(name), None) => Some(name.to_string()),
            (None, Some(title)) => Some(title.to_string()),
            (None, None) => None,
        }
    }

    /// Returns the contact's email address lower-cased, if one is recorded.
    #[must_use]
    pub fn normalized_email(&self) -> Option<String> {
        non_empty(self.email.as_deref()).map(str::to_lowercase)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Personnel and contact information for a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDetail {
    /// FOIA officers.
    #[serde(default)]
    pub foia_officers: Vec<FoiaPersonnel>,
    /// FOIA public liaisons.
    #[serde(default)]
    pub public_liaisons: Vec<FoiaPersonnel>,
    /// FOIA requester service centers.
    #[serde(default)]
    pub service_centers: Vec<FoiaPersonnel>,
    /// The address requests are submitted to by email.
    #[serde(default)]
    pub email: Option<String>,
    /// The component's FOIA website.
    #[serde(default)]
    pub website: Option<String>,
    /// The postal address requests are submitted to.
    #[serde(default)]
    pub submission_address: Option<String>,
}

impl ComponentDetail {
    /// Iterates every contact on record, officers first.
    pub fn all_personnel(&self) -> impl Iterator<Item = &FoiaPersonnel> {
        self.foia_officers
            .iter()
            .chain(&self.public_liaisons)
            .chain(&self.service_centers)
    }
}
