// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use foia_finder_domain::{AgencyComponent, ComponentDetail, ComponentId};
use tracing::debug;

use crate::CatalogStore;
use crate::error::CatalogError;

impl CatalogStore {
    /// Merges a fetched detail payload into the stored component.
    ///
    /// The stored entity is replaced in a single assignment under the
    /// write lock. Merging the same payload again leaves the store as it
    /// was; merging a different payload replaces the previous one.
    ///
    /// # Arguments
    ///
    /// * `id` - The component the payload belongs to
    /// * `detail` - The fetched payload
    ///
    /// # Returns
    ///
    /// The component as stored after the merge.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ComponentNotFound` if no component has this id.
    pub fn merge_component_detail(
        &self,
        id: ComponentId,
        detail: ComponentDetail,
    ) -> Result<AgencyComponent, CatalogError> {
        let mut index = self.write();
        let position: usize = *index
            .component_by_id
            .get(&id)
            .ok_or(CatalogError::ComponentNotFound(id))?;

        let current: &Arc<AgencyComponent> = &index.components[position];
        if current.detail.as_ref() == Some(&detail) {
            debug!(component = %id, "Detail already merged");
            return Ok(AgencyComponent::clone(current));
        }

        let merged: AgencyComponent = AgencyComponent::clone(current).with_detail(detail);
        index.components[position] = Arc::new(merged.clone());
        debug!(component = %id, "Merged component detail");
        Ok(merged)
    }
}
