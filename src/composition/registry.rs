use std::sync::Arc;

use crate::{
    composition::model::{Composition, CompositionInfo},
    foundation::error::{FramecastError, FramecastResult},
};

/// Compositions addressable by id, in registration order.
#[derive(Clone, Debug, Default)]
pub struct CompositionRegistry {
    comps: Vec<Arc<Composition>>,
}

impl CompositionRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `comp`, rejecting an id that is already registered.
    pub fn register(&mut self, comp: Composition) -> FramecastResult<()> {
        if self.get(comp.id()).is_some() {
            return Err(FramecastError::validation(format!(
                "composition '{}' is already registered",
                comp.id()
            )));
        }
        tracing::debug!(id = comp.id(), frames = comp.duration().0, "registered composition");
        self.comps.push(Arc::new(comp));
        Ok(())
    }

    /// Look up by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Composition>> {
        self.comps.iter().find(|c| c.id() == id)
    }

    /// Like [`CompositionRegistry::get`] but errors with the known ids.
    pub fn require(&self, id: &str) -> FramecastResult<&Arc<Composition>> {
        self.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.comps.iter().map(|c| c.id()).collect();
            FramecastError::validation(format!(
                "unknown composition '{id}' (known: {})",
                known.join(", ")
            ))
        })
    }

    /// Descriptions of every composition.
    pub fn list(&self) -> Vec<CompositionInfo> {
        self.comps.iter().map(|c| c.info()).collect()
    }

    /// Registered compositions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Composition>> {
        self.comps.iter()
    }

    /// Number of compositions.
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }
}

/// Registry holding the built-in videos.
pub fn default_registry() -> FramecastResult<CompositionRegistry> {
    let mut reg = CompositionRegistry::new();
    reg.register(crate::videos::buero_netzwerk::composition()?)?;
    reg.register(crate::videos::financial::composition()?)?;
    Ok(reg)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
