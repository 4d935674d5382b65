use indexmap::IndexMap;

use crate::error::{SurfaceError, SurfaceResult};
use crate::interaction::handler::InputHandler;

/// Owns the available (live-candidate) and auxiliary (always-run) handler
/// lists for one surface.
///
/// Both lists preserve registration order, and handler ids are unique across
/// their union. The registry never touches the live slot; that belongs to
/// the dispatch engine.
#[derive(Default)]
pub struct HandlerRegistry {
    available: IndexMap<String, Box<dyn InputHandler>>,
    auxiliary: IndexMap<String, Box<dyn InputHandler>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(&self, id: &str) -> SurfaceResult<()> {
        if self.available.contains_key(id) || self.auxiliary.contains_key(id) {
            return Err(SurfaceError::DuplicateHandlerId { id: id.to_owned() });
        }
        Ok(())
    }

    /// Adds a candidate for live status. Fails on an id collision with any
    /// handler in either list, leaving both lists unchanged.
    pub fn add_available(&mut self, handler: Box<dyn InputHandler>) -> SurfaceResult<()> {
        self.check_unique(handler.id())?;
        self.available.insert(handler.id().to_owned(), handler);
        Ok(())
    }

    /// Adds an always-run auxiliary handler. Same uniqueness rule as
    /// [`HandlerRegistry::add_available`].
    pub fn add_auxiliary(&mut self, handler: Box<dyn InputHandler>) -> SurfaceResult<()> {
        self.check_unique(handler.id())?;
        self.auxiliary.insert(handler.id().to_owned(), handler);
        Ok(())
    }

    /// Removes the handler with the given id from whichever list holds it.
    pub fn remove(&mut self, id: &str) -> Option<Box<dyn InputHandler>> {
        // shift_remove keeps registration order for the remaining handlers
        self.available
            .shift_remove(id)
            .or_else(|| self.auxiliary.shift_remove(id))
    }

    /// Looks up a handler by id, searching available handlers first.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&dyn InputHandler> {
        self.available
            .get(id)
            .or_else(|| self.auxiliary.get(id))
            .map(|handler| handler.as_ref())
    }

    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut dyn InputHandler> {
        if let Some(handler) = self.available.get_mut(id) {
            return Some(handler.as_mut());
        }
        match self.auxiliary.get_mut(id) {
            Some(handler) => Some(handler.as_mut()),
            None => None,
        }
    }

    pub fn available(&self) -> impl Iterator<Item = &dyn InputHandler> {
        self.available.values().map(|handler| handler.as_ref())
    }

    pub fn auxiliary(&self) -> impl Iterator<Item = &dyn InputHandler> {
        self.auxiliary.values().map(|handler| handler.as_ref())
    }

    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    #[must_use]
    pub fn auxiliary_len(&self) -> usize {
        self.auxiliary.len()
    }

    pub(crate) fn available_mut_by_id(&mut self, id: &str) -> Option<&mut Box<dyn InputHandler>> {
        self.available.get_mut(id)
    }

    pub(crate) fn auxiliary_mut_by_index(
        &mut self,
        index: usize,
    ) -> Option<&mut Box<dyn InputHandler>> {
        self.auxiliary.get_index_mut(index).map(|(_, h)| h)
    }
}
