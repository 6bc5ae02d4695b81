use crate::{schema::Recipe, search::SearchFilter};

/// What a cached view was computed from. A view is reused only while its
/// bind equals the catalog's current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheBind {
    generation: u64,
    filter: SearchFilter,
}

impl CacheBind {
    pub fn new(generation: u64, filter: &SearchFilter) -> Self {
        Self {
            generation,
            filter: filter.to_owned(),
        }
    }
}

/// Positions of the recipes passing a filter, tagged with the bind they
/// were computed under.
#[derive(Clone, Debug, Default)]
pub struct ViewCache {
    bind: Option<CacheBind>,
    positions: Vec<usize>,
}

impl ViewCache {
    pub fn validate(&self, bind: &CacheBind) -> bool {
        self.bind.as_ref() == Some(bind)
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Returns true when the view had to be recomputed.
    pub fn refresh(&mut self, bind: CacheBind, recipes: &[Recipe]) -> bool {
        if self.validate(&bind) {
            log::trace!("> Reusing view for {:?}", bind.filter.query());
            return false;
        }

        log::trace!(
            "> Recomputing view for {:?} in {:?} (generation {})",
            bind.filter.query(),
            bind.filter.category().as_str(),
            bind.generation
        );
        self.positions = bind.filter.positions(recipes);
        self.bind = Some(bind);
        true
    }

    pub fn invalidate(&mut self) {
        self.bind = None;
    }
}
