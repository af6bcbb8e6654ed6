//! Read-side selectors over the timeline store.
//!
//! Presentation layers re-query on every timeline change. To let them skip
//! redundant work, derived queries are memoized per store generation: as
//! long as the store has not mutated, repeated calls hand back the same
//! `Arc`, so results are referentially stable. The first query after a
//! mutation recomputes from the store — nothing is ever cached across
//! mutations.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::flow::event::{FlowEvent, FlowStage};
use crate::flow::timeline::{StageCounts, TimelineStore};

#[derive(Default)]
struct SelectorCache {
    generation: u64,
    latest: HashMap<usize, Arc<[FlowEvent]>>,
    by_stage: HashMap<FlowStage, Arc<[FlowEvent]>>,
    stats: Option<Arc<StageCounts>>,
}

impl SelectorCache {
    fn invalidate(&mut self, generation: u64) {
        if self.generation != generation {
            self.generation = generation;
            self.latest.clear();
            self.by_stage.clear();
            self.stats = None;
        }
    }
}

/// Memoizing query layer consumed by presentation code.
///
/// Holds no state of its own beyond the per-generation cache; every result
/// is derived from the underlying [`TimelineStore`].
pub struct TimelineSelectors {
    store: TimelineStore,
    cache: Mutex<SelectorCache>,
}

impl TimelineSelectors {
    /// Window used by [`TimelineSelectors::recent`], matching the timeline
    /// panel's default of showing the last ten events.
    pub const DEFAULT_WINDOW: usize = 10;

    pub fn new(store: TimelineStore) -> Self {
        Self {
            store,
            cache: Mutex::new(SelectorCache::default()),
        }
    }

    pub fn store(&self) -> &TimelineStore {
        &self.store
    }

    /// Last `n` events in chronological order.
    pub fn latest_events(&self, n: usize) -> Arc<[FlowEvent]> {
        let mut cache = self.cache.lock();
        cache.invalidate(self.store.generation());
        if let Some(hit) = cache.latest.get(&n) {
            return Arc::clone(hit);
        }
        let computed: Arc<[FlowEvent]> = self.store.latest_events(n).into();
        cache.latest.insert(n, Arc::clone(&computed));
        computed
    }

    /// The default presentation window over the tail of the timeline.
    pub fn recent(&self) -> Arc<[FlowEvent]> {
        self.latest_events(Self::DEFAULT_WINDOW)
    }

    /// Events of one stage kind, recording order preserved.
    pub fn events_by_stage(&self, stage: FlowStage) -> Arc<[FlowEvent]> {
        let mut cache = self.cache.lock();
        cache.invalidate(self.store.generation());
        if let Some(hit) = cache.by_stage.get(&stage) {
            return Arc::clone(hit);
        }
        let computed: Arc<[FlowEvent]> = self.store.events_by_stage(stage).into();
        cache.by_stage.insert(stage, Arc::clone(&computed));
        computed
    }

    /// Per-stage counts over the whole log.
    pub fn stats(&self) -> Arc<StageCounts> {
        let mut cache = self.cache.lock();
        cache.invalidate(self.store.generation());
        if let Some(hit) = &cache.stats {
            return Arc::clone(hit);
        }
        let computed = Arc::new(self.store.stats());
        cache.stats = Some(Arc::clone(&computed));
        computed
    }

    pub fn current_event(&self) -> Option<FlowEvent> {
        self.store.current_event()
    }

    pub fn is_animating(&self) -> bool {
        self.store.is_animating()
    }
}
