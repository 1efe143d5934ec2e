use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::debug;

use crate::config::LoanParameters;
use crate::errors::Result;
use crate::schedule::{compute_schedule, AmortizationSchedule};

pub const DEFAULT_CAPACITY: usize = 64;

/// parameters with every decimal in its shortest form, so that 9 and 9.00
/// address the same entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(LoanParameters);

impl CacheKey {
    pub fn new(params: &LoanParameters) -> Self {
        CacheKey(LoanParameters {
            principal: params.principal.normalize(),
            annual_rate_pct: params.annual_rate_pct.normalize(),
            extra_per_period: params.extra_per_period.normalize(),
            fees_flat: params.fees_flat.normalize(),
            fees_pct: params.fees_pct.normalize(),
            insurance_per_period: params.insurance_per_period.normalize(),
            ..params.clone()
        })
    }
}

/// memoizes computed schedules on the caller side
///
/// bounded; once full the oldest entry is dropped first.
#[derive(Debug)]
pub struct ScheduleCache {
    capacity: usize,
    entries: HashMap<CacheKey, Arc<AmortizationSchedule>>,
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

impl ScheduleCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// return the cached schedule or compute and store it
    pub fn get_or_compute(&mut self, params: &LoanParameters) -> Result<Arc<AmortizationSchedule>> {
        let key = CacheKey::new(params);

        if let Some(schedule) = self.entries.get(&key) {
            self.hits += 1;
            debug!(hits = self.hits, "schedule cache hit");
            return Ok(Arc::clone(schedule));
        }

        self.misses += 1;
        debug!(misses = self.misses, "schedule cache miss");

        let schedule = Arc::new(compute_schedule(params)?);

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, Arc::clone(&schedule));

        Ok(schedule)
    }

    pub fn contains(&self, params: &LoanParameters) -> bool {
        self.entries.contains_key(&CacheKey::new(params))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for ScheduleCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
