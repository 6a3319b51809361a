use std::cell::RefCell;
use std::rc::Rc;

/// The two analytics fetches that can race each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKey {
    Cashflow,
    Forecast,
}

impl FetchKey {
    fn index(self) -> usize {
        match self {
            FetchKey::Cashflow => 0,
            FetchKey::Forecast => 1,
        }
    }
}

/// Monotonic ticket counter per fetch key. A response is only applied while
/// its ticket is still the latest issued for its key, so overlapping
/// requests resolve last-issued-wins regardless of arrival order.
#[derive(Clone, Default)]
pub struct FetchSequences {
    latest: Rc<RefCell<[u64; 2]>>,
}

impl FetchSequences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for a key, marking every request already in
    /// flight for that key stale.
    pub fn begin(&self, key: FetchKey) -> u64 {
        let mut latest = self.latest.borrow_mut();
        latest[key.index()] += 1;
        latest[key.index()]
    }

    /// Whether a ticket is still the latest issued for its key.
    pub fn is_current(&self, key: FetchKey, ticket: u64) -> bool {
        self.latest.borrow()[key.index()] == ticket
    }

    /// Invalidate both keys without starting a request; any response still
    /// in flight gets discarded on arrival.
    pub fn invalidate_all(&self) {
        let mut latest = self.latest.borrow_mut();
        for slot in latest.iter_mut() {
            *slot += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_tickets_supersede_earlier_ones() {
        let sequences = FetchSequences::new();
        let first = sequences.begin(FetchKey::Cashflow);
        let second = sequences.begin(FetchKey::Cashflow);
        assert!(!sequences.is_current(FetchKey::Cashflow, first));
        assert!(sequences.is_current(FetchKey::Cashflow, second));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let sequences = FetchSequences::new();
        let cashflow = sequences.begin(FetchKey::Cashflow);
        let forecast = sequences.begin(FetchKey::Forecast);
        assert!(sequences.is_current(FetchKey::Cashflow, cashflow));
        assert!(sequences.is_current(FetchKey::Forecast, forecast));
    }

    #[test]
    fn invalidation_marks_every_in_flight_request_stale() {
        let sequences = FetchSequences::new();
        let cashflow = sequences.begin(FetchKey::Cashflow);
        let forecast = sequences.begin(FetchKey::Forecast);
        sequences.invalidate_all();
        assert!(!sequences.is_current(FetchKey::Cashflow, cashflow));
        assert!(!sequences.is_current(FetchKey::Forecast, forecast));
    }

    #[test]
    fn clones_share_the_same_counters() {
        let sequences = FetchSequences::new();
        let clone = sequences.clone();
        let ticket = clone.begin(FetchKey::Forecast);
        assert!(sequences.is_current(FetchKey::Forecast, ticket));
        sequences.invalidate_all();
        assert!(!clone.is_current(FetchKey::Forecast, ticket));
    }
}
