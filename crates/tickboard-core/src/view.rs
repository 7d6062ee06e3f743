//! Observable view state: one writer (the refresh orchestrator), many
//! readers, updates suppressed when the new data is structurally identical
//! to what is already held.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::domain::{BestStock, StockRecord};
use crate::error::ViewError;

/// Display-facing state of the dashboard session.
///
/// The three data fields are only replaced as a group at the end of a
/// successful cycle; a failed cycle records its error alongside the
/// previous good data instead of blanking the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub stocks: Vec<StockRecord>,
    pub trending: Vec<StockRecord>,
    pub best: Option<BestStock>,
    pub loading: bool,
    pub error: Option<ViewError>,
}

impl ViewState {
    /// Initial state at session start: empty and loading.
    pub fn new() -> Self {
        Self {
            stocks: Vec::new(),
            trending: Vec::new(),
            best: None,
            loading: true,
            error: None,
        }
    }

    pub(crate) fn begin_cycle(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a successful cycle. Each field is compared structurally and
    /// only replaced when it actually changed; the return value reports
    /// whether observers need to be notified at all.
    pub(crate) fn apply_success(
        &mut self,
        stocks: Vec<StockRecord>,
        trending: Vec<StockRecord>,
        best: Option<BestStock>,
    ) -> bool {
        let mut changed = false;

        if self.stocks != stocks {
            self.stocks = stocks;
            changed = true;
        }
        if self.trending != trending {
            self.trending = trending;
            changed = true;
        }
        changed |= merge_best(&mut self.best, best);

        if self.error.is_some() {
            self.error = None;
            changed = true;
        }
        if self.loading {
            self.loading = false;
            changed = true;
        }

        changed
    }

    /// Apply a failed cycle: the data fields stay untouched, the error is
    /// recorded and the loading flag cleared.
    pub(crate) fn apply_failure(&mut self, error: ViewError) -> bool {
        let mut changed = false;

        if self.error.as_ref() != Some(&error) {
            self.error = Some(error);
            changed = true;
        }
        if self.loading {
            self.loading = false;
            changed = true;
        }

        changed
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shallow-field merge for the best pick: when the incoming value is not
/// structurally identical, only the sub-fields that differ are overwritten
/// and the rest keep their previous values.
fn merge_best(current: &mut Option<BestStock>, incoming: Option<BestStock>) -> bool {
    let Some(next) = incoming else {
        return current.take().is_some();
    };
    let Some(previous) = current.as_mut() else {
        *current = Some(next);
        return true;
    };

    if *previous == next {
        return false;
    }
    if previous.symbol != next.symbol {
        previous.symbol = next.symbol;
    }
    if previous.name != next.name {
        previous.name = next.name;
    }
    if previous.price != next.price {
        previous.price = next.price;
    }
    if previous.change_percent != next.change_percent {
        previous.change_percent = next.change_percent;
    }
    if previous.status != next.status {
        previous.status = next.status;
    }
    true
}

/// Single-writer publisher for [`ViewState`]. Readers subscribe through a
/// watch channel and are only woken for updates that survived change
/// suppression.
#[derive(Debug, Clone)]
pub struct ViewPublisher {
    tx: watch::Sender<ViewState>,
}

impl ViewPublisher {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(ViewState::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    /// Mutate the held state; observers are notified only when the
    /// closure reports an actual change.
    pub(crate) fn update(&self, mutate: impl FnOnce(&mut ViewState) -> bool) -> bool {
        self.tx.send_if_modified(mutate)
    }
}

impl Default for ViewPublisher {
    fn default() -> Self {
        Self::new()
    }
}
