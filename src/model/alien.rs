use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, level-triggered cancellation flag for one alien.
///
/// Fired only by the coordinator (fight, trapped alien) and observed by
/// the alien's own actor loop at the top of each iteration. Once fired
/// it stays fired; firing again is a no-op.
#[derive(Debug, Clone, Default)]
pub struct KillSwitch(Arc<AtomicBool>);

impl KillSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_fired(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A concurrent actor wandering the road graph.
///
/// The registry entry is the coordinator's view: current city and the
/// kill switch. The actor loop itself runs on its own thread and holds
/// only a [`KillSwitch`] handle plus the channel senders.
#[derive(Debug, Clone)]
pub struct Alien {
    pub id: u64,
    /// Name of the occupied city. `None` until initial placement.
    pub city: Option<String>,
    switch: KillSwitch,
}

impl Alien {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            city: None,
            switch: KillSwitch::new(),
        }
    }

    /// Fire this alien's kill switch. Idempotent.
    pub fn cancel(&self) {
        self.switch.fire();
    }

    pub fn is_cancelled(&self) -> bool {
        self.switch.is_fired()
    }

    /// Handle for the actor loop running on another thread.
    pub fn switch(&self) -> KillSwitch {
        self.switch.clone()
    }
}
