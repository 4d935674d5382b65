use std::cell::Cell;
use std::rc::Rc;

/// A shared raised-flag standing in for a change-listener chain.
///
/// The surface hands a clone to the chart and to each overlay; a raised flag
/// means "state changed since the last draw". [`ChangeSignal::take`] drains
/// the flag, so one draw consumes any number of coalesced notifications.
#[derive(Debug, Clone, Default)]
pub struct ChangeSignal {
    raised: Rc<Cell<bool>>,
}

impl ChangeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.set(true);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.get()
    }

    /// Returns whether the signal was raised and clears it.
    pub fn take(&self) -> bool {
        self.raised.replace(false)
    }
}
