/// Busy flag for a mutation that must not be sent twice while one is pending.
///
/// Claim it synchronously in the event handler, before spawning the request,
/// so a second click handled before the task first runs is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Claim the slot. Returns `false` when a request is already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}
