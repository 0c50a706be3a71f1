use crate::screen::SearchScreen;

/// Ticket identifying one issued search. A screen composed for a stale
/// ticket is discarded instead of racing on arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// Holds the screen the UI is currently showing, guarded by a request
/// generation: only the most recently issued search may install its result.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    generation: u64,
    screen: SearchScreen,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new search generation. Any ticket issued earlier becomes
    /// stale immediately.
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        SearchTicket {
            generation: self.generation,
        }
    }

    /// Install `screen` if `ticket` is still the latest generation. Returns
    /// whether the screen was applied.
    pub fn apply(&mut self, ticket: SearchTicket, screen: SearchScreen) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.screen = screen;
        true
    }

    /// Reset to the empty screen and invalidate all outstanding tickets.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.screen = SearchScreen::cleared();
    }

    #[must_use]
    pub fn screen(&self) -> &SearchScreen {
        &self.screen
    }
}
