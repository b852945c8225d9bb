/// Identifies one issued search. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Issues monotonically increasing tickets so that a response can be matched against the most
/// recent request and dropped if a newer one has been issued since.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn new() -> SearchSequencer {
        SearchSequencer::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
