use super::oracle::ExistenceOracle;
use crate::shared::errors::OracleError;
use crate::shared::ids::ParameterId;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// One issued existence query. `seq` grows monotonically per controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    pub field: ParameterId,
    pub full_name: String,
}

#[derive(Debug)]
pub struct QueryCompletion {
    pub ticket: QueryTicket,
    pub outcome: Result<bool, OracleError>,
}

/// Carries tickets to an oracle and hands completions back to the form's thread.
pub trait QueryDispatcher {
    fn dispatch(&mut self, ticket: QueryTicket);

    /// Next completion, waiting at most `timeout`. `None` when nothing finished.
    fn poll(&mut self, timeout: Duration) -> Option<QueryCompletion>;

    fn in_flight(&self) -> usize;
}

/// Runs each query on its own thread; completions arrive over a channel in
/// whatever order the oracle answers.
pub struct ThreadedDispatcher {
    oracle: Arc<dyn ExistenceOracle>,
    tx: Sender<QueryCompletion>,
    rx: Receiver<QueryCompletion>,
    in_flight: usize,
}

impl ThreadedDispatcher {
    pub fn new(oracle: Arc<dyn ExistenceOracle>) -> Self {
        let (tx, rx) = mpsc::channel::<QueryCompletion>();
        Self {
            oracle,
            tx,
            rx,
            in_flight: 0,
        }
    }
}

impl std::fmt::Debug for ThreadedDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadedDispatcher")
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl QueryDispatcher for ThreadedDispatcher {
    fn dispatch(&mut self, ticket: QueryTicket) {
        let tx = self.tx.clone();
        let oracle = Arc::clone(&self.oracle);
        // Detached: a superseded query still runs to completion, bounded by the
        // oracle's own timeout, and its answer is discarded as stale.
        let _ = thread::spawn(move || {
            let outcome = oracle.group_exists(&ticket.full_name);
            let _ = tx.send(QueryCompletion { ticket, outcome });
        });
        self.in_flight += 1;
    }

    fn poll(&mut self, timeout: Duration) -> Option<QueryCompletion> {
        if self.in_flight == 0 {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(done) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(done)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    fn in_flight(&self) -> usize {
        self.in_flight
    }
}

/// Holds tickets until the host resolves them, in any order it likes.
#[derive(Debug, Default)]
pub struct DeferredDispatcher {
    outstanding: Vec<QueryTicket>,
    ready: VecDeque<QueryCompletion>,
    issued: usize,
}

impl DeferredDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outstanding(&self) -> &[QueryTicket] {
        &self.outstanding
    }

    /// Total tickets ever dispatched.
    pub fn issued(&self) -> usize {
        self.issued
    }

    pub fn latest(&self) -> Option<&QueryTicket> {
        self.outstanding.last()
    }

    /// Completes the outstanding ticket `seq`; `false` when no such ticket waits.
    pub fn resolve(&mut self, seq: u64, outcome: Result<bool, OracleError>) -> bool {
        let Some(index) = self.outstanding.iter().position(|t| t.seq == seq) else {
            return false;
        };
        let ticket = self.outstanding.remove(index);
        self.ready.push_back(QueryCompletion { ticket, outcome });
        true
    }

    /// Answers every outstanding ticket through `oracle`, oldest first.
    pub fn resolve_all_with(&mut self, oracle: &dyn ExistenceOracle) -> usize {
        let tickets: Vec<QueryTicket> = self.outstanding.drain(..).collect();
        let count = tickets.len();
        for ticket in tickets {
            let outcome = oracle.group_exists(&ticket.full_name);
            self.ready.push_back(QueryCompletion { ticket, outcome });
        }
        count
    }
}

impl QueryDispatcher for DeferredDispatcher {
    fn dispatch(&mut self, ticket: QueryTicket) {
        self.issued += 1;
        self.outstanding.push(ticket);
    }

    fn poll(&mut self, _timeout: Duration) -> Option<QueryCompletion> {
        self.ready.pop_front()
    }

    fn in_flight(&self) -> usize {
        self.outstanding.len() + self.ready.len()
    }
}
