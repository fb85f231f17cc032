//! Single-flight coordination for session refresh.
//!
//! At most one refresh call is on the wire at any time. A request that hits
//! a 401 while a refresh is already in flight joins the existing flight and
//! observes its outcome instead of issuing a second call. The slot is
//! cleared once the flight settles so a later 401 can start a new cycle.

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;

use crate::error::ClientError;

type Flight = Shared<BoxFuture<'static, Result<(), ClientError>>>;

/// Holds the shared refresh future while one is in flight.
///
/// Owned by the client instance, so independent clients refresh
/// independently. The mutex makes exactly one task win the race to start
/// the flight; everyone else clones the stored future.
#[derive(Default)]
pub(crate) struct RefreshGate {
    flight: Mutex<Option<Flight>>,
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Await the in-flight refresh, starting one with `start` if none exists.
    ///
    /// Only the task that started the flight clears the slot, and only after
    /// the shared future has settled, so every joiner resumes strictly after
    /// the refresh outcome is known.
    pub(crate) async fn run<F>(&self, start: F) -> Result<(), ClientError>
    where
        F: FnOnce() -> BoxFuture<'static, Result<(), ClientError>>,
    {
        let (flight, started_here) = {
            let mut slot = self.flight.lock().await;
            match slot.as_ref() {
                Some(flight) => (flight.clone(), false),
                None => {
                    let flight = start().shared();
                    *slot = Some(flight.clone());
                    (flight, true)
                }
            }
        };

        let outcome = flight.await;

        if started_here {
            *self.flight.lock().await = None;
        }

        outcome
    }
}
