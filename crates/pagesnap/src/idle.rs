// Network-idle detection
//
// The CDP layer reports raw network events but has no notion of "the page is
// done loading". This module rebuilds the networkidle2 heuristic on top of
// those events: navigation is considered settled once no more than
// MAX_INFLIGHT_REQUESTS requests have been in flight for a continuous
// QUIET_WINDOW.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventLoadingFailed, EventLoadingFinished, EventRequestWillBeSent, RequestId,
};
use chromiumoxide::listeners::EventStream;
use futures_util::StreamExt;
use tokio::time::{sleep, timeout};
use tracing::trace;

/// Requests allowed to stay in flight while the page still counts as idle.
///
/// Long-polling and analytics connections routinely never finish; tolerating
/// two of them matches the behavior of the common "network almost idle"
/// navigation heuristic.
pub(crate) const MAX_INFLIGHT_REQUESTS: usize = 2;

/// How long the network has to stay quiet before navigation is considered done.
pub(crate) const QUIET_WINDOW: Duration = Duration::from_millis(500);

/// In-flight request bookkeeping, keyed by request id.
///
/// A redirect re-announces the same request id; inserting into a set keeps
/// the count honest. Settling an id that was never started (events that
/// predate the subscription) is a no-op.
#[derive(Debug)]
pub(crate) struct InflightTracker<K> {
    in_flight: HashSet<K>,
}

impl<K: Eq + Hash> InflightTracker<K> {
    pub(crate) fn new() -> Self {
        Self {
            in_flight: HashSet::new(),
        }
    }

    pub(crate) fn started(&mut self, id: K) {
        self.in_flight.insert(id);
    }

    pub(crate) fn settled(&mut self, id: &K) {
        self.in_flight.remove(id);
    }

    pub(crate) fn is_quiet(&self, max_inflight: usize) -> bool {
        self.in_flight.len() <= max_inflight
    }

    pub(crate) fn len(&self) -> usize {
        self.in_flight.len()
    }
}

/// Watches a page's network traffic and resolves once it goes quiet.
///
/// Must be attached before navigation starts so the document request itself
/// is observed.
pub(crate) struct NetworkIdleWatcher {
    sent: EventStream<EventRequestWillBeSent>,
    finished: EventStream<EventLoadingFinished>,
    failed: EventStream<EventLoadingFailed>,
    tracker: InflightTracker<RequestId>,
}

impl NetworkIdleWatcher {
    /// Enables the Network domain and subscribes to request lifecycle events.
    pub(crate) async fn attach(page: &Page) -> chromiumoxide::error::Result<Self> {
        page.execute(EnableParams::default()).await?;
        Ok(Self {
            sent: page.event_listener::<EventRequestWillBeSent>().await?,
            finished: page.event_listener::<EventLoadingFinished>().await?,
            failed: page.event_listener::<EventLoadingFailed>().await?,
            tracker: InflightTracker::new(),
        })
    }

    /// Suspends until the page has been network-quiet for [`QUIET_WINDOW`],
    /// or until `limit` expires.
    pub(crate) async fn wait_until_idle(
        mut self,
        limit: Duration,
    ) -> std::result::Result<(), tokio::time::error::Elapsed> {
        timeout(limit, self.drive()).await
    }

    async fn drive(&mut self) {
        loop {
            if self.tracker.is_quiet(MAX_INFLIGHT_REQUESTS) {
                tokio::select! {
                    _ = sleep(QUIET_WINDOW) => return,
                    _ = self.pump() => {}
                }
            } else {
                self.pump().await;
            }
        }
    }

    /// Applies the next network event to the tracker. Pends forever once all
    /// event streams have ended (page gone); the caller's timeout unblocks it.
    async fn pump(&mut self) {
        tokio::select! {
            Some(event) = self.sent.next() => {
                self.tracker.started(event.request_id.clone());
                trace!(in_flight = self.tracker.len(), "request started");
            }
            Some(event) = self.finished.next() => {
                self.tracker.settled(&event.request_id);
                trace!(in_flight = self.tracker.len(), "request finished");
            }
            Some(event) = self.failed.next() => {
                self.tracker.settled(&event.request_id);
                trace!(in_flight = self.tracker.len(), "request failed");
            }
            else => std::future::pending::<()>().await,
        }
    }
}
