// file: src/client/observer.rs
// description: request instrumentation hooks for the listing client

use std::time::Duration;
use tracing::{debug, warn};

/// Receives a callback around every backend request.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, method: &str, url: &str);

    /// `status` is `None` when no response arrived (timeout, refused).
    fn on_response(&self, url: &str, status: Option<u16>, elapsed: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: &str, url: &str) {
        debug!("{} {}", method, url);
    }

    fn on_response(&self, url: &str, status: Option<u16>, elapsed: Duration) {
        match status {
            Some(code) if (200..300).contains(&code) => {
                debug!("{} -> {} in {}ms", url, code, elapsed.as_millis())
            }
            Some(code) => warn!("{} -> {} in {}ms", url, code, elapsed.as_millis()),
            None => warn!("{} -> no response after {}ms", url, elapsed.as_millis()),
        }
    }
}
