// file: src/client/mod.rs
// description: backend client module exports

mod listing;
mod observer;

pub use listing::ListingClient;
pub use observer::{RequestObserver, TracingObserver};
