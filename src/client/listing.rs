// file: src/client/listing.rs
// description: REST client for generated listings and image generation status
// reference: https://docs.rs/reqwest

use crate::client::RequestObserver;
use crate::config::ClientConfig;
use crate::error::{LensError, Result};
use crate::models::{ImageStatusReport, ListingRecord};
use crate::utils::Validator;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info};

pub struct ListingClient {
    client: Client,
    config: ClientConfig,
    observer: Arc<dyn RequestObserver>,
}

impl ListingClient {
    pub fn new(config: ClientConfig, observer: Arc<dyn RequestObserver>) -> Result<Self> {
        Validator::validate_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LensError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            observer,
        })
    }

    pub fn listing_url(&self, id: &str) -> String {
        format!(
            "{}/listings/generated/{}/",
            self.config.base_url.trim_end_matches('/'),
            id
        )
    }

    pub fn images_url(&self, id: &str) -> String {
        format!("{}images/", self.listing_url(id))
    }

    pub async fn fetch_listing(&self, id: &str) -> Result<ListingRecord> {
        Validator::validate_listing_id(id)?;
        let value: serde_json::Value = self.get_json(&self.listing_url(id)).await?;
        ListingRecord::from_value(value)
    }

    pub async fn fetch_image_status(&self, id: &str) -> Result<ImageStatusReport> {
        Validator::validate_listing_id(id)?;
        self.get_json(&self.images_url(id)).await
    }

    /// Re-fetches image status every `poll_interval_secs` until every image
    /// settles or `max_polls` is reached, handing each report to `on_report`.
    ///
    /// Returns [`LensError::Cancelled`] once `cancel` holds `true`; no report
    /// is delivered after that point.
    pub async fn poll_images<F>(
        &self,
        id: &str,
        mut cancel: watch::Receiver<bool>,
        mut on_report: F,
    ) -> Result<ImageStatusReport>
    where
        F: FnMut(&ImageStatusReport),
    {
        let interval = Duration::from_secs(self.config.poll_interval_secs);
        let max_polls = self.config.max_polls.max(1);
        let mut polls = 0;

        loop {
            if *cancel.borrow() {
                info!("Image polling for listing {} cancelled", id);
                return Err(LensError::Cancelled);
            }

            let report = tokio::select! {
                report = self.fetch_image_status(id) => report?,
                _ = cancellation(&mut cancel) => {
                    info!("Image polling for listing {} cancelled mid-request", id);
                    return Err(LensError::Cancelled);
                }
            };

            polls += 1;
            on_report(&report);

            if report.is_settled() || polls >= max_polls {
                debug!(
                    "Image polling for listing {} stopped after {} polls",
                    id, polls
                );
                return Ok(report);
            }

            tokio::select! {
                _ = sleep(interval) => {}
                _ = cancellation(&mut cancel) => {}
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.observer.on_request("GET", url);
        let started = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                self.observer.on_response(url, None, started.elapsed());
                return Err(LensError::Http(format!("Failed to send request to {}: {}", url, e)));
            }
        };

        let status = response.status();
        self.observer
            .on_response(url, Some(status.as_u16()), started.elapsed());

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LensError::Http(format!(
                "Request to {} failed with status {}: {}",
                url, status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LensError::Http(format!("Failed to parse response from {}: {}", url, e)))
    }
}

/// Resolves once `cancel` holds `true`. Never resolves if the sender is
/// dropped first, since nothing can cancel after that.
async fn cancellation(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|cancelled| *cancelled).await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TracingObserver;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RequestObserver for RecordingObserver {
        fn on_request(&self, method: &str, url: &str) {
            self.events.lock().unwrap().push(format!("{} {}", method, url));
        }

        fn on_response(&self, _url: &str, status: Option<u16>, _elapsed: Duration) {
            self.events.lock().unwrap().push(format!("{:?}", status));
        }
    }

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            poll_interval_secs: 1,
            max_polls: 3,
        }
    }

    /// Serves each canned `(status, body)` to one connection, in order.
    async fn serve(responses: Vec<(u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let reply = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/api", addr)
    }

    /// Accepts connections and never answers.
    async fn serve_silent() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        format!("http://{}/api", addr)
    }

    #[test]
    fn test_url_building() {
        let client =
            ListingClient::new(config("http://localhost:8000/api/"), Arc::new(TracingObserver))
                .unwrap();
        assert_eq!(
            client.listing_url("42"),
            "http://localhost:8000/api/listings/generated/42/"
        );
        assert_eq!(
            client.images_url("42"),
            "http://localhost:8000/api/listings/generated/42/images/"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(ListingClient::new(config("localhost:8000"), Arc::new(TracingObserver)).is_err());
    }

    #[tokio::test]
    async fn test_fetch_listing_notifies_observer() {
        let base = serve(vec![(200, r#"{"platform":"walmart","title":"Earbuds"}"#)]).await;
        let observer = Arc::new(RecordingObserver::default());
        let client = ListingClient::new(config(&base), observer.clone()).unwrap();

        let record = client.fetch_listing("7").await.unwrap();
        assert_eq!(record.text("title"), Some("Earbuds"));

        let events = observer.events.lock().unwrap().clone();
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_with("GET ") && events[0].ends_with("/listings/generated/7/"));
        assert_eq!(events[1], "Some(200)");
    }

    #[tokio::test]
    async fn test_fetch_listing_http_error() {
        let base = serve(vec![(404, r#"{"detail":"Not found."}"#)]).await;
        let client = ListingClient::new(config(&base), Arc::new(TracingObserver)).unwrap();

        match client.fetch_listing("7").await {
            Err(LensError::Http(msg)) => assert!(msg.contains("404")),
            other => panic!("expected http error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_unsafe_id() {
        let client =
            ListingClient::new(config("http://127.0.0.1:9/api"), Arc::new(TracingObserver))
                .unwrap();
        assert!(matches!(
            client.fetch_listing("../x").await,
            Err(LensError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_poll_until_settled() {
        let base = serve(vec![
            (
                200,
                r#"{"images":[{"image_type":"hero","status":"processing"}],"summary":{"total":1,"in_progress":1,"all_completed":false}}"#,
            ),
            (
                200,
                r#"{"images":[{"image_type":"hero","status":"completed","image_url":"http://x/h.png"}],"summary":{"total":1,"completed":1,"all_completed":true}}"#,
            ),
        ])
        .await;
        let client = ListingClient::new(config(&base), Arc::new(TracingObserver)).unwrap();
        let (_tx, rx) = watch::channel(false);

        let mut seen = 0;
        let report = client.poll_images("7", rx, |_| seen += 1).await.unwrap();

        assert_eq!(seen, 2);
        assert!(report.summary.all_completed);
        assert_eq!(report.images[0].image_url.as_deref(), Some("http://x/h.png"));
    }

    #[tokio::test]
    async fn test_poll_cancelled_before_start() {
        let client =
            ListingClient::new(config("http://127.0.0.1:9/api"), Arc::new(TracingObserver))
                .unwrap();
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let result = client.poll_images("7", rx, |_| panic!("no report after cancel")).await;
        assert!(matches!(result, Err(LensError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_in_flight_request() {
        let base = serve_silent().await;
        let mut config = config(&base);
        config.timeout_secs = 30;
        let client = ListingClient::new(config, Arc::new(TracingObserver)).unwrap();
        let (tx, rx) = watch::channel(false);

        tokio::spawn(async move {
            sleep(Duration::from_millis(100)).await;
            let _ = tx.send(true);
        });

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            client.poll_images("7", rx, |_| panic!("no report after cancel")),
        )
        .await
        .expect("cancellation should not wait for the request timeout");
        assert!(matches!(result, Err(LensError::Cancelled)));
    }

    #[tokio::test]
    async fn test_dropped_sender_keeps_polling() {
        let base = serve(vec![
            (200, r#"{"images":[],"summary":{"total":1,"all_completed":false}}"#),
            (200, r#"{"images":[],"summary":{"total":1,"completed":1,"all_completed":true}}"#),
        ])
        .await;
        let client = ListingClient::new(config(&base), Arc::new(TracingObserver)).unwrap();
        let (tx, rx) = watch::channel(false);
        drop(tx);

        let report = client.poll_images("7", rx, |_| {}).await.unwrap();
        assert!(report.summary.all_completed);
    }
}
