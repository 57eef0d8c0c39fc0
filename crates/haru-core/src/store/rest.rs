//! REST adapter for a Firebase Realtime Database style backend.
//!
//! The wire surface is the documented RTDB REST API: `POST` on the
//! collection to create (the server responds with `{"name": "<id>"}`),
//! `PATCH` on the object path for partial updates, `DELETE` for removal,
//! and a `text/event-stream` GET for change notification. The stream's
//! `put`/`patch` events are used only as change signals; on each one the
//! adapter re-fetches the whole collection so subscribers always see full
//! snapshots.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;

use super::{StoreEvent, Subscription, TaskStore};
use crate::error::{StoreError, StoreErrorKind, StoreResult};
use crate::models::{Task, TaskId};
use crate::store::record::{decode_snapshot, TaskPatch, TaskRecord};

/// Connection settings for a [`RestStore`].
///
/// Treated as injected configuration: the caller decides where the values
/// come from (environment, flags, a config file).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the database, e.g. `https://example.firebaseio.com`
    pub database_url: String,
    /// Collection path under the base URL
    pub collection: String,
    /// Optional auth token appended to every request
    pub auth_token: Option<String>,
}

impl StoreConfig {
    /// Creates a config for the default `todos` collection.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            collection: "todos".to_string(),
            auth_token: None,
        }
    }

    /// Overrides the collection path.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the auth token, if any.
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    fn base(&self) -> &str {
        self.database_url.trim_end_matches('/')
    }

    fn auth_query(&self) -> String {
        match &self.auth_token {
            Some(token) => format!("?auth={token}"),
            None => String::new(),
        }
    }

    /// URL of the whole collection.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}.json{}",
            self.base(),
            self.collection,
            self.auth_query()
        )
    }

    /// URL of a single task object.
    pub fn task_url(&self, id: &TaskId) -> String {
        format!(
            "{}/{}/{}.json{}",
            self.base(),
            self.collection,
            id,
            self.auth_query()
        )
    }
}

/// Response body of a create (`POST`) call.
#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

/// Task store backed by a remote realtime database over REST.
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    /// Creates a store client for the given connection settings.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn check(response: &Response) -> StoreResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status))
        }
    }
}

fn status_error(status: StatusCode) -> StoreError {
    let kind = if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        StoreErrorKind::Permission
    } else {
        StoreErrorKind::Rejected
    };
    StoreError::new(kind, format!("store responded with {status}"))
}

fn transport_error(err: &reqwest::Error) -> StoreError {
    if err.is_decode() {
        StoreError::decode(err.to_string())
    } else {
        StoreError::network(err.to_string())
    }
}

async fn fetch_collection(client: &Client, config: &StoreConfig) -> StoreResult<Vec<Task>> {
    let response = client
        .get(config.collection_url())
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    RestStore::check(&response)?;
    let value: Value = response.json().await.map_err(|e| transport_error(&e))?;
    Ok(decode_snapshot(value))
}

#[async_trait]
impl TaskStore for RestStore {
    async fn create(&self, record: &TaskRecord) -> StoreResult<TaskId> {
        let response = self
            .client
            .post(self.config.collection_url())
            .json(record)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        Self::check(&response)?;
        let push: PushResponse = response.json().await.map_err(|e| transport_error(&e))?;
        Ok(TaskId(push.name))
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<()> {
        let response = self
            .client
            .patch(self.config.task_url(id))
            .json(patch)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        Self::check(&response)
    }

    async fn remove(&self, id: &TaskId) -> StoreResult<()> {
        let response = self
            .client
            .delete(self.config.task_url(id))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        Self::check(&response)
    }

    fn subscribe(&self) -> Subscription {
        let (tx, subscription) = Subscription::channel();
        let client = self.client.clone();
        let config = self.config.clone();
        tokio::spawn(run_subscription(client, config, tx));
        subscription
    }
}

/// Change signals extracted from the event stream.
#[derive(Debug, PartialEq, Eq)]
enum SseSignal {
    /// The collection changed; a fresh snapshot should be fetched
    Changed,
    /// The server revoked the stream (auth expiry or path removal)
    Revoked,
}

/// Incremental line scanner for a `text/event-stream` body.
///
/// Chunks may split lines arbitrarily, so partial input is buffered until a
/// newline arrives. A `put` or `patch` event marks the collection dirty; the
/// blank line terminating the event block emits a single `Changed` signal,
/// so multi-line events collapse to one re-fetch. Keep-alive events are
/// ignored.
#[derive(Default)]
struct SseScanner {
    buffer: String,
    dirty: bool,
}

impl SseScanner {
    fn push(&mut self, chunk: &str) -> Vec<SseSignal> {
        self.buffer.push_str(chunk);
        let mut signals = Vec::new();

        while let Some(pos) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=pos).collect();
            let line = line.trim();

            if let Some(event) = line.strip_prefix("event:") {
                match event.trim() {
                    "put" | "patch" => self.dirty = true,
                    "cancel" | "auth_revoked" => signals.push(SseSignal::Revoked),
                    _ => {}
                }
            } else if line.is_empty() && self.dirty {
                self.dirty = false;
                signals.push(SseSignal::Changed);
            }
        }

        signals
    }
}

/// Drives one subscription: initial snapshot, then the change stream.
///
/// Any transport failure or stream end reports a single `Lost` event and
/// returns; there is no retry.
async fn run_subscription(client: Client, config: StoreConfig, tx: UnboundedSender<StoreEvent>) {
    if !send_snapshot(&client, &config, &tx).await {
        return;
    }

    let request = client
        .get(config.collection_url())
        .header(ACCEPT, "text/event-stream");
    let mut response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            let _ = tx.send(StoreEvent::Lost(transport_error(&err)));
            return;
        }
    };
    if let Err(err) = RestStore::check(&response) {
        let _ = tx.send(StoreEvent::Lost(err));
        return;
    }
    debug!("change stream open on {}", config.collection);

    let mut scanner = SseScanner::default();
    loop {
        let chunk = match response.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => {
                let _ = tx.send(StoreEvent::Lost(StoreError::network("change stream ended")));
                return;
            }
            Err(err) => {
                let _ = tx.send(StoreEvent::Lost(transport_error(&err)));
                return;
            }
        };

        for signal in scanner.push(&String::from_utf8_lossy(&chunk)) {
            match signal {
                SseSignal::Changed => {
                    if !send_snapshot(&client, &config, &tx).await {
                        return;
                    }
                }
                SseSignal::Revoked => {
                    let _ = tx.send(StoreEvent::Lost(StoreError::permission(
                        "change stream revoked by server",
                    )));
                    return;
                }
            }
        }

        if tx.is_closed() {
            return;
        }
    }
}

/// Fetches and pushes one snapshot; false once the subscription is finished.
async fn send_snapshot(
    client: &Client,
    config: &StoreConfig,
    tx: &UnboundedSender<StoreEvent>,
) -> bool {
    match fetch_collection(client, config).await {
        Ok(tasks) => tx.send(StoreEvent::Snapshot(tasks)).is_ok(),
        Err(err) => {
            error!("snapshot fetch failed: {err}");
            let _ = tx.send(StoreEvent::Lost(err));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig::new("https://db.example.com/").with_auth_token(Some("secret".to_string()))
    }

    #[test]
    fn test_collection_url_includes_auth() {
        assert_eq!(
            config().collection_url(),
            "https://db.example.com/todos.json?auth=secret"
        );
    }

    #[test]
    fn test_task_url_without_auth() {
        let config = StoreConfig::new("https://db.example.com").with_collection("tasks");
        assert_eq!(
            config.task_url(&TaskId::from("abc")),
            "https://db.example.com/tasks/abc.json"
        );
    }

    #[test]
    fn test_status_error_classification() {
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED).kind,
            StoreErrorKind::Permission
        );
        assert_eq!(
            status_error(StatusCode::FORBIDDEN).kind,
            StoreErrorKind::Permission
        );
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR).kind,
            StoreErrorKind::Rejected
        );
    }

    #[test]
    fn test_scanner_collapses_event_block_to_one_signal() {
        let mut scanner = SseScanner::default();
        let signals = scanner.push("event: put\ndata: {\"path\":\"/\",\"data\":null}\n\n");
        assert_eq!(signals, vec![SseSignal::Changed]);
    }

    #[test]
    fn test_scanner_buffers_partial_lines() {
        let mut scanner = SseScanner::default();
        assert!(scanner.push("event: pa").is_empty());
        assert!(scanner.push("tch\ndata: {}\n").is_empty());
        assert_eq!(scanner.push("\n"), vec![SseSignal::Changed]);
    }

    #[test]
    fn test_scanner_ignores_keep_alive() {
        let mut scanner = SseScanner::default();
        let signals = scanner.push("event: keep-alive\ndata: null\n\n");
        assert!(signals.is_empty());
    }

    #[test]
    fn test_scanner_reports_revocation() {
        let mut scanner = SseScanner::default();
        let signals = scanner.push("event: auth_revoked\ndata: token expired\n\n");
        assert_eq!(signals, vec![SseSignal::Revoked]);
    }

    #[test]
    fn test_push_response_decodes_assigned_name() {
        let push: PushResponse = serde_json::from_str(r#"{"name": "-Nabc123"}"#).unwrap();
        assert_eq!(push.name, "-Nabc123");
    }
}
