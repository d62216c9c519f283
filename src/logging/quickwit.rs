use crate::logging::consts::{QUICKWIT_FLUSH_INTERVAL_SECS, QUICKWIT_LOGGING_CHANNEL_CAPACITY};
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing_core::{Event, Subscriber};
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

/// Configures which events get shipped: an event is sent to the index mapped to the value of its
/// marker field, and dropped if the marker is absent or unmapped.
pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::from("task"),
            marker_to_index: HashMap::new(),
            batch_size: 100,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, marker_value: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker_value.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        let shipper = IngestShipper {
            http_client: Client::new(),
            quickwit_url: self.quickwit_url,
            batch_size: self.batch_size,
            buffers: HashMap::new(),
        };
        tokio::spawn(shipper.run(receiver));
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<IndexedLog>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        let mut visitor = JsonFieldsVisitor::default();
        event.record(&mut visitor);
        let index_id = match visitor.fields.get(&self.marker_field) {
            Some(Value::String(marker)) => self.marker_to_index.get(marker),
            _ => None,
        };
        if let Some(index_id) = index_id {
            // Shipping is best effort: a full channel drops the log instead of blocking a request.
            let _ = self.sender.try_send(IndexedLog {
                index_id: index_id.clone(),
                log: visitor.fields,
            });
        }
    }
}

#[derive(Debug)]
struct IndexedLog {
    index_id: String,
    log: Map<String, Value>,
}

/// Buffers logs per index and posts them as NDJSON once a batch fills up or the flush interval
/// elapses.
struct IngestShipper {
    http_client: Client,
    quickwit_url: Url,
    batch_size: usize,
    buffers: HashMap<String, Vec<Map<String, Value>>>,
}

impl IngestShipper {
    async fn run(mut self, mut receiver: mpsc::Receiver<IndexedLog>) {
        let mut flush_interval =
            tokio::time::interval(Duration::from_secs(QUICKWIT_FLUSH_INTERVAL_SECS));
        loop {
            tokio::select! {
                maybe_log = receiver.recv() => match maybe_log {
                    Some(IndexedLog { index_id, log }) => {
                        let buffer = self.buffers.entry(index_id.clone()).or_default();
                        buffer.push(log);
                        if buffer.len() >= self.batch_size {
                            self.flush(&index_id).await;
                        }
                    }
                    None => break,
                },
                _ = flush_interval.tick() => self.flush_all().await,
            }
        }
        self.flush_all().await;
    }

    async fn flush_all(&mut self) {
        let index_ids = self.buffers.keys().cloned().collect::<Vec<_>>();
        for index_id in index_ids {
            self.flush(&index_id).await;
        }
    }

    async fn flush(&mut self, index_id: &str) {
        let Some(buffer) = self.buffers.get_mut(index_id) else {
            return;
        };
        if buffer.is_empty() {
            return;
        }
        let logs = std::mem::take(buffer);
        let mut ndjson_body = Vec::new();
        for log in &logs {
            if let Err(err) = write_ndjson_line(&mut ndjson_body, log) {
                eprintln!("[quickwit]: failed to serialize a log line: {err}");
            }
        }
        let ingest_url = match self.quickwit_url.join(&format!("api/v1/{index_id}/ingest")) {
            Ok(url) => url,
            Err(err) => {
                eprintln!("[quickwit]: invalid ingest URL for index `{index_id}`: {err}");
                return;
            }
        };
        // Failures are reported on stderr: logging them through `tracing` would feed back into
        // this layer.
        match self.http_client.post(ingest_url).body(ndjson_body).send().await {
            Ok(response) if !response.status().is_success() => eprintln!(
                "[quickwit]: ingesting {} logs into `{index_id}` failed with {}",
                logs.len(),
                response.status(),
            ),
            Ok(_) => {}
            Err(err) => eprintln!("[quickwit]: failed to reach Quickwit: {err}"),
        }
    }
}

#[derive(Default)]
struct JsonFieldsVisitor {
    fields: Map<String, Value>,
}

impl Visit for JsonFieldsVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}

fn write_ndjson_line<W, V>(mut writer: W, value: &V) -> io::Result<()>
where
    W: io::Write,
    V: ?Sized + serde::Serialize,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")
}
