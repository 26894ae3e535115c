//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use nutriscan::lookup::api::{LookupError, LookupResult, ProductLookup, ProductRecord, VegStatus};
use nutriscan::scanner::api::{
    DeviceId, LineScanSource, ScanOptions, ScanSignal, ScanSource, ScanSourceResult,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedSender;

pub const TEST_BAR_CODE: &str = "1234567890123";
pub const UNKNOWN_CODE: &str = "0000000000000";

pub fn test_bar() -> ProductRecord {
    ProductRecord {
        name: "Test Bar".to_string(),
        categories: vec!["Snacks".to_string()],
        image_url: None,
        veg_status: VegStatus::Vegetarian,
        nutriscore: Some("b".to_string()),
        allergens: vec![],
        additives: vec!["E150".to_string()],
    }
}

pub fn test_bar_json() -> String {
    serde_json::json!({
        "name": "Test Bar",
        "categories": ["Snacks"],
        "image_url": null,
        "veg_status": "Vegetarian",
        "nutriscore": "b",
        "allergens": [],
        "additives": ["E150"]
    })
    .to_string()
}

/// Minimal product service: `/api/scan/{code}` answers from `products`, anything else is 404
///
/// Returns the base URL and a counter of requests served.
pub async fn start_product_service(products: Vec<(&str, String)>) -> (String, Arc<AtomicUsize>) {
    let products: Arc<HashMap<String, String>> = Arc::new(
        products
            .into_iter()
            .map(|(code, body)| (format!("/api/scan/{}", code), body))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let served = Arc::clone(&hits);
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let products = Arc::clone(&products);
            let served = Arc::clone(&served);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }
                served.fetch_add(1, Ordering::SeqCst);
                let request = String::from_utf8_lossy(&request);
                let path = request.split_whitespace().nth(1).unwrap_or_default();
                let (status, body) = match products.get(path) {
                    Some(body) => ("200 OK", body.clone()),
                    None => ("404 Not Found", r#"{"detail":"Product not found"}"#.to_string()),
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    (format!("http://{}", addr), hits)
}

/// A line scan source fed from memory that counts pause and resume calls
pub struct CountingSource {
    inner: LineScanSource,
    reader: std::sync::Mutex<Option<DuplexStream>>,
    pauses: AtomicUsize,
    resumes: AtomicUsize,
}

impl CountingSource {
    /// Returns the source and the writer end that feeds it
    pub fn new() -> (Arc<Self>, DuplexStream) {
        let (writer, reader) = tokio::io::duplex(1024);
        let source = Arc::new(Self {
            inner: LineScanSource::new(vec![]),
            reader: std::sync::Mutex::new(Some(reader)),
            pauses: AtomicUsize::new(0),
            resumes: AtomicUsize::new(0),
        });
        (source, writer)
    }

    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }

    pub fn resumes(&self) -> usize {
        self.resumes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScanSource for CountingSource {
    async fn enumerate_devices(&self) -> ScanSourceResult<Vec<DeviceId>> {
        Ok(vec![DeviceId::new("memory")])
    }

    async fn start(
        &self,
        device: &DeviceId,
        options: ScanOptions,
        signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<()> {
        let reader = self
            .reader
            .lock()
            .unwrap()
            .take()
            .expect("source started twice");
        self.inner.start_reader(device, reader, options, signals)
    }

    fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
        self.inner.pause();
    }

    fn resume(&self) -> ScanSourceResult<()> {
        self.resumes.fetch_add(1, Ordering::SeqCst);
        self.inner.resume()
    }
}

/// Lookup backend with per-code answers and delays
#[derive(Default)]
pub struct ScriptedLookup {
    answers: HashMap<String, (Duration, LookupResult<ProductRecord>)>,
}

impl ScriptedLookup {
    pub fn answer(mut self, code: &str, delay_ms: u64, result: LookupResult<ProductRecord>) -> Self {
        self.answers
            .insert(code.to_string(), (Duration::from_millis(delay_ms), result));
        self
    }
}

#[async_trait]
impl ProductLookup for ScriptedLookup {
    async fn lookup(&self, code: &str) -> LookupResult<ProductRecord> {
        match self.answers.get(code) {
            Some((delay, result)) => {
                tokio::time::sleep(*delay).await;
                result.clone()
            }
            None => Err(LookupError::NotFound),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn unthrottled() -> ScanOptions {
    ScanOptions {
        fps: 0,
        ..ScanOptions::default()
    }
}
