//! Test modules for scan control


use crate::lookup::api::{LookupError, LookupResult, ProductLookup, ProductRecord, VegStatus};
use crate::scanner::api::{DeviceId, ScanOptions, ScanSignal, ScanSource, ScanSourceError, ScanSourceResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

/// Scan source that records calls instead of reading a device
#[derive(Default)]
pub(super) struct RecordingSource {
    pub devices: Vec<DeviceId>,
    pub start_error: Option<fn() -> ScanSourceError>,
    pub pauses: AtomicUsize,
    pub resumes: AtomicUsize,
    pub started_on: Mutex<Option<DeviceId>>,
}

impl RecordingSource {
    pub fn with_device(name: &str) -> Self {
        Self {
            devices: vec![DeviceId::new(name)],
            ..Self::default()
        }
    }

    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }

    pub fn resumes(&self) -> usize {
        self.resumes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScanSource for RecordingSource {
    async fn enumerate_devices(&self) -> ScanSourceResult<Vec<DeviceId>> {
        Ok(self.devices.clone())
    }

    async fn start(
        &self,
        device: &DeviceId,
        _options: ScanOptions,
        _signals: UnboundedSender<ScanSignal>,
    ) -> ScanSourceResult<()> {
        if let Some(make_error) = self.start_error {
            return Err(make_error());
        }
        *self.started_on.lock().unwrap() = Some(device.clone());
        Ok(())
    }

    fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }

    fn resume(&self) -> ScanSourceResult<()> {
        self.resumes.fetch_add(1, Ordering::SeqCst);
        Err(ScanSourceError::NotPausable {
            state: "running".to_string(),
        })
    }
}

/// Lookup backend answering from a fixed table; unknown codes are not found
#[derive(Default)]
pub(super) struct TableLookup {
    pub products: HashMap<String, ProductRecord>,
    pub panic_on: Option<String>,
}

impl TableLookup {
    pub fn with(code: &str, record: ProductRecord) -> Self {
        let mut products = HashMap::new();
        products.insert(code.to_string(), record);
        Self {
            products,
            panic_on: None,
        }
    }
}

#[async_trait]
impl ProductLookup for TableLookup {
    async fn lookup(&self, code: &str) -> LookupResult<ProductRecord> {
        if self.panic_on.as_deref() == Some(code) {
            panic!("backend exploded");
        }
        self.products.get(code).cloned().ok_or(LookupError::NotFound)
    }

    fn name(&self) -> &str {
        "table"
    }
}

pub(super) fn test_bar() -> ProductRecord {
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
