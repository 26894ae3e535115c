//! E-number additive catalogue
//!
//! Loaded from a CSV export of `id,e_code,title,...` rows. The file is parsed
//! by plain comma splitting: titles containing commas are cut at the first one.

use std::collections::HashMap;
use std::path::Path;

/// Map from E-number (`E322`) to additive title (`Lecithins`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditiveCatalog {
    entries: HashMap<String, String>,
}

impl AdditiveCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse catalogue rows, skipping anything that is not an E-number entry
    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() < 3 {
                continue;
            }
            let code = parts[1].trim().to_uppercase();
            let title = parts[2].trim();
            if code.starts_with('E') && !title.is_empty() && title != "title" {
                let title = title.trim_matches('"').trim_matches('\'');
                entries.insert(code, title.to_string());
            }
        }
        Self { entries }
    }

    /// Load the catalogue from `path`
    ///
    /// A missing or unreadable file is logged and yields an empty catalogue;
    /// additives are then shown by code only.
    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let catalog = Self::parse(&String::from_utf8_lossy(&bytes));
                log::info!(
                    "Loaded {} additives from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                log::error!("Error loading {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn title(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Display text for an additive code such as `e322` or `E101a`
    ///
    /// The uppercased code is tried first, then the code as given.
    pub fn describe(&self, code: &str) -> String {
        let upper = code.to_uppercase();
        match self.title(&upper).or_else(|| self.title(code)) {
            Some(title) => format!("{} - {}", upper, title),
            None => upper,
        }
    }
}
