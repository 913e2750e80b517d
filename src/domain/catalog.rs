//! Document catalog
//!
//! Enumerates the reference documents available under a sector and resolves
//! a human-readable description for each. Description resolution order:
//! exact hit in the pre-loaded cache, then the first matching keyword rule
//! over the extension-stripped lowercased name, then a generic fallback.
//! The rules are an explicit ordered list so more specific rules can shadow
//! generic ones.

use crate::domain::models::{ReferenceDocument, Sector};
use crate::ports::documents::DocumentStorePort;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Ordered (keywords, description) rules; the first matching rule wins
const DESCRIPTION_RULES: &[(&[&str], &str)] = &[
    (
        &["استراتيجي", "خارطة"],
        "هذا الملف يشرح خطوات عملية لوضع خطة نمو واضحة للمتجر وتحسين النتائج بشكل مستمر.",
    ),
    (
        &["ugc", "المحتوى الذي يولده المستخدم"],
        "ملف يوضح كيفية استخدام محتوى العملاء لبناء الثقة وزيادة التحويلات بتكلفة منخفضة.",
    ),
    (
        &["تسويق"],
        "دليل تسويقي يحتوي أفكار وتكتيكات جاهزة للتطبيق في السوق السعودي.",
    ),
    (
        &["إعلان", "حملات"],
        "شرح مفصل لآليات حملات الإعلانات وأفضل طرق إدارة الميزانية.",
    ),
    (
        &["علامة", "هوية"],
        "دليل مختصر حول كيفية بناء هوية تجارية قوية ومتناسقة.",
    ),
];

/// Fallback when neither the cache nor any rule matches
const DEFAULT_DESCRIPTION: &str = "ملف ذو صلة بموضوع الاجتماع ويساعدك في فهم الخطوات بشكل أوضح.";

/// Catalog of reference documents backed by a document store
///
/// The description cache is loaded once at construction and read-only
/// afterwards, so a catalog can serve concurrent pipelines without locking.
pub struct DocumentCatalog {
    store: Arc<dyn DocumentStorePort>,
    descriptions: HashMap<String, String>,
}

impl DocumentCatalog {
    /// Creates a catalog over a document store with a pre-loaded description cache
    pub fn new(store: Arc<dyn DocumentStorePort>, descriptions: HashMap<String, String>) -> Self {
        Self {
            store,
            descriptions,
        }
    }

    /// Load a description cache from a JSON file mapping name → description
    ///
    /// A missing or malformed cache degrades to an empty map; descriptions
    /// then come from the keyword rules.
    pub fn load_cache(path: &Path) -> HashMap<String, String> {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!(
                        "Ignoring malformed description cache {}: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(_) => {
                log::warn!(
                    "No description cache at {}, falling back to keyword descriptions",
                    path.display()
                );
                HashMap::new()
            }
        }
    }

    /// List all documents under a sector, each with a resolved description
    ///
    /// Sectors with no backing storage yield an empty list; a store failure
    /// is logged and likewise degrades to empty rather than aborting the
    /// pipeline.
    pub fn list(&self, sector: Sector) -> Vec<ReferenceDocument> {
        match self.store.list(sector) {
            Ok(names) => names
                .into_iter()
                .map(|name| {
                    let description = self.describe(&name);
                    ReferenceDocument::new(name, sector, description)
                })
                .collect(),
            Err(e) => {
                log::warn!("Failed to list documents for sector {}: {}", sector, e);
                Vec::new()
            }
        }
    }

    /// Resolve the description for a document name
    pub fn describe(&self, name: &str) -> String {
        if let Some(description) = self.descriptions.get(name) {
            return description.clone();
        }

        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_lowercase();

        for (keywords, description) in DESCRIPTION_RULES {
            if keywords.iter().any(|keyword| stem.contains(keyword)) {
                return (*description).to_string();
            }
        }

        DEFAULT_DESCRIPTION.to_string()
    }
}
