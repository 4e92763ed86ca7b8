//! Read-only memory catalog.
//!
//! Handlers never reach for a global list of memories. They receive a
//! [`MemoryCatalog`] through server state, which makes the records
//! replaceable (a JSON file, a test fixture) without touching the
//! derivation code.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::{collections::HashSet, fs::File, io::BufReader, path::Path};
use tracing::debug;
use utoipa::ToSchema;

use crate::{Error, InternalResult};

/// A memory listed as a tradable asset
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MemoryRecord {
    pub id: String,

    pub name: String,

    pub memory_type: String,

    /// Feature vector compared with cosine similarity
    pub neural_fingerprint: Vec<f64>,

    pub brain_region: String,

    pub quality_score: u32,

    /// Image reference shown by the front-end
    pub image: String,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub is_listed: Option<bool>,
}

/// Lookup interface over the memory records, in catalog order.
pub trait MemoryCatalog: Send + Sync {
    fn records(&self) -> &[MemoryRecord];

    fn find(&self, id: &str) -> Option<&MemoryRecord> {
        self.records().iter().find(|record| record.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<MemoryRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<MemoryRecord>) -> InternalResult<Self> {
        if records.is_empty() {
            return Err(Error::Catalog("catalog contains no records".to_string()));
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate memory id: {}", record.id)));
            }
        }

        Ok(Self { records })
    }

    /// Load a catalog from a JSON array of memory records
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Catalog(format!("Failed to open catalog file: {}", e)))?;
        let records: Vec<MemoryRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Catalog(format!("Failed to parse catalog file: {}", e)))?;
        debug!("Loaded {} memories from {}", records.len(), path.display());
        Self::new(records)
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        Self {
            records: sample_records(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl MemoryCatalog for StaticCatalog {
    fn records(&self) -> &[MemoryRecord] {
        &self.records
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    memory_type: &str,
    neural_fingerprint: [f64; 5],
    brain_region: &str,
    quality_score: u32,
    price: Option<f64>,
    is_listed: Option<bool>,
) -> MemoryRecord {
    MemoryRecord {
        id: id.to_string(),
        name: name.to_string(),
        memory_type: memory_type.to_string(),
        neural_fingerprint: neural_fingerprint.to_vec(),
        brain_region: brain_region.to_string(),
        quality_score,
        image: format!("/images/memories/{}.jpg", id),
        price,
        is_listed,
    }
}

fn sample_records() -> Vec<MemoryRecord> {
    vec![
        record(
            "mem_001",
            "First Day at the Ocean",
            "Visual",
            [0.82, 0.45, 0.91, 0.33, 0.67],
            "Occipital Lobe",
            92,
            Some(0.45),
            Some(true),
        ),
        record(
            "mem_002",
            "Graduation Ceremony",
            "Emotional",
            [0.76, 0.88, 0.42, 0.59, 0.71],
            "Amygdala",
            87,
            Some(0.32),
            Some(true),
        ),
        record(
            "mem_003",
            "Learning to Ride a Bike",
            "Procedural",
            [0.35, 0.62, 0.78, 0.91, 0.44],
            "Cerebellum",
            78,
            None,
            Some(false),
        ),
        record(
            "mem_004",
            "Sunset Over the Mountains",
            "Visual",
            [0.79, 0.41, 0.88, 0.37, 0.63],
            "Occipital Lobe",
            95,
            Some(0.58),
            Some(true),
        ),
        record(
            "mem_005",
            "Grandmother's Kitchen",
            "Emotional",
            [0.71, 0.84, 0.39, 0.52, 0.77],
            "Hippocampus",
            89,
            Some(0.41),
            Some(true),
        ),
        record(
            "mem_006",
            "Periodic Table Mastery",
            "Semantic",
            [0.28, 0.55, 0.47, 0.83, 0.92],
            "Temporal Lobe",
            74,
            None,
            None,
        ),
        record(
            "mem_007",
            "Northern Lights",
            "Visual",
            [0.88, 0.39, 0.85, 0.29, 0.72],
            "Occipital Lobe",
            97,
            Some(0.75),
            Some(true),
        ),
    ]
}
