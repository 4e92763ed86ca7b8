use crate::server::AppState;
use memora_core::catalog::{MemoryRecord, StaticCatalog};
use memora_core::config::{AnalyticsConfig, GenerationMode};
use std::sync::Arc;

/// Create a test AppState backed by the sample catalog
pub fn create_test_state() -> AppState {
    AppState::default()
}

/// Create a test AppState whose synthetic views are reproducible
pub fn create_seeded_test_state() -> AppState {
    AppState::new(
        Arc::new(StaticCatalog::sample()),
        AnalyticsConfig {
            generation_mode: GenerationMode::Seeded,
            ..Default::default()
        },
    )
}

/// Create a test AppState over the given records
pub fn create_test_state_with_records(records: Vec<MemoryRecord>) -> AppState {
    let catalog = StaticCatalog::new(records).expect("test records form a valid catalog");
    AppState::new(Arc::new(catalog), AnalyticsConfig::default())
}

/// Build a memory record for tests
pub fn test_memory(
    id: &str,
    fingerprint: &[f64],
    brain_region: &str,
    memory_type: &str,
) -> MemoryRecord {
    MemoryRecord {
        id: id.to_string(),
        name: format!("Test memory {}", id),
        memory_type: memory_type.to_string(),
        neural_fingerprint: fingerprint.to_vec(),
        brain_region: brain_region.to_string(),
        quality_score: 80,
        image: format!("/images/memories/{}.jpg", id),
        price: Some(0.1),
        is_listed: Some(true),
    }
}
