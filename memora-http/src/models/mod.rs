pub mod query;

// Re-export all models for easier imports
pub use query::*;

pub use memora_core::catalog::MemoryRecord;
pub use memora_core::similarity::{SimilarMemories, SimilarMemory};
pub use memora_core::validator::{
    CategoryCount, EarningsPoint, StakePoint, ValidationPoint, ValidatorStats,
};
pub use memora_core::value_history::ValueHistory;
