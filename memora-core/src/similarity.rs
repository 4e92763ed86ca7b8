//! Similarity ranking over the memory catalog.
//!
//! The composite score is
//! `0.6 * cosine(fingerprints) + 0.2 * same_region + 0.2 * same_type`.
//! Nothing clamps it: a negative cosine pulls the score below zero, and the
//! categorical bonuses are added on top regardless.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::catalog::{MemoryCatalog, MemoryRecord};
use crate::generator::round_to;
use crate::{Error, InternalResult};

const FINGERPRINT_WEIGHT: f64 = 0.6;
const BRAIN_REGION_WEIGHT: f64 = 0.2;
const MEMORY_TYPE_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SimilarMemory {
    #[serde(flatten)]
    pub memory: MemoryRecord,

    /// Composite score rounded to two decimals
    pub similarity_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SimilarMemories {
    pub source_memory_id: String,

    /// Best match first
    pub similar_memories: Vec<SimilarMemory>,
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 instead of failing when the lengths differ or either vector
/// has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

pub fn composite_score(source: &MemoryRecord, other: &MemoryRecord) -> f64 {
    let fingerprint = cosine_similarity(&source.neural_fingerprint, &other.neural_fingerprint);
    let same_region = if source.brain_region == other.brain_region {
        1.0
    } else {
        0.0
    };
    let same_type = if source.memory_type == other.memory_type {
        1.0
    } else {
        0.0
    };

    FINGERPRINT_WEIGHT * fingerprint
        + BRAIN_REGION_WEIGHT * same_region
        + MEMORY_TYPE_WEIGHT * same_type
}

/// Unrounded scores of every other record against `source`, in catalog order
pub fn score_all<'a>(
    catalog: &'a dyn MemoryCatalog,
    source: &MemoryRecord,
) -> Vec<(&'a MemoryRecord, f64)> {
    catalog
        .records()
        .iter()
        .filter(|record| record.id != source.id)
        .map(|record| (record, composite_score(source, record)))
        .collect()
}

/// The `limit` records most similar to `id`, excluding the record itself.
///
/// Equal scores keep catalog order.
pub fn find_similar(
    catalog: &dyn MemoryCatalog,
    id: &str,
    limit: usize,
) -> InternalResult<SimilarMemories> {
    let source = catalog
        .find(id)
        .ok_or_else(|| Error::MemoryNotFound(id.to_string()))?;

    let mut scored = score_all(catalog, source);
    // stable sort
    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    let similar_memories: Vec<SimilarMemory> = scored
        .into_iter()
        .take(limit)
        .map(|(record, score)| SimilarMemory {
            memory: record.clone(),
            similarity_score: round_to(score, 2),
        })
        .collect();

    debug!(
        "Ranked {} similar memories for {}",
        similar_memories.len(),
        id
    );

    Ok(SimilarMemories {
        source_memory_id: id.to_string(),
        similar_memories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use pretty_assertions::assert_eq;

    fn memory(id: &str, fingerprint: &[f64], region: &str, memory_type: &str) -> MemoryRecord {
        MemoryRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            memory_type: memory_type.to_string(),
            neural_fingerprint: fingerprint.to_vec(),
            brain_region: region.to_string(),
            quality_score: 50,
            image: String::new(),
            price: None,
            is_listed: None,
        }
    }

    #[test]
    fn test_cosine_similarity() {
        let a = [1.0, 2.0, 3.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[3.0, 4.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_composite_score_can_go_negative() {
        let a = memory("a", &[1.0, 0.0], "Amygdala", "Emotional");
        let b = memory("b", &[-1.0, 0.0], "Cerebellum", "Procedural");
        assert!((composite_score(&a, &b) + 0.6).abs() < 1e-12);

        // bonuses are not normalised against the cosine term
        let c = memory("c", &[-1.0, 0.0], "Amygdala", "Emotional");
        assert!((composite_score(&a, &c) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_excludes_self_and_respects_limit() {
        let catalog = StaticCatalog::sample();
        for limit in [1, 3, 5, 6, 10] {
            let result = find_similar(&catalog, "mem_001", limit).unwrap();
            assert_eq!(result.source_memory_id, "mem_001");
            assert_eq!(result.similar_memories.len(), limit.min(6));
            assert!(result.similar_memories.iter().all(|m| m.memory.id != "mem_001"));
        }
    }

    #[test]
    fn test_ranking_order() {
        let catalog = StaticCatalog::sample();
        let result = find_similar(&catalog, "mem_001", 6).unwrap();
        let scores: Vec<f64> = result
            .similar_memories
            .iter()
            .map(|m| m.similarity_score)
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        // the other visual memories in the occipital lobe lead the ranking
        let top: Vec<&str> = result.similar_memories[..2]
            .iter()
            .map(|m| m.memory.id.as_str())
            .collect();
        assert!(top.contains(&"mem_004"));
        assert!(top.contains(&"mem_007"));
    }

    #[test]
    fn test_scores_rounded_to_two_decimals() {
        let catalog = StaticCatalog::sample();
        let result = find_similar(&catalog, "mem_003", 6).unwrap();
        for m in &result.similar_memories {
            let scaled = m.similarity_score * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = StaticCatalog::new(vec![
            memory("src", &[1.0, 0.0], "Amygdala", "Emotional"),
            memory("x", &[0.0, 1.0], "Cerebellum", "Visual"),
            memory("y", &[0.0, 2.0], "Cerebellum", "Visual"),
            memory("z", &[1.0, 0.0], "Cerebellum", "Visual"),
            memory("w", &[0.0, 3.0], "Cerebellum", "Visual"),
        ])
        .unwrap();

        let result = find_similar(&catalog, "src", 4).unwrap();
        let ids: Vec<&str> = result
            .similar_memories
            .iter()
            .map(|m| m.memory.id.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "x", "y", "w"]);
    }

    #[test]
    fn test_unknown_memory() {
        let catalog = StaticCatalog::sample();
        assert_eq!(
            find_similar(&catalog, "mem_999", 5).unwrap_err(),
            Error::MemoryNotFound("mem_999".to_string())
        );
    }

    #[test]
    fn test_score_all_covers_every_other_record() {
        let catalog = StaticCatalog::sample();
        let source = catalog.find("mem_002").unwrap();
        let scores = score_all(&catalog, source);
        assert_eq!(scores.len(), 6);
        assert_eq!(scores[0].0.id, "mem_001");
    }
}
