
use tracing::debug;

use crate::QaError;

/// In-memory exhaustive nearest-neighbor index over fixed-dimension vectors.
///
/// Search compares the query against every stored vector by squared
/// Euclidean distance; identifiers are insertion positions. The index lives
/// only for the current session and is rebuilt wholesale for each new
/// document.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

/// A single search hit: the stored vector's insertion position and its
/// squared L2 distance from the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: usize,
    pub distance: f32,
}

impl FlatIndex {
    #[inline]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append a vector; its identifier is its insertion position.
    #[inline]
    pub fn add(&mut self, vector: Vec<f32>) -> Result<(), QaError> {
        if vector.len() != self.dimension {
            return Err(QaError::Index(format!(
                "Vector dimension {} does not match index dimension {}",
                vector.len(),
                self.dimension
            )));
        }
        self.vectors.push(vector);
        Ok(())
    }

    /// Return the `k` nearest stored vectors, nearest first.
    ///
    /// Fewer than `k` hits are returned when the index holds fewer vectors.
    #[inline]
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>, QaError> {
        if query.len() != self.dimension {
            return Err(QaError::Index(format!(
                "Query dimension {} does not match index dimension {}",
                query.len(),
                self.dimension
            )));
        }

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| SearchHit {
                id,
                distance: squared_l2(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(k);

        debug!(
            "Searched {} vectors, returning {} hits",
            self.vectors.len(),
            hits.len()
        );

        Ok(hits)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}
