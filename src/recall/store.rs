//! # Vector Store
//!
//! Append-only list of float vectors with brute force cosine lookup.
//! Every query compares against every stored vector, O(n) per query.
//!
//! Vectors may have different dimensions. A query only considers stored
//! vectors of its own dimension.

/// Brute force vector store
#[derive(Debug, Clone, Default)]
pub struct VectorStore {
    /// Stored vectors, indexed by insertion order
    vectors: Vec<Vec<f32>>,
}

impl VectorStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` vectors
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vectors: Vec::with_capacity(capacity),
        }
    }

    /// Copy a vector into the store and return its index
    pub fn add(&mut self, data: &[f32]) -> usize {
        let index = self.vectors.len();
        self.vectors.push(data.to_vec());
        index
    }

    /// Get a stored vector
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[f32]> {
        self.vectors.get(index).map(Vec::as_slice)
    }

    /// Number of stored vectors
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Index of the most similar vector by cosine similarity
    #[must_use]
    pub fn find_nearest(&self, query: &[f32]) -> Option<usize> {
        self.find_nearest_scored(query).map(|(index, _)| index)
    }

    /// Index and cosine similarity of the most similar vector
    ///
    /// Returns `None` for an empty store, a zero query, or when no stored
    /// vector shares the query's dimension. Zero vectors are never matched.
    /// The earliest index wins a tie.
    #[must_use]
    pub fn find_nearest_scored(&self, query: &[f32]) -> Option<(usize, f32)> {
        let query_mag = magnitude(query);
        if query_mag == 0.0 {
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for (index, vector) in self.vectors.iter().enumerate() {
            if vector.len() != query.len() {
                continue;
            }
            let mag = magnitude(vector);
            if mag == 0.0 {
                continue;
            }

            let similarity = dot_product(vector, query) / (mag * query_mag);
            // NaN never compares greater, so it cannot become the best match
            if similarity > best.map_or(f32::MIN, |(_, s)| s) {
                best = Some((index, similarity));
            }
        }

        if let Some((index, similarity)) = best {
            log::trace!("Nearest vector {index} (cosine {similarity:.4}) of {}", self.len());
        }
        best
    }
}

/// Dot product over the common length of two slices
#[must_use]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn magnitude(v: &[f32]) -> f32 {
    dot_product(v, v).sqrt()
}
