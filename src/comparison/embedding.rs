//! Sentence embeddings.
//!
//! The comparison core only needs a deterministic text-to-vector function
//! whose outputs are L2-normalised, so cosine scores stay within [-1, 1].
//! `Embedder` is that seam; `HashingEmbedder` is the built-in provider.

/// Default number of dimensions for [`HashingEmbedder`].
pub const DEFAULT_DIMENSIONS: usize = 1024;

/// Turns text into fixed-dimension vectors.
///
/// Implementations must be deterministic (same text, same vector) and return
/// vectors of length [`Embedder::dimensions`].
pub trait Embedder: Send + Sync + std::fmt::Debug {
    fn dimensions(&self) -> usize;

    fn embed(&self, text: &str) -> Vec<f32>;

    fn embed_batch(&self, texts: &[String]) -> Vec<Vec<f32>> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Character n-gram feature hashing.
///
/// Lowercased text is wrapped in begin/end markers and every 2- and
/// 3-character window is hashed with 32-bit FNV-1a into a bucket. The low hash
/// bit picks the sign, so unrelated n-grams sharing a bucket tend to cancel
/// rather than pile up. Works for any script, including CJK text with no
/// word separators.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

const BEGIN_MARKER: char = '\u{0002}';
const END_MARKER: char = '\u{0003}';
// Single characters are left out: their counts mostly track letter frequency
// and push unrelated sentences of the same language towards each other.
const NGRAM_SIZES: [usize; 2] = [3, 2];

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl Embedder for HashingEmbedder {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        let text = text.trim();
        if text.is_empty() {
            return vector;
        }

        let mut chars: Vec<char> = Vec::with_capacity(text.len() + 2);
        chars.push(BEGIN_MARKER);
        chars.extend(text.chars().flat_map(char::to_lowercase));
        chars.push(END_MARKER);

        for n in NGRAM_SIZES {
            for window in chars.windows(n) {
                let hash = fnv1a(window);
                let bucket = hash as usize % self.dimensions;
                let sign = if (hash & 1) == 0 { 1.0 } else { -1.0 };
                vector[bucket] += sign;
            }
        }

        normalize(&mut vector);
        vector
    }
}

fn fnv1a(chars: &[char]) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for &c in chars {
        hash ^= c as u32;
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::matrix::cosine_similarity;

    fn norm(v: &[f32]) -> f32 {
        v.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    #[test]
    fn test_embed_is_normalized_and_sized() {
        let embedder = HashingEmbedder::new(64);
        let v = embedder.embed("The quick brown fox jumps over the lazy dog.");
        assert_eq!(v.len(), 64);
        assert!((norm(&v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_embed_is_deterministic() {
        let embedder = HashingEmbedder::default();
        assert_eq!(embedder.embed("same text"), embedder.embed("same text"));
    }

    #[test]
    fn test_embed_empty_is_zero_vector() {
        let embedder = HashingEmbedder::new(16);
        assert!(embedder.embed("   ").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_embed_ignores_case() {
        let embedder = HashingEmbedder::default();
        assert_eq!(embedder.embed("Hello World"), embedder.embed("hello world"));
    }

    #[test]
    fn test_identical_text_scores_one() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed("學生應該每天閱讀課外書籍。");
        let b = embedder.embed("學生應該每天閱讀課外書籍。");
        assert!((cosine_similarity(&a, &b).unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_similar_text_scores_higher_than_unrelated() {
        let embedder = HashingEmbedder::default();
        let base = embedder.embed("The committee approved the annual budget on Monday.");
        let close = embedder.embed("The committee approved the annual budget on Tuesday.");
        let far = embedder.embed("Penguins huddle together to survive winter storms.");

        let close_score = cosine_similarity(&base, &close).unwrap();
        let far_score = cosine_similarity(&base, &far).unwrap();
        assert!(close_score > 0.8);
        assert!(close_score > far_score);
    }

    #[test]
    fn test_embed_batch_preserves_order() {
        let embedder = HashingEmbedder::new(32);
        let texts = vec!["one".to_string(), "two".to_string()];
        let batch = embedder.embed_batch(&texts);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], embedder.embed("one"));
        assert_eq!(batch[1], embedder.embed("two"));
    }

    #[test]
    fn test_zero_dimensions_clamped() {
        assert_eq!(HashingEmbedder::new(0).dimensions(), 1);
    }
}
