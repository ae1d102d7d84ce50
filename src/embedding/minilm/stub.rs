use crate::embedding::utils::l2_normalize;

/// Deterministic hashed bag-of-words embedding.
///
/// Each lowercased alphanumeric token is hashed into one of `dim` buckets with a ±1 sign, then
/// the vector is normalized. Identical texts map to identical vectors, texts sharing words
/// score higher than unrelated ones, and text without tokens maps to the zero vector.
pub(crate) fn hashed_bag_of_words(text: &str, dim: usize) -> Vec<f32> {
    let mut embedding = vec![0.0f32; dim];
    if dim == 0 {
        return embedding;
    }

    for token in tokens(text) {
        let hash = blake3::hash(token.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[..8]);
        let bucket = (u64::from_le_bytes(prefix) % dim as u64) as usize;
        let sign = if hash.as_bytes()[8] & 1 == 0 { 1.0 } else { -1.0 };
        embedding[bucket] += sign;
    }

    l2_normalize(&mut embedding);
    embedding
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}
