use super::{RankedMap, ScaledMap};

/// Order genes by descending scaled score and drop zero scores.
/// Equal scores keep their input order.
pub fn sort_and_prune(scaled: &ScaledMap) -> ScaledMap {
    let mut entries: Vec<(&String, f64)> = scaled
        .iter()
        .filter(|(_, v)| **v != 0.0)
        .map(|(k, v)| (k, *v))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.into_iter().map(|(k, v)| (k.clone(), v)).collect()
}

/// Dense ranks over a non-increasing score sequence: a new rank group
/// starts whenever the score decreases.
pub fn dense_ranks(scores: &[f64]) -> Vec<u32> {
    scores
        .iter()
        .scan(None::<(f64, u32)>, |prev, &score| {
            let rank = match *prev {
                None => 1,
                Some((last, rank)) if score < last => rank + 1,
                Some((_, rank)) => rank,
            };
            *prev = Some((score, rank));
            Some(rank)
        })
        .collect()
}

pub fn rank_genes(sorted: &ScaledMap) -> RankedMap {
    let scores: Vec<f64> = sorted.values().copied().collect();
    sorted
        .keys()
        .cloned()
        .zip(dense_ranks(&scores))
        .collect()
}
