use indexmap::IndexMap;

pub mod filter;
pub mod occurrence;
pub mod rank;
pub mod scale;

pub use filter::{HighScoring, high_scoring_peptides, qualifying_scores};
pub use occurrence::{count_map, count_occurrences, peptide_hits};
pub use rank::{dense_ranks, rank_genes, sort_and_prune};
pub use scale::{ScaleOutcome, scale_counts};

/// Gene id -> peptide occurrence count, in gene file order.
pub type CountMap = IndexMap<String, u64>;

/// Gene id -> high-scoring count per unit sequence length.
pub type ScaledMap = IndexMap<String, f64>;

/// Gene id -> dense rank, in descending scaled order.
pub type RankedMap = IndexMap<String, u32>;
