use crate::sequence::GeneRecord;

use super::CountMap;

/// Contribution of one peptide to a sequence's count.
///
/// Absent contributes 0, a single hit contributes 1, and `k > 1`
/// non-overlapping hits contribute `k`.
pub fn peptide_hits(peptide: &str, sequence: &str) -> u64 {
    if !sequence.contains(peptide) {
        return 0;
    }
    let n = sequence.matches(peptide).count() as u64;
    if n > 1 { n } else { 1 }
}

pub fn count_occurrences<S: AsRef<str>>(peptides: &[S], sequence: &str) -> u64 {
    peptides
        .iter()
        .map(|pep| peptide_hits(pep.as_ref(), sequence))
        .sum()
}

/// One entry per record keyed by header. A repeated header keeps its first
/// position and takes the later record's count.
pub fn count_map<S: AsRef<str>>(peptides: &[S], records: &[GeneRecord]) -> CountMap {
    let mut counts = CountMap::with_capacity(records.len());
    for rec in records {
        counts.insert(rec.id.clone(), count_occurrences(peptides, &rec.sequence));
    }
    counts
}
