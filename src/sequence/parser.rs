use super::{GeneRecord, ParsedGenes};

/// Split marker-delimited text into headers and committed records.
///
/// Lines before the first header are ignored. A header followed directly by
/// another header (or EOF) is kept in `headers` but gets no record.
pub fn parse_gene_text(content: &str, marker: char) -> ParsedGenes {
    let mut parsed = ParsedGenes::default();
    let mut current: Option<&str> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with(marker) {
            commit(&mut parsed, current, &mut buf);
            parsed.headers.push(line.to_string());
            current = Some(line);
        } else {
            buf.push_str(line);
        }
    }
    commit(&mut parsed, current, &mut buf);

    parsed
}

fn commit(parsed: &mut ParsedGenes, header: Option<&str>, buf: &mut String) {
    if let Some(id) = header {
        if !buf.is_empty() {
            parsed.records.push(GeneRecord {
                id: id.to_string(),
                sequence: std::mem::take(buf),
            });
        }
    }
    buf.clear();
}
