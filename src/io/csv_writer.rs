use std::path::Path;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

use crate::scores::{RankedMap, ScaledMap};
use crate::sequence::strip_marker;

pub const RANK_HEADER: [&str; 2] = ["name", "rank"];
pub const SCALED_HEADER: [&str; 2] = ["name", "scale_unit"];

pub fn write_rank_csv(path: &Path, ranked: &RankedMap) -> Result<()> {
    write_pairs(path, RANK_HEADER, ranked.iter().map(|(id, r)| (id, r.to_string())))
}

pub fn write_scaled_csv(path: &Path, scaled: &ScaledMap) -> Result<()> {
    write_pairs(path, SCALED_HEADER, scaled.iter().map(|(id, v)| (id, v.to_string())))
}

/// Read `rank.csv` back into a name -> rank map in file order.
pub fn read_rank_csv(path: &Path) -> Result<IndexMap<String, u32>> {
    read_pairs(path, RANK_HEADER)
}

/// Read `scaled.csv` back into a name -> scaled value map in file order.
pub fn read_scaled_csv(path: &Path) -> Result<IndexMap<String, f64>> {
    read_pairs(path, SCALED_HEADER)
}

fn write_pairs<'a, I>(path: &Path, header: [&str; 2], rows: I) -> Result<()>
where
    I: Iterator<Item = (&'a String, String)>,
{
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    w.write_record(header)?;
    for (id, value) in rows {
        w.write_record([strip_marker(id), value.as_str()])?;
    }
    w.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

fn read_pairs<T>(path: &Path, header: [&str; 2]) -> Result<IndexMap<String, T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let got: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if got != header {
        bail!(
            "{}: expected header {:?}, found {:?}",
            path.display(),
            header,
            got
        );
    }

    let mut out = IndexMap::new();
    for (idx, result) in reader.records().enumerate() {
        let line_no = idx + 2;
        let record = result.with_context(|| format!("{}:{}", path.display(), line_no))?;
        let name = record.get(0).unwrap_or("").to_string();
        let raw = record.get(1).unwrap_or("");
        let value = raw
            .parse::<T>()
            .with_context(|| format!("{}:{} bad value '{}'", path.display(), line_no, raw))?;
        out.insert(name, value);
    }
    Ok(out)
}
