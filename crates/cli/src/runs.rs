//! Run tables: CSV files with integer columns `label,line,start,length`.
//!
//! Extra columns are ignored; column order does not matter. Rows are grouped
//! by label in ascending label order.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rlepoly::rle::Run;

pub const COLUMNS: [&str; 4] = ["label", "line", "start", "length"];

pub fn read_runs_csv(path: &Path) -> Result<BTreeMap<i64, Vec<Run>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select(COLUMNS.map(|c| col(c).cast(DataType::Int64)))
        .collect()
        .with_context(|| format!("reading columns {COLUMNS:?} from {}", path.display()))?;
    tracing::info!(rows = df.height(), "runs_csv_loaded");
    group_by_label(&df)
}

fn group_by_label(df: &DataFrame) -> Result<BTreeMap<i64, Vec<Run>>> {
    let label = df.column("label")?.i64()?;
    let line = df.column("line")?.i64()?;
    let start = df.column("start")?.i64()?;
    let length = df.column("length")?.i64()?;

    let mut objects: BTreeMap<i64, Vec<Run>> = BTreeMap::new();
    let rows = label.into_iter().zip(line).zip(start).zip(length);
    for (row, (((lb, l), s), n)) in rows.enumerate() {
        let (Some(lb), Some(l), Some(s), Some(n)) = (lb, l, s, n) else {
            bail!("row {row}: empty value in one of {COLUMNS:?}");
        };
        objects.entry(lb).or_default().push(Run::new(l, s, n));
    }
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn groups_rows_by_label() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        fs::write(
            &path,
            "line,start,length,label,note\n0,2,3,7,a\n0,0,1,3,b\n1,1,2,7,c\n",
        )
        .unwrap();
        let objects = read_runs_csv(&path).unwrap();
        assert_eq!(objects.keys().copied().collect::<Vec<_>>(), vec![3, 7]);
        assert_eq!(objects[&3], vec![Run::new(0, 0, 1)]);
        assert_eq!(objects[&7], vec![Run::new(0, 2, 3), Run::new(1, 1, 2)]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        fs::write(&path, "label,line,start\n1,0,0\n").unwrap();
        assert!(read_runs_csv(&path).is_err());
    }

    #[test]
    fn empty_cell_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs.csv");
        fs::write(&path, "label,line,start,length\n1,0,0,2\n1,,0,2\n").unwrap();
        let err = read_runs_csv(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
