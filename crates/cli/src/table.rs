//! Tabular outputs: length trajectories and sweep rows.
//!
//! Format follows the file extension: `.parquet` writes Parquet, anything else
//! writes CSV.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use treeflip::trial::TrialOutcome;

use crate::provenance::ensure_parent;

/// One row per observation: moves applied so far and the total length.
pub fn trajectory_frame(series: &[(u64, f64)]) -> PolarsResult<DataFrame> {
    let moves: Vec<u64> = series.iter().map(|&(m, _)| m).collect();
    let lengths: Vec<f64> = series.iter().map(|&(_, l)| l).collect();
    df!("moves" => moves, "total_length" => lengths)
}

/// One row per trial.
pub fn sweep_frame(rows: &[TrialOutcome]) -> PolarsResult<DataFrame> {
    df!(
        "n" => rows.iter().map(|r| r.n as u64).collect::<Vec<_>>(),
        "seed" => rows.iter().map(|r| r.seed).collect::<Vec<_>>(),
        "index" => rows.iter().map(|r| r.index).collect::<Vec<_>>(),
        "moves" => rows.iter().map(|r| r.moves).collect::<Vec<_>>(),
        "initial_length" => rows.iter().map(|r| r.initial_length).collect::<Vec<_>>(),
        "final_length" => rows.iter().map(|r| r.final_length).collect::<Vec<_>>(),
        "ratio" => rows.iter().map(TrialOutcome::ratio).collect::<Vec<_>>(),
        "converged" => rows.iter().map(|r| r.converged).collect::<Vec<_>>()
    )
}

pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).finish(df)?;
    }
    tracing::info!(path = %path.display(), rows = df.height(), "table written");
    Ok(())
}

/// Mean `ratio` per `n` from a sweep table, ascending in `n`.
pub fn mean_ratio_by_n(path: &Path) -> Result<Vec<(f64, f64)>> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .group_by([col("n")])
        .agg([col("ratio").mean().alias("mean_ratio")])
        .sort(["n"], SortMultipleOptions::default())
        .collect()
        .with_context(|| format!("aggregating {}", path.display()))?;
    let ns = df.column("n")?.cast(&DataType::Float64)?;
    let ratios = df.column("mean_ratio")?.cast(&DataType::Float64)?;
    let out = ns
        .f64()?
        .into_iter()
        .zip(ratios.f64()?.into_iter())
        .filter_map(|(n, r)| Some((n?, r?)))
        .collect();
    Ok(out)
}

fn is_parquet(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("parquet")
}
