use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use treeflip::points::{PointDist, PointSource, ReplayToken};
use treeflip::sim::{Observer, SimCfg, Simulation};
use treeflip::trial::run_trial;

mod provenance;
mod svg;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "treeflip")]
#[command(about = "Slide triangle-improving moves on a random path until none remain")]
#[command(args_conflicts_with_subcommands = true)]
struct Cmd {
    /// Log every slide (debug level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Args, Serialize)]
struct RunArgs {
    /// Number of vertices
    #[arg(value_parser = parse_vertex_count, default_value = "100")]
    n: usize,
    /// Seed for points and move choices; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many moves even if slideable paths remain
    #[arg(long)]
    max_moves: Option<u64>,
    #[arg(long, value_enum, default_value_t = Dist::Square)]
    dist: Dist,
    /// Draw the final tree as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Write the length series as a table (.csv or .parquet)
    #[arg(long)]
    trajectory: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Run independent trials over several sizes and write one row per trial
    Sweep {
        #[arg(long, value_delimiter = ',', value_parser = parse_vertex_count, default_values_t = [50, 100, 200])]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 5)]
        trials: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        max_moves: Option<u64>,
        #[arg(long, value_enum, default_value_t = Dist::Square)]
        dist: Dist,
        #[arg(long)]
        out: PathBuf,
    },
    /// Plot mean converged length per vertex against n from a sweep table
    Figure {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Dist {
    Square,
    Disk,
}

impl From<Dist> for PointDist {
    fn from(d: Dist) -> Self {
        match d {
            Dist::Square => PointDist::Square,
            Dist::Disk => PointDist::Disk,
        }
    }
}

fn parse_vertex_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a positive integer"))?;
    if n == 0 {
        return Err("vertex count must be at least 1".to_string());
    }
    Ok(n)
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        None => run(cmd.run),
        Some(Action::Sweep {
            sizes,
            trials,
            seed,
            max_moves,
            dist,
            out,
        }) => sweep(sizes, trials, seed, SimCfg { max_moves }, dist, out),
        Some(Action::Figure { from, out }) => figure(from, out),
        Some(Action::Report) => report(),
    }
}

/// Prints each length on its own line and keeps the series for the trajectory table.
struct LengthStream<W: Write> {
    out: W,
    series: Vec<(u64, f64)>,
    error: Option<io::Error>,
}

impl<W: Write> Observer for LengthStream<W> {
    fn observe(&mut self, moves: u64, total_length: f64) {
        self.series.push((moves, total_length));
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{total_length:?}") {
                self.error = Some(e);
            }
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!(n = args.n, seed, dist = ?args.dist, "run");
    let mut rng = ReplayToken::new(seed, 0).to_std_rng();
    let points = PointDist::from(args.dist).sample(args.n, &mut rng);
    let mut sim = Simulation::new(points, rng)?;

    let stdout = io::stdout();
    let mut stream = LengthStream {
        out: BufWriter::new(stdout.lock()),
        series: Vec::new(),
        error: None,
    };
    let cfg = SimCfg {
        max_moves: args.max_moves,
    };
    let summary = sim.run(cfg, &mut stream)?;
    if let Some(e) = stream.error.take() {
        return Err(e).context("writing lengths to stdout");
    }
    stream.out.flush().context("flushing stdout")?;
    tracing::info!(
        moves = summary.moves,
        final_length = summary.final_length,
        converged = summary.converged,
        "done"
    );

    if let Some(path) = &args.svg {
        sim.render(&mut svg::SvgRenderer::new(path))?;
    }
    if let Some(path) = &args.trajectory {
        let mut df = table::trajectory_frame(&stream.series)?;
        table::write_table(&mut df, path)?;
        let payload = Payload::new(serde_json::to_value(&args)?, df.height())
            .with_seed(seed)
            .with_converged(summary.converged);
        write_sidecar(path, payload)?;
    }
    Ok(())
}

fn sweep(
    sizes: Vec<usize>,
    trials: u64,
    seed: u64,
    cfg: SimCfg,
    dist: Dist,
    out: PathBuf,
) -> Result<()> {
    tracing::info!(?sizes, trials, seed, ?dist, out = %out.display(), "sweep");
    let source = PointDist::from(dist);
    let mut rows = Vec::with_capacity(sizes.len() * trials as usize);
    let mut index = 0u64;
    for &n in &sizes {
        for _ in 0..trials {
            let row = run_trial(n, &source, ReplayToken::new(seed, index), cfg)
                .with_context(|| format!("trial n={n} seed={seed} index={index}"))?;
            if !row.converged {
                tracing::warn!(n, index, moves = row.moves, "trial hit the move cap");
            }
            rows.push(row);
            index += 1;
        }
        let recent = &rows[rows.len() - trials as usize..];
        let mean = recent.iter().map(|r| r.ratio()).sum::<f64>() / trials.max(1) as f64;
        tracing::info!(n, mean_ratio = mean, "size done");
    }
    let mut df = table::sweep_frame(&rows)?;
    table::write_table(&mut df, &out)?;
    let params = serde_json::json!({
        "sizes": sizes,
        "trials": trials,
        "seed": seed,
        "max_moves": cfg.max_moves,
        "dist": dist,
    });
    let all_converged = rows.iter().all(|r| r.converged);
    let payload = Payload::new(params, rows.len())
        .with_seed(seed)
        .with_converged(all_converged);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn figure(from: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), "figure");
    let series = table::mean_ratio_by_n(&from)?;
    svg::ratio_figure(&series, &out)?;
    let params = serde_json::json!({ "from": from.to_string_lossy() });
    write_sidecar(&out, Payload::new(params, series.len()))?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::report_doc())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn vertex_count_must_be_positive_integer() {
        assert_eq!(parse_vertex_count("250"), Ok(250));
        assert!(parse_vertex_count("0").is_err());
        assert!(parse_vertex_count("-3").is_err());
        assert!(parse_vertex_count("ten").is_err());
        assert!(parse_vertex_count("2.5").is_err());
    }

    #[test]
    fn bare_positional_selects_default_run() {
        let cmd = Cmd::try_parse_from(["treeflip", "250", "--seed", "3"]).unwrap();
        assert!(cmd.action.is_none());
        assert_eq!(cmd.run.n, 250);
        assert_eq!(cmd.run.seed, Some(3));
        let cmd = Cmd::try_parse_from(["treeflip"]).unwrap();
        assert_eq!(cmd.run.n, 100);
    }

    #[test]
    fn bad_vertex_count_is_a_usage_error() {
        let err = Cmd::try_parse_from(["treeflip", "zero"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn sweep_parses_size_list() {
        let cmd = Cmd::try_parse_from(["treeflip", "sweep", "--sizes", "10,20", "--out", "x.csv"])
            .unwrap();
        match cmd.action {
            Some(Action::Sweep { sizes, trials, .. }) => {
                assert_eq!(sizes, vec![10, 20]);
                assert_eq!(trials, 5);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn length_stream_prints_debug_floats() {
        let mut s = LengthStream {
            out: Vec::new(),
            series: Vec::new(),
            error: None,
        };
        s.observe(0, 3.0);
        s.observe(1, 2.5);
        assert_eq!(String::from_utf8(s.out).unwrap(), "3.0\n2.5\n");
        assert_eq!(s.series, vec![(0, 3.0), (1, 2.5)]);
    }

    #[test]
    fn single_vertex_run_prints_positive_zero() {
        let mut rng = ReplayToken::new(2, 0).to_std_rng();
        let points = PointDist::Square.sample(1, &mut rng);
        let mut sim = Simulation::new(points, rng).unwrap();
        let mut s = LengthStream {
            out: Vec::new(),
            series: Vec::new(),
            error: None,
        };
        let summary = sim.run(SimCfg::default(), &mut s).unwrap();
        assert!(summary.converged);
        assert_eq!(String::from_utf8(s.out).unwrap(), "0.0\n");
        assert!(summary.final_length.is_sign_positive());
    }

    #[test]
    fn sweep_and_figure_write_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("sweep.csv");
        let fig = dir.path().join("ratio.svg");
        sweep(vec![10, 20], 2, 1, SimCfg::default(), Dist::Square, table.clone()).unwrap();
        assert!(table.exists());
        assert!(dir.path().join("sweep.csv.provenance.json").exists());
        figure(table, fig.clone()).unwrap();
        assert!(fig.exists());
    }
}
