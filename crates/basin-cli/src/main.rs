//! Command-line front end: reads a height map, prints the risk score and
//! the basin score.
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use basin_core::{analyze, find_low_points, risk_score, AnalysisParams, AnalysisReport, HeightMap};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "basin-cli", about = "Find low points and basins in a digit height map")]
struct Args {
    /// Height map file: one row of digits per line, or a JSON array of rows
    /// when the extension is `.json`. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Number of largest basins multiplied into the basin score.
    #[arg(short = 'k', long, default_value_t = AnalysisParams::default().top_k)]
    top_k: usize,

    /// Which score to print.
    #[arg(short, long, value_enum, default_value_t = Part::All)]
    part: Part,

    /// Print the full analysis report as JSON instead of plain scores.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    All,
}

fn read_map(input: Option<&PathBuf>) -> Result<HeightMap> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let map = if path.extension().is_some_and(|ext| ext == "json") {
                HeightMap::from_json(&content)
            } else {
                content.parse()
            };
            map.with_context(|| format!("parsing {}", path.display()))
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("reading stdin")?;
            content.parse::<HeightMap>().context("parsing stdin")
        }
    }
}

fn print_plain(report: &AnalysisReport, part: Part) {
    if matches!(part, Part::One | Part::All) {
        println!("Part 1: {}", report.risk_score);
    }
    if matches!(part, Part::Two | Part::All) {
        println!("Part 2: {}", report.basin_score);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let map = read_map(args.input.as_ref())?;
    log::info!("loaded {}x{} height map", map.height(), map.width());

    // Part 1 alone needs no basins, so it cannot trip the top-K check.
    if args.part == Part::One && !args.json {
        println!("Part 1: {}", risk_score(&find_low_points(&map)));
        return Ok(());
    }

    let params = AnalysisParams { top_k: args.top_k };
    let report = analyze(&map, &params).context("analysing height map")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_plain(&report, args.part);
    }

    Ok(())
}
