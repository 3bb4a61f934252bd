use std::fmt::Write as _;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apgcat::catalog::Family;
use apgcat::codec::{self, CodeFormat};
use apgcat::core::bounds::BoundingBox;
use apgcat::core::cell_set::CellSet;
use apgcat::core::coord::Coord;
use apgcat::life::evolve::{bounding_box_with, Generations};
use apgcat::life::LifeRule;
use apgcat::object::{LifeObject, ObjectClass, Workable};

#[derive(Parser, Debug)]
#[command(name = "apgcat", about = "Decode, evolve and classify apgcodes")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one or more apgcodes (or RLE bodies)
    Classify {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Run an object forward and report its extent
    Evolve {
        code: String,

        #[arg(short, long, default_value_t = 4)]
        generations: usize,

        #[arg(long, default_value_t = LifeRule::CONWAY)]
        rule: LifeRule,

        /// Draw every generation
        #[arg(long)]
        show: bool,
    },
}

#[derive(Serialize)]
struct ClassifyReport {
    code: String,
    meta: String,
    class: ObjectClass,
    period: Option<u32>,
    cell_count: Option<u32>,
    population: usize,
    families: Vec<Family>,
    description: String,
}

#[derive(Serialize)]
struct EvolveReport {
    code: String,
    rule: String,
    populations: Vec<usize>,
    bounding_box: Option<BoundingBox>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Command::Classify { codes } => classify(&codes, cli.json),
        Command::Evolve {
            code,
            generations,
            rule,
            show,
        } => evolve(&code, generations, &rule, show, cli.json),
    }
}

fn load(code: &str) -> LifeObject {
    match CodeFormat::detect(code) {
        CodeFormat::Wechsler => LifeObject::from_apgcode(code),
        CodeFormat::Rle => LifeObject::from_rle(code),
    }
}

fn classify(codes: &[String], json: bool) -> Result<()> {
    let reports: Vec<ClassifyReport> = codes
        .iter()
        .map(|code| {
            let obj = load(code);
            debug!(code = %code, population = obj.cell_set().len(), "decoded");
            ClassifyReport {
                code: code.clone(),
                meta: obj.meta().to_string(),
                class: obj.class(),
                period: obj.period(),
                cell_count: obj.cell_count(),
                population: obj.cell_set().len(),
                families: obj.families(),
                description: describe(&obj),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for r in &reports {
        println!("{}: {}", r.code, r.description);
    }
    Ok(())
}

fn evolve(code: &str, generations: usize, rule: &LifeRule, show: bool, json: bool) -> Result<()> {
    let cells = codec::decode(code).cells;
    let history: Vec<CellSet> = Generations::new(&cells, *rule)
        .take(generations + 1)
        .collect();
    let bb = bounding_box_with(&cells, generations + 1, rule);

    if json {
        let report = EvolveReport {
            code: code.to_string(),
            rule: rule.to_string(),
            populations: history.iter().map(CellSet::len).collect(),
            bounding_box: bb,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (g, state) in history.iter().enumerate() {
        println!("generation {g}: {} cells", state.len());
        if let (true, Some(bb)) = (show, bb) {
            print!("{}", draw(state, &bb));
        }
    }
    match bb {
        Some(bb) => println!(
            "extent: x {}..={}, y {}..={} ({}x{})",
            bb.xmin,
            bb.xmax,
            bb.ymin,
            bb.ymax,
            bb.width(),
            bb.height()
        ),
        None => println!("extent: empty"),
    }
    Ok(())
}

/// One-line summary in the catalogue's wording, followed by any matched families.
fn describe(obj: &impl Workable) -> String {
    let mut out = match (obj.class(), obj.cell_count(), obj.period()) {
        (ObjectClass::StillLife, Some(n), _) => format!("{n}-cell still life"),
        (ObjectClass::StillLife, None, _) => "still life".to_string(),
        (ObjectClass::Oscillator, _, Some(p)) => format!("period {p} oscillator"),
        (ObjectClass::Spaceship, _, _) => "spaceship".to_string(),
        _ => "object".to_string(),
    };

    let families = obj.families();
    if !families.is_empty() {
        let labels: Vec<&str> = families.iter().map(|f| f.label()).collect();
        let _ = write!(out, " ({})", labels.join(", "));
    }
    out
}

fn draw(state: &CellSet, bb: &BoundingBox) -> String {
    let mut out = String::new();
    for y in bb.ymin..=bb.ymax {
        for x in bb.xmin..=bb.xmax {
            out.push(if state.contains(Coord::new(x, y)) { 'o' } else { '.' });
        }
        out.push('\n');
    }
    out.push('\n');
    out
}
