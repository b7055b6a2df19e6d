//! data-runner: standalone synthetic dataset generator.
//!
//! Usage:
//!   data-runner --rows 10000 --seed 42 --out ecommerce_data.csv
//!   data-runner --config gen.json --summary-json
//!   data-runner --reuse
//!
//! By default every invocation regenerates and overwrites the dataset;
//! --reuse keeps an existing file when its header is complete, the way
//! the dashboard-side loader does.

use anyhow::Result;
use apexsales_core::{
    aggregate, config::GenConfig, dashboard::DashboardFrame, generator::Generator,
    record::OrderRecord, store::DataStore,
};
use std::env;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut cfg = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => GenConfig::load(Path::new(&w[1]))?,
        None => GenConfig {
            rows: 10_000,
            seasonal: true,
            ..GenConfig::default()
        },
    };
    cfg.rows = parse_arg(&args, "--rows", cfg.rows);
    cfg.seed = parse_arg(&args, "--seed", cfg.seed);
    cfg.seasonal = parse_arg(&args, "--seasonal", cfg.seasonal);
    if let Some(w) = args.windows(2).find(|w| w[0] == "--out") {
        cfg.output = PathBuf::from(&w[1]);
    }
    log::debug!("effective config: {cfg:?}");

    let rows = if args.iter().any(|a| a == "--reuse") {
        DataStore::load_or_generate(&cfg)?
    } else {
        let rows = Generator::new(cfg.seed).generate(&cfg);
        DataStore::write(&cfg.output, &rows)?;
        rows
    };

    println!(
        "Synthetic dataset '{}' created successfully!",
        cfg.output.display()
    );

    if args.iter().any(|a| a == "--summary-json") {
        let frame = DashboardFrame::compute(&rows);
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        println!();
        print_summary(&rows);
    }
    Ok(())
}

fn print_summary(rows: &[OrderRecord]) {
    let kpis = aggregate::overview_kpis(rows);

    println!("=== DATASET SUMMARY ===");
    println!("  rows:            {}", rows.len());
    println!("  total revenue:   ${:.2}", kpis.total_revenue);
    println!("  total units:     {}", kpis.total_units);
    println!("  avg order value: ${:.2}", kpis.avg_order_value);
    println!("  avg rating:      {:.1} / 5", kpis.avg_rating);

    println!();
    println!("=== REVENUE BY CATEGORY ===");
    for (category, stats) in aggregate::revenue_by_category(rows) {
        println!(
            "  {:<15} ${:>12.2}  ({} orders)",
            category.as_str(),
            stats.sum,
            stats.count
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
