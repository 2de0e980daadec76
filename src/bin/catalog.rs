use colored::Colorize;
use pattern_catalog::config::DEFAULT_CONFIG_PATH;
use pattern_catalog::{logging, Catalog, CatalogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let explicit_path = std::env::args().nth(1);
    let loaded = match &explicit_path {
        Some(path) => CatalogConfig::load(path),
        None => CatalogConfig::load_or_default(DEFAULT_CONFIG_PATH),
    };

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            logging::init("info");
            tracing::error!(error = %err, "failed to load config");
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.output.log_filter);
    colored::control::set_override(config.output.color);

    let catalog = Catalog::standard();
    let reports = match catalog.run_selected(&config) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    println!("Design Patterns Catalog");
    println!("=======================\n");

    let mut failures = 0;
    for report in &reports {
        let heading = format!("=== {} ({}) ===", report.name, report.category);
        println!("{}", heading.cyan().bold());
        match &report.outcome {
            Ok(transcript) => println!("{transcript}\n"),
            Err(err) => {
                failures += 1;
                println!("{} {err}\n", "failed:".red().bold());
            }
        }
    }

    let summary = format!("{} examples run, {failures} failed", reports.len());
    if failures == 0 {
        println!("{}", summary.green());
        ExitCode::SUCCESS
    } else {
        println!("{}", summary.red());
        ExitCode::FAILURE
    }
}
