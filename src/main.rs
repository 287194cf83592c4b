use algorithms::cli::{Cli, Command, OutputFormat};
use algorithms::complexity::ComplexityTable;
use algorithms::config::Config;
use algorithms::csv_output::CsvOutput;
use algorithms::json_output::{JsonComplexity, JsonOutput, JsonRegression, JsonSearch, JsonStats};
use algorithms::regression::LeastSquares;
use algorithms::search::{BinarySearch, SearchResult};
use algorithms::stats::{General, Summary};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber
///
/// Library diagnostics (undefined input) surface at `warn` and above by
/// default; `--debug` opens everything down to TRACE.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Search numerically when every token is a number, lexicographically otherwise
fn run_search(item: &str, values: &[String]) -> Result<SearchResult> {
    let numeric: Option<Vec<f64>> = values.iter().map(|v| v.parse().ok()).collect();
    let result = match (item.parse::<f64>(), numeric) {
        (Ok(item), Some(values)) => BinarySearch::new().with_item(item).with_values(values).search(),
        _ => BinarySearch::new()
            .with_item(item.to_string())
            .with_values(values.to_vec())
            .search(),
    };
    Ok(result?)
}

fn print_search(item: &str, result: &SearchResult) {
    match result.index {
        Some(index) => println!("Item {} found at index {}", item, index),
        None => println!("Item {} not found", item),
    }
    println!("Steps: {} (maximum {})", result.steps, result.max_steps);
    println!("Comparisons: {}", result.comparisons);
}

fn print_stats(summary: &Summary) {
    println!("Count: {}", summary.count);
    println!("Mean: {}", summary.mean);
    println!("Median: {}", summary.median.median);
    println!("Median low: {:?}", summary.median.lower);
    println!("Median high: {:?}", summary.median.upper);
    match &summary.quartiles {
        Some(q) => {
            println!("Quartiles: q1={}, q2={}, q3={}", q.q1, q.q2, q.q3);
            println!("Inter-quartile range: {}", q.inter_quartile_range);
        }
        None => println!("Quartiles: need at least 2 values"),
    }
}

fn print_regression(regression: &JsonRegression) {
    println!("=== Least Squares Linear Regression ===");
    println!("Slope: {:.2}", regression.slope);
    println!("Intercept: {:.2}", regression.y_intercept);
    println!();
    println!("Check Values (closed form)");
    println!("Slope: {:.2}", regression.check.slope);
    println!("Intercept: {:.2}", regression.check.y_intercept);
}

fn print_complexity(table: &ComplexityTable) {
    let models = table.models();
    print!("{:>10}", "n");
    for model in models {
        print!(" {:>14}", model.label());
    }
    println!();
    println!("{}", "─".repeat(10 + 15 * models.len()));
    for row in &table.rows {
        print!("{:>10.4}", row.n);
        for value in row.values {
            print!(" {:>14.4}", value);
        }
        println!();
    }
}

/// Emit a report in the requested format
fn emit(format: OutputFormat, json: JsonOutput, csv: CsvOutput, text: impl FnOnce()) -> Result<()> {
    match format {
        OutputFormat::Text => text(),
        OutputFormat::Json => println!("{}", json.to_json().context("Failed to serialize JSON")?),
        OutputFormat::Csv => print!("{}", csv.to_csv()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    tracing::debug!(?config, "loaded configuration");

    match args.command {
        Command::Search { item, values } => {
            let result = run_search(&item, &values)?;
            let search = JsonSearch::new(item.as_str(), &result);
            emit(
                args.format,
                JsonOutput::new().with_search(search.clone()),
                CsvOutput::from_search(&search),
                || print_search(&item, &result),
            )?;
        }
        Command::Stats { values } => {
            // no values on the command line means the sample was never given
            let general = General::new((!values.is_empty()).then_some(values));
            let summary = general.describe()?;
            let stats = JsonStats::from(&summary);
            emit(
                args.format,
                JsonOutput::new().with_stats(stats.clone()),
                CsvOutput::from_stats(&stats),
                || print_stats(&summary),
            )?;
        }
        Command::Regress { x, y, points } => {
            let points = points.unwrap_or(config.regression_points);
            let least_squares = LeastSquares::new(x, y);
            tracing::debug!("{}", least_squares);

            let fit = least_squares.fit()?;
            let check = least_squares.check_values()?;
            let line = least_squares.regression_line(points)?;
            let regression = JsonRegression::new(&fit, &check, &line);
            emit(
                args.format,
                JsonOutput::new().with_regression(regression.clone()),
                CsvOutput::from_regression(&regression),
                || print_regression(&regression),
            )?;
        }
        Command::BigO { start, end, points } => {
            let mut complexity = config.complexity.clone();
            if let Some(start) = start {
                complexity.start = start;
            }
            if let Some(end) = end {
                complexity.end = end;
            }
            if let Some(points) = points {
                complexity.points = points;
            }

            let table = ComplexityTable::generate(&complexity)?;
            emit(
                args.format,
                JsonOutput::new().with_complexity(JsonComplexity::from(&table)),
                CsvOutput::from_complexity(&table),
                || print_complexity(&table),
            )?;
        }
    }

    Ok(())
}
