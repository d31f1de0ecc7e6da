use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser, ValueEnum};

use data_analyzer::ingestion::{FileSource, LoadOptions, LogObserver, SourceKind, load_with};
use data_analyzer::processing::{AggregateConfig, AggregateOp, Analyzer, SortOrder};
use data_analyzer::records::{Sale, SaleField, User, UserField};
use data_analyzer::report::{OutputFormat, ReportOptions, render};

/// Load a CSV, JSON or XML record file and print an analysis report.
#[derive(Debug, Parser)]
#[command(name = "data-analyzer", version, about)]
struct Cli {
    /// File to analyze (.csv, .json or .xml).
    path: Option<PathBuf>,

    /// Record shape; inferred from the extension when omitted (.json → user, otherwise sale).
    #[arg(long, value_enum, env = "DATA_ANALYZER_SHAPE")]
    shape: Option<ShapeArg>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    format: FormatArg,

    /// Only keep sales of this category.
    #[arg(long)]
    category: Option<String>,

    /// Show at most this many records.
    #[arg(long)]
    limit: Option<usize>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Sale,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let Some(path) = cli.path.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    let kind = SourceKind::from_path(path);
    if kind == SourceKind::Unknown {
        eprintln!(
            "error: unsupported file type '{}' (expected .csv, .json or .xml)",
            path.display()
        );
        return ExitCode::SUCCESS;
    }

    let shape = cli.shape.unwrap_or(match kind {
        SourceKind::Json => ShapeArg::User,
        _ => ShapeArg::Sale,
    });

    let outcome = match shape {
        ShapeArg::Sale => analyze_sales(path, &cli),
        ShapeArg::User => analyze_users(path, &cli),
    };

    match outcome {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn load_options() -> LoadOptions {
    LoadOptions {
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    }
}

fn report_options(title: String, cli: &Cli) -> ReportOptions {
    ReportOptions {
        title,
        format: match cli.format {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        },
        ..Default::default()
    }
}

fn analyze_sales(path: &Path, cli: &Cli) -> CliResult<String> {
    let sales = load_with(&FileSource::<Sale>::new(path), &load_options())?;

    let mut analyzer = Analyzer::new(&sales);
    if let Some(category) = cli.category.as_deref() {
        analyzer.filter_by_field(SaleField::Category, category);
    }
    analyzer.sort_by(SaleField::Price, SortOrder::Descending);

    let config = AggregateConfig::new()
        .with(SaleField::Price, AggregateOp::Sum)
        .with(SaleField::Quantity, AggregateOp::Sum);
    let price_sum = analyzer.aggregate(SaleField::Price, AggregateOp::Sum);
    let price_avg = analyzer.aggregate(SaleField::Price, AggregateOp::Avg);
    let by_category = analyzer.count_by(SaleField::Category);

    if let Some(n) = cli.limit {
        analyzer.limit(n);
    }
    let result = analyzer.analyze(Some(&config));

    let mut out = render(&result, &report_options(format!("Sales: {}", path.display()), cli))?;
    if cli.format == FormatArg::Table {
        out.push_str("\nBy category:\n");
        for (category, count) in &by_category {
            out.push_str(&format!("  {category}: {count}\n"));
        }
        out.push_str(&format!(
            "\nAll matching sales: revenue={price_sum:.2} average price={price_avg:.2}\n"
        ));
    }
    Ok(out)
}

fn analyze_users(path: &Path, cli: &Cli) -> CliResult<String> {
    let users = load_with(&FileSource::<User>::new(path), &load_options())?;

    let mut analyzer = Analyzer::new(&users);
    analyzer.sort_by(UserField::Name, SortOrder::Ascending);
    if let Some(n) = cli.limit {
        analyzer.limit(n);
    }

    let config: AggregateConfig<UserField> = [
        (UserField::Age, AggregateOp::Avg),
        (UserField::Id, AggregateOp::Count),
    ]
    .into_iter()
    .collect();
    let result = analyzer.analyze(Some(&config));

    Ok(render(&result, &report_options(format!("Users: {}", path.display()), cli))?)
}
