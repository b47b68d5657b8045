//! `tableview` command-line entry point.
//!
//! Reads a JSON array of records from a file or stdin, applies a search term,
//! a sort and a page through the same controller list views use, and prints
//! the resulting page as a text table.
//!
//! ```text
//! tableview plans.json --search gold --sort name --desc --page 2 --per-page 5
//! ```

use clap::Parser;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use tableview::observability::init_tracing;
use tableview::reducer::{FieldSubstring, FuzzyFields, SearchPolicy};
use tableview::ui::render_table;
use tableview::{
    handle_event, Config, Event, FilterMode, FilterPatch, Pagination, Sort, TableController,
    TableViewError,
};

/// Search, sort and paginate a JSON collection
#[derive(Parser, Debug)]
#[command(name = "tableview")]
#[command(version)]
#[command(about = "Search, sort and paginate a JSON array of records")]
pub struct Args {
    /// Path to a JSON array (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field to sort by (dotted paths reach nested fields)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show, starting at 1
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Rows per page (defaults to the configured page size)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub per_page: Option<u64>,

    /// Comma-separated fields the search looks at (defaults to the columns)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Comma-separated columns to print (defaults to the first record's keys)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Fuzzy search instead of substring search
    #[arg(long)]
    pub fuzzy: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_tracing(&config, args.log_file.as_deref())?;

    let items = read_items(args.file.as_ref())?;
    let columns = if args.columns.is_empty() {
        default_columns(&items)
    } else {
        args.columns.clone()
    };
    let fields = if args.fields.is_empty() {
        columns.clone()
    } else {
        args.fields.clone()
    };
    tracing::info!(items = items.len(), ?columns, ?fields, "collection loaded");

    let output = if args.fuzzy {
        run(items, FuzzyFields::new(fields), &args, &config, &columns)
    } else {
        run(items, FieldSubstring::new(fields), &args, &config, &columns)
    };
    print!("{output}");
    Ok(())
}

/// Drives a client-side controller with the requested filters and renders
/// the resulting page.
///
/// Search and sort are applied first, the page second, so that an explicit
/// `--page` survives the reset to page 1 a new search term causes.
fn run<P: SearchPolicy<Value>>(
    items: Vec<Value>,
    policy: P,
    args: &Args,
    config: &Config,
    columns: &[String],
) -> String {
    let mut settings = config.settings();
    if settings.mode == FilterMode::Server {
        tracing::debug!("server mode configured, filtering the file in memory");
        settings.mode = FilterMode::Client;
    }

    let mut controller = TableController::new(items, policy, settings);
    let now = Instant::now();

    let mut criteria = FilterPatch::default();
    if let Some(term) = &args.search {
        criteria.search_term = Some(term.clone());
    }
    if let Some(field) = &args.sort {
        let sort = if args.desc {
            Sort::desc(field.as_str())
        } else {
            Sort::asc(field.as_str())
        };
        criteria.sort = Some(Some(sort));
    }
    handle_event(&mut controller, Event::FiltersPatched(criteria), now);

    let size = args
        .per_page
        .map_or(config.default_page_size, |n| usize::try_from(n).unwrap_or(usize::MAX));
    let index = usize::try_from(args.page).unwrap_or(usize::MAX);
    let page = FilterPatch {
        pagination: Some(Pagination::new(index, size)),
        ..FilterPatch::default()
    };
    handle_event(&mut controller, Event::FiltersPatched(page), now);

    let vm = controller.compute_viewmodel();
    handle_event(&mut controller, Event::Teardown, now);
    render_table(&vm, columns)
}

fn read_items(file: Option<&PathBuf>) -> Result<Vec<Value>, TableViewError> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    match serde_json::from_str::<Value>(&contents)? {
        Value::Array(items) => Ok(items),
        other => Err(TableViewError::Collection(format!(
            "expected a JSON array of records, found {}",
            kind(&other)
        ))),
    }
}

/// Keys of the first object record.
fn default_columns(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .find_map(Value::as_object)
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
