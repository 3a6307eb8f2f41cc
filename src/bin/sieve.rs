//! sieve — compile filter documents to SQL WHERE clauses
//!
//! # Usage
//!
//! ```bash
//! # Compile a filter document
//! sieve compile filter.json
//!
//! # Read from stdin and wrap in a SELECT
//! cat filter.json | sieve select users - --columns id,email --limit 10
//!
//! # Sanitize a literal
//! sieve sanitize "it's -- here"
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use sieve::config::Config;
use sieve::prelude::*;
use tracing::Level;

#[derive(Parser)]
#[command(name = "sieve")]
#[command(version)]
#[command(about = "Compile boolean filter trees to SQL WHERE clauses", long_about = None)]
#[command(after_help = "EXAMPLES:
    sieve compile filter.json
    sieve explain - < filter.json
    sieve select users filter.json --columns id,email --order created_at --desc --limit 10
    sieve sanitize \"x' OR 1=1 --\"")]
struct Cli {
    /// Path to a config file (default: ./sieve.toml, then the user config dir)
    #[arg(short, long, global = true, env = "SIEVE_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a filter document to a WHERE clause
    Compile {
        /// Document path, or `-` for stdin
        input: String,
    },
    /// Show the expression tree and its compiled clause
    Explain {
        /// Document path, or `-` for stdin
        input: String,
    },
    /// Render a SELECT statement using the filter
    Select {
        /// Table name
        table: String,
        /// Document path, or `-` for stdin
        input: String,
        /// Columns to select
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
        /// Column to sort by
        #[arg(long)]
        order: Option<String>,
        /// Sort descending
        #[arg(long, requires = "order")]
        desc: bool,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        offset: Option<usize>,
    },
    /// Print text as the compiler would inline it
    Sanitize {
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let options = config.compile_options();

    match &cli.command {
        Commands::Compile { input } => {
            match read_document(input)? {
                Some(expr) => println!("{}", expr.to_where_clause_with(&options)?),
                None => eprintln!("{}", "(empty filter)".dimmed()),
            }
        }
        Commands::Explain { input } => explain(read_document(input)?, &options)?,
        Commands::Select {
            table,
            input,
            columns,
            order,
            desc,
            limit,
            offset,
        } => {
            let mut stmt = SelectStatement::new(table.as_str()).columns(columns.iter().cloned());
            if let Some(expr) = read_document(input)? {
                stmt = stmt.filter(expr);
            }
            if let Some(column) = order {
                let dir = if *desc { SortOrder::Desc } else { SortOrder::Asc };
                stmt = stmt.order_by(column.as_str(), dir);
            }
            if let Some(n) = limit {
                stmt = stmt.limit(*n);
            }
            if let Some(n) = offset {
                stmt = stmt.offset(*n);
            }
            println!("{}", stmt.to_sql_with(&options)?);
        }
        Commands::Sanitize { text } => println!("{}", sanitize(text)),
    }

    Ok(())
}

fn read_document(input: &str) -> anyhow::Result<Option<Expression>> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };
    Ok(sieve::document::from_str(&content)?)
}

fn explain(expr: Option<Expression>, options: &CompileOptions) -> anyhow::Result<()> {
    println!("{}", "Filter Explanation".cyan().bold());
    println!();

    let Some(expr) = expr else {
        println!("{}", "(empty filter)".dimmed());
        return Ok(());
    };

    println!("{}", "Tree:".green().bold());
    print_tree(&expr, 1);
    println!();
    println!("  {} {}", "Depth:".dimmed(), expr.depth());
    println!();
    println!("{}", "WHERE clause:".green().bold());
    println!("  {}", expr.to_where_clause_with(options)?.white());
    Ok(())
}

fn print_tree(expr: &Expression, indent: usize) {
    let pad = "  ".repeat(indent);
    println!("{}{}", pad, expr.op.to_string().cyan());
    print_term(&expr.left, indent + 1);
    if let Some(right) = &expr.right {
        print_term(right, indent + 1);
    }
}

fn print_term(term: &Term, indent: usize) {
    let pad = "  ".repeat(indent);
    match term {
        Term::Nested(inner) => print_tree(inner, indent),
        Term::Column(name) => println!("{}{} {}", pad, "column".dimmed(), name.white()),
        Term::Scalar(v) => println!("{}{} {}", pad, v.kind().dimmed(), v.to_string().yellow()),
        Term::List(_) => println!("{}{} {}", pad, "list".dimmed(), term.to_string().yellow()),
    }
}
