use clap::{Parser as ClapParser, Subcommand};
use lx_lang::{
    cli::{self, CheckOptions, CheckResult, CliError},
    output,
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "lx")]
#[command(about = "lx - evaluate boolean expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and evaluate lx statements
    Check {
        /// Source to evaluate (reads --file or stdin if not provided)
        source: Option<String>,

        /// Read the source from a file
        #[arg(short, long, conflicts_with = "source")]
        file: Option<PathBuf>,

        /// Print results as a JSON array
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,

        /// Print the syntax tree as JSON instead of evaluating
        #[arg(long, conflicts_with = "syntax_only")]
        ast: bool,

        /// Deepest nesting of groups and chain links accepted (1 to 512)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'lx docs' to list categories)
        category: String,
    },

    /// Short tutorial
    Onboard,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LX_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            source,
            file,
            json,
            pretty,
            syntax_only,
            ast,
            max_depth,
        } => run_check(source, file, json, pretty, syntax_only, ast, max_depth),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
        Commands::Onboard => {
            print!("{}", cli::get_onboarding_content());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_check(
    source: Option<String>,
    file: Option<PathBuf>,
    json: bool,
    pretty: bool,
    syntax_only: bool,
    ast: bool,
    max_depth: Option<usize>,
) -> Result<(), CliError> {
    let filename = file.as_ref().map(|path| path.display().to_string());
    let source = match (source, file) {
        (Some(s), _) => Some(s),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        (None, None) => None,
    };

    let options = CheckOptions {
        source,
        filename,
        syntax_only,
        ast,
        max_depth,
    };

    let render = |value: &serde_json::Value| {
        if pretty {
            output::to_json_pretty(value)
        } else {
            output::to_json(value)
        }
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Ast(tree) => println!("{}", render(&tree)),
        CheckResult::Results(results) if json => {
            println!("{}", render(&output::results_to_json(&results)));
        }
        CheckResult::Results(results) => {
            for result in results {
                println!("{}", result);
            }
        }
    }
    Ok(())
}
