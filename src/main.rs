use clap::{ArgAction, Parser as ClapParser, ValueEnum};
use gq::{
    Language, Presenter, Source,
    cli::{self, CliError, RunOptions},
};
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "gq")]
#[command(about = "gq - Query HTML documents with pipelines like 'Find a|Each{Attrib href}'")]
#[command(version)]
struct Cli {
    /// HTML file to parse
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// HTML URL to download and parse
    #[arg(short, long)]
    url: Option<String>,

    /// Query to execute, e.g. 'Find a|Each{Attrib href}'
    #[arg(short, long)]
    query: Option<String>,

    /// Generate a program for the query instead of running it
    #[arg(short, long)]
    gencode: bool,

    /// Language of the generated program
    #[arg(short, long, default_value_t = Language::Go)]
    lang: Language,

    /// Reject unknown steps, unbalanced braces and invalid selectors
    #[arg(long)]
    strict: bool,

    /// Print results exactly as extracted, without pretty-printing
    #[arg(long)]
    raw: bool,

    /// When to highlight output
    #[arg(long, value_enum, env = "GQ_COLOR", default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// List documentation topics
    #[arg(long)]
    docs: bool,

    /// Show documentation for a topic (use '--docs' to list topics)
    #[arg(long, value_name = "TOPIC")]
    doc: Option<String>,

    /// More log output on stderr (repeatable); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.docs {
        print!("{}", cli::get_docs_overview());
        return;
    }

    let result = match &cli.doc {
        Some(topic) => cli::get_doc_topic(topic).map(|content| print!("{}", content)),
        None => run(cli),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Some(query) = cli.query else {
        usage();
    };

    let source = match (cli.file, cli.url) {
        (Some(path), _) => Some(Source::from_location(&path.to_string_lossy())),
        (None, Some(url)) => Some(Source::Url(url)),
        (None, None) if !atty::is(atty::Stream::Stdin) => Some(Source::Stdin),
        (None, None) => None,
    };

    if source.is_none() && !cli.gencode {
        usage();
    }

    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => atty::is(atty::Stream::Stdout),
    };

    let options = RunOptions {
        query,
        source,
        gencode: cli.gencode,
        language: cli.lang,
        strict: cli.strict,
    };

    let presenter = Presenter::new(color, !cli.raw);
    let stdout = io::stdout();
    cli::execute_run(&options, &presenter, &mut stdout.lock())
}

fn usage() -> ! {
    eprintln!("{}", cli::USAGE);
    std::process::exit(1);
}
