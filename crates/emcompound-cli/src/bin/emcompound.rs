// emcompound: Mark compound boundaries in xtsv input.
//
// Reads xtsv (header line first, sentences separated by empty lines) from a
// file or stdin and writes it with a `compound` column appended to a file or
// stdout.
// Needs the `lemma`, `xpostag` and `anas` columns.
//
// Usage:
//   emcompound [-e EXCEPTIONS | --no-exceptions] [-i IN] [-o OUT] [--conllu-comments] [--mark-preverb]
//
// Without an exception table found on the search path the run stops unless
// --no-exceptions is given.
//
// Logging is configured with RUST_LOG; -v turns on debug output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use emcompound_cli::{annotate_stream, fatal, load_exceptions};
use emcompound_hu::{CompoundOptions, ExceptionTable, SentenceProcessor};

#[derive(Parser, Debug)]
#[command(name = "emcompound", version, about = "Marks compound boundaries in xtsv input")]
struct Args {
    /// Input xtsv file. Reads stdin if omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output xtsv file. Writes stdout if omitted.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exception table of false boundaries, one `prefix+suffix` per line.
    /// Defaults to $EMCOMPOUND_EXCEPTIONS, then ./non_compounds.txt.
    #[arg(short, long, value_name = "FILE")]
    exceptions: Option<PathBuf>,

    /// Run without an exception table; every boundary found is kept.
    #[arg(long, conflicts_with = "exceptions")]
    no_exceptions: bool,

    /// Copy `# ` comment lines before each sentence through unchanged.
    #[arg(long)]
    conllu_comments: bool,

    /// Prefix the xpostag of preverb compounds with [/Prev].
    #[arg(long)]
    mark_preverb: bool,

    /// Also cache tokens that are not compound candidates.
    #[arg(long)]
    cache_non_compounds: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let exceptions = if args.no_exceptions {
        log::info!("running without an exception table");
        ExceptionTable::empty()
    } else {
        load_exceptions(args.exceptions.as_deref()).unwrap_or_else(|e| fatal(&e))
    };
    let options = CompoundOptions {
        mark_preverb: args.mark_preverb,
        cache_non_compounds: args.cache_non_compounds,
    };
    let mut processor = SentenceProcessor::new(exceptions, options);
    log::debug!("options: {:?}", processor.options());

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => fatal(&format!("failed to open {}: {e}", path.display())),
        },
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => fatal(&format!("failed to create {}: {e}", path.display())),
        },
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(output);

    let result = annotate_stream(input, &mut out, &mut processor, args.conllu_comments);
    // keep the sentences annotated before a failure
    if let Err(e) = out.flush() {
        fatal(&format!("failed to write output: {e}"));
    }
    let stats = result.unwrap_or_else(|e| fatal(&e.to_string()));

    let cache = processor.cache();
    log::debug!(
        "{} sentences, {} tokens; cache: {} entries, {} hits, {} misses",
        stats.sentences,
        stats.tokens,
        cache.len(),
        cache.hits(),
        cache.misses()
    );
}
