// emcompound-cli: exception table discovery and the xtsv stream driver.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use emcompound_core::error::Result;
use emcompound_core::token::{FieldMap, TARGET_FIELDS};
use emcompound_hu::{ExceptionTable, SentenceProcessor};

/// Environment variable naming the exception table file.
pub const EXCEPTIONS_ENV: &str = "EMCOMPOUND_EXCEPTIONS";

/// Exception table file name looked up in the current directory.
pub const EXCEPTIONS_FILE: &str = "non_compounds.txt";

/// xtsv column separator.
const FIELD_SEPARATOR: char = '\t';

/// Prefix of CoNLL-U style comment lines.
const COMMENT_PREFIX: &str = "# ";

// ---------------------------------------------------------------------------
// Exception table discovery
// ---------------------------------------------------------------------------

/// Find and load the exception table.
///
/// Search order:
/// 1. `path` argument (if provided; a missing file is an error)
/// 2. `EMCOMPOUND_EXCEPTIONS` environment variable
/// 3. `non_compounds.txt` in the current working directory
///
/// Finding no table is an error; hosts that want to run without one use
/// [`ExceptionTable::empty`] explicitly.
pub fn load_exceptions(path: Option<&Path>) -> std::result::Result<ExceptionTable, String> {
    match path {
        Some(path) => read_exceptions(path),
        None => find_exceptions(&build_search_paths()),
    }
}

/// Load the first existing file of `search_paths`.
fn find_exceptions(search_paths: &[PathBuf]) -> std::result::Result<ExceptionTable, String> {
    match search_paths.iter().find(|p| p.is_file()) {
        Some(path) => read_exceptions(path),
        None => Err(format!(
            "no exception table found (searched {}); pass --exceptions FILE or --no-exceptions",
            search_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

fn read_exceptions(path: &Path) -> std::result::Result<ExceptionTable, String> {
    let table = ExceptionTable::from_path(path)
        .map_err(|e| format!("failed to load exception table {}: {e}", path.display()))?;
    log::info!(
        "loaded exception table {} ({} prefixes)",
        path.display(),
        table.len()
    );
    Ok(table)
}

/// Build the list of exception table files to try.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(env_path) = std::env::var_os(EXCEPTIONS_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(EXCEPTIONS_FILE));
    }

    paths
}

// ---------------------------------------------------------------------------
// xtsv driver
// ---------------------------------------------------------------------------

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub sentences: usize,
    pub tokens: usize,
}

/// Sentence being collected from the input.
#[derive(Default)]
struct PendingSentence {
    comments: Vec<String>,
    rows: Vec<Vec<String>>,
    first_line: usize,
}

impl PendingSentence {
    fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.rows.is_empty()
    }
}

/// Annotate an xtsv stream.
///
/// The first line is the tab-separated header; it is written back with the
/// `compound` field appended. Sentences are separated by empty lines and
/// every output sentence is terminated by one. With `conllu_comments`,
/// lines starting with `# ` before the first token of a sentence are copied
/// through unchanged.
///
/// Empty input produces empty output.
pub fn annotate_stream<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    processor: &mut SentenceProcessor,
    conllu_comments: bool,
) -> Result<StreamStats> {
    let mut lines = input.lines();
    let Some(header) = lines.next().transpose()? else {
        return Ok(StreamStats::default());
    };

    let columns: Vec<&str> = header.split(FIELD_SEPARATOR).collect();
    let fields = FieldMap::resolve(&columns)?;
    writeln!(output, "{header}{FIELD_SEPARATOR}{}", TARGET_FIELDS.join("\t"))?;

    let mut stats = StreamStats::default();
    let mut pending = PendingSentence::default();

    for (i, line) in lines.enumerate() {
        let line = line?;
        let line_no = i + 2;

        if line.is_empty() {
            if !pending.is_empty() {
                flush_sentence(&mut pending, output, processor, &fields, &mut stats)?;
            }
            continue;
        }

        if pending.is_empty() {
            pending.first_line = line_no;
        }
        if conllu_comments && pending.rows.is_empty() && line.starts_with(COMMENT_PREFIX) {
            pending.comments.push(line);
        } else {
            pending
                .rows
                .push(line.split(FIELD_SEPARATOR).map(str::to_string).collect());
        }
    }

    if !pending.is_empty() {
        flush_sentence(&mut pending, output, processor, &fields, &mut stats)?;
    }
    Ok(stats)
}

fn flush_sentence<W: Write>(
    pending: &mut PendingSentence,
    output: &mut W,
    processor: &mut SentenceProcessor,
    fields: &FieldMap,
    stats: &mut StreamStats,
) -> Result<()> {
    processor
        .process_sentence(&mut pending.rows, fields)
        .map_err(|e| e.at_line(pending.first_line))?;

    for comment in &pending.comments {
        writeln!(output, "{comment}")?;
    }
    for row in &pending.rows {
        writeln!(output, "{}", row.join("\t"))?;
    }
    writeln!(output)?;

    stats.sentences += 1;
    stats.tokens += pending.rows.len();
    *pending = PendingSentence::default();
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
