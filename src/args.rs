use std::fmt;

/// Per-run switches picked out of the raw command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub skip_publish: bool,
    /// Zero-based offset into the trend list.
    pub initial_row_index: usize,
}

/// Recoverable problems with the command line. The run carries on with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgWarning {
    InvalidRow(String),
}

impl fmt::Display for ArgWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgWarning::InvalidRow(arg) => write!(
                f,
                "Ignoring `{arg}`: expected --row<N> with N >= 1, using the first trend row"
            ),
        }
    }
}

/// First-match scan over the arguments. Unknown arguments are skipped and a
/// malformed `--row*` falls back to row 0 instead of failing the run.
pub fn parse_run_options<S: AsRef<str>>(args: &[S]) -> (RunOptions, Vec<ArgWarning>) {
    let mut options = RunOptions::default();
    let mut warnings = Vec::new();

    options.skip_publish = args
        .iter()
        .any(|arg| matches!(arg.as_ref(), "--skip-publish" | "--no-publish"));

    let row_arg = args
        .iter()
        .map(AsRef::as_ref)
        .find(|arg| arg.starts_with("--row"));

    if let Some(arg) = row_arg {
        match arg.strip_prefix("--row").map(str::parse::<usize>) {
            Some(Ok(row)) if row >= 1 => options.initial_row_index = row - 1,
            _ => warnings.push(ArgWarning::InvalidRow(arg.to_string())),
        }
    }

    (options, warnings)
}
