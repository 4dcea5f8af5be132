use std::path::PathBuf;

use crate::{Error, Result};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The `P` / `Len` / `Pred` table
    Table,
    /// One JSON document
    Json,
}

/// Configuration for one run of the `dsssp` binary
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Source vertex, 0-indexed
    pub source: usize,
    /// Execution units requested; must equal the vertex count when set
    pub units: Option<usize>,
    pub worker_threads: Option<usize>,
    pub format: OutputFormat,
    /// Check the result against the graph before printing
    pub verify: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("graph.txt"),
            source: 0,
            units: None,
            worker_threads: None,
            format: OutputFormat::Table,
            verify: false,
        }
    }
}

pub const USAGE: &str = "usage: dsssp [GRAPH_FILE] [--source N] [--units N] [--threads N] [--json] [--verify]";

impl RunConfig {
    /// Parses command line arguments (without the program name).
    ///
    /// Vertex labels on the command line are 1-indexed like the graph file.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter();
        let mut input_seen = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let label: usize = parse_value(&arg, args.next())?;
                    if label == 0 {
                        return Err(Error::InvalidArgument("--source is 1-indexed".to_string()));
                    }
                    config.source = label - 1;
                }
                "--units" => config.units = Some(parse_value(&arg, args.next())?),
                "--threads" => config.worker_threads = Some(parse_value(&arg, args.next())?),
                "--json" => config.format = OutputFormat::Json,
                "--verify" => config.verify = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidArgument(format!("unknown flag {}", flag)));
                }
                path if !input_seen => {
                    config.input = PathBuf::from(path);
                    input_seen = true;
                }
                extra => {
                    return Err(Error::InvalidArgument(format!("unexpected argument {}", extra)));
                }
            }
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", flag)))?;
    value
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{} expects a number, got {:?}", flag, value)))
}
