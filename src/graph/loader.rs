//! Edge-list parsing.
//!
//! The input is plain text with one edge per line: two vertex identifiers and
//! an integer weight separated by whitespace. Lines with fewer than three
//! tokens are skipped; a third token that is not a non-negative integer aborts
//! the whole load. Tokens after the third are ignored.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use num_traits::{PrimInt, Unsigned};

use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::{Error, Result};

/// One parsed line of the edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<'a, W> {
    pub a: &'a str,
    pub b: &'a str,
    pub weight: W,
}

/// Parses a single line. `line_no` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for lines with fewer than three tokens.
pub fn parse_line<W>(line: &str, line_no: usize) -> Result<Option<EdgeRecord<'_, W>>>
where
    W: PrimInt + Unsigned + Debug,
{
    let mut tokens = line.split_whitespace();
    let (a, b, raw) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), Some(raw)) => (a, b, raw),
        _ => return Ok(None),
    };

    let weight = parse_weight(raw, line_no)?;
    Ok(Some(EdgeRecord { a, b, weight }))
}

fn parse_weight<W>(token: &str, line_no: usize) -> Result<W>
where
    W: PrimInt + Unsigned + Debug,
{
    if let Ok(weight) = W::from_str_radix(token, 10) {
        return Ok(weight);
    }

    // Unsigned parsing rejects any '-' sign, so tell "-0" and real negatives apart
    if let Some(digits) = token.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if digits.bytes().all(|b| b == b'0') {
                return Ok(W::zero());
            }
            return Err(Error::NegativeWeight {
                line: line_no,
                token: token.to_owned(),
            });
        }
    }

    Err(Error::MalformedWeight {
        line: line_no,
        token: token.to_owned(),
    })
}

/// Adds the edge on `line` to `graph`. Returns false if the line was skipped.
fn ingest_line<W, G>(graph: &mut G, line: &str, line_no: usize) -> Result<bool>
where
    W: PrimInt + Unsigned + Debug,
    G: MutableGraph<W>,
{
    match parse_line::<W>(line, line_no)? {
        Some(edge) => {
            graph.add_edge(edge.a, edge.b, edge.weight);
            Ok(true)
        }
        None => {
            debug!("skipping line {}: fewer than 3 fields", line_no);
            Ok(false)
        }
    }
}

/// Feeds numbered lines through `ingest_line`, counting skipped ones
fn ingest_lines<W, G, I, S>(graph: &mut G, lines: I) -> Result<usize>
where
    W: PrimInt + Unsigned + Debug,
    G: MutableGraph<W>,
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut skipped = 0;
    for (idx, line) in lines.into_iter().enumerate() {
        if !ingest_line::<W, G>(graph, line?.as_ref(), idx + 1)? {
            skipped += 1;
        }
    }
    Ok(skipped)
}

/// Adds every edge from `lines` to `graph`
///
/// Returns the number of lines skipped for having too few tokens.
pub fn load_into<W, G, I, S>(graph: &mut G, lines: I) -> Result<usize>
where
    W: PrimInt + Unsigned + Debug,
    G: MutableGraph<W>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ingest_lines::<W, G, _, _>(graph, lines.into_iter().map(Ok))
}

/// Builds a graph from an iterator of lines
pub fn load_from_lines<W, I, S>(lines: I) -> Result<UndirectedGraph<W>>
where
    W: PrimInt + Unsigned + Debug,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = UndirectedGraph::new();
    let skipped = load_into(&mut graph, lines)?;
    log_summary(&graph, skipped);
    Ok(graph)
}

/// Builds a graph from a buffered reader, consuming it once
pub fn load_graph<W, R>(reader: R) -> Result<UndirectedGraph<W>>
where
    W: PrimInt + Unsigned + Debug,
    R: BufRead,
{
    let mut graph = UndirectedGraph::new();
    let lines = reader.lines().map(|line| line.map_err(Error::from));
    let skipped = ingest_lines::<W, _, _, _>(&mut graph, lines)?;
    log_summary(&graph, skipped);
    Ok(graph)
}

/// Opens `path` and builds a graph from its contents
///
/// The file is closed before returning, whether loading succeeded or not.
pub fn load_graph_from_path<W, P>(path: P) -> Result<UndirectedGraph<W>>
where
    W: PrimInt + Unsigned + Debug,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("loading edge list from {}", path.display());
    load_graph(BufReader::new(file)).map_err(|err| match err {
        Error::Read(source) => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

fn log_summary<W>(graph: &UndirectedGraph<W>, skipped: usize)
where
    W: PrimInt + Unsigned + Debug,
{
    info!(
        "loaded graph with {} vertices and {} edges ({} lines skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        skipped
    );
}
