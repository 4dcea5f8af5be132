//! Text graph format.
//!
//! The first token is the vertex count `N`. It is followed by
//! whitespace-separated `row col weight` triples with 1-indexed vertices,
//! read until end of input. A weight of 0 means "no edge"; when the same
//! pair appears twice the later triple wins, so a later 0 clears the edge.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::graph::{DirectedGraph, MutableGraph, Weight};
use crate::{Error, Result};

/// Reads and parses a graph file
pub fn load_graph<W: Weight>(path: impl AsRef<Path>) -> Result<DirectedGraph<W>> {
    let path = path.as_ref();
    log::debug!("loading graph from {}", path.display());
    let input = fs::read_to_string(path)?;
    parse_graph(&input)
}

/// Parses a graph from its text form
pub fn parse_graph<W: Weight>(input: &str) -> Result<DirectedGraph<W>> {
    let mut tokens = Tokens::new(input);

    let vertices: usize = match tokens.next() {
        Some((line, token)) => parse_token(line, token, "vertex count")?,
        None => return Err(Error::UnexpectedEof { line: 1, expected: "vertex count" }),
    };
    if vertices == 0 {
        return Err(Error::EmptyGraph);
    }

    let mut graph = DirectedGraph::with_capacity(vertices);
    while let Some((line, token)) = tokens.next() {
        let row: usize = parse_token(line, token, "row")?;
        let col: usize = tokens.expect("column")?;
        let weight: W = tokens.expect_weight()?;

        let from = to_index(row, vertices)?;
        let to = to_index(col, vertices)?;
        if weight.is_zero() {
            graph.remove_edge(from, to);
        } else {
            graph.add_edge(from, to, weight);
        }
    }

    log::debug!("parsed graph with {} vertices", vertices);
    Ok(graph)
}

fn to_index(label: usize, vertices: usize) -> Result<usize> {
    if label == 0 || label > vertices {
        return Err(Error::InvalidVertex(label));
    }
    Ok(label - 1)
}

fn parse_token<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("expected {}, found {:?}", what, token),
    })
}

/// Whitespace tokenizer that remembers which line each token came from
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            lines: input.lines().enumerate(),
            current: None,
            last_line: 1,
        }
    }

    fn expect<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        match self.next() {
            Some((line, token)) => parse_token(line, token, what),
            None => Err(Error::UnexpectedEof { line: self.last_line, expected: what }),
        }
    }

    fn expect_weight<W: Weight>(&mut self) -> Result<W> {
        match self.next() {
            Some((line, token)) => W::from_str_radix(token, 10).map_err(|_| Error::Parse {
                line,
                message: format!("expected weight, found {:?}", token),
            }),
            None => Err(Error::UnexpectedEof { line: self.last_line, expected: "weight" }),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(word) = words.next() {
                    return Some((*line, word));
                }
            }
            let (index, text) = self.lines.next()?;
            self.last_line = index + 1;
            self.current = Some((index + 1, text.split_whitespace()));
        }
    }
}
