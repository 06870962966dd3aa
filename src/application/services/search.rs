//! Interactive tag search
//!
//! Prompts for tags until the sentinel (or end of input) and reports the
//! first pre-order match for each.

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Node, TaggedTree};
use crate::infrastructure::TagSource;

/// Tag that ends the search loop unless configured otherwise.
pub const DEFAULT_SENTINEL: char = '0';

/// Result of a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Found(&'a Node),
    NotFound(char),
}

/// Counters for one search session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub queries: usize,
    pub hits: usize,
    pub misses: usize,
}

/// Service running lookups against a built tree.
#[derive(Debug, Clone)]
pub struct SearchService {
    sentinel: char,
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL)
    }
}

impl SearchService {
    pub fn new(sentinel: char) -> Self {
        Self { sentinel }
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    pub fn prompt(&self) -> String {
        format!(
            "Enter Search Tag (Enter {} to Exit Application) : ",
            self.sentinel
        )
    }

    /// Look up `tag` once and write the result line.
    pub fn lookup<'t, W: Write + ?Sized>(
        &self,
        tree: &'t TaggedTree,
        tag: char,
        out: &mut W,
    ) -> ApplicationResult<SearchOutcome<'t>> {
        match tree.find(tag) {
            Some(node) => {
                write!(out, "Search Result - \t").with_context("write search result")?;
                node.render(out).with_context("write search result")?;
                Ok(SearchOutcome::Found(node))
            }
            None => {
                writeln!(out, "Didn't Find Node {}", tag).with_context("write search result")?;
                Ok(SearchOutcome::NotFound(tag))
            }
        }
    }

    /// Prompt-read-lookup loop until the sentinel or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run<S, W>(
        &self,
        tree: &TaggedTree,
        input: &mut S,
        out: &mut W,
    ) -> ApplicationResult<SearchSummary>
    where
        S: TagSource + ?Sized,
        W: Write + ?Sized,
    {
        let prompt = self.prompt();
        let mut summary = SearchSummary::default();

        loop {
            write!(out, "{}", prompt).with_context("write prompt")?;
            out.flush().with_context("flush prompt")?;

            let tag = match input.next_tag().with_context("read search tag")? {
                Some(tag) => tag,
                None => {
                    debug!("run: end of input");
                    writeln!(out).with_context("write prompt")?;
                    break;
                }
            };
            if tag == self.sentinel {
                debug!("run: sentinel '{}'", tag);
                break;
            }

            summary.queries += 1;
            match self.lookup(tree, tag, out)? {
                SearchOutcome::Found(_) => summary.hits += 1,
                SearchOutcome::NotFound(_) => summary.misses += 1,
            }
        }

        debug!("run: {:?}", summary);
        Ok(summary)
    }
}
