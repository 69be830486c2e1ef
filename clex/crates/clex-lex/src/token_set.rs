//! Token collection and report rendering.
//!
//! A [`TokenSet`] is built through a [`TokenSetBuilder`] sized by the
//! counting pass. The builder hands out a finished set only when every slot
//! was filled, so a `TokenSet` is always complete.

use std::io;

use indexmap::IndexMap;
use tracing::{error, warn};

use crate::error::{RenderError, ScanError, ScanResult};
use crate::token::{Token, TokenKind};

/// Destination for report lines.
pub trait ReportSink {
    /// Writes one line, adding the line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<W: io::Write + ?Sized> ReportSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")
    }
}

/// Fixed-size token storage filled slot by slot.
#[derive(Debug)]
pub struct TokenSetBuilder {
    slots: Vec<Option<Token>>,
}

impl TokenSetBuilder {
    /// Reserves `size` empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::AllocationFailure`] if the slots cannot be
    /// reserved.
    pub fn with_size(size: usize) -> ScanResult<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| ScanError::AllocationFailure {
                what: "token slots",
                requested: size,
            })?;
        slots.resize_with(size, || None);
        Ok(Self { slots })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Fills slot `index`.
    ///
    /// # Errors
    ///
    /// An index past the end means more tokens were produced than counted,
    /// reported as [`ScanError::CountMismatch`].
    pub fn populate(&mut self, index: usize, token: Token) -> ScanResult<()> {
        let expected = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(token);
                Ok(())
            }
            None => Err(ScanError::CountMismatch {
                expected,
                actual: index + 1,
            }),
        }
    }

    /// Number of filled slots.
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Converts into a [`TokenSet`] if every slot is filled.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::CountMismatch`] if any slot is empty; the
    /// partially filled storage is dropped.
    pub fn finish(self) -> ScanResult<TokenSet> {
        let expected = self.slots.len();
        let actual = self.populated();
        if actual != expected {
            return Err(ScanError::CountMismatch { expected, actual });
        }
        let tokens = self.slots.into_iter().flatten().collect();
        Ok(TokenSet { tokens })
    }
}

/// A complete, ordered sequence of tokens.
///
/// # Example
///
/// ```
/// use clex_lex::{scan, TokenKind};
///
/// let set = scan("int x = 42;").unwrap();
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.count_kind(TokenKind::Keyword), 1);
/// assert_eq!(set.render_summary()[0], "Total tokens: 5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in source order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Consumes the set, returning the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens of `kind`.
    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind() == kind).count()
    }

    /// Per-kind totals, in summary order. Every kind is present.
    pub fn kind_counts(&self) -> IndexMap<TokenKind, usize> {
        let mut counts: IndexMap<TokenKind, usize> = TokenKind::SUMMARY_ORDER
            .iter()
            .map(|&kind| (kind, 0))
            .collect();
        for token in &self.tokens {
            *counts.entry(token.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Renders the listing: one four-line block per token, blocks separated
    /// by a blank line.
    pub fn render_listing(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tokens.len() * 5);
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(token.report_lines());
        }
        lines
    }

    /// Renders the summary report: totals, a blank line, then one four-line
    /// block per token each followed by a blank line.
    pub fn render_summary(&self) -> Vec<String> {
        let counts = self.kind_counts();
        let mut lines =
            Vec::with_capacity(TokenKind::SUMMARY_ORDER.len() + 2 + self.tokens.len() * 5);

        lines.push(format!("Total tokens: {}", self.tokens.len()));
        for (kind, count) in &counts {
            lines.push(format!("Total {}: {}", kind.summary_label(), count));
        }
        lines.push(String::new());

        for token in &self.tokens {
            lines.extend(token.report_lines());
            lines.push(String::new());
        }
        lines
    }

    /// Writes the summary report to `sink` line by line.
    ///
    /// Every line is attempted even after a failure. Returns the number of
    /// lines written.
    ///
    /// # Errors
    ///
    /// [`RenderError::SinkUnavailable`] if `sink` is `None`;
    /// [`RenderError::Incomplete`] if any line failed to write.
    pub fn write_summary(&self, sink: Option<&mut dyn ReportSink>) -> Result<usize, RenderError> {
        let Some(sink) = sink else {
            error!("no report sink to write the summary to");
            return Err(RenderError::SinkUnavailable);
        };

        let lines = self.render_summary();
        let attempted = lines.len();
        let mut failed = 0;
        for (number, line) in lines.iter().enumerate() {
            if let Err(err) = sink.write_line(line) {
                warn!(line = number + 1, %err, "failed to write report line");
                failed += 1;
            }
        }

        if failed > 0 {
            Err(RenderError::Incomplete { failed, attempted })
        } else {
            Ok(attempted)
        }
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
