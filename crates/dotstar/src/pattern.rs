//! # Pattern
//!
//! [`Pattern`] is an immutable, cheaply clonable wrapper around pattern source text.
//! Construction never fails; malformed constructs are matched literally.
//!
//! Syntax:
//! * `^` - start anchor (first character only).
//! * `$` - end anchor (last character only).
//! * `.` - matches any single character.
//! * `c*` - zero or more repetitions of the preceding atom.
//! * anything else - a literal character.

use crate::alloc::string::String;
use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use core::fmt;

/// The start anchor character.
pub const START_ANCHOR: char = '^';

/// The end anchor character.
pub const END_ANCHOR: char = '$';

/// The wildcard character.
pub const WILDCARD: char = '.';

/// The repetition operator character.
pub const STAR: char = '*';

/// A single matchable unit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Matches exactly this character.
    Literal(char),

    /// Matches any character.
    Wildcard,
}

impl From<char> for Atom {
    fn from(c: char) -> Self {
        if c == WILDCARD {
            Self::Wildcard
        } else {
            Self::Literal(c)
        }
    }
}

impl Atom {
    /// Does this atom match the text character `c`?
    pub fn matches(
        &self,
        c: char,
    ) -> bool {
        match self {
            Self::Literal(lit) => *lit == c,
            Self::Wildcard => true,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Literal(c) => write!(f, "{c:?}"),
            Self::Wildcard => f.write_str("any"),
        }
    }
}

/// A pattern element, as the matcher will interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternToken {
    /// Leading `^`.
    StartAnchor,

    /// Trailing `$`.
    EndAnchor,

    /// A single atom.
    Atom(Atom),

    /// An atom followed by `*`.
    Star(Atom),
}

impl fmt::Display for PatternToken {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::StartAnchor => f.write_str("start"),
            Self::EndAnchor => f.write_str("end"),
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Star(atom) => write!(f, "{atom}*"),
        }
    }
}

/// Iterator over `(char offset, token)` pairs of a [`Pattern`].
///
/// See [`Pattern::tokens`].
#[derive(Debug, Clone)]
pub struct PatternTokens<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Iterator for PatternTokens<'_> {
    type Item = (usize, PatternToken);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos;
        let rest = &self.chars[pos..];

        let (token, width) = match rest {
            [] => return None,
            [START_ANCHOR, ..] if pos == 0 => (PatternToken::StartAnchor, 1),
            [c, STAR, ..] => (PatternToken::Star(Atom::from(*c)), 2),
            [END_ANCHOR] => (PatternToken::EndAnchor, 1),
            [c, ..] => (PatternToken::Atom(Atom::from(*c)), 1),
        };

        self.pos += width;
        Some((pos, token))
    }
}

/// An immutable match pattern.
///
/// Clones share the same underlying storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: Arc<str>,
    chars: Arc<[char]>,
}

impl Pattern {
    /// Build a new pattern.
    ///
    /// Never fails; see [`crate::validation`] for opt-in strict checks.
    ///
    /// ## Arguments
    /// * `source` - The pattern text.
    pub fn new<S: AsRef<str>>(source: S) -> Self {
        let source = source.as_ref();
        Self {
            source: Arc::from(source),
            chars: source.chars().collect::<Vec<_>>().into(),
        }
    }

    /// Get the pattern source text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get the pattern as an ordered character sequence.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The pattern length, in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is this the empty pattern (which matches everything)?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Does the pattern begin with the `^` anchor?
    pub fn is_anchored_start(&self) -> bool {
        self.chars.first() == Some(&START_ANCHOR)
    }

    /// Does the pattern end with a `$` anchor?
    ///
    /// Only a final `$` is an anchor; elsewhere (`"a$b"`, `"$*"`) it is a literal.
    pub fn is_anchored_end(&self) -> bool {
        matches!(self.tokens().last(), Some((_, PatternToken::EndAnchor)))
    }

    /// Iterate the pattern tokens, with their char offsets.
    ///
    /// Tokenization follows the matcher's case analysis exactly, so
    /// e.g. `"**"` yields a starred literal `'*'`.
    pub fn tokens(&self) -> PatternTokens<'_> {
        PatternTokens {
            chars: &self.chars,
            pos: 0,
        }
    }

    /// Does `text` match (or contain a match of) this pattern?
    ///
    /// See [`crate::matcher::is_match`].
    pub fn is_match(
        &self,
        text: &str,
    ) -> bool {
        crate::matcher::is_match(self, text)
    }
}

impl<S: AsRef<str>> From<S> for Pattern {
    fn from(source: S) -> Self {
        Self::new(source)
    }
}

impl core::str::FromStr for Pattern {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        String::from(pattern.as_str())
    }
}

impl fmt::Display for Pattern {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("expression", &&*self.source)
            .finish()
    }
}

/// Const pattern label, for `static` pattern tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstPattern(
    /// The pattern text.
    pub &'static str,
);

impl ConstPattern {
    /// Get the underlying pattern text.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Convert to [`Pattern`].
    pub fn to_pattern(&self) -> Pattern {
        (*self).into()
    }
}

impl From<ConstPattern> for Pattern {
    fn from(pattern: ConstPattern) -> Self {
        Pattern::new(pattern.0)
    }
}
