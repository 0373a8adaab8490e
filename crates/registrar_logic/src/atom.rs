//! Ground atoms.

use std::fmt;

/// A ground propositional atom, stored as its normalized text.
///
/// The canonical form is `predicate(arg1, arg2)` with each argument
/// trimmed of surrounding whitespace and separated by `", "`. A bare
/// predicate with no argument list (`graduated`) is also an atom. Two
/// atoms are equal iff their normalized strings are equal; arguments are
/// flat text, never nested terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Atom(String);

impl Atom {
    /// Builds an atom from a predicate and arguments, normalizing as it
    /// renders.
    #[must_use]
    pub fn new<S: AsRef<str>>(predicate: &str, args: impl IntoIterator<Item = S>) -> Self {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().trim().to_string())
            .collect();
        if args.is_empty() {
            Self(predicate.trim().to_string())
        } else {
            Self(format!("{}({})", predicate.trim(), args.join(", ")))
        }
    }

    /// Parses free-form text into a normalized atom.
    ///
    /// Text without a well-formed `(...)` suffix becomes a bare-predicate
    /// atom of the trimmed text. Arguments split on commas; nested
    /// parentheses are out of scope.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some((predicate, rest)) = text.split_once('(') {
            if let Some(args) = rest.strip_suffix(')') {
                return Self::new(predicate, args.split(','));
            }
        }
        Self(text.to_string())
    }

    /// Returns the normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the predicate name.
    #[must_use]
    pub fn predicate(&self) -> &str {
        self.0.split_once('(').map_or(self.0.as_str(), |(p, _)| p)
    }

    /// Returns the argument list (empty for a bare predicate).
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        match self.0.split_once('(') {
            Some((_, rest)) => rest
                .strip_suffix(')')
                .unwrap_or(rest)
                .split(", ")
                .collect(),
            None => Vec::new(),
        }
    }
}

impl From<&str> for Atom {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({})", self.0)
    }
}
