use std::fmt;

/// A path to an answer field, e.g., `"survey_responses.ess_responses[3]"`.
///
/// Used to key validation failures so callers can map them back to the
/// wizard step that produced the offending value. Segments use the wire
/// field names; list elements are addressed with `[index]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    path: String,
}

impl FieldPath {
    /// Create a new path from a dot-separated string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Create an empty path (the snapshot root).
    pub fn empty() -> Self {
        Self {
            path: String::new(),
        }
    }

    /// Append a child segment to this path, returning a new path.
    pub fn child(&self, name: &str) -> Self {
        if name.is_empty() {
            self.clone()
        } else if self.path.is_empty() {
            Self::new(name)
        } else {
            Self::new(format!("{}.{}", self.path, name))
        }
    }

    /// Address an element of the list at this path.
    pub fn index(&self, index: usize) -> Self {
        Self::new(format!("{}[{index}]", self.path))
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the first segment, if any.
    ///
    /// For answer paths this is the snapshot slot (`demographics`, ...).
    pub fn first(&self) -> Option<&str> {
        self.path
            .split('.')
            .next()
            .map(|segment| segment.split('[').next().unwrap_or(segment))
            .filter(|segment| !segment.is_empty())
    }

    /// Check whether this path equals `other` or lies below it.
    pub fn starts_with(&self, other: &FieldPath) -> bool {
        if other.is_empty() || self.path == other.path {
            return true;
        }
        self.path.starts_with(&other.path)
            && matches!(
                self.path.as_bytes().get(other.path.len()),
                Some(b'.') | Some(b'[')
            )
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
