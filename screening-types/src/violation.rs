use std::fmt;

use crate::FieldPath;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: FieldPath,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<FieldPath>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every constraint a snapshot failed, in check order.
///
/// Never empty when returned from validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, path: impl Into<FieldPath>, message: impl Into<String>) {
        self.items.push(Violation::new(path, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.items.iter()
    }

    /// Check if any violation was recorded exactly at `path`.
    pub fn cites(&self, path: &FieldPath) -> bool {
        self.items.iter().any(|v| &v.path == path)
    }

    /// Violations at or below `path`.
    pub fn under<'a>(&'a self, path: &'a FieldPath) -> impl Iterator<Item = &'a Violation> + 'a {
        self.items.iter().filter(move |v| v.path.starts_with(path))
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items.len() {
            0 => write!(f, "no violations"),
            1 => write!(f, "{}", self.items[0]),
            n => {
                write!(f, "{n} violations: ")?;
                for (i, item) in self.items.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_violation() {
        let mut violations = Violations::new();
        violations.push("demographics.age", "age must be positive");
        violations.push("demographics.sex", "sex must be 'male' or 'female'");

        assert_eq!(
            violations.to_string(),
            "2 violations: demographics.age: age must be positive; \
             demographics.sex: sex must be 'male' or 'female'"
        );
    }

    #[test]
    fn under_filters_by_prefix() {
        let mut violations = Violations::new();
        violations.push("survey_responses.ess_responses[1]", "out of range");
        violations.push("survey_responses.ess_responses[6]", "out of range");
        violations.push("demographics.age", "age must be positive");

        let ess = FieldPath::new("survey_responses.ess_responses");
        assert_eq!(violations.under(&ess).count(), 2);
        assert!(violations.cites(&ess.index(6)));
        assert!(!violations.cites(&ess));
    }

    #[test]
    fn empty_into_result_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }
}
