//! Frontend Models
//!
//! Task collection, input draft and per-item completion flag.

/// Returns true when `text` has nothing but whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Ordered task texts owned by the root component.
///
/// Order is insertion order. Duplicate texts are allowed and are told apart
/// only by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoCollection(Vec<String>);

impl TodoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task, returning its index.
    pub fn add(&mut self, text: impl Into<String>) -> usize {
        self.0.push(text.into());
        self.0.len() - 1
    }

    /// Remove the first task equal to `text`, returning the index it held.
    /// Absent values leave the collection untouched.
    pub fn delete(&mut self, text: &str) -> Option<usize> {
        let index = self.0.iter().position(|t| t == text)?;
        self.0.remove(index);
        Some(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of tasks whose text equals `text`
    pub fn occurrences(&self, text: &str) -> usize {
        self.0.iter().filter(|t| *t == text).count()
    }
}

impl<S: Into<String>> FromIterator<S> for TodoCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Draft text of the input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    value: String,
}

impl Draft {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Accept the draft if it is not blank.
    ///
    /// The returned text keeps its surrounding whitespace; trimming is only
    /// used for the emptiness check. An accepted draft is cleared, a blank
    /// one is left exactly as typed.
    pub fn submit(&mut self) -> Option<String> {
        if is_blank(&self.value) {
            return None;
        }
        Some(std::mem::take(&mut self.value))
    }
}

/// Display-only completion flag of a rendered item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion(bool);

impl Completion {
    pub fn is_completed(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}
