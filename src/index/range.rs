use serde::{Deserialize, Serialize};

/// Upper bound of a key range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyBound {
    /// Exclusive bound: only keys sorting strictly below it are in range.
    Before(Vec<String>),
    /// No upper bound.
    Unbounded,
}

/// Half-open range over segment-sequence keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRange {
    pub start: Vec<String>,
    pub end: KeyBound,
}

impl KeyRange {
    /// Range covering exactly the keys whose leading segments equal `prefix`.
    ///
    /// The exclusive end is the prefix with a NUL appended to its final
    /// segment: under segment-sequence ordering no key can sort between the
    /// last prefixed key and that bound.
    pub fn prefix(prefix: &[String]) -> Self {
        if prefix.is_empty() {
            return Self {
                start: Vec::new(),
                end: KeyBound::Unbounded,
            };
        }
        let mut end = prefix.to_vec();
        if let Some(last) = end.last_mut() {
            last.push('\0');
        }
        Self {
            start: prefix.to_vec(),
            end: KeyBound::Before(end),
        }
    }

    pub fn contains(&self, key: &[String]) -> bool {
        if key < self.start.as_slice() {
            return false;
        }
        match &self.end {
            KeyBound::Before(end) => key < end.as_slice(),
            KeyBound::Unbounded => true,
        }
    }
}
