use std::fmt;

/// A trimmed, non-empty word ready to be sent to the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Returns `None` for blank input so no request can be built from it
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();

        if text.is_empty() {
            return None;
        }

        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
