use std::fmt::{self, Display, Write};

/// An HTML fragment that is safe to insert verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a literal piece of HTML.
    pub fn raw(&mut self, literal: &'static str) -> &mut Self {
        self.0.push_str(literal);
        self
    }

    /// Appends `value` as escaped text. Also used for attribute values.
    pub fn text(&mut self, value: impl Display) -> &mut Self {
        let _ = write!(Escaper(&mut self.0), "{}", value);
        self
    }

    /// Appends an already built fragment.
    pub fn append(&mut self, fragment: &Markup) -> &mut Self {
        self.0.push_str(&fragment.0);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let _ = Escaper(&mut out).write_str(value);
    out
}

struct Escaper<'a>(&'a mut String);

impl Write for Escaper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            match ch {
                '&' => self.0.push_str("&amp;"),
                '<' => self.0.push_str("&lt;"),
                '>' => self.0.push_str("&gt;"),
                '"' => self.0.push_str("&quot;"),
                '\'' => self.0.push_str("&#39;"),
                other => self.0.push(other),
            }
        }
        Ok(())
    }
}
