use std::fmt;

/// Append-only STF output: one entry per line, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StfDocument {
    lines: Vec<String>,
}

impl StfDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a `[name]` section.
    pub fn section(&mut self, name: &str) {
        self.lines.push(format!("[{name}]"));
    }

    /// Appends a `key=value` line to the current section.
    pub fn entry(&mut self, key: impl fmt::Display, value: impl fmt::Display) {
        self.lines.push(format!("{key}={value}"));
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Section names in document order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter_map(|line| line.strip_prefix('[')?.strip_suffix(']'))
    }

    /// Value of `key` inside `section`, if both exist.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let mut in_section = false;
        for line in &self.lines {
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_section = name == section;
                continue;
            }
            if in_section {
                if let Some((k, v)) = line.split_once('=') {
                    if k == key {
                        return Some(v);
                    }
                }
            }
        }
        None
    }

    /// All lines, each terminated by `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StfDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
