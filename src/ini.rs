//! Ordered INI document model.
//!
//! Used for companion files that must be edited in place. Sections, entries,
//! blank lines and comments keep their original order. Entries and comments
//! also keep their original text until a value is changed; section headers
//! are written back as `[name]`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Entry {
        key: String,
        value: String,
        /// Source text, dropped once the value is changed.
        raw: Option<String>,
    },
    /// Blank lines, comments and anything else kept verbatim.
    Verbatim(String),
}

impl Line {
    fn is_blank(&self) -> bool {
        matches!(self, Line::Verbatim(text) if text.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    /// `None` for lines that precede the first header.
    name: Option<String>,
    lines: Vec<Line>,
}

impl Section {
    fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            lines: Vec::new(),
        }
    }

    /// Replaces the value of an existing entry. Returns `false` if absent.
    fn replace(&mut self, key: &str, new_value: &str) -> bool {
        for line in &mut self.lines {
            if let Line::Entry { key: k, value, raw } = line {
                if *k == key {
                    *value = new_value.to_string();
                    *raw = None;
                    return true;
                }
            }
        }
        false
    }
}

/// An INI file held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl IniDocument {
    /// Parses INI text. Never fails; unrecognized lines are kept verbatim.
    pub fn parse(text: &str) -> Self {
        let mut sections = vec![Section {
            name: None,
            lines: Vec::new(),
        }];

        for raw in text.lines() {
            let line = raw.trim_end_matches('\r');
            let trimmed = line.trim();

            if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() >= 2 {
                sections.push(Section::named(&trimmed[1..trimmed.len() - 1]));
                continue;
            }

            let parsed = if trimmed.starts_with(';') || trimmed.starts_with('#') {
                None
            } else {
                line.split_once('=')
            };

            let entry = match parsed {
                Some((key, value)) if !key.trim().is_empty() => Line::Entry {
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                    raw: Some(line.to_string()),
                },
                _ => Line::Verbatim(line.to_string()),
            };

            if let Some(section) = sections.last_mut() {
                section.lines.push(entry);
            }
        }

        Self { sections }
    }

    /// Returns the value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Sets `key` in `section`, replacing an existing value.
    ///
    /// A new key is placed directly under the section header. A missing
    /// section is created ahead of every other section.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let value = value.into();
        let target = self.section_mut_or_insert(section);

        if target.replace(key, &value) {
            return;
        }

        target.lines.insert(
            0,
            Line::Entry {
                key: key.to_string(),
                value,
                raw: None,
            },
        );
    }

    /// Appends `key=value` at the end of `section`, ahead of trailing blanks.
    pub fn append(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let target = self.section_mut_or_insert(section);
        let position = target
            .lines
            .iter()
            .rposition(|line| !line.is_blank())
            .map_or(0, |i| i + 1);

        target.lines.insert(
            position,
            Line::Entry {
                key: key.to_string(),
                value: value.into(),
                raw: None,
            },
        );
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }

    fn section_mut_or_insert(&mut self, name: &str) -> &mut Section {
        let index = match self
            .sections
            .iter()
            .position(|s| s.name.as_deref() == Some(name))
        {
            Some(index) => index,
            None => {
                // Keep any preamble (lines before the first header) first.
                let at = usize::from(self.sections.first().is_some_and(|s| s.name.is_none()));
                self.sections.insert(at, Section::named(name));
                at
            }
        };
        &mut self.sections[index]
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            if let Some(name) = &section.name {
                writeln!(f, "[{name}]")?;
            }
            for line in &section.lines {
                match line {
                    Line::Entry { raw: Some(text), .. } => writeln!(f, "{text}")?,
                    Line::Entry { key, value, .. } => writeln!(f, "{key}={value}")?,
                    Line::Verbatim(text) => writeln!(f, "{text}")?,
                }
            }
        }
        Ok(())
    }
}
