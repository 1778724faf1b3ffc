//! Minimal INI codec for the record files.
//!
//! Accepted syntax: `[section]` headers, `key = value` or `key: value` pairs,
//! blank lines, and `#` / `;` comment lines. Section names are case-sensitive,
//! keys are matched case-insensitively (older files carry lowercased keys).
//!
//! Values are escaped on render so any string survives a round trip:
//! `\\`, `\n`, `\r`, `\t`, and `\s` for a space at either end of the value.
//! On parse, unknown escapes are kept literally, so hand-written values with
//! stray backslashes still load.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IniError {
    #[error("line {0}: key/value pair outside of any section")]
    NoSection(usize),
    #[error("line {0}: expected `key = value`")]
    MissingDelimiter(usize),
    #[error("line {0}: malformed section header")]
    BadHeader(usize),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ini {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Ini {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key` in `section`, creating the section on first use.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let idx = match self.sections.iter().position(|s| s.name == section) {
            Some(i) => i,
            None => {
                self.sections.push(Section { name: section.to_string(), entries: Vec::new() });
                self.sections.len() - 1
            }
        };
        let entries = &mut self.sections[idx].entries;
        if let Some(e) = entries.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            e.1 = value.to_string();
        } else {
            entries.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn parse(src: &str) -> Result<Self, IniError> {
        let mut ini = Ini::new();
        let mut current: Option<String> = None;
        for (idx, raw) in src.lines().enumerate() {
            let lineno = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(rest) = line.strip_prefix('[') {
                let name = rest.strip_suffix(']').ok_or(IniError::BadHeader(lineno))?.trim();
                if name.is_empty() {
                    return Err(IniError::BadHeader(lineno));
                }
                if !ini.sections.iter().any(|s| s.name == name) {
                    ini.sections.push(Section { name: name.to_string(), entries: Vec::new() });
                }
                current = Some(name.to_string());
                continue;
            }
            let Some(section) = current.as_deref() else {
                return Err(IniError::NoSection(lineno));
            };
            // first of '=' or ':' splits, so `server = host:8111` keeps its port
            let pos = line.find(['=', ':']).ok_or(IniError::MissingDelimiter(lineno))?;
            let key = line[..pos].trim();
            if key.is_empty() {
                return Err(IniError::MissingDelimiter(lineno));
            }
            ini.set(section, key, &unescape(line[pos + 1..].trim()));
        }
        Ok(ini)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for s in &self.sections {
            out.push('[');
            out.push_str(&s.name);
            out.push_str("]\n");
            for (k, v) in &s.entries {
                out.push_str(&format!("{k} = {}\n", escape(v)));
            }
            out.push('\n');
        }
        out
    }
}

fn escape(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' if i == 0 || i == last => out.push_str("\\s"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
