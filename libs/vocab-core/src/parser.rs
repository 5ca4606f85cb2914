//! Parser for word-list files.
//!
//! # Format
//! ```text
//! # S
//!
//! W: Sojourn
//! D: A temporary stay.
//! M: Journey for a short day.
//!
//! W: Solace
//! D: Comfort in sorrow.
//! ```
//!
//! `M:` is optional. Lines without a prefix continue the previous field and
//! lines starting with `#` are comments. Text before the first `W:` is an
//! error.

use crate::error::{ParseError, Result};
use crate::types::VocabEntry;

/// Parse word-list content into entries, in file order.
pub fn parse(content: &str) -> Result<Vec<VocabEntry>> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new();
    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }

    parser.finalize()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Word,
    Definition,
    Mnemonic,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Definition => "definition",
            Self::Mnemonic => "mnemonic",
        }
    }
}

struct EntryBuilder {
    word: Option<String>,
    definition: Option<String>,
    mnemonic: Option<String>,
    start_line: usize,
}

impl EntryBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            word: None,
            definition: None,
            mnemonic: None,
            start_line,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Word => &mut self.word,
            Field::Definition => &mut self.definition,
            Field::Mnemonic => &mut self.mnemonic,
        }
    }

    fn build(self) -> Result<VocabEntry> {
        let word = self.word.unwrap_or_default();
        let word = word.trim();
        if word.is_empty() {
            return Err(ParseError::EmptyWord {
                line: self.start_line,
            });
        }

        let definition = self.definition.unwrap_or_default();
        let definition = definition.trim();
        if definition.is_empty() {
            return Err(ParseError::MissingDefinition {
                line: self.start_line,
            });
        }

        let mnemonic = self.mnemonic.unwrap_or_default();
        Ok(VocabEntry::new(word, definition, mnemonic.trim()))
    }
}

struct Parser {
    entries: Vec<VocabEntry>,
    current: Option<EntryBuilder>,
    current_field: Option<Field>,
    buffer: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            current_field: None,
            buffer: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Field(Field::Word, text) => self.handle_word(text, line_num)?,
            LineType::Field(field, text) => self.handle_field(field, text, line_num)?,
            LineType::Comment => {}
            LineType::Text(_) if self.current.is_none() => {
                return Err(ParseError::OrphanText { line: line_num });
            }
            LineType::Text(text) => self.buffer.push(text.to_string()),
            LineType::Empty => self.buffer.push(String::new()),
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("W:") {
            LineType::Field(Field::Word, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("D:") {
            LineType::Field(Field::Definition, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("M:") {
            LineType::Field(Field::Mnemonic, rest.trim())
        } else if trimmed.starts_with('#') {
            LineType::Comment
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(trimmed)
        }
    }

    fn handle_word(&mut self, text: &str, line_num: usize) -> Result<()> {
        self.finish_entry()?;

        if text.is_empty() {
            return Err(ParseError::EmptyWord { line: line_num });
        }

        self.current = Some(EntryBuilder::new(line_num));
        self.current_field = Some(Field::Word);
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn handle_field(&mut self, field: Field, text: &str, line_num: usize) -> Result<()> {
        if self.current.is_none() {
            return Err(ParseError::MissingWord {
                field: field.name(),
                line: line_num,
            });
        }

        self.flush_buffer();

        if let Some(ref mut entry) = self.current {
            if entry.slot(field).is_some() {
                return Err(ParseError::DuplicateField {
                    field: field.name(),
                    line: line_num,
                });
            }
        }

        self.current_field = Some(field);
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let content = self.buffer.join("\n");
        self.buffer.clear();

        if let (Some(entry), Some(field)) = (self.current.as_mut(), self.current_field) {
            *entry.slot(field) = Some(content);
        }
    }

    fn finish_entry(&mut self) -> Result<()> {
        self.flush_buffer();
        self.current_field = None;

        if let Some(entry) = self.current.take() {
            self.entries.push(entry.build()?);
        }
        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<VocabEntry>> {
        self.finish_entry()?;
        Ok(self.entries)
    }
}

enum LineType<'a> {
    Field(Field, &'a str),
    Comment,
    Text(&'a str),
    Empty,
}
