//! SVG markup parser
//!
//! Parses a variant's markup into an ordered tree of elements. A variant
//! source is a fragment: a sequence of sibling top-level nodes, usually a
//! single `<svg>` wrapper. Comments are preserved as tree nodes; their
//! removal belongs to the optimizer, not the parser.

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::svg::model::{Content, Element};

#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse a markup fragment into its top-level content sequence
    pub fn parse(&mut self) -> Result<Vec<Content>> {
        let mut contents = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                break;
            }
            if let Some(content) = self.parse_content()? {
                contents.push(content);
            }
        }

        Ok(contents)
    }

    fn parse_content(&mut self) -> Result<Option<Content>> {
        if self.cursor.current() != Some(b'<') {
            return Ok(self.parse_text()?.map(Content::Text));
        }

        if self.cursor.peek(1) == Some(b'?') {
            self.cursor.advance_by(2);
            self.skip_until(b"?>")?;
            return Ok(None);
        }

        if self.cursor.peek_bytes(4) == Some(b"<!--") {
            return Ok(Some(Content::Comment(self.parse_comment()?)));
        }

        if self.cursor.peek(1) == Some(b'!') {
            // DOCTYPE or CDATA, neither carries icon geometry
            self.cursor.advance_by(2);
            if self.cursor.peek_bytes(7) == Some(b"[CDATA[") {
                self.skip_until(b"]]>")?;
            } else {
                self.skip_until(b">")?;
            }
            return Ok(None);
        }

        if self.cursor.peek(1) == Some(b'/') {
            return Err(self.error_here("unexpected closing tag"));
        }

        Ok(Some(Content::Element(self.parse_element()?)))
    }

    fn parse_element(&mut self) -> Result<Element> {
        self.expect_byte(b'<')?;
        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.current() == Some(b'/') {
            self.cursor.advance();
            self.expect_byte(b'>')?;
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        loop {
            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'/') {
                self.cursor.advance_by(2);
                let close_name = self.parse_name()?;
                if close_name != name {
                    return Err(self.error_here("mismatched closing tag"));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.is_eof() {
                return Err(self.error_here("unterminated element"));
            }

            if let Some(child) = self.parse_content()? {
                children.push(child);
            }
        }

        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, String>> {
        let mut attrs = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => return Err(self.error_here("unexpected end of input")),
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains_key(&name) {
                return Err(self.error_here("duplicate attribute"));
            }
            attrs.insert(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            _ => return Err(self.error_here("expected quoted attribute value")),
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = self.bytes_to_string(raw)?;
                return self.decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_here("unterminated attribute value"))
    }

    fn parse_text(&mut self) -> Result<Option<String>> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = self.bytes_to_string(raw)?;
        let text = self.decode_entities(&text)?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text.trim().to_string()))
        }
    }

    fn parse_comment(&mut self) -> Result<String> {
        // cursor at "<!--"
        self.cursor.advance_by(4);
        let start = self.cursor.pos();
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(3) == Some(b"-->") {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance_by(3);
                return self.bytes_to_string(raw);
            }
            self.cursor.advance();
        }
        Err(self.error_here("unterminated comment"))
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        let Some(first) = self.cursor.current() else {
            return Err(self.error_here("expected name"));
        };
        if !is_name_start(first) {
            return Err(self.error_here("invalid name"));
        }

        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let raw = self.cursor.slice_from(start);
        self.bytes_to_string(raw)
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(pattern.len()) == Some(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_here("unterminated markup"))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.current() == Some(expected) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error_here("unexpected token"))
        }
    }

    fn decode_entities(&self, input: &str) -> Result<String> {
        let mut result = String::new();
        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '&' {
                result.push(ch);
                continue;
            }

            let mut entity = String::new();
            for next in chars.by_ref() {
                if next == ';' {
                    break;
                }
                entity.push(next);
            }

            let decoded = match entity.as_str() {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => decode_numeric_entity(&entity),
            };

            match decoded {
                Some(ch) => result.push(ch),
                None => return Err(self.error_here("invalid entity")),
            }
        }

        Ok(result)
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| self.error_here("invalid utf-8"))
    }

    fn error_here(&self, message: &str) -> Error {
        Error::malformed_at(message, self.cursor.position())
    }
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
