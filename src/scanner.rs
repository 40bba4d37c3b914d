//! Per-line tokenizing for the structural decoder.
//!
//! A [`LineScanner`] wraps one raw input line and turns it into an indentation
//! depth plus an [`Entry`]: a field, an array header, or a bare token. It never
//! looks at other lines; everything that spans lines lives in the decoder.

use crate::literal::LiteralSpellings;
use crate::options::Delimiter;
use crate::{Error, Result, Value};

/// One recognised line shape (list markers are stripped before this).
#[derive(Debug, PartialEq)]
pub(crate) enum Entry<'a> {
    /// `key: value` or `key:` (empty value opens a nested object)
    Field { key: String, value: &'a str },
    /// `key[N]...:` or `[N]...:`
    Header(Header<'a>),
    /// No key at all; only valid as a root primitive or list item value
    Bare(&'a str),
}

/// A parsed array header: `key[#N|]{f1|f2}: inline`.
#[derive(Debug, PartialEq)]
pub(crate) struct Header<'a> {
    pub key: Option<String>,
    pub length: usize,
    pub delimiter: Delimiter,
    pub fields: Option<Vec<String>>,
    pub inline: &'a str,
}

/// Returns the body of a list item line, or `None` if the line has no marker.
pub(crate) fn list_item_body(content: &str) -> Option<&str> {
    if content == "-" {
        Some("")
    } else {
        content.strip_prefix("- ").map(str::trim)
    }
}

pub(crate) struct LineScanner<'a> {
    raw: &'a str,
    number: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(raw: &'a str, number: usize) -> Self {
        LineScanner { raw, number }
    }

    /// Splits the line into its depth and trimmed content.
    ///
    /// Returns `None` for blank lines.
    pub fn measure(&self, width: usize) -> Result<Option<(usize, &'a str)>> {
        if self.raw.trim().is_empty() {
            return Ok(None);
        }

        let spaces = self.raw.bytes().take_while(|&b| b == b' ').count();
        let rest = &self.raw[spaces..];
        if rest.starts_with('\t') {
            return Err(self.indentation("tabs are not allowed in indentation"));
        }
        if spaces % width != 0 {
            return Err(self.indentation(&format!(
                "indentation of {} spaces is not a multiple of {}",
                spaces, width
            )));
        }

        Ok(Some((spaces / width, rest.trim_end())))
    }

    /// Recognises a field, header or bare token.
    pub fn entry<'t>(&self, content: &'t str, default: Delimiter) -> Result<Entry<'t>> {
        let (key, rest) = match self.split_key(content)? {
            Some(split) => split,
            None => return Ok(Entry::Bare(content)),
        };

        if rest.starts_with('[') {
            return Ok(Entry::Header(self.header(key, rest, default)?));
        }

        match key {
            Some(key) => Ok(Entry::Field {
                key,
                value: rest[1..].trim(),
            }),
            None => Err(self.malformed("missing key before ':'")),
        }
    }

    /// Separates a leading key from the rest of the line.
    ///
    /// The returned rest always starts with `:` or `[`. A `None` key means the
    /// line starts directly with `[` or `:`.
    fn split_key<'t>(&self, content: &'t str) -> Result<Option<(Option<String>, &'t str)>> {
        if content.starts_with('"') {
            let end = self.closing_quote(content)?;
            let rest = content[end + 1..].trim_start();
            if rest.starts_with(':') || rest.starts_with('[') {
                let key = self.unescape(&content[1..end], content)?;
                return Ok(Some((Some(key), rest)));
            }
            return Ok(None);
        }

        match content.find(|c: char| c == ':' || c == '[') {
            Some(pos) => {
                let key = content[..pos].trim();
                let key = if key.is_empty() {
                    None
                } else {
                    Some(key.to_string())
                };
                Ok(Some((key, &content[pos..])))
            }
            None => Ok(None),
        }
    }

    fn header<'t>(
        &self,
        key: Option<String>,
        rest: &'t str,
        default: Delimiter,
    ) -> Result<Header<'t>> {
        let close = rest
            .find(']')
            .ok_or_else(|| self.malformed("missing ']' in array header"))?;
        let inner = &rest[1..close];
        let inner = inner.strip_prefix('#').unwrap_or(inner);

        let digits = inner.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(self.malformed("missing array length"));
        }
        let length: usize = inner[..digits]
            .parse()
            .map_err(|_| self.malformed("invalid array length"))?;

        let mut marker = inner[digits..].chars();
        let delimiter = match (marker.next(), marker.next()) {
            (None, _) => default,
            (Some(ch), None) => Delimiter::from_marker(ch)
                .ok_or_else(|| self.malformed("unknown delimiter marker in array header"))?,
            _ => return Err(self.malformed("unexpected characters in array header")),
        };

        let mut after = &rest[close + 1..];
        let fields = if after.starts_with('{') {
            let end = after
                .find('}')
                .ok_or_else(|| self.malformed("missing '}' in field list"))?;
            let mut fields = Vec::new();
            for cell in self.split(&after[1..end], delimiter) {
                let cell = cell.trim();
                if cell.is_empty() {
                    return Err(self.malformed("empty field name in field list"));
                }
                if cell.starts_with('"') {
                    fields.push(self.quoted(cell)?);
                } else {
                    fields.push(cell.to_string());
                }
            }
            after = &after[end + 1..];
            Some(fields)
        } else {
            None
        };

        let inline = after
            .strip_prefix(':')
            .ok_or_else(|| self.malformed("missing ':' after array header"))?;

        Ok(Header {
            key,
            length,
            delimiter,
            fields,
            inline: inline.trim(),
        })
    }

    /// Splits on `delimiter`, ignoring delimiters inside quoted segments.
    pub fn split<'t>(&self, text: &'t str, delimiter: Delimiter) -> Vec<&'t str> {
        let delimiter = delimiter.as_char();
        let mut cells = Vec::new();
        let mut start = 0;
        let mut in_quotes = false;
        let mut escaped = false;

        for (i, ch) in text.char_indices() {
            if escaped {
                escaped = false;
            } else if in_quotes && ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_quotes = !in_quotes;
            } else if ch == delimiter && !in_quotes {
                cells.push(&text[start..i]);
                start = i + ch.len_utf8();
            }
        }
        cells.push(&text[start..]);
        cells
    }

    /// Resolves one scalar token: quoted tokens are strings, bare ones are classified.
    pub fn value(&self, token: &str, spellings: &LiteralSpellings) -> Result<Value> {
        let token = token.trim();
        if token.starts_with('"') {
            Ok(Value::String(self.quoted(token)?))
        } else {
            Ok(spellings.parse(token))
        }
    }

    /// Unescapes a token that must be exactly one quoted string.
    fn quoted(&self, token: &str) -> Result<String> {
        let end = self.closing_quote(token)?;
        if end + 1 != token.len() {
            return Err(Error::invalid_string(
                self.number,
                self.column(&token[end + 1..]),
                "unexpected characters after closing quote",
            ));
        }
        self.unescape(&token[1..end], token)
    }

    /// Byte offset of the quote closing the string that opens `text`.
    fn closing_quote(&self, text: &str) -> Result<usize> {
        let mut escaped = false;
        for (i, ch) in text.char_indices().skip(1) {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                return Ok(i);
            }
        }
        Err(Error::invalid_string(
            self.number,
            self.column(text),
            "unterminated string",
        ))
    }

    fn unescape(&self, body: &str, token: &str) -> Result<String> {
        let mut result = String::with_capacity(body.len());
        let mut chars = body.chars();
        let col = self.column(token);

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }
            match chars.next() {
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('b') => result.push('\u{0008}'),
                Some('f') => result.push('\u{000C}'),
                Some('0') => result.push('\0'),
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                        return Err(Error::invalid_string(
                            self.number,
                            col,
                            "invalid unicode escape sequence (expected 4 hex digits)",
                        ));
                    }
                    let ch = u32::from_str_radix(&hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| {
                            Error::invalid_string(self.number, col, "invalid unicode code point")
                        })?;
                    result.push(ch);
                }
                Some(other) => {
                    return Err(Error::invalid_string(
                        self.number,
                        col,
                        &format!("invalid escape sequence '\\{}'", other),
                    ))
                }
                None => {
                    return Err(Error::invalid_string(
                        self.number,
                        col,
                        "dangling '\\' at end of string",
                    ))
                }
            }
        }

        Ok(result)
    }

    /// 1-based column of `part`, which must be a slice of this line.
    fn column(&self, part: &str) -> usize {
        let offset = (part.as_ptr() as usize).saturating_sub(self.raw.as_ptr() as usize);
        self.raw[..offset.min(self.raw.len())].chars().count() + 1
    }

    pub fn malformed(&self, msg: &str) -> Error {
        Error::malformed_header(self.number, msg, self.raw)
    }

    pub fn indentation(&self, msg: &str) -> Error {
        Error::indentation(self.number, msg, self.raw)
    }

    pub fn unexpected(&self, msg: &str) -> Error {
        Error::unexpected_content(self.number, msg, self.raw)
    }

    pub fn number(&self) -> usize {
        self.number
    }
}
