//! Word (.docx) paragraph extraction
//!
//! A .docx file is a zip container whose body lives in `word/document.xml`.
//! Only paragraphs that are direct children of `<w:body>` count. Their visible
//! text is the concatenation of the `<w:t>` elements of their own runs, with
//! `<w:tab/>` and `<w:br/>` contributing whitespace. Table cells and text
//! boxes nested inside a paragraph are skipped.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{ExtractError, ExtractResult};
use crate::extractor::TextExtractor;

/// Path of the main document part inside the container
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Largest decompressed `word/document.xml` accepted
pub const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

lazy_static! {
    /// One markup token: comment, processing instruction, CDATA, declaration
    /// or element tag. Groups: 1 CDATA body, 2 closing slash, 3 element name,
    /// 4 self-closing slash.
    static ref MARKUP_PATTERN: Regex = Regex::new(
        r#"(?s)<!--.*?-->|<\?.*?\?>|<!\[CDATA\[(.*?)\]\]>|<![^>]*>|<(/?)([A-Za-z_][\w:.\-]*)(?:[^>"']|"[^"]*"|'[^']*')*?(/?)>"#
    )
    .unwrap();

    static ref ENTITY_PATTERN: Regex =
        Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);").unwrap();
}

/// Extractor for Office Open XML word-processing documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Read the trimmed text of every body paragraph, blank ones included.
    pub fn paragraphs(&self, content: &[u8]) -> ExtractResult<Vec<String>> {
        let xml = read_document_part(content, MAX_DOCUMENT_XML_BYTES)?;
        Ok(parse_paragraphs(&xml))
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let paragraphs: Vec<String> = self
            .paragraphs(content)?
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();

        debug!("Extracted {} non-empty paragraphs", paragraphs.len());
        Ok(paragraphs.join("\n"))
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }
}

fn read_document_part(content: &[u8], limit: u64) -> ExtractResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(content))?;
    let part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
        ZipError::FileNotFound => ExtractError::MissingPart(DOCUMENT_PART),
        other => ExtractError::Container(other),
    })?;

    // Declared sizes are untrusted; the read is bounded as well
    if part.size() > limit {
        return Err(ExtractError::DocumentTooLarge { limit });
    }

    let mut xml = String::new();
    part.take(limit + 1).read_to_string(&mut xml)?;
    if xml.len() as u64 > limit {
        return Err(ExtractError::DocumentTooLarge { limit });
    }
    Ok(xml)
}

/// Split document XML into trimmed body-paragraph strings
pub fn parse_paragraphs(xml: &str) -> Vec<String> {
    let mut walker = BodyWalker::default();
    let mut last = 0;

    for cap in MARKUP_PATTERN.captures_iter(xml) {
        let Some(token) = cap.get(0) else { continue };
        walker.text(&xml[last..token.start()]);
        last = token.end();

        if let Some(cdata) = cap.get(1) {
            walker.raw_text(cdata.as_str());
            continue;
        }
        let Some(name) = cap.get(3) else { continue };
        let name = name.as_str();

        if cap.get(2).is_some_and(|m| !m.as_str().is_empty()) {
            walker.close(name);
        } else if cap.get(4).is_some_and(|m| !m.as_str().is_empty()) {
            walker.open(name);
            walker.close(name);
        } else {
            walker.open(name);
        }
    }

    walker.paragraphs
}

/// Element stack walker collecting the text of `w:body > w:p` elements
#[derive(Default)]
struct BodyWalker {
    stack: Vec<String>,
    /// Stack index of the open body paragraph and its text so far
    paragraph: Option<(usize, String)>,
    in_text: bool,
    paragraphs: Vec<String>,
}

impl BodyWalker {
    fn open(&mut self, name: &str) {
        if self.paragraph.is_none()
            && name == "w:p"
            && self.stack.last().is_some_and(|parent| parent == "w:body")
        {
            self.paragraph = Some((self.stack.len(), String::new()));
        } else if self.in_own_run() {
            match name {
                "w:t" => self.in_text = true,
                "w:tab" => self.push('\t'),
                "w:br" | "w:cr" => self.push('\n'),
                _ => {}
            }
        }
        self.stack.push(name.to_string());
    }

    fn close(&mut self, name: &str) {
        let Some(pos) = self.stack.iter().rposition(|open| open == name) else {
            return;
        };
        self.stack.truncate(pos);

        if name == "w:t" {
            self.in_text = false;
        }
        if self
            .paragraph
            .as_ref()
            .is_some_and(|(depth, _)| self.stack.len() <= *depth)
        {
            if let Some((_, text)) = self.paragraph.take() {
                self.paragraphs.push(text.trim().to_string());
            }
            self.in_text = false;
        }
    }

    fn text(&mut self, raw: &str) {
        if self.in_text && !raw.is_empty() {
            self.raw_text(&decode_entities(raw));
        }
    }

    fn raw_text(&mut self, text: &str) {
        if self.in_text {
            if let Some((_, buf)) = self.paragraph.as_mut() {
                buf.push_str(text);
            }
        }
    }

    fn push(&mut self, c: char) {
        if let Some((_, buf)) = self.paragraph.as_mut() {
            buf.push(c);
        }
    }

    /// True when the innermost element is a run belonging to the body
    /// paragraph itself, directly or through a hyperlink.
    fn in_own_run(&self) -> bool {
        let Some((depth, _)) = &self.paragraph else {
            return false;
        };
        match &self.stack[depth + 1..] {
            [run] => run == "w:r",
            [link, run] => link == "w:hyperlink" && run == "w:r",
            _ => false,
        }
    }
}

fn decode_entities(raw: &str) -> String {
    ENTITY_PATTERN
        .replace_all(raw, |cap: &Captures| {
            let entity = &cap[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if entity.starts_with("#x") => u32::from_str_radix(&entity[2..], 16)
                    .ok()
                    .and_then(char::from_u32),
                _ => entity[1..].parse::<u32>().ok().and_then(char::from_u32),
            };
            decoded.map_or_else(|| cap[0].to_string(), String::from)
        })
        .into_owned()
}
