use crate::lineindex::LineIndex;

/// Attribute that marks an element as data-defining.
pub const DATA_ATTRIBUTE: &str = "x-data";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One element of the markup tree. The range runs from the opening `<` to
/// just past the closing tag, or to the end of the document for unterminated
/// elements. Containment is inclusive of both endpoints so a cursor resting
/// exactly on the boundary still resolves to the element.
#[derive(Debug, Clone)]
pub struct ElementNode {
    pub tag_name: String,
    pub attributes: Vec<(String, Option<String>)>,
    pub start: usize,
    pub end: usize,
    pub parent: Option<usize>,
}

impl ElementNode {
    /// Case-insensitive attribute lookup returning the raw value text.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    pub fn data_expression(&self) -> Option<&str> {
        self.attribute(DATA_ATTRIBUTE)
    }

    fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

#[derive(Debug, Clone)]
pub struct MarkupDocument {
    pub elements: Vec<ElementNode>,
    pub line_index: LineIndex,
}

impl MarkupDocument {
    pub fn parse(text: &str) -> Self {
        let line_index = LineIndex::new(text);
        let elements = ElementScanner::new(text).scan();
        Self {
            elements,
            line_index,
        }
    }

    /// Innermost element whose range contains `offset`. Children are emitted
    /// after their parents, so the last match in document order is the
    /// innermost one.
    pub fn element_at(&self, offset: usize) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.contains(offset))
            .map(|(idx, _)| idx)
            .last()
    }

    /// Lowercased attribute names already written on the innermost element
    /// containing `offset`.
    pub fn attributes_at(&self, offset: usize) -> Vec<String> {
        let Some(idx) = self.element_at(offset) else {
            return Vec::new();
        };
        self.elements[idx]
            .attributes
            .iter()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect()
    }

    /// Ordered chain of `x-data` expression strings visible at `offset`,
    /// innermost first. Starts at the innermost data-defining element whose
    /// range contains the offset and collects every data-defining ancestor
    /// above it. Empty when no data-defining element encloses the cursor.
    pub fn scope_chain(&self, offset: usize) -> Vec<&str> {
        let mut chain = Vec::new();
        let innermost = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.data_expression().is_some() && element.contains(offset))
            .map(|(idx, _)| idx)
            .last();
        let Some(start) = innermost else {
            return chain;
        };

        if let Some(expr) = self.elements[start].data_expression() {
            chain.push(expr);
        }
        let mut current = start;
        while let Some(parent) = self.elements[current].parent {
            if let Some(expr) = self.elements[parent].data_expression() {
                chain.push(expr);
            }
            current = parent;
        }
        chain
    }
}

/// Single-pass scanner building the element tree. Quote-aware inside tags so
/// `<`, `>`, and `/` literals in attribute values do not break nesting.
struct ElementScanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    idx: usize,
    open: Vec<usize>,
    elements: Vec<ElementNode>,
}

impl<'a> ElementScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            idx: 0,
            open: Vec::new(),
            elements: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<ElementNode> {
        let len = self.bytes.len();
        while self.idx < len {
            let Some(rel) = self.text[self.idx..].find('<') else {
                break;
            };
            let tag_start = self.idx + rel;
            self.idx = tag_start + 1;
            if self.idx >= len {
                break;
            }

            match self.bytes[self.idx] {
                b'/' => {
                    self.idx += 1;
                    self.handle_closing_tag();
                }
                b'!' | b'?' => self.skip_to_tag_end(),
                _ => self.handle_opening_tag(tag_start),
            }
        }

        // Anything still open runs to the end of the document.
        let end = self.text.len();
        for idx in self.open.drain(..) {
            self.elements[idx].end = end;
        }
        self.elements
    }

    fn handle_closing_tag(&mut self) {
        let name_start = self.idx;
        let len = self.bytes.len();
        while self.idx < len && self.bytes[self.idx] != b'>' {
            self.idx += 1;
        }
        let name = self.text[name_start..self.idx]
            .trim()
            .to_ascii_lowercase();
        let close_end = if self.idx < len {
            self.idx += 1;
            self.idx
        } else {
            len
        };

        let matched = self
            .open
            .iter()
            .rposition(|&idx| self.elements[idx].tag_name == name);
        if let Some(pos) = matched {
            // Elements left open above the match close implicitly where the
            // closing tag begins.
            let implicit_end = close_end.saturating_sub(name.len() + 3);
            for &idx in &self.open[pos + 1..] {
                self.elements[idx].end = implicit_end.max(self.elements[idx].start);
            }
            let idx = self.open[pos];
            self.elements[idx].end = close_end;
            self.open.truncate(pos);
        }
    }

    fn handle_opening_tag(&mut self, tag_start: usize) {
        let len = self.bytes.len();
        let mut cursor = self.idx;
        let mut in_quote: Option<u8> = None;
        while cursor < len {
            let ch = self.bytes[cursor];
            if let Some(quote) = in_quote {
                if ch == quote {
                    in_quote = None;
                }
            } else if ch == b'"' || ch == b'\'' {
                in_quote = Some(ch);
            } else if ch == b'>' {
                break;
            }
            cursor += 1;
        }

        // An unterminated tag (still being typed) runs to the document end.
        let terminated = cursor < len;
        let tag_end = cursor;
        self.idx = if terminated { cursor + 1 } else { len };

        let mut name_cursor = tag_start + 1;
        while name_cursor < tag_end
            && !self.bytes[name_cursor].is_ascii_whitespace()
            && !matches!(self.bytes[name_cursor], b'/' | b'>')
        {
            name_cursor += 1;
        }
        let tag_name = self.text[tag_start + 1..name_cursor].to_ascii_lowercase();
        if tag_name.is_empty() {
            return;
        }

        let attributes = self.parse_attributes(name_cursor, tag_end);
        let self_closing = terminated && self.bytes[tag_end.saturating_sub(1)] == b'/';
        let void = VOID_ELEMENTS.contains(&tag_name.as_str());

        let node = ElementNode {
            tag_name,
            attributes,
            start: tag_start,
            end: self.idx,
            parent: self.open.last().copied(),
        };
        let idx = self.elements.len();
        self.elements.push(node);

        if terminated && !self_closing && !void {
            self.open.push(idx);
        }
    }

    fn parse_attributes(&self, mut cursor: usize, tag_end: usize) -> Vec<(String, Option<String>)> {
        let mut attributes = Vec::new();
        while cursor < tag_end {
            while cursor < tag_end && self.bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }
            if cursor >= tag_end {
                break;
            }
            if self.bytes[cursor] == b'/' {
                cursor += 1;
                continue;
            }

            let name_start = cursor;
            while cursor < tag_end
                && !self.bytes[cursor].is_ascii_whitespace()
                && !matches!(self.bytes[cursor], b'=' | b'/')
            {
                cursor += 1;
            }
            if name_start == cursor {
                break;
            }
            let name = self.text[name_start..cursor].to_string();

            while cursor < tag_end && self.bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }

            let value = if cursor < tag_end && self.bytes[cursor] == b'=' {
                cursor += 1;
                while cursor < tag_end && self.bytes[cursor].is_ascii_whitespace() {
                    cursor += 1;
                }
                if cursor < tag_end && matches!(self.bytes[cursor], b'"' | b'\'') {
                    let quote = self.bytes[cursor];
                    cursor += 1;
                    let value_start = cursor;
                    while cursor < tag_end && self.bytes[cursor] != quote {
                        cursor += 1;
                    }
                    let value = self.text[value_start..cursor].to_string();
                    if cursor < tag_end {
                        cursor += 1;
                    }
                    Some(value)
                } else {
                    let value_start = cursor;
                    while cursor < tag_end
                        && !self.bytes[cursor].is_ascii_whitespace()
                        && self.bytes[cursor] != b'/'
                    {
                        cursor += 1;
                    }
                    Some(self.text[value_start..cursor].to_string())
                }
            } else {
                None
            };

            attributes.push((name, value));
        }
        attributes
    }

    fn skip_to_tag_end(&mut self) {
        let len = self.bytes.len();
        while self.idx < len {
            if self.bytes[self.idx] == b'>' {
                self.idx += 1;
                return;
            }
            self.idx += 1;
        }
    }
}
