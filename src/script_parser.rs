use std::collections::BTreeMap;
use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{warn, debug, trace};

use crate::errors::ScriptError;
use crate::file_utils::FileManager;

// @module: Page-indexed dialogue extraction from marker-delimited scripts

// @const: Page marker regex, e.g. 【Page 3】
static PAGE_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"【Page\s*(\d+)】").unwrap()
});

// @const: Dialogue regex, speaker label followed by a corner-bracket quote
static DIALOGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^「]+「([^「」]+)」").unwrap()
});

/// Page number as written in a `【Page N】` marker
pub type PageNumber = u64;

/// Opening delimiters that mark a line as annotation rather than dialogue
const ANNOTATION_PREFIXES: [char; 2] = ['（', '['];

/// Classification of a single script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine<'a> {
    /// A page marker carrying its page number
    PageMarker(PageNumber),
    /// A marker whose number is out of range or uses unsupported digits
    InvalidMarker(&'a str),
    /// Stage direction or panel designation
    Annotation,
    /// Quoted speech extracted from a labeled line
    Dialogue(&'a str),
    /// Anything else
    Other,
}

impl<'a> ScriptLine<'a> {
    /// Classify a line. Marker detection takes priority over everything else.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = PAGE_MARKER_REGEX.captures(line) {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            return match parse_page_number(digits) {
                Some(page) => ScriptLine::PageMarker(page),
                None => ScriptLine::InvalidMarker(digits),
            };
        }

        if line.trim().starts_with(ANNOTATION_PREFIXES) {
            return ScriptLine::Annotation;
        }

        match DIALOGUE_REGEX.captures(line).and_then(|caps| caps.get(1)) {
            Some(m) => ScriptLine::Dialogue(m.as_str()),
            None => ScriptLine::Other,
        }
    }
}

/// Parse marker digits, accepting full-width forms (０-９) alongside ASCII
fn parse_page_number(digits: &str) -> Option<PageNumber> {
    let folded: String = digits
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10).unwrap_or(c),
            _ => c,
        })
        .collect();
    folded.parse::<PageNumber>().ok()
}

/// Mapping from page number to its dialogue lines in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTable {
    pages: BTreeMap<PageNumber, Vec<String>>,
}

impl PageTable {
    /// Create an empty page table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page, keeping any dialogue it already has
    pub fn ensure_page(&mut self, page: PageNumber) {
        self.pages.entry(page).or_default();
    }

    /// Append a dialogue to a page, registering the page if needed
    pub fn push_dialogue(&mut self, page: PageNumber, dialogue: impl Into<String>) {
        self.pages.entry(page).or_default().push(dialogue.into());
    }

    /// Page numbers in ascending order
    pub fn page_numbers(&self) -> Vec<PageNumber> {
        self.pages.keys().copied().collect()
    }

    /// Dialogues of a page, or `None` if the page never had a marker
    pub fn dialogues(&self, page: PageNumber) -> Option<&[String]> {
        self.pages.get(&page).map(Vec::as_slice)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of dialogues across all pages
    pub fn total_dialogues(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    /// Iterate pages in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (PageNumber, &[String])> {
        self.pages.iter().map(|(page, lines)| (*page, lines.as_slice()))
    }
}

/// Line-oriented parser turning script text into a [`PageTable`]
pub struct ScriptParser;

impl ScriptParser {
    /// Parse a script file from disk
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PageTable, ScriptError> {
        let content = FileManager::read_script(path)?;
        Ok(Self::parse_str(&content))
    }

    /// Parse script text into a page table
    ///
    /// Lines before the first page marker are discarded. A repeated marker
    /// re-activates its page without clearing what was collected earlier.
    /// At most one dialogue is taken from each line.
    pub fn parse_str(content: &str) -> PageTable {
        let mut table = PageTable::new();
        let mut current_page: Option<PageNumber> = None;

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            match ScriptLine::classify(line) {
                ScriptLine::PageMarker(page) => {
                    debug!("Page {} starts at line {}", page, line_number);
                    table.ensure_page(page);
                    current_page = Some(page);
                }
                ScriptLine::InvalidMarker(digits) => {
                    // Lines up to the next valid marker belong to no known page
                    warn!("Unreadable page number {} at line {}, skipping its lines", digits, line_number);
                    current_page = None;
                }
                ScriptLine::Annotation => {
                    trace!("Skipping annotation at line {}", line_number);
                }
                ScriptLine::Dialogue(text) => {
                    if let Some(page) = current_page {
                        table.push_dialogue(page, text);
                    }
                }
                ScriptLine::Other => {}
            }
        }

        if table.is_empty() {
            warn!("No page markers found in script");
        } else {
            debug!("Parsed {} page(s) with {} dialogue(s)", table.len(), table.total_dialogues());
        }

        table
    }
}
