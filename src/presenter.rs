/*!
 * Terminal rendering for the page inventory and the copy confirmation.
 *
 * Only display copies are shortened; dialogue text in the page table is
 * never modified.
 */

use std::io::{self, Write};

use crate::script_parser::{PageNumber, PageTable};

/// Default number of characters shown per dialogue in list mode
pub const DEFAULT_PREVIEW_CHARS: usize = 30;

/// Separator placed between dialogues in the copied text
pub const DIALOGUE_SEPARATOR: &str = "\n\n";

const ELLIPSIS: &str = "...";
const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Shorten a dialogue for display, counting characters rather than bytes
pub fn truncate_for_display(dialogue: &str, max_chars: usize) -> String {
    match dialogue.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &dialogue[..cut], ELLIPSIS),
        None => dialogue.to_string(),
    }
}

/// Join a page's dialogues into the text handed to the clipboard
pub fn join_dialogues(dialogues: &[String]) -> String {
    dialogues.join(DIALOGUE_SEPARATOR)
}

/// Renders page listings and copy reports
#[derive(Debug, Clone)]
pub struct Presenter {
    preview_chars: usize,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CHARS)
    }
}

impl Presenter {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Write every page in ascending order with its dialogue count and previews
    pub fn write_page_list<W: Write>(&self, out: &mut W, table: &PageTable) -> io::Result<()> {
        writeln!(out, "{}", rule())?;
        writeln!(out, "Script pages")?;
        writeln!(out, "{}", rule())?;

        for (page, dialogues) in table.iter() {
            writeln!(out)?;
            writeln!(out, "【Page {}】 ({} lines)", page, dialogues.len())?;
            for (i, dialogue) in dialogues.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, truncate_for_display(dialogue, self.preview_chars))?;
            }
        }

        Ok(())
    }

    /// Write the confirmation shown after a page has been copied
    pub fn write_copy_report<W: Write>(
        &self,
        out: &mut W,
        page: PageNumber,
        dialogue_count: usize,
        copied_text: &str,
    ) -> io::Result<()> {
        writeln!(out, "【Page {}】 copied {} lines of dialogue", page, dialogue_count)?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "{}", copied_text)?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "Copied to clipboard!")?;
        Ok(())
    }
}
