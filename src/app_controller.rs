use std::io::Write;
use std::path::Path;
use log::{info, debug};

use crate::app_config::Config;
use crate::clipboard::ClipboardSink;
use crate::errors::ScriptError;
use crate::presenter::{Presenter, join_dialogues};
use crate::script_parser::{PageNumber, PageTable, ScriptParser};

// @module: Application controller for script extraction

/// What the user asked the tool to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the page inventory
    List,
    /// Copy one page's dialogue to the clipboard
    Copy(PageNumber),
}

impl Mode {
    /// Resolve command-line flags. List mode wins when both are given.
    pub fn from_flags(list: bool, page: Option<PageNumber>) -> Option<Self> {
        if list {
            if let Some(page) = page {
                debug!("--list given, ignoring --page {}", page);
            }
            return Some(Mode::List);
        }
        page.map(Mode::Copy)
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    presenter: Presenter,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new_for_test() -> Self {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        let presenter = Presenter::new(config.display.preview_chars);
        Self { config, presenter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse a script file and reject it when it has no pages
    pub fn load_pages<P: AsRef<Path>>(&self, script_path: P) -> Result<PageTable, ScriptError> {
        let table = ScriptParser::parse_file(script_path)?;
        if table.is_empty() {
            return Err(ScriptError::NoPagesFound);
        }
        Ok(table)
    }

    /// Print every page with its dialogue previews
    pub fn list_pages<W: Write>(&self, table: &PageTable, out: &mut W) -> Result<(), ScriptError> {
        self.presenter.write_page_list(out, table)?;
        Ok(())
    }

    /// Copy a page's dialogue to the clipboard and print the report
    ///
    /// Returns the exact text handed to the sink.
    pub fn copy_page<S, W>(
        &self,
        table: &PageTable,
        page: PageNumber,
        sink: &mut S,
        out: &mut W,
    ) -> Result<String, ScriptError>
    where
        S: ClipboardSink + ?Sized,
        W: Write,
    {
        let dialogues = table.dialogues(page).ok_or_else(|| ScriptError::PageNotFound {
            page,
            available: table.page_numbers(),
        })?;

        if dialogues.is_empty() {
            return Err(ScriptError::PageHasNoDialogue(page));
        }

        let text = join_dialogues(dialogues);
        sink.copy_text(&text)?;
        info!("Copied {} dialogue(s) from page {}", dialogues.len(), page);

        self.presenter.write_copy_report(out, page, dialogues.len(), &text)?;
        Ok(text)
    }

    /// Run the whole workflow for one invocation
    ///
    /// The script is parsed before the mode is checked, so a bad file is
    /// reported ahead of a missing --page/--list.
    pub fn run<P, S, W>(
        &self,
        script_path: P,
        mode: Option<Mode>,
        sink: &mut S,
        out: &mut W,
    ) -> Result<(), ScriptError>
    where
        P: AsRef<Path>,
        S: ClipboardSink + ?Sized,
        W: Write,
    {
        let table = self.load_pages(script_path)?;

        match mode.ok_or(ScriptError::MissingMode)? {
            Mode::List => self.list_pages(&table, out),
            Mode::Copy(page) => self.copy_page(&table, page, sink, out).map(|_| ()),
        }
    }
}
