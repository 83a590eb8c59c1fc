/*!
 * Integration tests for the parse-and-copy workflow
 */

use anyhow::Result;
use scriptclip::app_config::Config;
use scriptclip::app_controller::{Controller, Mode};
use scriptclip::errors::ScriptError;
use scriptclip::script_parser::ScriptParser;
use crate::common;
use crate::common::mock_clipboard::{FailingClipboard, RecordingClipboard};

#[test]
fn test_run_withCopyMode_shouldCopyJoinedDialogue() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_script(temp_dir.path(), "koma.txt")?;
    let controller = Controller::new_for_test();
    let mut clipboard = RecordingClipboard::new();
    let mut out = Vec::new();

    controller.run(&script, Some(Mode::Copy(1)), &mut clipboard, &mut out)?;

    assert_eq!(clipboard.copies, vec!["Hello\n\nNice to meet you".to_string()]);
    let output = String::from_utf8(out)?;
    assert!(output.starts_with("【Page 1】 copied 2 lines of dialogue\n"));
    assert!(output.contains("Hello\n\nNice to meet you\n"));
    assert!(output.ends_with("Copied to clipboard!\n"));
    Ok(())
}

#[test]
fn test_run_withListMode_shouldNotTouchClipboard() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_script(temp_dir.path(), "koma.txt")?;
    let controller = Controller::new_for_test();
    let mut clipboard = RecordingClipboard::new();
    let mut out = Vec::new();

    controller.run(&script, Some(Mode::List), &mut clipboard, &mut out)?;

    assert!(clipboard.copies.is_empty());
    assert!(String::from_utf8(out)?.contains("【Page 3】 (0 lines)"));
    Ok(())
}

#[test]
fn test_run_withEmptyPage_shouldReturnPageHasNoDialogue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_file(temp_dir.path(), "koma.txt", "【Page 5】\n")?;
    let controller = Controller::new_for_test();
    let mut clipboard = RecordingClipboard::new();

    let result = controller.run(&script, Some(Mode::Copy(5)), &mut clipboard, &mut Vec::new());

    assert!(matches!(result, Err(ScriptError::PageHasNoDialogue(5))));
    assert!(clipboard.copies.is_empty());
    Ok(())
}

#[test]
fn test_run_withUnknownPage_shouldListAvailablePages() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_file(temp_dir.path(), "koma.txt", "【Page 2】\nB「b」\n【Page 1】\nA「a」\n")?;
    let controller = Controller::new_for_test();
    let mut clipboard = RecordingClipboard::new();

    let result = controller.run(&script, Some(Mode::Copy(9)), &mut clipboard, &mut Vec::new());

    match result {
        Err(error @ ScriptError::PageNotFound { .. }) => {
            assert!(error.to_string().contains("[1, 2]"));
        }
        other => panic!("expected PageNotFound, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_run_withoutMarkers_shouldReturnNoPagesFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_file(temp_dir.path(), "koma.txt", "Alice「Hello」\n")?;
    let controller = Controller::new_for_test();

    let result = controller.run(&script, Some(Mode::List), &mut RecordingClipboard::new(), &mut Vec::new());

    assert!(matches!(result, Err(ScriptError::NoPagesFound)));
    Ok(())
}

/// A bad script is reported before a missing mode
#[test]
fn test_run_withoutMode_shouldCheckScriptFirst() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test();

    let missing = controller.run(temp_dir.path().join("absent.txt"), None, &mut RecordingClipboard::new(), &mut Vec::new());
    assert!(matches!(missing, Err(ScriptError::FileNotFound(_))));

    let script = common::create_test_script(temp_dir.path(), "koma.txt")?;
    let no_mode = controller.run(&script, None, &mut RecordingClipboard::new(), &mut Vec::new());
    assert!(matches!(no_mode, Err(ScriptError::MissingMode)));
    Ok(())
}

#[test]
fn test_run_withFailingClipboard_shouldPropagateClipboardError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let script = common::create_test_script(temp_dir.path(), "koma.txt")?;
    let controller = Controller::new_for_test();
    let mut out = Vec::new();

    let result = controller.run(&script, Some(Mode::Copy(2)), &mut FailingClipboard, &mut out);

    assert!(matches!(result, Err(ScriptError::Clipboard(_))));
    assert!(out.is_empty());
    Ok(())
}

/// Display truncation never leaks into the copied text
#[test]
fn test_copyPage_afterListing_shouldCopyUntruncatedText() -> Result<()> {
    let long = "a".repeat(40);
    let table = ScriptParser::parse_str(&format!("【Page 1】\nX「{}」\n", long));
    let controller = Controller::new_for_test();
    let mut clipboard = RecordingClipboard::new();

    let mut listing = Vec::new();
    controller.list_pages(&table, &mut listing)?;
    assert!(String::from_utf8(listing)?.contains(&format!("{}...", "a".repeat(30))));

    let copied = controller.copy_page(&table, 1, &mut clipboard, &mut Vec::new())?;
    assert_eq!(copied, long);
    assert_eq!(clipboard.last(), Some(long.as_str()));
    Ok(())
}

#[test]
fn test_withConfig_withCustomPreview_shouldApplyToListing() -> Result<()> {
    let mut config = Config::default();
    config.display.preview_chars = 5;
    let controller = Controller::with_config(config);
    let table = ScriptParser::parse_str("【Page 1】\nX「abcdefghij」\n");

    let mut out = Vec::new();
    controller.list_pages(&table, &mut out)?;

    assert!(String::from_utf8(out)?.contains("  1. abcde...\n"));
    Ok(())
}

#[test]
fn test_modeFromFlags_shouldPreferListOverPage() {
    assert_eq!(Mode::from_flags(true, Some(3)), Some(Mode::List));
    assert_eq!(Mode::from_flags(false, Some(3)), Some(Mode::Copy(3)));
    assert_eq!(Mode::from_flags(true, None), Some(Mode::List));
    assert_eq!(Mode::from_flags(false, None), None);
}
