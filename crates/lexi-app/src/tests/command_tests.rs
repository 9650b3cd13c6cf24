use lexi_types::{AppEvent, UiEvent};

use crate::io::parse_command;

#[test]
fn test_plain_text_is_search() {
    match parse_command("cat") {
        Some(AppEvent::TextInput(text)) => assert_eq!(text, "cat"),
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn test_search_keeps_inner_whitespace() {
    match parse_command("ice cream\r\n") {
        Some(AppEvent::TextInput(text)) => assert_eq!(text, "ice cream"),
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn test_empty_line_is_empty_search() {
    match parse_command("") {
        Some(AppEvent::TextInput(text)) => assert!(text.is_empty()),
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn test_indexed_commands_are_one_based() {
    assert!(matches!(
        parse_command(":open 1"),
        Some(AppEvent::UiEvent(UiEvent::SelectResult(0)))
    ));
    assert!(matches!(
        parse_command(":b 3"),
        Some(AppEvent::UiEvent(UiEvent::ToggleBookmark(2)))
    ));
}

#[test]
fn test_invalid_index() {
    assert!(parse_command(":open 0").is_none());
    assert!(parse_command(":open").is_none());
    assert!(parse_command(":bookmark x").is_none());
}

#[test]
fn test_list_and_quit_commands() {
    assert!(matches!(
        parse_command(":recent"),
        Some(AppEvent::UiEvent(UiEvent::ListRecent))
    ));
    assert!(matches!(
        parse_command(":saved"),
        Some(AppEvent::UiEvent(UiEvent::ListBookmarks))
    ));
    assert!(matches!(
        parse_command(":q"),
        Some(AppEvent::UiEvent(UiEvent::Close))
    ));
}

#[test]
fn test_unknown_command() {
    assert!(parse_command(":frobnicate").is_none());
    assert!(parse_command(":").is_none());
}
