use test_utils::long_reply_fixture;
use test_utils::multiline_reply_fixture;

use super::Author;
use super::Message;

#[test]
fn it_executes_new() {
    let msg = Message::new(1, Author::User, "Hi there!");
    assert_eq!(msg.id, 1);
    assert_eq!(msg.author, Author::User);
    assert_eq!(msg.text, "Hi there!".to_string());
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(1, Author::Assistant, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_wraps_long_lines() {
    let msg = Message::new(1, Author::Assistant, long_reply_fixture());
    let lines = msg.as_string_lines(44);

    assert_eq!(lines, vec![
        "Hi there! This is a really long line that".to_string(),
        "pushes the boundaries of 50 characters".to_string(),
        "across the screen, resulting in a bubble".to_string(),
        "where the line is wrapped to the next line.".to_string(),
        "Cool right?".to_string(),
    ]);
}

#[test]
fn it_leaves_short_lines_alone() {
    let msg = Message::new(1, Author::User, "Hi there!");
    assert_eq!(msg.as_string_lines(44), vec!["Hi there!".to_string()]);
}

#[test]
fn it_keeps_paragraph_breaks() {
    let msg = Message::new(1, Author::Assistant, multiline_reply_fixture());
    let lines = msg.as_string_lines(80);

    assert_eq!(lines, vec![
        "First paragraph.".to_string(),
        " ".to_string(),
        "Second paragraph with more words in it.".to_string(),
    ]);
}

#[test]
fn it_overflows_single_words_wider_than_the_budget() {
    let msg = Message::new(1, Author::User, "supercalifragilistic ok");
    let lines = msg.as_string_lines(10);

    assert_eq!(lines, vec![
        "supercalifragilistic".to_string(),
        "ok".to_string(),
    ]);
}
