use anyhow::Result;
use test_utils::long_reply_fixture;

use super::Bubble;
use super::BubbleAlignment;
use super::BubbleFlags;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::services::Themes;

fn create_lines(
    author: Author,
    alignment: BubbleAlignment,
    flags: BubbleFlags,
    text: &str,
) -> Result<String> {
    Config::set(ConfigKey::Username, "testuser");
    Config::set(ConfigKey::Model, "model-1");

    let message = Message::new(1, author, text);
    let theme = Themes::get("charged")?;
    let lines = Bubble::new(&message, alignment, flags, 50).as_lines(&theme);
    let lines_str = lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("")
                .trim_end()
                .to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    return Ok(lines_str);
}

#[test]
fn it_creates_an_assistant_bubble() -> Result<()> {
    let lines_str = create_lines(
        Author::Assistant,
        BubbleAlignment::Left,
        BubbleFlags::default(),
        "Hi there!",
    )?;
    insta::assert_snapshot!(lines_str, @r###"
    ╭model-1────╮
    │ Hi there! │
    ╰───────────╯
    "###);

    return Ok(());
}

#[test]
fn it_pads_the_interior_out_to_the_author_name() -> Result<()> {
    let lines_str = create_lines(
        Author::Assistant,
        BubbleAlignment::Left,
        BubbleFlags::default(),
        "Hi",
    )?;
    insta::assert_snapshot!(lines_str, @r###"
    ╭model-1──╮
    │ Hi      │
    ╰─────────╯
    "###);

    return Ok(());
}

#[test]
fn it_wraps_long_replies() -> Result<()> {
    let lines_str = create_lines(
        Author::Assistant,
        BubbleAlignment::Left,
        BubbleFlags::default(),
        long_reply_fixture(),
    )?;
    insta::assert_snapshot!(lines_str, @r###"
    ╭model-1───────────────────────────────────────╮
    │ Hi there! This is a really long line that    │
    │ pushes the boundaries of 50 characters       │
    │ across the screen, resulting in a bubble     │
    │ where the line is wrapped to the next line.  │
    │ Cool right?                                  │
    ╰──────────────────────────────────────────────╯
    "###);

    return Ok(());
}

#[test]
fn it_draws_feedback_markers_in_the_footer() -> Result<()> {
    let flags = BubbleFlags {
        liked: true,
        disliked: false,
        copied: true,
    };
    let lines_str = create_lines(Author::Assistant, BubbleAlignment::Left, flags, "Hi there!")?;
    insta::assert_snapshot!(lines_str, @r###"
    ╭model-1────╮
    │ Hi there! │
    ╰▲ ⧉────────╯
    "###);

    return Ok(());
}

#[test]
fn it_draws_a_lone_dislike_marker() -> Result<()> {
    let flags = BubbleFlags {
        liked: false,
        disliked: true,
        copied: false,
    };
    let lines_str = create_lines(Author::Assistant, BubbleAlignment::Left, flags, "Hi there!")?;
    insta::assert_snapshot!(lines_str, @r###"
    ╭model-1────╮
    │ Hi there! │
    ╰▽──────────╯
    "###);

    return Ok(());
}

#[test]
fn it_right_aligns_user_bubbles() -> Result<()> {
    let lines_str = create_lines(
        Author::User,
        BubbleAlignment::Right,
        BubbleFlags::default(),
        "Hi there!",
    )?;
    let lines = lines_str.split('\n').collect::<Vec<&str>>();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("╭testuser"));
    assert!(lines[0].ends_with('╮'));
    assert_eq!(lines[0].chars().count(), 50);
    assert!(lines[1].contains("│ Hi there! │"));
    assert_eq!(lines[1].chars().count(), 50);
    assert!(lines[2].ends_with('╯'));

    return Ok(());
}

#[test]
fn it_never_draws_markers_on_user_bubbles() -> Result<()> {
    let flags = BubbleFlags {
        liked: true,
        disliked: true,
        copied: true,
    };
    let lines_str = create_lines(Author::User, BubbleAlignment::Right, flags, "Hi there!")?;

    assert!(!lines_str.contains('▲'));
    assert!(!lines_str.contains('▽'));
    assert!(!lines_str.contains('⧉'));

    return Ok(());
}
