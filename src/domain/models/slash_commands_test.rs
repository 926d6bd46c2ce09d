use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse(" ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_text() {
    assert!(SlashCommand::parse("tell me about birds").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_short_quit() {
    assert!(SlashCommand::parse("/q").unwrap().is_quit());
}

#[test]
fn it_is_quit() {
    assert!(SlashCommand::parse("/quit").unwrap().is_quit());
}

#[test]
fn it_is_exit() {
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
}

#[test]
fn it_is_not_quit() {
    assert!(!SlashCommand::parse("/new").unwrap().is_quit());
}

#[test]
fn it_is_short_new_chat() {
    assert!(SlashCommand::parse("/n").unwrap().is_new_chat());
}

#[test]
fn it_is_new_chat() {
    assert!(SlashCommand::parse("/new").unwrap().is_new_chat());
}

#[test]
fn it_is_short_regenerate() {
    assert!(SlashCommand::parse("/r").unwrap().is_regenerate());
}

#[test]
fn it_is_regenerate() {
    assert!(SlashCommand::parse("/regenerate").unwrap().is_regenerate());
}

#[test]
fn it_is_short_like() {
    assert!(SlashCommand::parse("/l").unwrap().is_like());
}

#[test]
fn it_is_like() {
    assert!(SlashCommand::parse("/like").unwrap().is_like());
}

#[test]
fn it_is_short_dislike() {
    assert!(SlashCommand::parse("/d").unwrap().is_dislike());
}

#[test]
fn it_is_dislike() {
    assert!(SlashCommand::parse("/dislike").unwrap().is_dislike());
}

#[test]
fn it_is_short_copy() {
    assert!(SlashCommand::parse("/c").unwrap().is_copy());
}

#[test]
fn it_is_copy() {
    assert!(SlashCommand::parse("/copy").unwrap().is_copy());
}

#[test]
fn it_is_short_upgrade() {
    assert!(SlashCommand::parse("/u").unwrap().is_upgrade());
}

#[test]
fn it_is_upgrade() {
    assert!(SlashCommand::parse("/upgrade").unwrap().is_upgrade());
}

#[test]
fn it_is_plans() {
    assert!(SlashCommand::parse("/plans").unwrap().is_upgrade());
}

#[test]
fn it_is_short_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}

#[test]
fn it_parses_a_position_argument() {
    let cmd = SlashCommand::parse("/like 2").unwrap();
    assert!(cmd.is_like());
    assert_eq!(cmd.position_arg(), Some(2));
}

#[test]
fn it_has_no_position_argument_without_args() {
    assert_eq!(SlashCommand::parse("/like").unwrap().position_arg(), None);
}

#[test]
fn it_has_no_position_argument_when_not_numeric() {
    assert_eq!(SlashCommand::parse("/like abc").unwrap().position_arg(), None);
}
