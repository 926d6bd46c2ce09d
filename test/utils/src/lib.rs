pub fn long_reply_fixture() -> &'static str {
    return "Hi there! This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?";
}

pub fn multiline_reply_fixture() -> &'static str {
    return "First paragraph.\n\nSecond paragraph with more words in it.";
}
