use tui_textarea::Input;

use super::CompletionResponse;

pub enum Event {
    CompletionResponse(CompletionResponse),
    KeyboardAltDown(),
    KeyboardAltUp(),
    KeyboardCharInput(Input),
    KeyboardCTRLB(),
    KeyboardCTRLC(),
    KeyboardCTRLN(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardShiftEnter(),
    KeyboardTab(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}
