use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::TextArea;
use crate::domain::services::completions::help_text;
use crate::domain::services::events::EventsService;
use crate::domain::services::overlay_area;
use crate::domain::services::AppState;
use crate::domain::services::Overlay;
use crate::domain::services::Theme;
use crate::domain::services::Welcome;
use crate::domain::services::NARROW_VIEWPORT_WIDTH;

const SIDEBAR_WIDTH: u16 = 28;

fn render_help<B: Backend>(frame: &mut Frame<B>, theme: &Theme) {
    let area = overlay_area(frame.size(), 74, 30);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(help_text())
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Help")
                    .padding(Padding::new(1, 1, 0, 0)),
            ),
        area,
    );
}

fn render_frame<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState<'_>,
    textarea: &tui_textarea::TextArea<'_>,
) {
    let theme = app_state.theme;

    let mut sidebar_width: u16 = 0;
    if app_state.sidebar.open {
        sidebar_width = SIDEBAR_WIDTH;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(frame.size());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Max(4),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    if rows[0].width != app_state.last_known_width
        || rows[0].height != app_state.last_known_height
    {
        app_state.set_rect(rows[0], frame.size().width);
    }

    if app_state.sidebar.open {
        app_state
            .sidebar
            .render(frame, columns[0], &app_state.conversation, &theme);
    }

    if app_state.conversation.is_empty() {
        Welcome::render(frame, rows[0], &theme);
    } else {
        app_state
            .bubble_list
            .render(frame, rows[0], app_state.scroll.position);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            rows[0].inner(&Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut app_state.scroll.scrollbar_state,
        );
    }

    frame.render_widget(textarea.widget(), rows[1]);

    if app_state.conversation.is_generating() {
        app_state
            .loading
            .render(frame, rows[2], Style::default().fg(theme.accent));
    } else {
        frame.render_widget(
            Paragraph::new(
                "Mockingbird can make mistakes. Consider checking important information.",
            )
            .style(Style::default().fg(theme.dim)),
            rows[2],
        );
    }

    match &app_state.overlay {
        Some(Overlay::Help) => render_help(frame, &theme),
        Some(Overlay::Upgrade(dialog)) => dialog.render(frame, &theme),
        None => {}
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();

    #[cfg(feature = "dev")]
    {
        for char in "Tell me something interesting about mockingbirds.".chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            render_frame(frame, app_state, &textarea);
        })?;

        match events.next().await? {
            Event::CompletionResponse(response) => {
                app_state.handle_completion(&response);
            }
            Event::KeyboardCharInput(input) => {
                if app_state.overlay.is_none() {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.overlay.is_none() {
                    textarea.insert_str(&text);
                }
            }
            Event::KeyboardShiftEnter() => {
                if app_state.overlay.is_none() {
                    textarea.input(Input {
                        key: Key::Enter,
                        ctrl: false,
                        alt: false,
                    });
                }
            }
            Event::KeyboardEnter() => {
                if app_state.overlay.is_some() {
                    app_state.overlay = None;
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                let (should_break, handled) =
                    app_state.handle_slash_commands(&input_str, &tx)?;
                if should_break {
                    break;
                }
                if handled {
                    textarea = TextArea::default();
                    continue;
                }

                if app_state.submit(&input_str, &tx)? {
                    textarea = TextArea::default();
                }
            }
            Event::KeyboardCTRLC() => {
                if app_state.overlay.is_some() {
                    app_state.overlay = None;
                    continue;
                }
                if app_state.abort_generation(&tx)? {
                    continue;
                }
                break;
            }
            Event::KeyboardCTRLR() => {
                app_state.regenerate();
            }
            Event::KeyboardCTRLN() => {
                app_state.start_new_session();
            }
            Event::KeyboardCTRLB() => {
                app_state.sidebar.toggle();
            }
            Event::KeyboardAltUp() => {
                app_state.select_neighbor_session(-1);
            }
            Event::KeyboardAltDown() => {
                app_state.select_neighbor_session(1);
            }
            Event::KeyboardEsc() => {
                app_state.overlay = None;
            }
            Event::KeyboardTab() => match &mut app_state.overlay {
                Some(Overlay::Upgrade(dialog)) => {
                    dialog.toggle_audience();
                }
                Some(Overlay::Help) => {}
                None => {
                    textarea.input(Input {
                        key: Key::Tab,
                        ctrl: false,
                        alt: false,
                    });
                }
            },
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UITick() => {
                app_state.loading.tick();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::new(&Config::get(ConfigKey::Theme))?;
    app_state.sidebar.open = terminal.size()?.width >= NARROW_VIEWPORT_WIDTH;

    let mut events = EventsService::new(event_rx);
    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
