use crate::core::{
    Cell, Direction, EngineError, GameChangeType, GameUpdate, Grid, INPUT_POLL_MILLIS, UserAction, Warehouse, BoundedGrid,
};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use tracing::warn;

/// Parses a board drawn with `# . @ O [ ]`.
///
/// Blank lines are skipped and surrounding whitespace on each line is ignored,
/// so boards can be written indented inside raw strings.
pub fn parse_grid(s: &str) -> Result<Grid, EngineError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let y = rows.len();
        let row = line
            .chars()
            .enumerate()
            .map(|(x, ch)| {
                Cell::from_symbol(ch).ok_or_else(|| {
                    warn!(symbol = %ch, x, y, "unknown board symbol");
                    EngineError::invalid(format!("unknown board symbol {:?} at ({}, {})", ch, x, y))
                })
            })
            .collect::<Result<Vec<Cell>, EngineError>>()?;
        rows.push(row);
    }

    BoundedGrid::from_rows(rows)
}

pub fn parse_level(s: &str) -> Result<Warehouse, EngineError> {
    Warehouse::new(parse_grid(s)?)
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        result.extend(row.iter().map(Cell::symbol));
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_grid_to_string(state.warehouse.grid());
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(state.title.as_str()))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = format!(
            "Moves: {} | Blocked: {} | Box cells moved: {} | GPS: {} | Scripted left: {}",
            state.stats.applied,
            state.stats.blocked,
            state.stats.box_cells_moved,
            state.checksum,
            state.scripted_remaining,
        );
        let status = match &state.last_change {
            Some(GameUpdate::Blocked) => format!("{} | Last: blocked", status),
            Some(GameUpdate::Moved(GameChangeType::PlayerMove)) => format!("{} | Last: step", status),
            Some(GameUpdate::Moved(GameChangeType::PlayerAndBoxMove { cells })) => {
                format!("{} | Last: pushed {} cells", status, cells)
            }
            None => status,
        };
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instructions = "Controls: WASD or Arrow keys to move, N for next scripted move, Q to quit";
        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    NextScripted,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(INPUT_POLL_MILLIS))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NextScripted,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
