use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use hexlife::{Automaton, Board, Topology, board};
use std::io::{self, Write};

/// Lays a board out for display.
///
/// Square grids print one character per cell. Hex grids separate cells with
/// a space and indent odd rows by one, so the staggering of the rows is
/// visible in the output.
pub fn frame(board: &Board, topology: Topology) -> String {
    let mut out = String::with_capacity(board.height() * (2 * board.width() + 2));
    for row in 0..board.height() {
        match topology {
            Topology::Square8 => {
                for col in 0..board.width() {
                    out.push(cell_char(board, row, col));
                }
            }
            Topology::Hex6 | Topology::Hex12 => {
                if row % 2 == 1 {
                    out.push(' ');
                }
                for col in 0..board.width() {
                    if col > 0 {
                        out.push(' ');
                    }
                    out.push(cell_char(board, row, col));
                }
            }
        }
        out.push('\n');
    }
    out
}

fn cell_char(board: &Board, row: usize, col: usize) -> char {
    if board.get(row, col) {
        board::ALIVE
    } else {
        board::DEAD
    }
}

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Live view: redraws each generation in place instead of scrolling.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }

    pub fn render(&self, automaton: &Automaton) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // raw mode needs explicit carriage returns
        write!(stdout, "Gen {}\r\n", automaton.generation())?;
        for line in frame(automaton.board(), automaton.topology()).lines() {
            write!(stdout, "{line}\r\n")?;
        }
        stdout.flush()
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        match event::read()? {
            // CTRL+C or q stops the run early
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => Ok(Some(ConsoleCommand::Exit)),
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => Ok(Some(ConsoleCommand::Exit)),
            _ => Ok(Some(ConsoleCommand::Handled)),
        }
    }
}

impl Drop for ConsoleView {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
