//! Stateless rendering of the game screen.

use super::app::App;
use crate::games::tictactoe::{Board, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 5;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 5;

/// Renders title, board, status line and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_line())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(app)).alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let highlight = app.game().winning_line();

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for row in Position::ALL.chunks(3) {
        if !lines.is_empty() {
            lines.push(Line::from("-".repeat(BOARD_WIDTH as usize)));
        }
        let mut spans = Vec::with_capacity(5);
        for (col, &pos) in row.iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw("|"));
            }
            let mut style = Style::default();
            if pos == app.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if highlight.is_some_and(|line| line.contains(&pos)) {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(cell_text(board, pos), style));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, center_rect(area, BOARD_WIDTH, BOARD_HEIGHT));
}

fn help_text(app: &App) -> &'static str {
    if app.game().status().is_over() {
        "r: play again   q: quit"
    } else {
        "1-9 or arrows+Enter: play   r: restart   q: quit"
    }
}

/// Empty cells show the digit that selects them.
fn cell_text(board: &Board, pos: Position) -> String {
    let mark = match board.get(pos) {
        Square::Empty => (pos.to_index() + 1).to_string(),
        Square::Occupied(player) => player.to_string(),
    };
    format!("{mark:^width$}", width = CELL_WIDTH as usize)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_line() {
        let screen = render(&App::new());
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("r: restart"));
    }

    #[test]
    fn test_help_changes_once_game_is_over() {
        let mut app = App::new();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("r: play again"));
        assert!(!screen.contains("arrows+Enter"));
    }

    #[test]
    fn test_renders_marks_and_winner() {
        let mut app = App::new();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("  X  |  X  |  X  "));
        assert!(screen.contains("  O  |  O  |  6  "));
    }

    #[test]
    fn test_center_rect_fits_small_area() {
        let area = Rect::new(0, 0, 4, 2);
        assert_eq!(center_rect(area, BOARD_WIDTH, BOARD_HEIGHT), area);
    }
}
