//! TUI rendering with ratatui
//!
//! Guess grid, suggestions and the end-of-game share panel.

use super::app::{App, AppMode, MessageStyle};
use crate::core::{Attribute, Hint};
use crate::daily::puzzle_number;
use crate::output::formatters::cell_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Cell as TableCell, Clear, List, ListItem, Paragraph, Row,
        Table, Wrap,
    },
};

const EXACT_BG: Color = Color::Rgb(0x6a, 0xaa, 0x64);
const CLOSE_BG: Color = Color::Rgb(0xf3, 0x9c, 0x12);
const MISS_BG: Color = Color::Rgb(0x78, 0x7c, 0x7e);

const fn hint_color(hint: Hint) -> Color {
    match hint {
        Hint::Exact => EXACT_BG,
        Hint::Close => CLOSE_BG,
        Hint::Miss => MISS_BG,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Guess grid
            Constraint::Percentage(30), // Side panel
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.mode == AppMode::HowToPlay {
        render_how_to_play(f, f.area());
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🏏 WOMEN'S CRICKET WORDLE  ·  #{}  ·  {}",
        puzzle_number(app.date),
        app.date.format("%d/%m/%Y")
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(
        Attribute::ALL
            .into_iter()
            .map(|attribute| TableCell::from(attribute.label())),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows = app.session.guesses().iter().map(|guess| {
        let cells = guess.feedback.iter().map(|(attribute, cell)| {
            TableCell::from(cell_text(guess.player, attribute, cell)).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(hint_color(cell.hint)),
            )
        });
        Row::new(cells).height(1).bottom_margin(1)
    });

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(15),
        Constraint::Percentage(12),
        Constraint::Percentage(8),
        Constraint::Percentage(15),
        Constraint::Percentage(8),
        Constraint::Percentage(10),
        Constraint::Percentage(12),
    ];

    let title = format!(
        " Guesses {}/{} ",
        app.session.attempts(),
        app.session.max_attempts()
    );
    let table = Table::new(rows, widths).header(header).column_spacing(1).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(table, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    if app.mode == AppMode::Finished {
        render_share(f, app, chunks[0]);
    } else {
        render_suggestions(f, app, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.suggestions.is_empty() {
        vec![ListItem::new("Start typing a name").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.suggestions
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == app.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(name.as_str()).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Players ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let text = app.share_text().unwrap_or_default();
    let mut lines: Vec<Line> = Vec::new();

    if !app.session.is_won() {
        lines.push(Line::from(vec![
            Span::raw("The player was "),
            Span::styled(
                app.session.secret().name().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }
    lines.extend(text.lines().map(|l| Line::from(l.to_string())));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.mode {
        AppMode::Finished => (
            " Game over | '?' rules | 'q' to quit ",
            "",
            Color::Green,
        ),
        AppMode::Playing | AppMode::HowToPlay => (
            " Guess a player | TAB complete | ↑↓ choose | ENTER submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let attempts = Paragraph::new(format!(
        "Guesses left: {}",
        app.session.attempts_remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let countdown = Paragraph::new(format!("Next player in {}", app.countdown()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(countdown, chunks[1]);

    let help = Paragraph::new("?: Rules | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_how_to_play(f: &mut Frame, area: Rect) {
    let popup = centered(area, 70, 60);

    let legend = |hint: Hint, text: &'static str| {
        Line::from(vec![
            Span::styled("   ", Style::default().bg(hint_color(hint))),
            Span::raw(format!("  {text}")),
        ])
    };

    let lines = vec![
        Line::from("Guess the women's cricketer of the day in 8 tries."),
        Line::from(""),
        Line::from("Each guess reveals eight attributes:"),
        legend(Hint::Exact, "exact match"),
        legend(
            Hint::Close,
            "close: same continent, similar role, within 2 years or 5 matches",
        ),
        legend(Hint::Miss, "no match"),
        Line::from(""),
        Line::from("↑ the player was born later or has more matches, ↓ the opposite."),
        Line::from("A new player arrives every day at midnight IST."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rectangle of the given percentage size centered in `area`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
