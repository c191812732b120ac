//! TUI rendering with ratatui
//!
//! Draws the board grid in the configured palette, a side panel with
//! progress and messages, and popups for wins and export errors.

use super::app::{App, InputMode, MessageStyle};
use crate::config::Colors;
use crate::core::{FREE_INDEX, GRID_SIZE, index_of};
use crate::output::formatters::line_name;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::str::FromStr;

/// Palette resolved into terminal colors
struct Palette {
    bg: Color,
    card: Color,
    accent: Color,
    marked: Color,
    text: Color,
}

impl Palette {
    fn from_colors(colors: &Colors) -> Self {
        let defaults = Colors::default();
        let pick = |value: &str, fallback: &str| {
            Color::from_str(value)
                .or_else(|_| Color::from_str(fallback))
                .unwrap_or(Color::Reset)
        };
        Self {
            bg: pick(&colors.bg, &defaults.bg),
            card: pick(&colors.card, &defaults.card),
            accent: pick(&colors.accent, &defaults.accent),
            marked: pick(&colors.marked, &defaults.marked),
            text: pick(&colors.text, &defaults.text),
        }
    }
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>) {
    let palette = Palette::from_colors(&app.controller.config().colors);
    f.render_widget(Block::default().style(Style::default().bg(palette.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board and side panel
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    render_header(f, app, &palette, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_board(f, app, &palette, main_chunks[0]);
    render_info_panel(f, app, &palette, main_chunks[1]);
    render_help(f, app, chunks[2]);

    match app.input_mode() {
        InputMode::WinCelebration => render_win_popup(f, app, &palette),
        InputMode::Notification => render_notification(f, app),
        InputMode::Board => {}
    }
}

fn render_header<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, S>,
    palette: &Palette,
    area: Rect,
) {
    let config = app.controller.config();
    let mut spans = vec![Span::styled(
        config.board_title.clone(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(image) = config.header_image() {
        spans.push(Span::styled(
            format!("  [{image}]"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.accent)),
        );
    f.render_widget(header, area);
}

fn render_board<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, S>,
    palette: &Palette,
    area: Rect,
) {
    let winning = app.winning_lines();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE])
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            let index = index_of(row, col);
            let Some(cell) = app.view.cell(index) else {
                continue;
            };
            let on_line = winning.iter().any(|line| line.contains(index));
            let selected = index == app.cursor;

            let mut text_style = Style::default()
                .fg(palette.text)
                .bg(if cell.marked { palette.marked } else { palette.card });
            if on_line {
                text_style = text_style.add_modifier(Modifier::BOLD);
            }

            let (border_type, border_color) = if selected {
                (BorderType::Thick, palette.accent)
            } else if index == FREE_INDEX {
                (BorderType::Double, palette.accent)
            } else {
                (BorderType::Rounded, Color::DarkGray)
            };

            let widget = Paragraph::new(cell.content.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(text_style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(Style::default().fg(border_color)),
                );
            f.render_widget(widget, *cell_area);
        }
    }
}

fn render_info_panel<S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, S>,
    palette: &Palette,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Length(6), // Board status
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let marked = app.marked_count();
    let total = app.view.cells().len();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Marked ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(palette.marked))
        .percent((marked * 100 / total.max(1)) as u16)
        .label(format!("{marked}/{total}"));
    f.render_widget(gauge, chunks[0]);

    let winning = app.winning_lines();
    let mut status = vec![
        Line::from(format!("Words in pool: {}", app.controller.pool().len())),
        Line::from(format!("Cell: {} ", app.cursor)),
    ];
    if winning.is_empty() {
        status.push(Line::from("No bingo yet"));
    } else {
        let names: Vec<String> = winning.iter().map(|l| line_name(*l)).collect();
        status.push(Line::from(Span::styled(
            format!("BINGO: {}", names.join(", ")),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }
    let status = Paragraph::new(status)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Board ").borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

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
    f.render_widget(messages_list, chunks[2]);
}

fn render_help<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let export_hint = if app.exporting {
        "exporting…"
    } else {
        "e: Export"
    };
    let help_text = match app.input_mode() {
        InputMode::Board => format!(
            "←↑↓→: Move | Space: Mark | n: New | s: Shuffle | c: Clear saved | {export_hint} | q: Quit"
        ),
        InputMode::WinCelebration => {
            format!("Esc: Keep playing | n: New board | {export_hint} | q: Quit")
        }
        InputMode::Notification => "Any key: Dismiss".to_string(),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_win_popup<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, palette: &Palette) {
    let area = popup_area(f.area(), 44, 7);
    let names: Vec<String> = app.winning_lines().iter().map(|l| line_name(*l)).collect();

    let content = vec![
        Line::from(Span::styled(
            "🎉 B I N G O ! 🎉",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(names.join(", ")),
        Line::from(""),
        Line::from("Esc to keep playing, n for a new board"),
    ];

    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_notification<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>) {
    let area = popup_area(f.area(), 60, 7);
    let text = app.notification.as_deref().unwrap_or_default();

    let popup = Paragraph::new(vec![
        Line::from(text.to_string()),
        Line::from(""),
        Line::from("Press any key to continue"),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Centered rectangle of at most `width` × `height`
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
