//! Screen rendering with ratatui widgets.

use super::app::App;
use hospital_core::{FormSession, Notice, Screen, TableView, ACTIONS};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

const APP_TITLE: &str = "Hospital Management System";

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let title = Paragraph::new(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL))
    .style(Style::default().bg(Color::Blue));
    frame.render_widget(title, header);

    match app.screen() {
        Screen::Menu | Screen::Exit => draw_menu(frame, body, app.menu_index()),
        Screen::Form(session) => draw_form(frame, body, session, app.form_focus()),
        Screen::List(table) => draw_table(frame, body, table, app.list_offset()),
    }

    draw_footer(frame, footer, app);
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let items = ACTIONS
        .iter()
        .enumerate()
        .map(|(index, entry)| ListItem::new(format!("{}. {}", index + 1, entry.label)))
        .collect::<Vec<_>>();
    let menu = List::new(items)
        .block(Block::default().title("Menu").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(menu, area, &mut state);
}

fn draw_form(frame: &mut Frame, area: Rect, session: &FormSession, focus: usize) {
    let spec = session.spec();
    let mut lines = Vec::with_capacity(spec.fields.len() * 2 + 2);

    for (index, field) in spec.fields.iter().enumerate() {
        let focused = index == focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value = session.values().get(index).map_or("", String::as_str);
        let value_span = if value.is_empty() {
            Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value)
        };
        let cursor = if focused { "_" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label), label_style),
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::default());
    }

    if let Some(error) = session.error() {
        lines.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
    }

    let form =
        Paragraph::new(lines).block(Block::default().title(spec.title).borders(Borders::ALL));
    frame.render_widget(form, area);
}

fn draw_table(frame: &mut Frame, area: Rect, table: &TableView, offset: usize) {
    let block = Block::default().title(table.title).borders(Borders::ALL);
    if table.is_empty() {
        frame.render_widget(Paragraph::new("No records yet.").block(block), area);
        return;
    }

    let header = Row::new(table.columns.iter().copied()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = table
        .rows
        .iter()
        .skip(offset)
        .map(|row| Row::new(row.iter().map(String::as_str)));
    let widths = vec![Constraint::Fill(1); table.columns.len()];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.notice() {
        Some(Notice::Info(message)) => {
            Span::styled(message.as_str(), Style::default().fg(Color::Green))
        }
        Some(Notice::Error(message)) => {
            Span::styled(message.as_str(), Style::default().fg(Color::Red))
        }
        None => Span::raw(""),
    };
    let help = match app.screen() {
        Screen::Form(_) => "[Enter] save  [Tab] next field  [Esc] cancel",
        Screen::List(_) => "[j/k] scroll  [Esc] back",
        Screen::Menu | Screen::Exit => "[Enter] open  [1-7] jump  [q] exit",
    };

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(Block::default().borders(Borders::ALL).inner(area));
    frame.render_widget(Block::default().borders(Borders::ALL), area);
    frame.render_widget(Paragraph::new(Line::from(status)), left);
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::Yellow))),
        right,
    );
}
