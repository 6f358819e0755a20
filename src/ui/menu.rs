use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::path::PathBuf;

fn draw_panel_header(area: Rect, title: &str, focused: bool, f: &mut Frame) {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let header = Paragraph::new(title)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default());

    f.render_widget(header, area);
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw_menu(
    f: &mut Frame,
    files: &[PathBuf],
    selected_file: usize,
    count_labels: &[String],
    count_choice: usize,
    focused_panel: usize,
    bank_size: Option<usize>,
    status: Option<&str>,
) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(area);

    let title = Paragraph::new("Sentence Reorder Quiz v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let file_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[1]);

    let count_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[2]);

    draw_panel_header(file_chunks[0], "[1] Wordlists", focused_panel == 0, f);

    let file_items: Vec<ListItem> = if files.is_empty() {
        vec![
            ListItem::new("No CSV files in the wordlists directory").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path.file_stem().unwrap().to_string_lossy().to_string();
                let style = if i == selected_file && focused_panel == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let file_list = List::new(file_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(panel_border(focused_panel == 0)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(file_list, file_chunks[1]);

    let count_title = match bank_size {
        Some(n) => format!("[2] Question count ({} sentences loaded)", n),
        None => "[2] Question count".to_string(),
    };
    draw_panel_header(count_chunks[0], &count_title, focused_panel == 1, f);

    let count_items: Vec<ListItem> = count_labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == count_choice && focused_panel == 1 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label.as_str()).style(style)
        })
        .collect();

    let count_list = List::new(count_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(panel_border(focused_panel == 1)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(count_list, count_chunks[1]);

    let mut footer = Vec::new();
    if let Some(status) = status {
        footer.push(Line::from(Span::styled(
            status,
            Style::default().fg(Color::Yellow),
        )));
    }
    footer.push(Line::from(vec![
        Span::styled(
            "1/2",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Focus Panel  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Load / Start  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ]));
    let help = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
