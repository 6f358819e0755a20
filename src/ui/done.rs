use crate::export::human_time;
use crate::models::{AnswerResult, SessionState};
use crate::ui::layout::calculate_done_chunks;
use crate::utils::display_width;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_done(
    f: &mut Frame,
    session: &SessionState,
    run_seconds: u64,
    name: &str,
    save_status: Option<&str>,
) {
    let layout = calculate_done_chunks(f.area());

    let header = Paragraph::new("All questions done!")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let correct = session
        .history
        .iter()
        .filter(|e| e.result == AnswerResult::Correct)
        .count();

    let mut stats = Text::default();
    stats.push_line(Line::from(format!(
        "This run: {}",
        human_time(run_seconds)
    )));
    stats.push_line(Line::from(format!(
        "Total study time: {}",
        human_time(session.cumulative_elapsed_seconds)
    )));
    stats.push_line(Line::from(""));
    stats.push_line(Line::from(format!(
        "Session history: {} answered, {} correct",
        session.history.len(),
        correct
    )));
    if let Some(status) = save_status {
        stats.push_line(Line::from(""));
        stats.push_line(Line::from(Span::styled(
            status,
            Style::default().fg(Color::Yellow),
        )));
    }
    let stats = Paragraph::new(stats)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(stats, layout.stats_area);

    let name_display = if name.is_empty() {
        Text::from(Span::styled(
            "[Type your name to label the export...]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Text::from(name)
    };
    let name_input = Paragraph::new(name_display)
        .block(Block::default().borders(Borders::ALL).title("Your name"));
    f.render_widget(name_input, layout.name_area);

    let cursor_x = layout.name_area.x + 1 + display_width(name) as u16;
    let cursor_y = layout.name_area.y + 1;
    f.set_cursor_position((cursor_x, cursor_y));

    let help_text = vec![
        Line::from(vec![
            Span::styled(
                "Ctrl+S",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Save history CSV  "),
            Span::styled(
                "Ctrl+A",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" One more run"),
        ]),
        Line::from(vec![
            Span::styled(
                "Ctrl+F",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Finish session  "),
            Span::styled(
                "Ctrl+C",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Exit App"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
