use crate::engine::GradeOutcome;
use crate::models::{AnswerResult, QuestionState, RunState};
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_quiz(
    f: &mut Frame,
    question: &QuestionState,
    run: &RunState,
    highlighted: usize,
    banner: Option<&GradeOutcome>,
) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!("Question {} / {}", run.answered + 1, run.total);
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let translation = Paragraph::new(question.record.translation.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Put the words in order"),
        );
    f.render_widget(translation, layout.translation_area);

    let mut token_spans = Vec::new();
    for (i, token) in question.remaining_tokens.iter().enumerate() {
        let style = if i == highlighted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        token_spans.push(Span::styled(format!(" {} ", token), style));
        token_spans.push(Span::from(" "));
    }
    if token_spans.is_empty() {
        token_spans.push(Span::styled(
            "(all words placed)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    let tokens = Paragraph::new(Line::from(token_spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Words"));
    f.render_widget(tokens, layout.tokens_area);

    let mut selection_text = Text::default();
    selection_text.push_line(Line::from(question.selected_tokens.join(" ")));
    if let Some(outcome) = banner {
        selection_text.push_line(Line::from(""));
        match outcome.result {
            AnswerResult::Correct => {
                selection_text.push_line(Line::from(Span::styled(
                    format!("Correct! {}", outcome.sentence),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            AnswerResult::Incorrect => {
                selection_text.push_line(Line::from(Span::styled(
                    format!("Incorrect... the answer was: {}", outcome.sentence),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
            }
        }
        selection_text.push_line(Line::from(format!("{}s", outcome.elapsed_seconds)));
    }
    let selection = Paragraph::new(selection_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your ordering"),
        );
    f.render_widget(selection, layout.selection_area);

    let help_text = vec![
        Line::from(vec![
            Span::styled(
                "←/→",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Highlight  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Pick word / Grade  "),
            Span::styled(
                "u",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Undo  "),
            Span::styled(
                "r",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Reshuffle"),
        ]),
        Line::from(vec![
            Span::styled(
                "g",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Grade  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Quit to Menu  "),
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
