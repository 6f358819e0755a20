use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub translation_area: Rect,
    pub tokens_area: Rect,
    pub selection_area: Rect,
    pub help_area: Rect,
}

pub struct DoneLayout {
    pub header_area: Rect,
    pub stats_area: Rect,
    pub name_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        translation_area: chunks[1],
        tokens_area: chunks[2],
        selection_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_done_chunks(area: Rect) -> DoneLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    DoneLayout {
        header_area: chunks[0],
        stats_area: chunks[1],
        name_area: chunks[2],
        help_area: chunks[3],
    }
}
