pub mod layout;
mod done;
mod finished;
mod menu;
mod quiz;

pub use done::draw_done;
pub use finished::draw_finished;
pub use layout::{calculate_done_chunks, calculate_quiz_chunks};
pub use menu::draw_menu;
pub use quiz::draw_quiz;
