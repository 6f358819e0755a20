use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reorder_quiz::{App, AppConfig, Phase, config, logger, ui};
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    let app_config = AppConfig::load(Path::new(config::CONFIG_FILE));

    // Availability gating happens before any terminal or session setup.
    let gate = app_config.gate();
    if let Err(reason) = gate.check(gate.local_now()) {
        eprintln!("{}", reason);
        return Ok(());
    }

    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&app_config);

    loop {
        terminal.draw(|f| match app.engine.phase() {
            Phase::Menu => ui::draw_menu(
                f,
                &app.files,
                app.selected_file,
                &app.count_labels(),
                app.count_choice,
                app.focused_panel,
                app.engine.bank().map(|b| b.len()),
                app.status.as_deref(),
            ),
            Phase::Quiz => {
                if let (Some(question), Some(run)) = (app.engine.question(), app.engine.run()) {
                    ui::draw_quiz(f, question, run, app.highlighted, app.banner.as_ref());
                }
            }
            Phase::Done => ui::draw_done(
                f,
                app.engine.session(),
                app.engine.run_elapsed_seconds(),
                &app.name_buffer,
                app.save_status.as_deref(),
            ),
            Phase::Finished => ui::draw_finished(f, app.engine.session()),
        })?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
