// rpnc: an interactive RPN calculator for the terminal

use rpnc::calculator::Calculator;
use rpnc::clipboard;
use rpnc::config::Config;
use rpnc::input::CrosstermInput;
use rpnc::logging;
use rpnc::terminal::TerminalGuard;
use rpnc::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let clipboard = clipboard::from_config(&config);

    // Set up terminal
    let mut guard = TerminalGuard::enter()?;

    // Create and run app
    let mut app = App::new(Calculator::new(), clipboard);
    let res = app.run(guard.terminal_mut(), &mut CrosstermInput::new());

    // Restore terminal
    guard.restore()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if let Some(text) = app.copied() {
        log::info!("session ended, {} on the clipboard", text);
    }

    Ok(())
}
