//! cligui demo: a label and a menu that can show the time, show the weather,
//! or quit.

use std::path::PathBuf;
use std::process::ExitCode;

use cligui::core::config::{load_config, load_config_from, AppConfig};
use cligui::core::Widget;
use cligui::ui::backend::terminal::CrosstermSurface;
use cligui::widgets::{Menu, MenuOption, Text};
use cligui::App;

fn main() -> ExitCode {
    let _logging = cligui::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("cligui");

    let config = match parse_config_arg(args.get(1..).unwrap_or_default()) {
        Ok(Some(path)) => match load_config_from(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        Ok(None) => load_config().unwrap_or_default(),
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!();
            eprintln!("Usage: {} [--config <file.json>]", program_name);
            return ExitCode::FAILURE;
        }
    };

    #[cfg(unix)]
    {
        use cligui::tui::screen::{exit_on_signals, CrosstermScreen};
        use std::sync::Arc;

        if let Err(err) = exit_on_signals(Arc::new(CrosstermScreen)) {
            tracing::warn!(error = %err, "failed to install signal handlers");
        }
    }

    let mut app = build_app(&config);
    let mut surface = CrosstermSurface::new();
    let outcome = app.run(&mut surface);
    // Give the terminal back before anything is printed.
    drop(surface);

    match outcome {
        Ok(Some(message)) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) if err.is_interrupted() => ExitCode::from(130),
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_config_arg(args: &[String]) -> Result<Option<PathBuf>, String> {
    match args {
        [] => Ok(None),
        [flag, path] if flag == "--config" => Ok(Some(PathBuf::from(path))),
        [flag] if flag == "--config" => Err("--config needs a file".to_string()),
        [other, ..] => Err(format!("unexpected argument '{}'", other)),
    }
}

fn build_app(config: &AppConfig) -> App {
    let mut app = App::with_config(config);

    let display = app.add(Text::new("Testing testing testing...").at(3, 3));

    let menu = Menu::new([
        MenuOption::new("Show time", move |cx| {
            let time = chrono::Local::now().format("%I:%M %p").to_string();
            cx.update::<Text, _>(display, move |text| {
                text.set_text(format!("The time is {}.", time))
            });
            Ok(())
        }),
        MenuOption::new("Show weather", move |cx| {
            cx.update::<Text, _>(display, |text| {
                text.set_text("The weather is sunny, 65 degrees. (example)")
            });
            Ok(())
        }),
        MenuOption::new("Quit", |cx| {
            cx.end_with("Bye bye!");
            Ok(())
        }),
    ])
    .with_default(2)
    .symbol("*")
    .at(3, 5);

    let menu = app.add(menu);
    app.set_focus(menu);
    app
}
