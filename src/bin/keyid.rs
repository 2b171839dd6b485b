//! Key inspector: shows the name of every key pressed. Esc quits.

use std::process::ExitCode;

use cligui::core::{Context, Key, KeyCode, Widget};
use cligui::ui::backend::terminal::CrosstermSurface;
use cligui::ui::geom::Placement;
use cligui::ui::painter::Painter;
use cligui::ui::style::Styles;
use cligui::App;

#[derive(Default)]
struct KeyEcho {
    placement: Placement,
    last: Option<Key>,
}

impl Widget for KeyEcho {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn render(&self, painter: &mut Painter, styles: &Styles) {
        let pos = self.placement.pos;
        match self.last {
            None => painter.text(pos, "Press any key (Esc quits)", styles.normal),
            Some(key) => {
                let label = "Pressed key: ";
                painter.text(pos, label, styles.normal);
                painter.text(pos.offset(label.len() as u16, 0), key.to_string(), styles.active);
            }
        }
    }

    fn dispatch(&mut self, key: Key, cx: &mut Context<'_>) -> cligui::Result<()> {
        if key.code == KeyCode::Esc {
            cx.end();
        } else {
            self.last = Some(key);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let _logging = cligui::logging::init();

    let mut app = App::new();
    // Tab is a key to inspect here, not a focus change.
    app.set_tabnav(false);
    app.add(KeyEcho::default().at(0, 0));

    let mut surface = CrosstermSurface::new();
    let outcome = app.run(&mut surface);
    drop(surface);

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if err.is_interrupted() => ExitCode::from(130),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
