//! Demonstration shell for `apptheme`: a three-entry appearance menu.
//!
//! The demo is a consumer of the theming component, nothing more. It reads
//! single keypresses, writes the store, and re-renders a styled preview
//! through the wrapper on every pass.

use std::io;

use apptheme::{effective_color_mode, AppTheme, ColorMode, ThemeStore, ThemeStyle};
use console::{Key, Style, Term};

/// Chrome styles resolved under the appearance currently in effect.
fn chrome() -> (Style, Style) {
    match effective_color_mode() {
        ColorMode::Light => (
            Style::new().black().on_white().bold(),
            Style::new().blue(),
        ),
        ColorMode::Dark => (
            Style::new().white().on_black().bold(),
            Style::new().cyan(),
        ),
    }
}

fn screen(store: &ThemeStore) -> String {
    let (banner, accent) = chrome();
    let current = store.get();

    let mut lines = vec![
        banner.apply_to(" apptheme demo ").to_string(),
        String::new(),
        format!("Current style: {}", accent.apply_to(current)),
        format!("Rendering as:  {:?}", effective_color_mode()),
        String::new(),
    ];
    for (index, style) in ThemeStyle::ALL.iter().enumerate() {
        let marker = if *style == current { "*" } else { " " };
        lines.push(format!("  [{}] {} {}", index + 1, marker, style));
    }
    lines.push(String::new());
    lines.push("1-3 to select, q to quit".to_string());
    lines.join("\n")
}

fn main() -> io::Result<()> {
    let term = Term::stdout();
    let store = ThemeStore::for_app("apptheme-demo");

    let preview = store.clone();
    let themed = AppTheme::new(store.clone(), move || screen(&preview));

    loop {
        term.clear_screen()?;
        term.write_line(&themed.render())?;

        match term.read_key()? {
            Key::Char('1') => store.set(ThemeStyle::SystemDefault),
            Key::Char('2') => store.set(ThemeStyle::Light),
            Key::Char('3') => store.set(ThemeStyle::Dark),
            Key::Char('q') | Key::Escape => break,
            _ => {}
        }
    }

    term.clear_screen()?;
    Ok(())
}
