use clap::Subcommand;
use dailytip_core::theme::{load_theme, save_theme};
use dailytip_core::{Config, Result, SqliteStore, Theme};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the active theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Set the theme explicitly
    Set {
        /// "dark" or "light"
        theme: Theme,
    },
}

pub fn run(action: ThemeAction) -> Result<()> {
    let config = Config::load()?;
    let mut store = SqliteStore::open()?;
    let current = load_theme(&store, config.ui.default_theme);

    let theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Toggle => {
            let next = current.toggled();
            save_theme(&mut store, next)?;
            next
        }
        ThemeAction::Set { theme } => {
            save_theme(&mut store, theme)?;
            theme
        }
    };
    println!("{theme}");
    Ok(())
}
