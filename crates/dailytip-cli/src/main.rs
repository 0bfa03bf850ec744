use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod desktop;
mod logging;

#[derive(Parser)]
#[command(name = "dailytip", version, about = "Sustainability Daily: one tip a day")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's tip
    Today(commands::today::TodayArgs),
    /// Draw random tips without touching today's tip
    Shuffle(commands::shuffle::ShuffleArgs),
    /// Browse the tip catalog
    Tips {
        #[command(subcommand)]
        action: commands::tips::TipsAction,
    },
    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Send today's tip as a desktop notification
    Notify,
    /// Notification permission management
    Notifications {
        #[command(subcommand)]
        action: commands::notifications::NotificationsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Today(args) => commands::today::run(args),
        Commands::Shuffle(args) => commands::shuffle::run(args),
        Commands::Tips { action } => commands::tips::run(action),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Notify => commands::notify::run(),
        Commands::Notifications { action } => commands::notifications::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "dailytip", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
