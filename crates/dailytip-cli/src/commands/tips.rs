use clap::Subcommand;
use dailytip_core::{Config, Result, Tip};

#[derive(Subcommand)]
pub enum TipsAction {
    /// List every tip in the catalog
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories in catalog order
    Categories,
}

pub fn run(action: TipsAction) -> Result<()> {
    let catalog = Config::load()?.catalog()?;

    match action {
        TipsAction::List { json } => {
            if json {
                let tips: Vec<&Tip> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&tips)?);
            } else if catalog.is_empty() {
                println!("No tips available yet.");
            } else {
                for (i, tip) in catalog.iter().enumerate() {
                    println!("{:>3}. [{}] {}", i + 1, tip.category, tip.text);
                }
            }
        }
        TipsAction::Categories => {
            for category in catalog.categories() {
                println!("{category}");
            }
        }
    }
    Ok(())
}
