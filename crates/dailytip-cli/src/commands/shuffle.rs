use clap::Args;
use dailytip_core::{Config, Result, TipSelector};
use serde::Serialize;

#[derive(Args)]
pub struct ShuffleArgs {
    /// Number of consecutive picks
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Pick {
    index: Option<usize>,
    text: String,
    category: String,
}

/// Random picks that bypass the daily cache.
pub fn run(args: ShuffleArgs) -> Result<()> {
    let config = Config::load()?;
    let mut selector = TipSelector::new(config.catalog()?);

    let picks: Vec<Pick> = (0..args.count)
        .map(|_| {
            let (index, tip) = selector.next_indexed();
            Pick {
                index,
                text: tip.text,
                category: tip.category,
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
    } else {
        for pick in &picks {
            println!("[{}] {}", pick.category, pick.text);
        }
    }
    Ok(())
}
