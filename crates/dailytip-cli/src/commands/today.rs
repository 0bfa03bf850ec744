use clap::Args;
use dailytip_core::{Config, Result};

use super::open_widget;

#[derive(Args)]
pub struct TodayArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
    /// Discard today's tip and pick another one
    #[arg(long)]
    pub refresh: bool,
}

pub fn run(args: TodayArgs) -> Result<()> {
    let config = Config::load()?;
    let (mut widget, mut selector) = open_widget(&config)?;

    if args.refresh {
        widget.reshuffle(&mut selector)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&widget.view())?);
    } else {
        let tip = widget.displayed_tip();
        println!("{}", tip.text);
        println!("Category: {}", tip.category);
    }
    Ok(())
}
