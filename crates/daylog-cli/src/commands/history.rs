use clap::Args;
use daylog_core::{Config, EntryStore, HistoryProjector};

#[derive(Args)]
pub struct HistoryArgs {
    /// Emit the summary as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: HistoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = EntryStore::open_default()?;

    let entries = store.load_all()?;
    let summary = HistoryProjector::with_headline(config.journal.headline_question).build(&entries);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.is_empty() {
        println!("no entries yet");
        return Ok(());
    }
    for item in &summary.items {
        println!("{}  {}", item.key, item.excerpt);
    }
    Ok(())
}
