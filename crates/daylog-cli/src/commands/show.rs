use chrono::Local;
use clap::Args;
use daylog_core::{DateKey, EntryStore, StoreError};

#[derive(Args)]
pub struct ShowArgs {
    /// Day to show, as YYYY-MM-DD (default: today)
    date: Option<String>,
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let key = match args.date {
        Some(s) => DateKey::decode(&s)?,
        None => DateKey::encode(Local::now().date_naive()),
    };

    let store = EntryStore::open_default()?;
    match store.get(&key) {
        Ok(Some(entry)) => println!("{}", serde_json::to_string_pretty(&entry)?),
        Ok(None) => println!("no entry for {key}"),
        Err(StoreError::CorruptEntry { .. }) => {
            eprintln!("warning: stored entry for {key} is unreadable");
            println!("no entry for {key}");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
