use chrono::Local;
use clap::Args;
use daylog_core::{Config, DateKey, EntryStore, StreakCalculator, StreakPolicy};
use serde::Serialize;

#[derive(Args)]
pub struct StreakArgs {
    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct StreakReport {
    streak: u32,
    today: DateKey,
    policy: StreakPolicy,
}

pub fn run(args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = EntryStore::open_default()?;

    let today = DateKey::encode(Local::now().date_naive());
    let days = store.all_keys()?;
    let streak = StreakCalculator::with_policy(config.streak.policy).compute(&days, today);

    if args.json {
        let report = StreakReport {
            streak,
            today,
            policy: config.streak.policy,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{streak} consecutive days");
    }
    Ok(())
}
