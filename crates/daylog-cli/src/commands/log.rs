use chrono::Local;
use clap::Args;
use daylog_core::{Config, DateKey, Entry, EntryStore, StreakCalculator};

#[derive(Args)]
pub struct LogArgs {
    /// Answer to a question, as question=answer. Repeatable.
    #[arg(long = "answer", value_name = "QUESTION=ANSWER", value_parser = parse_answer)]
    answers: Vec<(String, String)>,

    /// Free-text note, recorded under the configured note question
    #[arg(long)]
    note: Option<String>,
}

fn parse_answer(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((question, answer)) if !question.is_empty() => {
            Ok((question.to_string(), answer.to_string()))
        }
        _ => Err(format!("expected QUESTION=ANSWER, got {s:?}")),
    }
}

pub fn run(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = EntryStore::open_default()?;

    let mut entry = Entry::new();
    for (question, answer) in args.answers {
        if !config.journal.questions.contains(&question) {
            eprintln!("note: {question:?} is not in the configured question list");
        }
        entry.insert(question, answer);
    }
    if let Some(note) = args.note {
        entry.insert(config.journal.note_question.clone(), note);
    }

    let today = DateKey::encode(Local::now().date_naive());
    store.upsert(&today, &entry)?;
    println!("saved {today}");

    let days = store.all_keys()?;
    let streak = StreakCalculator::with_policy(config.streak.policy).compute(&days, today);
    println!("streak: {streak} consecutive days");
    Ok(())
}
