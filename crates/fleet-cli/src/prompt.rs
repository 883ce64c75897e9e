use async_trait::async_trait;
use dashboard::dispatch::Prompter;
use std::io::{self, Write};

/// Stdin-backed prompter. EOF or an unreadable line counts as cancel.
pub struct StdinPrompter;

fn read_trimmed_line() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}

fn print_options(options: &[(i64, String)]) {
    for (index, (_, label)) in options.iter().enumerate() {
        println!("  {}) {label}", index + 1);
    }
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn input(&self, label: &str) -> Option<String> {
        print!("{label}: ");
        io::stdout().flush().ok()?;
        read_trimmed_line()
    }

    async fn confirm(&self, question: &str) -> bool {
        print!("{question} [y/N]: ");
        if io::stdout().flush().is_err() {
            return false;
        }
        match read_trimmed_line() {
            Some(answer) => answer.to_lowercase() == "y",
            None => false,
        }
    }

    async fn select(&self, label: &str, options: &[(i64, String)]) -> Option<i64> {
        if options.is_empty() {
            return None;
        }
        println!("{label}:");
        print_options(options);
        print!("Choice: ");
        io::stdout().flush().ok()?;

        let choice = read_trimmed_line()?.parse::<usize>().ok()?;
        options.get(choice.checked_sub(1)?).map(|(id, _)| *id)
    }

    async fn multi_select(&self, label: &str, options: &[(i64, String)]) -> Option<Vec<i64>> {
        if options.is_empty() {
            return None;
        }
        println!("{label}:");
        print_options(options);
        print!("Choices (comma-separated): ");
        io::stdout().flush().ok()?;

        let line = read_trimmed_line()?;
        if line.is_empty() {
            return Some(Vec::new());
        }
        let mut ids = Vec::new();
        for part in line.split(',') {
            let choice = part.trim().parse::<usize>().ok()?;
            let (id, _) = options.get(choice.checked_sub(1)?)?;
            ids.push(*id);
        }
        Some(ids)
    }
}
