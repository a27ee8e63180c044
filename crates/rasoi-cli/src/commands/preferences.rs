//! Interactive preference wizard.

use anyhow::Result;
use colored::Colorize;
use rasoi_application::{HydrationOutcome, PreferenceFlow};
use rasoi_core::preference::{PreferenceWizard, catalog};
use rasoi_core::{ApiGateway, SessionStore};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;

/// How an interactive wizard session ended.
pub enum WizardExit {
    Saved,
    Cancelled,
}

pub async fn run(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    update: bool,
) -> Result<()> {
    let flow = PreferenceFlow::new(gateway, store);
    let mut rl = DefaultEditor::new()?;
    match run_wizard(&mut rl, &flow, update).await? {
        WizardExit::Saved => {}
        WizardExit::Cancelled => println!("{}", "Preferences unchanged".bright_black()),
    }
    Ok(())
}

/// Drives one wizard session over a readline editor.
///
/// Options toggle by number; `n`/`p` move between steps, `f` saves from
/// the last step, `q` cancels. A rejected save keeps the wizard on the
/// final step so the user can retry.
pub async fn run_wizard(
    rl: &mut DefaultEditor,
    flow: &PreferenceFlow,
    update: bool,
) -> Result<WizardExit> {
    let (mut wizard, outcome) = flow.start(update).await;
    if outcome == HydrationOutcome::Hydrated {
        println!("{}", "Loaded your saved preferences.".bright_black());
    }

    loop {
        render_step(&wizard);

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Ok(WizardExit::Cancelled);
            }
            Err(err) => return Err(err.into()),
        };
        let input = line.trim();

        match input {
            "" => {}
            "q" | "quit" => return Ok(WizardExit::Cancelled),
            "n" | "next" => {
                if !wizard.next() {
                    println!("{}", "Already at the last step; 'f' to finish".yellow());
                }
            }
            "p" | "prev" => {
                if !wizard.prev() {
                    println!("{}", "Already at the first step".yellow());
                }
            }
            "f" | "finish" => {
                if !wizard.is_last_step() {
                    println!("{}", "Finish is available on the last step".yellow());
                    continue;
                }
                match flow.finish(&wizard).await {
                    Ok(_) => {
                        println!("{}", "Preferences saved!".green());
                        return Ok(WizardExit::Saved);
                    }
                    Err(err) => {
                        // Stay on the final step for retry
                        eprintln!("{}", format!("Failed to save preferences: {}", err).red());
                    }
                }
            }
            _ => match input.parse::<usize>() {
                Ok(index) if index >= 1 => {
                    let category = wizard.current_category();
                    match catalog::options(category).get(index - 1) {
                        Some(option) => wizard.toggle(category, option.id),
                        None => println!("{}", "No such option".yellow()),
                    }
                }
                _ => println!(
                    "{}",
                    "Enter an option number, or n/p to move, f to finish, q to quit"
                        .bright_black()
                ),
            },
        }
    }
}

fn render_step(wizard: &PreferenceWizard) {
    let category = wizard.current_category();

    println!();
    println!(
        "{}  {}",
        format!("Step {} of {}", wizard.current_step() + 1, wizard.step_count()).bright_magenta(),
        format!("{} preferences selected", wizard.selected_count()).bright_black(),
    );
    println!("{}", category.title().bold());

    for (index, option) in catalog::options(category).iter().enumerate() {
        let marker = if wizard.is_selected(category, option.id) {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        println!("  {} {} {}", format!("{}.", index + 1).bright_black(), marker, option.label);
    }
}
