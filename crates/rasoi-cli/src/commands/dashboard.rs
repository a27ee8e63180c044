//! One-shot dashboard commands.

use anyhow::Result;
use colored::Colorize;
use rasoi_application::{DashboardAggregator, DashboardView, GenerateOutcome, SessionRouter};
use rasoi_core::config::ApiConfig;
use rasoi_core::menu::{DAYS_OF_WEEK, MenuResponse};
use rasoi_core::{ApiGateway, RasoiError, SessionStore};
use std::sync::Arc;

fn aggregator(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    config: &ApiConfig,
) -> DashboardAggregator {
    DashboardAggregator::new(gateway, store).with_history_limit(config.history_limit)
}

/// Loads a view, forcing a logout when the session turned out to be dead.
async fn load_view(
    aggregator: &DashboardAggregator,
    store: Arc<dyn SessionStore>,
) -> Result<Option<DashboardView>> {
    let view = aggregator.refresh().await;
    if view.session_expired {
        let mut router = SessionRouter::new(store);
        router.logout()?;
        println!("{}", "Session expired, please log in again.".yellow());
        return Ok(None);
    }
    Ok(Some(view))
}

pub async fn show(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    config: &ApiConfig,
) -> Result<()> {
    if !store.is_authenticated() {
        println!("{}", "Not logged in. Run: rasoi login <username> <password>".yellow());
        return Ok(());
    }
    let username = store.user().unwrap_or_default();

    let agg = aggregator(gateway, store.clone(), config);
    let Some(view) = load_view(&agg, store).await? else {
        return Ok(());
    };

    println!("{}", format!("Welcome back, {}!", username).bold());
    println!("Preferences: {}", view.preference_summary());

    if view.has_preferences {
        println!("{}", "Preferences configured!".green());
    } else {
        println!("{}", "Set up your preferences to get started: rasoi preferences".yellow());
    }

    match &view.current_menu {
        Some(menu) => {
            println!(
                "{}",
                format!("Menu ready! Generated {}", format_timestamp(&menu.generated_at)).blue()
            );
            print_menu(menu);
        }
        None => println!("{}", "No active menu".bright_black()),
    }

    if !view.menu_history.is_empty() {
        println!();
        println!("{}", "Recent menus".bold());
        for entry in view.menu_history.iter().take(3) {
            let status = if entry.is_active {
                "Active Menu".green()
            } else {
                "Previous Menu".bright_black()
            };
            println!(
                "  #{} {} - {}",
                entry.id,
                format_timestamp(&entry.generated_at),
                status
            );
        }
        println!(
            "{}",
            format!("Menus generated: {}", view.menu_history.len()).bright_black()
        );
    }

    Ok(())
}

pub async fn generate(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    config: &ApiConfig,
) -> Result<()> {
    let agg = aggregator(gateway, store.clone(), config);
    let Some(view) = load_view(&agg, store).await? else {
        return Ok(());
    };

    let outcome = if view.current_menu.is_some() {
        agg.regenerate_menu(&view).await?
    } else {
        agg.generate_menu(&view).await?
    };

    match outcome {
        GenerateOutcome::Generated { menu, history } => {
            println!("{}", "Menu generated successfully!".green());
            print_menu(&menu);
            if !history.is_empty() {
                println!(
                    "{}",
                    format!("Menus generated so far: {}", history.len()).bright_black()
                );
            }
        }
        GenerateOutcome::NeedsPreferences => {
            println!("{}", "Please set up your preferences first!".yellow());
            println!("Run: {}", "rasoi preferences".bright_black());
        }
        GenerateOutcome::NoActiveMenu => {
            println!("{}", "No active menu to regenerate.".yellow());
        }
    }

    Ok(())
}

pub async fn regenerate_meal(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    config: &ApiConfig,
    menu_id: Option<i64>,
    day: String,
    meal: String,
) -> Result<()> {
    let agg = aggregator(gateway, store.clone(), config);
    let Some(view) = load_view(&agg, store).await? else {
        return Ok(());
    };

    let menu_id = match menu_id.or_else(|| view.current_menu.as_ref().and_then(|m| m.menu_id)) {
        Some(id) => id,
        None => {
            println!("{}", "No active menu; generate one first.".yellow());
            return Ok(());
        }
    };

    let menu = agg.regenerate_meal(menu_id, &day, &meal).await?;
    match menu.dish(&day, &meal) {
        Some(dish) => println!("{}", format!("{} {} is now: {}", day, meal, dish).green()),
        None => println!("{}", "Meal regenerated.".green()),
    }

    Ok(())
}

pub async fn history(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    limit: usize,
) -> Result<()> {
    let token = store.token().ok_or(RasoiError::MissingCredential)?;
    let entries = gateway.get_menu_history(&token, limit).await?;

    if entries.is_empty() {
        println!("{}", "No menus generated yet".bright_black());
        return Ok(());
    }

    for entry in &entries {
        let status = if entry.is_active {
            "Active Menu".green()
        } else {
            "Previous Menu".bright_black()
        };
        println!(
            "#{} {} - {}",
            entry.id,
            format_timestamp(&entry.generated_at),
            status
        );
        for day in DAYS_OF_WEEK {
            if let Some(dishes) = entry.menu_preview.get(day) {
                println!("  {}: {}", day, dishes.join(", "));
            }
        }
    }

    Ok(())
}

/// Renders a server timestamp as a short local date, falling back to the
/// raw string when it is not RFC 3339.
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Prints a weekly menu in day order, skipping days the server omitted.
pub fn print_menu(menu: &MenuResponse) {
    for day in DAYS_OF_WEEK {
        let Some(meals) = menu.menu.get(day) else {
            continue;
        };
        println!("{}", day.bold());
        for (meal, dish) in meals {
            println!("  {}: {}", meal, dish);
        }
    }
}
