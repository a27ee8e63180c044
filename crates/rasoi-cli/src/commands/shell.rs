//! Interactive shell that walks the app's screens.
//!
//! The router decides which screen is active; each screen function renders
//! itself, reads input, and returns a navigation intent. Screens never
//! touch the router directly except through the returned intent.

use anyhow::Result;
use colored::Colorize;
use rasoi_application::{
    AuthService, DashboardAggregator, GenerateOutcome, PreferenceFlow, Screen, ScreenProps,
    SessionRouter,
};
use rasoi_core::auth::RegisterRequest;
use rasoi_core::config::ApiConfig;
use rasoi_core::{ApiGateway, SessionStore};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;

use super::dashboard::{format_timestamp, print_menu};
use super::preferences::run_wizard;

/// What a screen asks the router to do next.
enum Intent {
    Stay,
    Navigate(Screen, ScreenProps),
    Login { token: String, username: String },
    Logout,
    Quit,
}

pub async fn run(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    config: &ApiConfig,
) -> Result<()> {
    let mut router = SessionRouter::new(store.clone());
    let auth = AuthService::new(gateway.clone());
    let flow = PreferenceFlow::new(gateway.clone(), store.clone());
    let aggregator =
        DashboardAggregator::new(gateway, store).with_history_limit(config.history_limit);

    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Rasoi ===".bright_magenta().bold());
    println!("{}", "Plan a week of meals around your preferences.".bright_black());

    loop {
        let intent = match router.screen() {
            Screen::Landing => landing_screen(&mut rl)?,
            Screen::Signup => signup_screen(&mut rl, &auth).await?,
            Screen::Login => login_screen(&mut rl, &auth).await?,
            Screen::Dashboard => dashboard_screen(&mut rl, &aggregator, &router).await?,
            Screen::Preferences => {
                preferences_screen(&mut rl, &flow, router.props().is_update).await?
            }
        };

        match intent {
            Intent::Stay => {}
            Intent::Navigate(screen, props) => router.navigate(screen, props),
            Intent::Login { token, username } => {
                router.login(&token, &username)?;
                println!("{}", format!("Welcome, {}!", username).green());
                router.navigate(Screen::Dashboard, ScreenProps::default());
            }
            Intent::Logout => {
                router.logout()?;
                println!("{}", "Logged out".bright_black());
            }
            Intent::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
        }
    }

    Ok(())
}

/// Reads one line, mapping Ctrl-C/Ctrl-D onto `None`.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn landing_screen(rl: &mut DefaultEditor) -> Result<Intent> {
    println!();
    println!("{}", "Type 'login', 'signup' or 'quit'.".bright_black());

    let Some(input) = read_line(rl, "rasoi> ")? else {
        return Ok(Intent::Quit);
    };
    Ok(match input.as_str() {
        "login" => Intent::Navigate(Screen::Login, ScreenProps::default()),
        "signup" => Intent::Navigate(Screen::Signup, ScreenProps::default()),
        "quit" | "exit" => Intent::Quit,
        "" => Intent::Stay,
        other => {
            println!("{}", format!("Unknown command: {}", other).yellow());
            Intent::Stay
        }
    })
}

async fn signup_screen(rl: &mut DefaultEditor, auth: &AuthService) -> Result<Intent> {
    println!();
    println!("{}", "Create an account (empty input to go back)".bold());

    let Some(username) = read_line(rl, "username: ")? else {
        return Ok(Intent::Quit);
    };
    if username.is_empty() {
        return Ok(Intent::Navigate(Screen::Landing, ScreenProps::default()));
    }
    let Some(email) = read_line(rl, "email: ")? else {
        return Ok(Intent::Quit);
    };
    let Some(password) = read_line(rl, "password: ")? else {
        return Ok(Intent::Quit);
    };

    match auth
        .register(&RegisterRequest {
            username,
            email,
            password,
        })
        .await
    {
        Ok(_) => {
            println!("{}", "Account created, log in to continue.".green());
            Ok(Intent::Navigate(Screen::Login, ScreenProps::default()))
        }
        Err(err) => {
            eprintln!("{}", format!("Signup failed: {}", err).red());
            Ok(Intent::Stay)
        }
    }
}

async fn login_screen(rl: &mut DefaultEditor, auth: &AuthService) -> Result<Intent> {
    println!();
    println!("{}", "Log in (empty input to go back)".bold());

    let Some(username) = read_line(rl, "username: ")? else {
        return Ok(Intent::Quit);
    };
    if username.is_empty() {
        return Ok(Intent::Navigate(Screen::Landing, ScreenProps::default()));
    }
    let Some(password) = read_line(rl, "password: ")? else {
        return Ok(Intent::Quit);
    };

    match auth.login(&username, &password).await {
        Ok(token) => Ok(Intent::Login {
            token: token.access_token,
            username,
        }),
        Err(err) => {
            eprintln!("{}", format!("Login failed: {}", err).red());
            Ok(Intent::Stay)
        }
    }
}

async fn dashboard_screen(
    rl: &mut DefaultEditor,
    aggregator: &DashboardAggregator,
    router: &SessionRouter,
) -> Result<Intent> {
    let view = aggregator.refresh().await;
    if view.session_expired {
        println!("{}", "Session expired, please log in again.".yellow());
        return Ok(Intent::Logout);
    }

    println!();
    println!(
        "{}",
        format!("Welcome back, {}!", router.username().unwrap_or("?")).bold()
    );
    println!("Preferences: {}", view.preference_summary());
    match &view.current_menu {
        Some(menu) => println!(
            "{}",
            format!("Menu ready! Generated {}", format_timestamp(&menu.generated_at)).blue()
        ),
        None => println!("{}", "No active menu".bright_black()),
    }

    println!(
        "{}",
        "Commands: show, generate, prefs, update, logout, quit".bright_black()
    );
    let Some(input) = read_line(rl, "dashboard> ")? else {
        return Ok(Intent::Quit);
    };

    match input.as_str() {
        "" | "show" => {
            if let Some(menu) = &view.current_menu {
                print_menu(menu);
            }
            if !view.menu_history.is_empty() {
                println!(
                    "{}",
                    format!("Menus generated: {}", view.menu_history.len()).bright_black()
                );
            }
            Ok(Intent::Stay)
        }
        "generate" => {
            let outcome = if view.current_menu.is_some() {
                aggregator.regenerate_menu(&view).await
            } else {
                aggregator.generate_menu(&view).await
            };
            match outcome {
                Ok(GenerateOutcome::Generated { menu, .. }) => {
                    println!("{}", "Menu generated successfully!".green());
                    print_menu(&menu);
                }
                Ok(GenerateOutcome::NeedsPreferences) => {
                    println!("{}", "Please set up your preferences first!".yellow());
                    return Ok(Intent::Navigate(Screen::Preferences, ScreenProps::default()));
                }
                Ok(GenerateOutcome::NoActiveMenu) => {
                    println!("{}", "No active menu to regenerate.".yellow());
                }
                Err(err) => eprintln!("{}", format!("Failed to generate menu: {}", err).red()),
            }
            Ok(Intent::Stay)
        }
        "prefs" => Ok(Intent::Navigate(Screen::Preferences, ScreenProps::default())),
        "update" => Ok(Intent::Navigate(
            Screen::Preferences,
            ScreenProps { is_update: true },
        )),
        "logout" => Ok(Intent::Logout),
        "quit" | "exit" => Ok(Intent::Quit),
        other => {
            println!("{}", format!("Unknown command: {}", other).yellow());
            Ok(Intent::Stay)
        }
    }
}

async fn preferences_screen(
    rl: &mut DefaultEditor,
    flow: &PreferenceFlow,
    is_update: bool,
) -> Result<Intent> {
    // Saved or cancelled, the dashboard is the destination either way
    run_wizard(rl, flow, is_update).await?;
    Ok(Intent::Navigate(Screen::Dashboard, ScreenProps::default()))
}
