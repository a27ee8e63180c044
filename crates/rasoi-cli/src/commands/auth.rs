//! One-shot auth commands.

use anyhow::Result;
use colored::Colorize;
use rasoi_application::{AuthService, Screen, ScreenProps, SessionRouter};
use rasoi_core::auth::RegisterRequest;
use rasoi_core::{ApiGateway, SessionStore};
use std::sync::Arc;

pub async fn register(
    gateway: Arc<dyn ApiGateway>,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let service = AuthService::new(gateway);
    let ack = service
        .register(&RegisterRequest {
            username,
            email,
            password,
        })
        .await?;

    let msg = if ack.msg.is_empty() {
        "Account created".to_string()
    } else {
        ack.msg
    };
    println!("{}", msg.green());
    println!("Log in with: {}", "rasoi login <username> <password>".bright_black());
    Ok(())
}

pub async fn login(
    gateway: Arc<dyn ApiGateway>,
    store: Arc<dyn SessionStore>,
    username: String,
    password: String,
) -> Result<()> {
    let service = AuthService::new(gateway);
    let token = service.login(&username, &password).await?;

    let mut router = SessionRouter::new(store);
    router.login(&token.access_token, &username)?;
    router.navigate(Screen::Dashboard, ScreenProps::default());

    println!("{}", format!("Logged in as {}", username).green());
    Ok(())
}

pub fn logout(store: Arc<dyn SessionStore>) -> Result<()> {
    let mut router = SessionRouter::new(store);
    router.logout()?;
    println!("{}", "Logged out".green());
    Ok(())
}

pub fn whoami(store: Arc<dyn SessionStore>) -> Result<()> {
    match store.user() {
        Some(username) if store.is_authenticated() => println!("{}", username),
        _ => println!("{}", "Not logged in".bright_black()),
    }
    Ok(())
}
