//! Auth command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use postboard_core::config::Config;
use postboard_core::feed::{Action, Outcome};
use postboard_core::session::mask_token;

use super::Session;

pub async fn register(
    session: &Session,
    config: &Config,
    login: &str,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_password(password)?;
    let action = Action::register(login, &password, &config.register);
    let token = signed_in_token(session.perform(&action).await?)?;
    session.store.save(&token)?;
    println!("Registered and logged in as {login} (token: {})", mask_token(&token));
    Ok(())
}

pub async fn login(session: &Session, login: &str, password: Option<String>) -> Result<()> {
    let password = resolve_password(password)?;
    let token = signed_in_token(session.perform(&Action::login(login, &password)).await?)?;
    session.store.save(&token)?;
    println!("Logged in as {login} (token: {})", mask_token(&token));
    Ok(())
}

pub fn logout(session: &Session) -> Result<()> {
    if session.store.clear()? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub async fn whoami(session: &Session) -> Result<()> {
    session.require_login()?;
    let Outcome::Profile(profile) = session.perform(&Action::WhoAmI).await? else {
        anyhow::bail!("Unexpected response to whoami");
    };

    println!("{} (id {})", profile.login, profile.user_id);
    println!("role: {}", profile.role);
    if let Some(email) = profile.email {
        println!("email: {email}");
    }
    Ok(())
}

fn signed_in_token(outcome: Outcome) -> Result<String> {
    match outcome {
        Outcome::SignedIn { token } => Ok(token),
        _ => anyhow::bail!("Unexpected response: no token issued"),
    }
}

/// Uses the given password, or reads one line from stdin.
fn resolve_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    if io::stdin().is_terminal() {
        eprint!("Password: ");
        io::stderr().flush()?;
    }
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("read password from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
