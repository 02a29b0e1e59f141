use crate::api::{ApiClient, ApiError};
use crate::models::User;
use crate::session::StoredSession;
use crate::ui;
use anyhow::Result;

/// Prompt for credentials and sign in. `None` means the attempt failed and
/// was reported; the caller stays signed out.
pub async fn login(api: &ApiClient) -> Result<Option<User>> {
    println!("Log in");
    let username = ui::prompt_line("Username")?;
    let password = ui::prompt_password("Password")?;

    match User::login(api, &username, &password).await {
        Ok(user) => {
            remember(&user);
            ui::pause(&format!("Welcome back, {}!", user.name));
            Ok(Some(user))
        }
        Err(err) => {
            report(&err);
            Ok(None)
        }
    }
}

/// Prompt for profile details and create an account.
pub async fn signup(api: &ApiClient) -> Result<Option<User>> {
    println!("Create an account");
    let username = ui::prompt_line("Username")?;
    let name = ui::prompt_line("Display name")?;
    let password = ui::prompt_password("Password")?;

    match User::signup(api, &username, &password, &name).await {
        Ok(user) => {
            remember(&user);
            ui::pause(&format!("Welcome, {}!", user.name));
            Ok(Some(user))
        }
        Err(err) => {
            report(&err);
            Ok(None)
        }
    }
}

/// Try to pick up where a previous run left off using the stored token.
pub async fn restore(api: &ApiClient) -> Option<User> {
    let stored = StoredSession::load()?;
    let user = User::restore_session(api, &stored.token, &stored.username).await;
    if user.is_none() {
        // The token no longer works; don't keep trying it on every start.
        StoredSession::clear();
    }
    user
}

/// Drop the in-memory user and the stored credentials.
pub fn logout(user: &mut Option<User>) {
    StoredSession::clear();
    *user = None;
}

fn remember(user: &User) {
    let session = StoredSession {
        token: user.token.clone(),
        username: user.username.clone(),
    };
    if let Err(err) = session.save() {
        eprintln!("failed to store session: {}", err);
    }
}

fn report(err: &ApiError) {
    match err {
        ApiError::Auth(msg) => ui::pause(&format!("Sign-in rejected: {}", msg)),
        ApiError::Validation(msg) => ui::pause(&format!("Rejected: {}", msg)),
        _ => ui::pause(&format!("Could not reach the story service: {}", err)),
    }
}
