mod account;
mod api;
mod config;
mod models;
mod open_url;
mod session;
mod stories;
mod ui;
mod util;

#[cfg(test)]
mod testutil;

use anyhow::Result;
use api::ApiClient;
use console::Term;
use models::User;
use std::env;
use stories::View;

#[tokio::main]
async fn main() -> Result<()> {
    // Clear terminal at startup for a clean UI
    let _ = Term::stdout().clear_screen();
    // Parse a minimal CLI: optional --api <url>
    let mut args = env::args().skip(1);
    let mut api_override: Option<String> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api" => {
                if let Some(u) = args.next() {
                    api_override = Some(u);
                }
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
    }

    let cfg = config::load(api_override)?;
    let api = ApiClient::new(&cfg.api_base_url)?;

    // A previous run may have left a working token behind; failure here just
    // means the login prompt stays available.
    let mut user: Option<User> = account::restore(&api).await;

    loop {
        let mut labels: Vec<String> = vec!["Stories".to_string()];
        if let Some(u) = user.as_ref() {
            labels.push("Favorites".to_string());
            labels.push("My stories".to_string());
            labels.push(format!("Log out ({})", u.username));
        } else {
            labels.push("Log in".to_string());
            labels.push("Sign up".to_string());
        }
        labels.push("Quit".to_string());

        let signed_in = user.is_some();
        match ui::prompt_menu(
            "Main Menu (b = back/quit)",
            &labels,
            Some(0),
            cfg.header.as_deref(),
        )? {
            ui::MenuChoice::Back | ui::MenuChoice::Quit => break,
            ui::MenuChoice::Index(0) => {
                if stories::browse(&cfg, &api, &mut user, View::All).await? {
                    break;
                }
            }
            ui::MenuChoice::Index(1) if signed_in => {
                if stories::browse(&cfg, &api, &mut user, View::Favorites).await? {
                    break;
                }
            }
            ui::MenuChoice::Index(2) if signed_in => {
                if stories::browse(&cfg, &api, &mut user, View::Own).await? {
                    break;
                }
            }
            ui::MenuChoice::Index(3) if signed_in => {
                account::logout(&mut user);
            }
            ui::MenuChoice::Index(1) => {
                user = account::login(&api).await?;
            }
            ui::MenuChoice::Index(2) => {
                user = account::signup(&api).await?;
            }
            _ => break,
        }
    }

    Ok(())
}

fn print_help() {
    println!("snooze-cli");
    println!("Usage: snooze-cli [--api <url>]");
    println!("  --api <url>   Base URL of the story API (default: {})", config::DEFAULT_API_BASE_URL);
}
