//! Interactive story browsing: list, open, submit, favorite, delete.
//!
//! One `StoryList` is fetched per visit and every view (all stories,
//! favorites, own submissions) is a filter over it, so actions in a submenu
//! are visible everywhere as soon as the user backs out.

use crate::api::{ApiClient, ApiError, StoryDraft};
use crate::config::RuntimeConfig;
use crate::models::{StoryList, User};
use crate::open_url::open_url;
use crate::ui::{self, MenuChoice};
use crate::util::sanitize::sanitize_for_terminal;
use anyhow::Result;
use console::style;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    All,
    Favorites,
    Own,
}

impl View {
    fn title(&self) -> &'static str {
        match self {
            View::All => "Stories (b = back, q = quit)",
            View::Favorites => "Favorites (b = back, q = quit)",
            View::Own => "My stories (b = back, q = quit)",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            View::All => "No stories yet.",
            View::Favorites => "No favorites yet.",
            View::Own => "You haven't submitted any stories yet.",
        }
    }
}

/// Returns `true` when the user asked to quit the whole program.
pub async fn browse(
    cfg: &RuntimeConfig,
    api: &ApiClient,
    user: &mut Option<User>,
    view: View,
) -> Result<bool> {
    let mut list = match StoryList::fetch_all(api).await {
        Ok(list) => list,
        Err(err) => {
            ui::pause(&format!("Could not fetch stories: {}", err));
            return Ok(false);
        }
    };

    loop {
        // One label per visible story; submitting is the first entry of the
        // all-stories view for signed-in users.
        let can_submit = view == View::All && user.is_some();
        let visible: Vec<usize> = list
            .stories
            .iter()
            .enumerate()
            .filter(|(_, s)| match (view, user.as_ref()) {
                (View::All, _) => true,
                (View::Favorites, Some(u)) => u.is_favorite(&s.story_id),
                (View::Own, Some(u)) => u.owns(&s.story_id),
                (_, None) => false,
            })
            .map(|(i, _)| i)
            .collect();

        if visible.is_empty() && !can_submit {
            ui::pause(view.empty_message());
            return Ok(false);
        }

        let mut labels: Vec<String> = Vec::new();
        if can_submit {
            labels.push("[ Submit a new story ]".to_string());
        }
        for &i in &visible {
            labels.push(story_label(&list, user.as_ref(), i));
        }

        match ui::prompt_menu(view.title(), &labels, None, cfg.header.as_deref())? {
            MenuChoice::Back => return Ok(false),
            MenuChoice::Quit => return Ok(true),
            MenuChoice::Index(sel) => {
                if can_submit && sel == 0 {
                    if let Some(u) = user.as_mut() {
                        submit_story(api, u, &mut list).await?;
                    }
                    continue;
                }
                let offset = if can_submit { 1 } else { 0 };
                let Some(&story_idx) = visible.get(sel - offset) else {
                    continue;
                };
                if story_menu(cfg, api, user, &mut list, story_idx).await? {
                    return Ok(true);
                }
            }
        }
    }
}

fn story_label(list: &StoryList, user: Option<&User>, idx: usize) -> String {
    let story = &list.stories[idx];
    let title = sanitize_for_terminal(&story.title);
    let host = story.host_name();
    let mut label = format!("{} ({})", title, style(host).dim());
    if let Some(u) = user {
        if u.is_favorite(&story.story_id) {
            label = format!("{} {}", style("*").yellow().bold(), label);
        } else {
            label = format!("  {}", label);
        }
        if u.owns(&story.story_id) {
            label.push_str(&format!(" {}", style("(you)").cyan()));
        }
    }
    label
}

/// Per-story actions. Returns `true` on quit.
async fn story_menu(
    cfg: &RuntimeConfig,
    api: &ApiClient,
    user: &mut Option<User>,
    list: &mut StoryList,
    idx: usize,
) -> Result<bool> {
    enum Action {
        Open,
        ToggleFavorite(bool),
        Delete,
    }

    loop {
        let Some(story) = list.stories.get(idx).cloned() else {
            return Ok(false);
        };

        let mut labels: Vec<String> = vec!["Open in browser".to_string()];
        let mut actions: Vec<Action> = vec![Action::Open];
        if let Some(u) = user.as_ref() {
            if u.is_favorite(&story.story_id) {
                labels.push("Remove from favorites".to_string());
                actions.push(Action::ToggleFavorite(false));
            } else {
                labels.push("Add to favorites".to_string());
                actions.push(Action::ToggleFavorite(true));
            }
            if u.owns(&story.story_id) {
                labels.push("Delete this story".to_string());
                actions.push(Action::Delete);
            }
        }

        let prompt = format!(
            "{} - by {}, submitted by {} on {} (b = back, q = quit)",
            sanitize_for_terminal(&story.title),
            sanitize_for_terminal(&story.author),
            sanitize_for_terminal(&story.username),
            story.created_at.date(),
        );

        match ui::prompt_menu(&prompt, &labels, Some(0), cfg.header.as_deref())? {
            MenuChoice::Back => return Ok(false),
            MenuChoice::Quit => return Ok(true),
            MenuChoice::Index(sel) => match actions.get(sel) {
                Some(Action::Open) => {
                    let _ = open_url(&story.url, cfg.open_command.as_deref());
                }
                Some(Action::ToggleFavorite(on)) => {
                    let Some(u) = user.as_mut() else { continue };
                    let outcome = if *on {
                        u.add_favorite(api, &story).await
                    } else {
                        u.remove_favorite(api, &story.story_id).await
                    };
                    if let Err(err) = outcome {
                        report_api_error("update favorites", &err);
                    }
                }
                Some(Action::Delete) => {
                    let Some(u) = user.as_mut() else { continue };
                    if !ui::confirm("Delete this story for good?")? {
                        continue;
                    }
                    match list.delete_story(api, u, &story.story_id).await {
                        Ok(()) => {
                            // Keep the session's snapshots in step with what
                            // the server just accepted.
                            u.own_stories.retain(|s| s.story_id != story.story_id);
                            u.favorites.retain(|s| s.story_id != story.story_id);
                            return Ok(false);
                        }
                        Err(err) => report_api_error("delete the story", &err),
                    }
                }
                None => {}
            },
        }
    }
}

async fn submit_story(api: &ApiClient, user: &mut User, list: &mut StoryList) -> Result<()> {
    println!("Submit a new story");
    let title = ui::prompt_line("Title")?;
    let author = ui::prompt_line("Author")?;
    let url = ui::prompt_line("URL")?;
    if title.is_empty() || author.is_empty() || url.is_empty() {
        ui::pause("All three fields are required.");
        return Ok(());
    }

    let draft = StoryDraft { title, author, url };
    match list.add_story(api, user, &draft).await {
        Ok(story) => {
            user.own_stories.push(story.clone());
            ui::pause(&format!(
                "Submitted \"{}\" ({})",
                sanitize_for_terminal(&story.title),
                story.host_name()
            ));
        }
        Err(err) => report_api_error("submit the story", &err),
    }
    Ok(())
}

fn report_api_error(what: &str, err: &ApiError) {
    match err {
        ApiError::Auth(_) => ui::pause(&format!(
            "Could not {}: {} (your session may have expired; try logging in again)",
            what, err
        )),
        _ => ui::pause(&format!("Could not {}: {}", what, err)),
    }
}
