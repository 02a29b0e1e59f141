use anyhow::{anyhow, Result};
use console::{Key, Term};
use dialoguer::{Input, Password};

pub enum MenuChoice {
    Back,
    Quit,
    Index(usize),
}

/// Numbered menu. The first key decides the input mode: arrow keys switch to
/// cursor navigation, anything else falls back to typed selection.
pub fn prompt_menu(
    prompt: &str,
    labels: &[String],
    default: Option<usize>,
    header: Option<&str>,
) -> Result<MenuChoice> {
    let term = Term::stdout();
    let _ = term.clear_screen();

    if let Some(h) = header {
        println!("{}", h);
    }
    println!("{}", prompt);
    for (i, it) in labels.iter().enumerate() {
        println!("{}: {}", i + 1, it);
    }
    println!("Type a number + Enter, or use arrow keys + Enter. 'b' = back, 'q' = quit.");

    let key = term.read_key()?;
    match key {
        Key::ArrowUp | Key::ArrowDown | Key::Home | Key::End | Key::PageUp | Key::PageDown => {
            arrow_select(prompt, labels, default, header)
        }
        Key::Char('q') | Key::Char('Q') => Ok(MenuChoice::Quit),
        Key::Char('b') | Key::Char('B') => Ok(MenuChoice::Back),
        Key::Enter => {
            if let Some(d) = default {
                return Ok(MenuChoice::Index(d));
            }
            Err(anyhow!("no selection"))
        }
        Key::Char(c) => {
            let mut builder = Input::new();
            builder = builder.with_prompt("Selection").allow_empty(true);
            if !c.is_control() {
                builder = builder.with_initial_text(c.to_string());
            }
            let input: String = builder.interact_text()?;
            parse_selection(&input, labels.len(), default)
        }
        _ => {
            let input: String = Input::new()
                .with_prompt("Selection")
                .allow_empty(true)
                .interact_text()?;
            parse_selection(&input, labels.len(), default)
        }
    }
}

/// Single-line text input, trimmed.
pub fn prompt_line(prompt: &str) -> Result<String> {
    let s: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(s.trim().to_string())
}

pub fn prompt_password(prompt: &str) -> Result<String> {
    let s = Password::new().with_prompt(prompt).interact()?;
    Ok(s)
}

/// y/N confirmation; anything but an explicit yes is a no.
pub fn confirm(prompt: &str) -> Result<bool> {
    let s: String = Input::new()
        .with_prompt(format!("{} [y/N]", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(s.trim().eq_ignore_ascii_case("y") || s.trim().eq_ignore_ascii_case("yes"))
}

/// Pause until the user acknowledges, so messages survive the next clear.
pub fn pause(message: &str) {
    println!("{}", message);
    println!("Press Enter to continue.");
    let term = Term::stdout();
    let _ = term.read_key();
}

fn parse_selection(input: &str, len: usize, default: Option<usize>) -> Result<MenuChoice> {
    let s = input.trim();
    if s.is_empty() {
        if let Some(d) = default {
            return Ok(MenuChoice::Index(d));
        }
        return Err(anyhow!("no selection"));
    }
    if s.eq_ignore_ascii_case("q") {
        return Ok(MenuChoice::Quit);
    }
    if s.eq_ignore_ascii_case("b") {
        return Ok(MenuChoice::Back);
    }
    let idx: usize = s
        .parse::<usize>()
        .map_err(|_| anyhow!("invalid selection"))?;
    if idx == 0 || idx > len {
        return Err(anyhow!("out of range"));
    }
    Ok(MenuChoice::Index(idx - 1))
}

fn arrow_select(
    prompt: &str,
    labels: &[String],
    default: Option<usize>,
    header: Option<&str>,
) -> Result<MenuChoice> {
    let term = Term::stdout();
    let mut sel = default.unwrap_or(0).min(labels.len().saturating_sub(1));
    let mut top: usize = 0;
    loop {
        term.clear_screen()?;
        if let Some(h) = header {
            println!("{}", h);
        }
        println!("{}", prompt);

        let (rows_u16, _cols_u16) = term.size();
        let rows: usize = rows_u16 as usize;
        let reserved: usize = 2 + if header.is_some() { 1 } else { 0 };
        let mut max_visible: usize = rows.saturating_sub(reserved);
        if max_visible < 3 {
            max_visible = 3;
        }
        if max_visible > labels.len() {
            max_visible = labels.len();
        }

        // keep selection in viewport
        if sel < top {
            top = sel;
        }
        let end = top + max_visible;
        if sel >= end {
            top = sel + 1 - max_visible;
        }

        let end = (top + max_visible).min(labels.len());
        for i in top..end {
            if i == sel {
                println!("> {}: {}", i + 1, labels[i]);
            } else {
                println!("  {}: {}", i + 1, labels[i]);
            }
        }
        println!("Use arrows + Enter. 'b' = back, 'q' = quit.");

        match term.read_key()? {
            Key::ArrowUp => {
                if sel > 0 {
                    sel -= 1;
                }
            }
            Key::ArrowDown => {
                if sel + 1 < labels.len() {
                    sel += 1;
                }
            }
            Key::Home => {
                sel = 0;
            }
            Key::End => {
                if !labels.is_empty() {
                    sel = labels.len() - 1;
                }
            }
            Key::PageUp => {
                let step: usize = max_visible.saturating_sub(1).max(1);
                sel = sel.saturating_sub(step);
            }
            Key::PageDown => {
                let step: usize = max_visible.saturating_sub(1).max(1);
                sel = (sel + step).min(labels.len().saturating_sub(1));
            }
            Key::Enter => {
                return Ok(MenuChoice::Index(sel));
            }
            Key::Char('q') | Key::Char('Q') => {
                return Ok(MenuChoice::Quit);
            }
            Key::Char('b') | Key::Char('B') | Key::Escape => {
                return Ok(MenuChoice::Back);
            }
            _ => {}
        }
    }
}
