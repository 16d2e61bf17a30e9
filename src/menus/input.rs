//! Interactive input: single-key menu selection and line prompts.

use std::io::{self, BufRead};

use crossterm::event::{read, Event, KeyCode, KeyModifiers};

use crate::terminal::{flush, reset_terminal, RawModeGuard};

/// Read a single key in raw mode. Echoes the chosen character and moves
/// to the next line. Returns `None` on Esc (cancel).
///
/// Falls back to line input when raw mode is unavailable (e.g. piped
/// stdin), taking the first character of the line.
pub fn menu_choice(prompt: &str) -> Option<char> {
    print!("{prompt}: ");
    flush();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return read_line_choice(),
    };

    loop {
        let event = match read() {
            Ok(e) => e,
            Err(_) => {
                drop(guard);
                println!();
                return None;
            }
        };

        if let Event::Key(key) = event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                // process::exit skips destructors, reset the terminal first
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            match key.code {
                KeyCode::Esc => {
                    drop(guard);
                    println!();
                    return None;
                }
                KeyCode::Char(c) => {
                    drop(guard);
                    println!("{c}");
                    return Some(c);
                }
                _ => {}
            }
        }
    }
}

fn read_line_choice() -> Option<char> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    line.trim().chars().next()
}

/// Yes/no prompt answered with a single keypress. Enter accepts the
/// default; Esc cancels.
pub fn confirm(prompt: &str, default: bool) -> Option<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{prompt} {hint}: ");
    flush();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).ok()?;
            return Some(match line.trim().to_lowercase().as_str() {
                "" => default,
                "y" | "yes" => true,
                _ => false,
            });
        }
    };

    loop {
        let event = match read() {
            Ok(e) => e,
            Err(_) => {
                drop(guard);
                println!();
                return None;
            }
        };

        if let Event::Key(key) = event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            let answer = match key.code {
                KeyCode::Esc => {
                    drop(guard);
                    println!();
                    return None;
                }
                KeyCode::Enter => default,
                KeyCode::Char('y') | KeyCode::Char('Y') => true,
                KeyCode::Char('n') | KeyCode::Char('N') => false,
                _ => continue,
            };
            drop(guard);
            println!("{}", if answer { 'y' } else { 'n' });
            return Some(answer);
        }
    }
}

/// Numeric line prompt. Empty input accepts the default; anything
/// unparseable returns `None` so the caller can re-prompt.
pub fn read_number(prompt: &str, default: usize) -> Option<usize> {
    print!("{prompt} [{default}]: ");
    flush();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Some(default)
    } else {
        trimmed.parse().ok()
    }
}
