//! Interactive menu flows.

use std::path::Path;

use super::{input, text};
use crate::file_io;
use crate::history::History;
use crate::pass::{self, ClassSet, Strength};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, print_ok, reset_terminal};

/// Run the interactive menu loop. Owns the session history.
pub fn run() {
    reset_terminal();
    clear();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });
    let mut history = History::new();

    text::print_banner();
    let mut print_invalid = false;

    loop {
        text::print_main_menu(&mut print_invalid);

        let choice = match input::menu_choice("Select an option") {
            Some(c) => c,
            None => continue,
        };

        match choice {
            '1' => generate_single(&mut settings, &mut history),
            '2' => generate_multiple(&mut settings, &mut history),
            '3' => text::print_history(&history),
            '4' => {
                history.clear();
                println!();
                print_ok("History cleared!");
            }
            '5' | 'q' => {
                println!();
                println!("Thank you for using Entropass!");
                break;
            }
            _ => {
                clear();
                text::print_banner();
                print_invalid = true;
            }
        }
        println!();
    }
}

/// Prompt for length and the four class toggles, defaulting to the last
/// used values. `None` means the user cancelled.
fn prompt_request(settings: &Settings) -> Option<(usize, ClassSet)> {
    let length = loop {
        match input::read_number("Enter password length", settings.pass_length) {
            Some(n) => break n,
            None => print_error("Please enter a number."),
        }
    };

    let classes = ClassSet {
        upper: input::confirm("Include uppercase letters?", settings.classes.upper)?,
        lower: input::confirm("Include lowercase letters?", settings.classes.lower)?,
        digit: input::confirm("Include digits?", settings.classes.digit)?,
        special: input::confirm("Include special characters?", settings.classes.special)?,
    };

    Some((length, classes))
}

fn remember(settings: &mut Settings, length: usize, classes: ClassSet) {
    settings.pass_length = length;
    settings.classes = classes;
    if let Err(e) = settings.save_to_file() {
        log::warn!("failed to save settings: {e}");
    }
}

fn generate_single(settings: &mut Settings, history: &mut History) {
    println!();
    println!("--- Generate Password ---");

    let Some((length, classes)) = prompt_request(settings) else {
        return;
    };

    let password = match pass::generate(length, classes) {
        Ok(p) => p,
        Err(e) => {
            println!();
            print_error(&format!("Error: {e}"));
            return;
        }
    };

    let bits = pass::entropy(length, classes);
    let strength = Strength::from_bits(bits);

    text::print_password(&password);
    text::print_meter(bits);
    println!();

    if input::confirm("Save this password to file?", false) == Some(true) {
        save_password(settings, &password, bits, strength);
    }

    history.record(password, bits, strength);
    remember(settings, length, classes);
}

fn generate_multiple(settings: &mut Settings, history: &mut History) {
    println!();
    println!("--- Generate Multiple Passwords ---");

    let count = loop {
        match input::read_number("How many passwords?", settings.number_of_passwords) {
            Some(n) if n > 0 => break n,
            _ => print_error("Please enter a number greater than zero."),
        }
    };

    let Some((length, classes)) = prompt_request(settings) else {
        return;
    };

    // Entropy depends only on the parameters, so one score covers the
    // whole batch.
    let bits = pass::entropy(length, classes);
    let strength = Strength::from_bits(bits);

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        match pass::generate(length, classes) {
            Ok(p) => passwords.push(p),
            Err(e) => {
                println!();
                print_error(&format!("Error: {e}"));
                return;
            }
        }
    }

    println!();
    println!("Generated passwords:");
    for (i, password) in passwords.iter().enumerate() {
        println!("{}. {}", i + 1, password);
    }
    text::print_meter(bits);
    println!();

    if input::confirm("Save all passwords to file?", false) == Some(true) {
        for password in &passwords {
            save_password(settings, password, bits, strength);
        }
    }

    for password in passwords {
        history.record(password, bits, strength);
    }

    settings.number_of_passwords = count;
    remember(settings, length, classes);
}

/// Append to the output file. A write failure is reported but never
/// touches the in-memory history or the already-shown password.
fn save_password(settings: &Settings, password: &str, bits: f64, strength: Strength) {
    let path = Path::new(&settings.output_file_path);
    match file_io::append_password(path, password, bits, strength) {
        Ok(()) => print_ok(&format!("Password saved to {}", settings.output_file_path)),
        Err(e) => print_error(&format!("Error saving password: {e}")),
    }
}
