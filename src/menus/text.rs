//! Menu and meter rendering.

use crate::history::History;
use crate::pass::Strength;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_top, flush, print_error,
};

pub fn print_banner() {
    box_top("");
    box_line_center("PASSWORD GENERATOR");
    box_line_center(concat!("entropass v", env!("CARGO_PKG_VERSION")));
    box_bottom();
    println!();
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) Generate Password");
    box_line("  2) Generate Multiple Passwords");
    box_line("  3) View Password History");
    box_line("  4) Clear History");
    box_line("  5) Exit");
    box_line("");
    box_bottom();

    if *print_invalid {
        print_error("Invalid option. Please try again.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

pub fn print_password(password: &str) {
    println!();
    box_top("Generated Password");
    box_line(password);
    box_bottom();
}

/// Box-drawn strength meter: entropy, label, 10-segment bar, and a
/// one-line interpretation.
pub fn print_meter(bits: f64) {
    let strength = Strength::from_bits(bits);
    println!();
    box_top("Password Strength");
    box_line(&format!("Entropy: {bits:.2} bits"));
    box_line(&format!("Strength: {strength}"));
    box_line(&format!("[{}]", meter_bar(bits)));
    box_line("");
    box_line(interpretation(strength));
    box_bottom();
}

/// One bar segment per 12.8 bits, capped at 10.
fn meter_bar(bits: f64) -> String {
    let filled = ((bits / 12.8) as usize).min(10);
    let mut bar = String::with_capacity(30);
    for i in 0..10 {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

fn interpretation(strength: Strength) -> &'static str {
    match strength {
        Strength::VeryWeak => "⚠ Very weak - easily cracked",
        Strength::Weak => "⚠ Weak - vulnerable to attacks",
        Strength::Medium => "✓ Medium - acceptable for most uses",
        Strength::Strong => "✓✓ Strong - secure password",
        Strength::VeryStrong => "✓✓✓ Very strong - excellent security",
    }
}

pub fn print_history(history: &History) {
    println!();
    if history.is_empty() {
        box_top("");
        box_line_center("No passwords in history yet");
        box_bottom();
        return;
    }

    box_top("Password History");
    box_bottom();
    for (i, entry) in history.entries().iter().enumerate() {
        println!("{}. {}", i + 1, entry);
    }
}

pub fn print_help() {
    box_top("Entropass");
    box_line_center("Password generator with entropy scoring");
    box_line("");
    box_line("MODES:");
    box_line("  Interactive: run without arguments for");
    box_line("  the menu. Flags skip the menu entirely.");
    box_line("");
    box_line("USAGE:");
    box_line("  entropass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line("  -l, --length <N>   Password length");
    box_line("  -n, --number <N>   How many to generate");
    box_line("      --no-upper     Drop A-Z");
    box_line("      --no-lower     Drop a-z");
    box_line("      --no-digits    Drop 0-9");
    box_line("      --no-special   Drop punctuation");
    box_line("  -o, --output [F]   Append to file");
    box_line("                     (default passwords.txt)");
    box_line("  -q, --quiet        Passwords only");
    box_line("  -h, --help         This message");
    box_line("  -v, --version      Version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  entropass -l 16");
    box_line("  entropass -l 20 -n 3 --no-special");
    box_line("  entropass -l 32 -o vault.txt");
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_bar_scales_with_entropy() {
        assert_eq!(meter_bar(0.0), "░░░░░░░░░░");
        assert_eq!(meter_bar(12.7), "░░░░░░░░░░");
        assert_eq!(meter_bar(12.8), "█░░░░░░░░░");
        assert_eq!(meter_bar(64.0), "█████░░░░░");
        assert_eq!(meter_bar(128.0), "██████████");
        assert_eq!(meter_bar(500.0), "██████████");
    }

    #[test]
    fn every_band_has_an_interpretation() {
        for strength in [
            Strength::VeryWeak,
            Strength::Weak,
            Strength::Medium,
            Strength::Strong,
            Strength::VeryStrong,
        ] {
            assert!(!interpretation(strength).is_empty());
        }
    }
}
