//! CLI mode - generate passwords directly from flags, no menu.

use std::path::Path;

use zeroize::Zeroize;

use super::{parse, prompts, quiet, CliFlags};
use crate::file_io;
use crate::menus::print_help;
use crate::pass::{self, ClassSet, Strength};
use crate::terminal::{box_bottom, box_line, box_top};

/// Early exit - not an error, just done.
struct Done;

pub struct Context {
    flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = parse(args).map_err(|e| e.to_string())?;
        Ok(Self { flags })
    }

    /// Run CLI mode. Returns the process exit code.
    pub fn run(&self) -> i32 {
        quiet::set(self.flags.quiet);

        if let Err(Done) = self.handle_info_flags() {
            return 0;
        }

        let length = self.flags.length.unwrap_or(12);
        if self.flags.number == Some(0) {
            prompts::warn("--number 0 requested, generating 1");
        }
        let count = self.flags.number.unwrap_or(1).max(1);
        let classes = self.classes();

        let passwords = match self.generate_all(length, count, classes) {
            Ok(p) => p,
            Err(e) => {
                prompts::error(&format!("Error: {e}"));
                return 2;
            }
        };

        let bits = pass::entropy(length, classes);
        let strength = Strength::from_bits(bits);

        if !quiet::enabled() {
            print_entropy_header(bits, strength, classes.pool_size());
        }

        self.emit(passwords, bits, strength)
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("entropass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn classes(&self) -> ClassSet {
        ClassSet {
            upper: !self.flags.no_upper,
            lower: !self.flags.no_lower,
            digit: !self.flags.no_digits,
            special: !self.flags.no_special,
        }
    }

    fn generate_all(
        &self,
        length: usize,
        count: usize,
        classes: ClassSet,
    ) -> Result<Vec<String>, pass::InvalidRequest> {
        (0..count).map(|_| pass::generate(length, classes)).collect()
    }

    /// Print or persist the batch, wiping each password buffer after use.
    fn emit(&self, mut passwords: Vec<String>, bits: f64, strength: Strength) -> i32 {
        let mut code = 0;

        if let Some(ref path) = self.flags.output {
            for password in &passwords {
                if let Err(e) = file_io::append_password(Path::new(path), password, bits, strength)
                {
                    prompts::error(&format!("Error saving password: {e}"));
                    code = 1;
                    break;
                }
            }
            if code == 0 {
                prompts::passwords_written(passwords.len(), path);
            }
        } else {
            for password in &passwords {
                println!("{password}");
            }
        }

        for password in &mut passwords {
            password.zeroize();
        }
        code
    }
}

fn print_entropy_header(bits: f64, strength: Strength, pool_size: usize) {
    box_top("Entropy");
    box_line(&format!("{bits:.2} bits ({strength})"));
    box_line(&format!("Charset: {pool_size} chars"));
    box_bottom();
    println!();
}
