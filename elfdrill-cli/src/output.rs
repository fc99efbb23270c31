use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub fn alert(message: &str) {
    println!("{}", format!("[X] {message}").red());
}

pub fn info(message: &str) {
    println!("{}", format!("[!] {message}").blue());
}

/// Cyan question prompt; reads one answer line from `input`.
pub fn read_answer(question: &str, input: &mut dyn BufRead) -> Result<String> {
    print!("{}", format!("[?] {question}\n : ").cyan());
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Yes/no prompt. An empty line picks the default, unrecognized input
/// re-asks, EOF falls back to the default.
pub fn confirm(question: &str, default: bool, input: &mut dyn BufRead) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        print!("{question} {hint}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => alert("Please answer y or n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn confirm_empty_line_picks_the_default() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert!(confirm("q", true, &mut input).unwrap());
        let mut input = Cursor::new(b"\n".to_vec());
        assert!(!confirm("q", false, &mut input).unwrap());
    }

    #[test]
    fn confirm_parses_yes_and_no_variants() {
        let mut input = Cursor::new(b"n\n".to_vec());
        assert!(!confirm("q", true, &mut input).unwrap());
        let mut input = Cursor::new(b"YES\n".to_vec());
        assert!(confirm("q", false, &mut input).unwrap());
        let mut input = Cursor::new(b"No\n".to_vec());
        assert!(!confirm("q", true, &mut input).unwrap());
    }

    #[test]
    fn confirm_reasks_on_noise_and_defaults_on_eof() {
        let mut input = Cursor::new(b"what\ny\n".to_vec());
        assert!(confirm("q", false, &mut input).unwrap());
        let mut input = Cursor::new(Vec::new());
        assert!(!confirm("q", false, &mut input).unwrap());
    }

    #[test]
    fn read_answer_trims_the_line() {
        let mut input = Cursor::new(b"  42  \n".to_vec());
        assert_eq!(read_answer("q", &mut input).unwrap(), "42");
    }
}
