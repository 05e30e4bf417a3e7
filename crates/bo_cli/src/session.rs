//! Line-oriented form session
//!
//! Each input line is one form interaction:
//!
//! - `size <n>` or a bare number: roster field
//! - `name <slot> <text>`: name field for a 1-based slot
//! - `generate`: the Generate Order action
//! - `show`, `help`, `quit` / `exit`
//!
//! The form is re-rendered after every command that can change it.

use std::io::{self, BufRead, Write};

use bo_core::input::apply_roster_text;
use bo_core::view::render_form;
use bo_core::{OrderGenerator, SlotDraw};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  size <n>            set number of batsmen (0-11); a bare number works too
  name <slot> <text>  set the name for batting slot <slot>
  generate            shuffle the batting order
  show                redraw the form
  help                show this help
  quit                leave";

const NAME_USAGE: &str = "Usage: name <slot> <text> (slot starts at 1)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Size(String),
    Name { slot: String, value: String },
    Generate,
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "" => Command::Blank,
        "size" => Command::Size(rest.to_string()),
        "name" => {
            let rest = rest.trim_start();
            let (slot, value) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            Command::Name {
                slot: slot.to_string(),
                value: value.to_string(),
            }
        }
        "generate" | "g" => Command::Generate,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if keyword.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
            Command::Size(trimmed.to_string())
        }
        _ => Command::Unknown(keyword.to_string()),
    }
}

/// Form state plus the random source it generates with
pub struct FormSession<D> {
    generator: OrderGenerator,
    draw: D,
    advisory: Option<&'static str>,
}

impl<D: SlotDraw> FormSession<D> {
    pub fn new(draw: D) -> Self {
        Self {
            generator: OrderGenerator::new(),
            draw,
            advisory: None,
        }
    }

    pub fn generator(&self) -> &OrderGenerator {
        &self.generator
    }

    pub fn render(&self) -> String {
        render_form(&self.generator, self.advisory)
    }

    /// Run until `quit` or end of input
    pub fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", self.render())?;
        writeln!(output, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line, output)? {
                break;
            }
        }
        Ok(())
    }

    /// Apply one line; returns false when the session should end
    pub fn handle_line<W>(&mut self, line: &str, output: &mut W) -> io::Result<bool>
    where
        W: Write,
    {
        let command = parse_command(line);
        debug!("Form command: {:?}", command);

        match command {
            Command::Blank => {}
            Command::Quit => return Ok(false),
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Show => writeln!(output, "{}", self.render())?,
            Command::Size(text) => {
                let input = apply_roster_text(&mut self.generator, &text);
                self.advisory = input.advisory();
                if !input.is_accepted() && self.advisory.is_none() {
                    let text = text.trim();
                    writeln!(output, "Ignored roster size {:?} (allowed 0-11)", text)?;
                }
                writeln!(output, "{}", self.render())?;
            }
            Command::Name { slot, value } => match slot.parse::<usize>() {
                Ok(slot) if slot >= 1 => match self.generator.set_name(slot - 1, value) {
                    Ok(()) => writeln!(output, "{}", self.render())?,
                    Err(err) => writeln!(output, "{}", err)?,
                },
                _ => writeln!(output, "{}", NAME_USAGE)?,
            },
            Command::Generate => {
                let outcome = self.generator.generate_order(&mut self.draw).map(|_| ());
                match outcome {
                    Ok(()) => writeln!(output, "{}", self.render())?,
                    Err(err) => writeln!(output, "Generate Order is disabled: {}", err)?,
                }
            }
            Command::Unknown(keyword) => {
                writeln!(output, "Unknown command `{}`.", keyword)?;
                writeln!(output, "Type `help` for commands.")?;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bo_core::{RandDraw, ScriptedDraw};
    use std::io::Cursor;

    type Finished = (FormSession<ScriptedDraw>, String);

    fn run_with(script: &str, draw: ScriptedDraw) -> Finished {
        let mut session = FormSession::new(draw);
        let mut output = Vec::new();
        let input = Cursor::new(script.to_string());
        session.run(input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    fn run_script(script: &str) -> Finished {
        run_with(script, ScriptedDraw::default())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("size 4\n"), Command::Size("4".to_string()));
        assert_eq!(parse_command("  7"), Command::Size("7".to_string()));
        assert_eq!(
            parse_command("name 2  Bob Smith \r\n"),
            Command::Name {
                slot: "2".to_string(),
                value: " Bob Smith ".to_string(),
            }
        );
        assert_eq!(
            parse_command("name 3"),
            Command::Name {
                slot: "3".to_string(),
                value: String::new(),
            }
        );
        assert_eq!(
            parse_command("name\t1\tAlice"),
            Command::Name {
                slot: "1".to_string(),
                value: "Alice".to_string(),
            }
        );
        assert_eq!(parse_command("size\t4"), Command::Size("4".to_string()));
        assert_eq!(parse_command("GENERATE"), Command::Generate);
        assert_eq!(parse_command(""), Command::Blank);
        assert_eq!(parse_command("bowl"), Command::Unknown("bowl".to_string()));
    }

    #[test]
    fn test_full_session() {
        let script = "size 3\nname 1 Alice\nname 2 Bob\nname 3 Carol\ngenerate\nquit\n";
        let (session, output) = run_with(script, ScriptedDraw::new(vec![0, 0]));

        assert!(session.generator().results_visible());
        assert!(output.contains("Batting Order:\n 1. Carol\n 2. Alice\n 3. Bob\n"));
    }

    #[test]
    fn test_generate_disabled_with_blank_name() {
        let (session, output) = run_script("3\nname 1 Alice\ngenerate\n");

        assert!(!session.generator().results_visible());
        assert!(output.contains("Generate Order is disabled: Batsman 2 has no name"));
    }

    #[test]
    fn test_over_cap_shows_advisory_and_keeps_state() {
        let (session, output) = run_script("size 4\nname 1 Alice\nsize 15\n");

        assert_eq!(session.generator().roster_size(), 4);
        assert_eq!(session.generator().names()[0], "Alice");
        assert!(output.contains("! Maximum 11 players allowed in a cricket team."));
    }

    #[test]
    fn test_advisory_cleared_by_next_entry() {
        let mut session = FormSession::new(ScriptedDraw::default());
        let mut sink = Vec::new();
        session.handle_line("size 20", &mut sink).unwrap();
        assert!(session.render().contains("Maximum 11 players"));

        session.handle_line("size 2", &mut sink).unwrap();
        assert!(!session.render().contains("Maximum 11 players"));
    }

    #[test]
    fn test_negative_and_text_sizes_ignored() {
        let (session, output) = run_script("size 2\nsize -3\nsize lots\n");

        assert_eq!(session.generator().roster_size(), 2);
        assert!(output.contains("Ignored roster size \"-3\""));
        assert!(output.contains("Ignored roster size \"lots\""));
    }

    #[test]
    fn test_bad_slot() {
        let (_, output) = run_script("size 2\nname 5 Zed\nname x Zed\n");
        assert!(output.contains("No batsman slot 5 in a roster of 2"));
        assert!(output.contains(NAME_USAGE));
    }

    #[test]
    fn test_tab_separated_name() {
        let (session, _) = run_script("size 2\nname 1\tAlice\n");
        assert_eq!(session.generator().names(), ["Alice", ""]);
    }

    #[test]
    fn test_resize_hides_results() {
        let mut session = FormSession::new(RandDraw::seeded(5));
        let mut sink = Vec::new();
        for line in ["size 2", "name 1 A", "name 2 B", "generate"] {
            session.handle_line(line, &mut sink).unwrap();
        }
        assert!(session.generator().results_visible());

        session.handle_line("size 2", &mut sink).unwrap();
        assert!(!session.generator().results_visible());
        assert!(session.generator().names().iter().all(String::is_empty));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script("quit\nsize 5\n");
        assert_eq!(session.generator().roster_size(), 0);
    }
}
