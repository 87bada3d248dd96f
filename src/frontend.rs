//! Line commands for the terminal frontend.

use std::str::FromStr;

use anyhow::{Result, anyhow, bail};

use crate::model::{Field, SyncModel};

pub const HELP: &str = "\
commands:
  encoded <text>   write the Base64 field
  decoded <text>   write the JSON field
  show             print the current state
  reset            restore the example pair
  help             print this help
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Show,
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    /// Everything after the first space is the field text, kept verbatim.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        let text = || rest.unwrap_or("").to_string();
        let command = match word {
            "encoded" | "e" => return Ok(Command::Set(Field::Encoded, text())),
            "decoded" | "d" => return Ok(Command::Set(Field::Decoded, text())),
            "show" => Command::Show,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => bail!("empty command, try `help`"),
            other => return Err(anyhow!("unknown command `{other}`, try `help`")),
        };

        match rest.map(str::trim) {
            None | Some("") => Ok(command),
            Some(extra) => bail!("`{word}` takes no argument, got `{extra}`"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs `command` against the model. Field writes and resets notify the
/// model's observers; the rest leave it untouched.
pub fn apply(model: &mut SyncModel, command: Command) -> Flow {
    match command {
        Command::Set(field, text) => model.set_text(field, text),
        Command::Reset => model.reset(),
        Command::Show | Command::Help => {}
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

pub fn render(model: &SyncModel, as_json: bool) -> Result<String> {
    let snapshot = model.snapshot();
    if as_json {
        return Ok(snapshot.to_json()?);
    }
    Ok(format!(
        "encoded: {}\ndecoded: {}\nstatus:  {}",
        snapshot.encoded,
        snapshot.decoded,
        snapshot.status_line()
    ))
}
