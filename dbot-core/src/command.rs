//! Bot command parsing: `/name[@bot] [argument...]`.

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name without the leading slash, lowercased.
    pub name: String,
    /// Bot username from a `/name@bot` suffix, if present.
    pub bot_username: Option<String>,
    /// Everything after the command token, trimmed. `None` when absent or blank.
    pub argument: Option<String>,
}

impl Command {
    /// Returns true if the command has no `@bot` suffix or the suffix matches `username`.
    /// An unknown own username accepts every suffix.
    pub fn is_addressed_to(&self, username: Option<&str>) -> bool {
        match (&self.bot_username, username) {
            (Some(target), Some(own)) => target.eq_ignore_ascii_case(own),
            _ => true,
        }
    }
}

/// Parses `text` as a command. Returns `None` for anything that does not start with `/` or has
/// an empty command name.
pub fn parse_command(text: &str) -> Option<Command> {
    let text = text.trim_start();
    let rest = text.strip_prefix('/')?;

    let (token, argument) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], Some(rest[idx..].trim())),
        None => (rest, None),
    };

    let (name, bot_username) = match token.split_once('@') {
        Some((name, bot)) => (name, Some(bot.to_string()).filter(|b| !b.is_empty())),
        None => (token, None),
    };
    if name.is_empty() {
        return None;
    }

    Some(Command {
        name: name.to_lowercase(),
        bot_username,
        argument: argument.filter(|a| !a.is_empty()).map(str::to_string),
    })
}
