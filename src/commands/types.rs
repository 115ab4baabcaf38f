//! Command types and definitions.

use std::fmt;

/// Available bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Wake the hive mind and announce the active personality.
    Start,

    /// Show the payment link.
    Pay,

    /// Show help information.
    Help,
}

impl BotCommand {
    /// Parses a command from a message text.
    ///
    /// Accepts any `@botname` suffix and ignores trailing arguments.
    /// Returns `None` if the message is not a known command.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_for(text, None)
    }

    /// Parses a command addressed to the bot with the given username.
    ///
    /// A command with an `@suffix` naming another bot is not ours and
    /// yields `None`. Without a username every suffix is accepted.
    #[must_use]
    pub fn parse_for(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let after_slash = text.trim().strip_prefix('/')?;

        let word = after_slash
            .split(char::is_whitespace)
            .next()
            .unwrap_or_default();
        let name = match (word.split_once('@'), bot_username) {
            (Some((name, target)), Some(username)) => {
                if !target.eq_ignore_ascii_case(username.trim_start_matches('@')) {
                    return None;
                }
                name
            }
            (Some((name, _)), None) => name,
            (None, _) => word,
        };

        match name.to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "pay" | "pagar" => Some(Self::Pay),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    /// Returns true if the text looks like a command, known or not.
    #[must_use]
    pub fn is_command(text: &str) -> bool {
        text.trim_start().starts_with('/')
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pay => "pay",
            Self::Help => "help",
        }
    }

    /// Returns the command description for help.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Start => "Wake the hive mind and read the market",
            Self::Pay => "Get the payment link",
            Self::Help => "Show this help message",
        }
    }

    /// All commands, in help order.
    pub const ALL: [Self; 3] = [Self::Start, Self::Pay, Self::Help];
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(BotCommand::parse("/start"), Some(BotCommand::Start));
        assert_eq!(BotCommand::parse("/start payload"), Some(BotCommand::Start));
    }

    #[test]
    fn test_parse_pay_aliases() {
        assert_eq!(BotCommand::parse("/pay"), Some(BotCommand::Pay));
        assert_eq!(BotCommand::parse("/pagar"), Some(BotCommand::Pay));
    }

    #[test]
    fn test_parse_with_bot_suffix() {
        assert_eq!(
            BotCommand::parse("/help@NeuraHiveBot"),
            Some(BotCommand::Help)
        );
    }

    #[test]
    fn test_parse_for_other_bot_ignored() {
        assert_eq!(BotCommand::parse_for("/start@SomeOtherBot", Some("NeuraHiveBot")), None);
        assert_eq!(
            BotCommand::parse_for("/start@neurahivebot", Some("@NeuraHiveBot")),
            Some(BotCommand::Start)
        );
        assert_eq!(
            BotCommand::parse_for("/pay", Some("NeuraHiveBot")),
            Some(BotCommand::Pay)
        );
        assert_eq!(
            BotCommand::parse_for("/start@SomeOtherBot", None),
            Some(BotCommand::Start)
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(BotCommand::parse("/START"), Some(BotCommand::Start));
        assert_eq!(BotCommand::parse("/Pay"), Some(BotCommand::Pay));
    }

    #[test]
    fn test_parse_with_extra_whitespace() {
        assert_eq!(BotCommand::parse("  /help  "), Some(BotCommand::Help));
    }

    #[test]
    fn test_parse_not_a_command() {
        assert_eq!(BotCommand::parse("start"), None);
        assert_eq!(BotCommand::parse("/unknown"), None);
        assert_eq!(BotCommand::parse("/"), None);
        assert_eq!(BotCommand::parse(""), None);
    }

    #[test]
    fn test_is_command() {
        assert!(BotCommand::is_command("/unknown"));
        assert!(!BotCommand::is_command("I want to buy"));
    }

    #[test]
    fn test_display() {
        assert_eq!(BotCommand::Pay.to_string(), "/pay");
    }
}
