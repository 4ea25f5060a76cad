//! Command line splitting.
//!
//! The grammar is intentionally flat: whitespace separates tokens, there is
//! no quoting or escaping, so an argument can never contain a space.

/// A verb and its positional arguments, derived fresh from each input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub verb: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split `line` on whitespace. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next()?.to_string();
        let args = tokens.map(str::to_string).collect();
        Some(Self { verb, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_verb_and_args() {
        let cmd = CommandLine::parse("  copy   a.txt\tb.txt ").unwrap();
        assert_eq!(cmd.verb, "copy");
        assert_eq!(cmd.args, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn blank_lines_have_no_command() {
        assert_eq!(CommandLine::parse(""), None);
        assert_eq!(CommandLine::parse(" \t "), None);
    }

    #[test]
    fn quotes_are_not_special() {
        let cmd = CommandLine::parse("type \"my file\"").unwrap();
        assert_eq!(cmd.args, vec!["\"my", "file\""]);
    }
}
