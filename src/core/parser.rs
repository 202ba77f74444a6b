//! Smash command parser.
//!
//! Splits an expanded input line into space-delimited tokens and consumes
//! them into a [`Command`]: a trailing `&` marks the command as a background
//! command, `<`/`>` capture redirection targets, and whatever remains becomes
//! the argument vector.

use crate::errors::{Error, Result};

pub const BACKGROUND_MARKER: &str = "&";
pub const INPUT_REDIRECT_MARKER: &str = "<";
pub const OUTPUT_REDIRECT_MARKER: &str = ">";

const NULL_DEVICE: &str = "/dev/null";

/// A single parsed command, one per input cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// The line the command was parsed from, used for messages.
    pub input: String,
    /// Program name followed by its arguments; never empty.
    pub argv: Vec<String>,
    /// Input redirection target, if any.
    pub infile: Option<String>,
    /// Output redirection target, if any.
    pub outfile: Option<String>,
    /// Run without blocking the interpreter.
    pub background: bool,
}

impl Command {
    /// Parses `input` into a `Command`.
    ///
    /// Returns `Ok(None)` when nothing remains after stripping markers, which
    /// the caller treats as a blank line. A redirection marker with no
    /// following token is a parse error.
    ///
    /// `foreground_only` suppresses backgrounding: the trailing marker is
    /// still removed from the token sequence, but the command runs in the
    /// foreground.
    pub fn parse(input: &str, foreground_only: bool) -> Result<Option<Command>> {
        let mut tokens = tokenize(input);
        if tokens.is_empty() {
            return Ok(None);
        }

        // A background marker only counts as one in the final position; it is
        // dropped from the token sequence whether or not it takes effect.
        let mut background = false;
        if tokens.last() == Some(&BACKGROUND_MARKER) {
            tokens.pop();
            background = !foreground_only;
        }

        let mut argv = Vec::new();
        let mut infile = None;
        let mut outfile = None;
        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            match token {
                INPUT_REDIRECT_MARKER => {
                    let target = tokens
                        .next()
                        .ok_or_else(|| Error::missing_redirect_target(token))?;
                    infile = Some(target.to_string());
                }
                OUTPUT_REDIRECT_MARKER => {
                    let target = tokens
                        .next()
                        .ok_or_else(|| Error::missing_redirect_target(token))?;
                    outfile = Some(target.to_string());
                }
                _ => argv.push(token.to_string()),
            }
        }

        if argv.is_empty() {
            return Ok(None);
        }

        // Background commands that were not redirected explicitly talk to the
        // null device instead of the terminal.
        if background {
            infile.get_or_insert_with(|| NULL_DEVICE.to_string());
            outfile.get_or_insert_with(|| NULL_DEVICE.to_string());
        }

        Ok(Some(Command {
            input: input.to_string(),
            argv,
            infile,
            outfile,
            background,
        }))
    }
}

/// Splits on runs of the space character only; no tab or quote awareness.
fn tokenize(input: &str) -> Vec<&str> {
    input.split(' ').filter(|token| !token.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn parse(input: &str) -> Option<Command> {
        Command::parse(input, false).unwrap()
    }

    #[test]
    fn empty() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
    }

    #[test]
    fn single_cmd() {
        let command = parse("cmd").unwrap();
        assert_eq!(command.argv, vec!["cmd"]);
        assert!(command.infile.is_none());
        assert!(command.outfile.is_none());
        assert!(!command.background);
    }

    #[test]
    fn single_cmd_with_args() {
        let command = parse("cmd var1 var2 var3").unwrap();
        assert_eq!(command.argv, vec!["cmd", "var1", "var2", "var3"]);
    }

    #[test]
    fn repeated_spaces_collapse() {
        let command = parse("cmd   var1  var2").unwrap();
        assert_eq!(command.argv, vec!["cmd", "var1", "var2"]);
    }

    #[test]
    fn infile_valid() {
        let command = parse("cmd < infile").unwrap();
        assert_eq!(command.infile.as_deref(), Some("infile"));
        assert_eq!(command.argv, vec!["cmd"]);
    }

    #[test]
    fn outfile_valid() {
        let command = parse("cmd > outfile").unwrap();
        assert_eq!(command.outfile.as_deref(), Some("outfile"));
        assert_eq!(command.argv, vec!["cmd"]);
    }

    #[test]
    fn redirects_in_either_order() {
        let command = parse("cmd < in > out").unwrap();
        assert_eq!(command.infile.as_deref(), Some("in"));
        assert_eq!(command.outfile.as_deref(), Some("out"));

        let command = parse("cmd > out < in").unwrap();
        assert_eq!(command.infile.as_deref(), Some("in"));
        assert_eq!(command.outfile.as_deref(), Some("out"));
    }

    #[test]
    fn repeated_redirect_last_wins() {
        let command = parse("cmd > first > second").unwrap();
        assert_eq!(command.outfile.as_deref(), Some("second"));
    }

    #[test]
    fn missing_redirect_target() {
        let err = Command::parse("cmd >", false).unwrap_err();
        assert_eq!(
            *err.kind(),
            ErrorKind::MissingRedirectTarget(">".to_string())
        );
        assert!(Command::parse("cmd <", false).is_err());
    }

    #[test]
    fn background_marker_last() {
        let command = parse("sleep 5 &").unwrap();
        assert!(command.background);
        assert_eq!(command.argv, vec!["sleep", "5"]);
        assert_eq!(command.infile.as_deref(), Some("/dev/null"));
        assert_eq!(command.outfile.as_deref(), Some("/dev/null"));
    }

    #[test]
    fn background_explicit_redirect_kept() {
        let command = parse("cmd > out &").unwrap();
        assert!(command.background);
        assert_eq!(command.outfile.as_deref(), Some("out"));
        assert_eq!(command.infile.as_deref(), Some("/dev/null"));
    }

    #[test]
    fn background_marker_mid_sequence_is_literal() {
        let command = parse("echo & done").unwrap();
        assert!(!command.background);
        assert_eq!(command.argv, vec!["echo", "&", "done"]);
    }

    #[test]
    fn background_marker_alone_parses_to_nothing() {
        assert!(parse("&").is_none());
    }

    #[test]
    fn foreground_only_drops_marker_silently() {
        let command = Command::parse("sleep 5 &", true).unwrap().unwrap();
        assert!(!command.background);
        assert_eq!(command.argv, vec!["sleep", "5"]);
        assert!(command.infile.is_none());
        assert!(command.outfile.is_none());
    }

    #[test]
    fn markers_never_reach_argv() {
        let command = parse("wc -l < in > out &").unwrap();
        assert_eq!(command.argv.join(" "), "wc -l");

        // parsing the surviving argv again is a fixed point
        let reparsed = parse(&command.argv.join(" ")).unwrap();
        assert_eq!(reparsed.argv, command.argv);
        assert!(reparsed.infile.is_none());
        assert!(reparsed.outfile.is_none());
        assert!(!reparsed.background);
    }
}
