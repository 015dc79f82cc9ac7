//! Session scripts: a line-based command format for replaying interaction.
//!
//! One command per line. Blank lines and `#` comments are skipped. A `#`
//! starts a comment only at the start of a line or after whitespace, so tags
//! and ids may contain it (`filter portfolio C#`).
//!
//! ```text
//! filter portfolio Web      # click a filter button
//! filter certs All
//! open portfolio atlas      # click a card
//! slide 2                   # click a carousel bullet
//! wait 4000                 # let time pass (milliseconds)
//! close                     # close button / backdrop
//! escape                    # Escape key
//! ```
//!
//! Tags may contain spaces: everything after the collection name is the tag
//! (`filter certs Machine Learning`).

use crate::controller::Command;
use crate::filter::Tag;
use crate::types::Collection;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: unknown collection '{name}' (expected portfolio or certs)")]
    UnknownCollection { line: usize, name: String },
    #[error("line {line}: {usage}")]
    Usage { line: usize, usage: &'static str },
    #[error("line {line}: '{value}' is not a non-negative integer")]
    Number { line: usize, value: String },
}

/// Parse a whole script. Fails on the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        if let Some(command) = parse_line(raw, idx + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let text = strip_comment(raw).trim();
    let mut words = text.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match word {
        "filter" => {
            let [collection, tag @ ..] = rest.as_slice() else {
                return Err(usage(line, "usage: filter <portfolio|certs> <tag>"));
            };
            if tag.is_empty() {
                return Err(usage(line, "usage: filter <portfolio|certs> <tag>"));
            }
            Command::SelectFilter {
                collection: collection_arg(collection, line)?,
                tag: Tag::parse(&tag.join(" ")),
            }
        }
        "open" => match rest.as_slice() {
            [collection, id] => Command::SelectItem {
                collection: collection_arg(collection, line)?,
                id: id.to_string(),
            },
            _ => return Err(usage(line, "usage: open <portfolio|certs> <id>")),
        },
        "slide" => match rest.as_slice() {
            [index] => Command::SelectSlide(number_arg(index, line)? as usize),
            _ => return Err(usage(line, "usage: slide <index>")),
        },
        "wait" => match rest.as_slice() {
            [ms] => Command::Tick(Duration::from_millis(number_arg(ms, line)?)),
            _ => return Err(usage(line, "usage: wait <milliseconds>")),
        },
        "close" if rest.is_empty() => Command::CloseModal,
        "escape" if rest.is_empty() => Command::Escape,
        "close" | "escape" => return Err(usage(line, "close and escape take no arguments")),
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

/// Cut `raw` at the first `#` that begins a word.
fn strip_comment(raw: &str) -> &str {
    let mut after_space = true;
    for (i, c) in raw.char_indices() {
        if c == '#' && after_space {
            return &raw[..i];
        }
        after_space = c.is_whitespace();
    }
    raw
}

fn usage(line: usize, usage: &'static str) -> ScriptError {
    ScriptError::Usage { line, usage }
}

fn collection_arg(name: &str, line: usize) -> Result<Collection, ScriptError> {
    Collection::parse(name).ok_or_else(|| ScriptError::UnknownCollection {
        line,
        name: name.to_string(),
    })
}

fn number_arg(value: &str, line: usize) -> Result<u64, ScriptError> {
    value.parse().map_err(|_| ScriptError::Number {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "\
filter portfolio Web
open certs aws-ccp
slide 2
wait 4000
close
escape
";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::SelectFilter {
                    collection: Collection::Portfolio,
                    tag: Tag::named("Web"),
                },
                Command::SelectItem {
                    collection: Collection::Certs,
                    id: "aws-ccp".into(),
                },
                Command::SelectSlide(2),
                Command::Tick(Duration::from_millis(4000)),
                Command::CloseModal,
                Command::Escape,
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let script = "\n# a comment\n   \nclose   # trailing comment\n";
        assert_eq!(parse_script(script).unwrap(), vec![Command::CloseModal]);
    }

    #[test]
    fn hash_inside_a_word_is_not_a_comment() {
        let commands = parse_script("filter portfolio C#\nfilter certs F# # functional\nopen portfolio a#1").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::SelectFilter {
                    collection: Collection::Portfolio,
                    tag: Tag::named("C#"),
                },
                Command::SelectFilter {
                    collection: Collection::Certs,
                    tag: Tag::named("F#"),
                },
                Command::SelectItem {
                    collection: Collection::Portfolio,
                    id: "a#1".into(),
                },
            ]
        );
    }

    #[test]
    fn strip_comment_rules() {
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("close\t# tab"), "close\t");
        assert_eq!(strip_comment("slide 2#3"), "slide 2#3");
        assert_eq!(strip_comment("wait 10"), "wait 10");
    }

    #[test]
    fn all_tag_parses_to_all() {
        let commands = parse_script("filter certs All").unwrap();
        assert_eq!(
            commands,
            vec![Command::SelectFilter {
                collection: Collection::Certs,
                tag: Tag::All,
            }]
        );
    }

    #[test]
    fn multi_word_tag() {
        let commands = parse_script("filter portfolio Machine Learning").unwrap();
        assert_eq!(
            commands,
            vec![Command::SelectFilter {
                collection: Collection::Portfolio,
                tag: Tag::named("Machine Learning"),
            }]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_script("close\n\njump 3").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 3,
                word: "jump".into()
            }
        );
        assert_eq!(err.to_string(), "line 3: unknown command 'jump'");
    }

    #[test]
    fn unknown_collection() {
        let err = parse_script("open blog post-1").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCollection { line: 1, .. }));
    }

    #[test]
    fn bad_numbers() {
        assert!(matches!(
            parse_script("wait soon").unwrap_err(),
            ScriptError::Number { .. }
        ));
        assert!(matches!(
            parse_script("slide -1").unwrap_err(),
            ScriptError::Number { .. }
        ));
    }

    #[test]
    fn wrong_arity() {
        for line in ["filter portfolio", "filter", "open certs", "wait", "close now"] {
            assert!(
                matches!(parse_script(line).unwrap_err(), ScriptError::Usage { .. }),
                "{line}"
            );
        }
    }
}
