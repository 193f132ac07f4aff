//! Action parser for feed text commands
//!
//! Parses lines like "post 1 5", "follow 1 2", "feed 1".

use crate::domain::entities::{ContentId, EntityId};
use crate::error::ParseError;

/// Actions the driver can run against a feed service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    /// Publish a post
    Post {
        author: EntityId,
        content_id: ContentId,
    },

    /// Add a follow edge
    Follow {
        follower: EntityId,
        followee: EntityId,
    },

    /// Remove a follow edge
    Unfollow {
        follower: EntityId,
        followee: EntityId,
    },

    /// Print an entity's feed
    Feed { entity: EntityId },

    /// Print who an entity follows
    Following { entity: EntityId },

    /// Get help on available commands
    Help,
}

/// Parse a feed action from text input
pub fn parse_action(input: &str) -> Result<FeedAction, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();

    let action = match command.as_str() {
        "post" | "tweet" => {
            let (author, content) = two_numbers(&parts, "post <entity> <content>")?;
            FeedAction::Post {
                author: EntityId(author),
                content_id: ContentId(content),
            }
        }

        "follow" => {
            let (follower, followee) = two_numbers(&parts, "follow <follower> <followee>")?;
            FeedAction::Follow {
                follower: EntityId(follower),
                followee: EntityId(followee),
            }
        }

        "unfollow" => {
            let (follower, followee) = two_numbers(&parts, "unfollow <follower> <followee>")?;
            FeedAction::Unfollow {
                follower: EntityId(follower),
                followee: EntityId(followee),
            }
        }

        "feed" | "news" | "timeline" => FeedAction::Feed {
            entity: EntityId(one_number(&parts, "feed <entity>")?),
        },

        "following" | "followees" => FeedAction::Following {
            entity: EntityId(one_number(&parts, "following <entity>")?),
        },

        "help" | "?" => {
            expect_arity(&parts, 1)?;
            FeedAction::Help
        }

        _ => return Err(ParseError::UnknownCommand(command)),
    };

    Ok(action)
}

fn one_number(parts: &[&str], usage: &str) -> Result<i64, ParseError> {
    let value = number_at(parts, 1, usage)?;
    expect_arity(parts, 2)?;
    Ok(value)
}

fn two_numbers(parts: &[&str], usage: &str) -> Result<(i64, i64), ParseError> {
    let first = number_at(parts, 1, usage)?;
    let second = number_at(parts, 2, usage)?;
    expect_arity(parts, 3)?;
    Ok((first, second))
}

fn number_at(parts: &[&str], index: usize, usage: &str) -> Result<i64, ParseError> {
    let raw = parts
        .get(index)
        .ok_or_else(|| ParseError::MissingArgument(format!("{} (usage: {})", parts[0], usage)))?;
    Ok(raw.parse()?)
}

fn expect_arity(parts: &[&str], expected: usize) -> Result<(), ParseError> {
    match parts.get(expected) {
        Some(extra) => Err(ParseError::InvalidArgument(format!(
            "unexpected '{}' after {}",
            extra, parts[0]
        ))),
        None => Ok(()),
    }
}

/// Generate help text for available commands
pub fn help_text() -> String {
    r#"# Available Commands

- `post <entity> <content>` - Publish content as an entity
- `follow <follower> <followee>` - Start following an entity
- `unfollow <follower> <followee>` - Stop following (no-op if not following)
- `feed <entity>` - Show the 10 most recent posts visible to an entity
- `following <entity>` - Show who an entity follows
- `help` - Show this help message

Lines starting with `#` are ignored.
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post() {
        assert_eq!(
            parse_action("post 1 5").unwrap(),
            FeedAction::Post {
                author: EntityId(1),
                content_id: ContentId(5)
            }
        );
        assert_eq!(
            parse_action("  TWEET  2   -7 ").unwrap(),
            FeedAction::Post {
                author: EntityId(2),
                content_id: ContentId(-7)
            }
        );
    }

    #[test]
    fn test_parse_follow_and_unfollow() {
        assert_eq!(
            parse_action("follow 1 2").unwrap(),
            FeedAction::Follow {
                follower: EntityId(1),
                followee: EntityId(2)
            }
        );
        assert_eq!(
            parse_action("unfollow 1 2").unwrap(),
            FeedAction::Unfollow {
                follower: EntityId(1),
                followee: EntityId(2)
            }
        );
    }

    #[test]
    fn test_parse_reads() {
        assert_eq!(
            parse_action("feed 3").unwrap(),
            FeedAction::Feed {
                entity: EntityId(3)
            }
        );
        assert_eq!(
            parse_action("timeline 3").unwrap(),
            FeedAction::Feed {
                entity: EntityId(3)
            }
        );
        assert_eq!(
            parse_action("following 4").unwrap(),
            FeedAction::Following {
                entity: EntityId(4)
            }
        );
        assert_eq!(parse_action("help").unwrap(), FeedAction::Help);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            parse_action("   "),
            Err(ParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_parse_unknown() {
        match parse_action("retweet 1 2") {
            Err(ParseError::UnknownCommand(cmd)) => assert_eq!(cmd, "retweet"),
            other => panic!("expected unknown command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(matches!(
            parse_action("follow 1"),
            Err(ParseError::MissingArgument(_))
        ));
        assert!(matches!(
            parse_action("feed"),
            Err(ParseError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_parse_invalid_number() {
        assert!(matches!(
            parse_action("post one 2"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_extra_argument() {
        assert!(matches!(
            parse_action("feed 1 2"),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_action("help me"),
            Err(ParseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_help_text_lists_commands() {
        let help = help_text();
        for command in ["post", "follow", "unfollow", "feed", "following"] {
            assert!(help.contains(command), "help is missing {}", command);
        }
    }
}
