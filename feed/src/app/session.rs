//! Command session
//!
//! Runs parsed feed actions against an in-memory service and writes results.
//! Reads (`feed`, `following`) print a JSON array per line; writes print
//! nothing unless echo is on.

use std::io::{BufRead, Write};

use crate::adapters::{InMemoryFollowRepository, InMemoryPostRepository};
use crate::app::action_parser::{help_text, parse_action, FeedAction};
use crate::app::FeedService;
use crate::error::AppError;

/// Outcome of running a script
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that parsed and ran
    pub executed: usize,
    /// Lines that failed to parse and were skipped
    pub rejected: usize,
    /// One message per rejected line, prefixed with its line number
    pub diagnostics: Vec<String>,
}

/// A driver session over one feed service
pub struct Session<W: Write> {
    service: FeedService<InMemoryPostRepository, InMemoryFollowRepository>,
    out: W,
    echo: bool,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, echo: bool) -> Self {
        Self {
            service: FeedService::in_memory(),
            out,
            echo,
        }
    }

    /// Run one action and write its output
    pub fn execute(&mut self, action: FeedAction) -> Result<(), AppError> {
        match action {
            FeedAction::Post { author, content_id } => {
                self.service.post(author, content_id);
            }
            FeedAction::Follow { follower, followee } => self.service.follow(follower, followee),
            FeedAction::Unfollow { follower, followee } => {
                self.service.unfollow(follower, followee)
            }
            FeedAction::Feed { entity } => {
                let feed = self.service.get_feed(entity);
                serde_json::to_writer(&mut self.out, &feed)?;
                writeln!(self.out)?;
            }
            FeedAction::Following { entity } => {
                let followees = self.service.followees(entity);
                serde_json::to_writer(&mut self.out, &followees)?;
                writeln!(self.out)?;
            }
            FeedAction::Help => write!(self.out, "{}", help_text())?,
        }
        Ok(())
    }

    /// Run every line of `input`. Blank lines and `#` comments are skipped;
    /// unparseable lines are logged and counted, then processing continues.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if self.echo {
                writeln!(self.out, "> {}", trimmed)?;
            }

            match parse_action(trimmed) {
                Ok(action) => {
                    self.execute(action)?;
                    summary.executed += 1;
                }
                Err(source) => {
                    let err = AppError::Parse {
                        line: index + 1,
                        source,
                    };
                    tracing::warn!("{}", err);
                    summary.rejected += 1;
                    summary.diagnostics.push(err.to_string());
                }
            }
        }

        self.out.flush()?;
        Ok(summary)
    }

    /// Consume the session, returning the writer
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_script(script: &str, echo: bool) -> (RunSummary, String) {
        let mut session = Session::new(Vec::new(), echo);
        let summary = session.run(script.as_bytes()).unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (summary, output)
    }

    #[test]
    fn runs_a_full_script() {
        let script = "\
# two followees
follow 1 2
follow 1 3
post 2 1
post 2 2
post 2 3
post 3 4
post 3 5
feed 1
following 1
";
        let (summary, output) = run_script(script, false);

        assert_eq!(
            summary,
            RunSummary {
                executed: 9,
                rejected: 0,
                diagnostics: Vec::new(),
            }
        );
        assert_eq!(output, "[5,4,3,2,1]\n[2,3]\n");
    }

    #[test]
    fn bad_lines_are_skipped() {
        let script = "post 1 1\nretweet 1\npost x 2\nfeed 1\n";
        let (summary, output) = run_script(script, false);

        assert_eq!(summary.executed, 2);
        assert_eq!(summary.rejected, 2);
        assert_eq!(
            summary.diagnostics,
            vec![
                "Line 2: Unknown command: retweet".to_string(),
                "Line 3: Invalid number: invalid digit found in string".to_string(),
            ]
        );
        assert_eq!(output, "[1]\n");
    }

    #[test]
    fn echo_prefixes_commands() {
        let (_, output) = run_script("post 1 9\n\nfeed 1\n", true);
        assert_eq!(output, "> post 1 9\n> feed 1\n[9]\n");
    }

    #[test]
    fn unfollow_of_missing_edge_runs_cleanly() {
        let (summary, output) = run_script("unfollow 1 2\nfollowing 1\n", false);
        assert_eq!(summary.rejected, 0);
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn help_is_written() {
        let (_, output) = run_script("help\n", false);
        assert!(output.starts_with("# Available Commands"));
    }
}
