use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use tokio::task;

use crate::error::{Error, Result};

/// Where prompt answers come from
#[derive(Debug, Clone)]
pub enum Prompt {
    /// Console-based interactive prompts using dialoguer
    Console,
    /// Line-by-line answers from piped stdin, echoed to the session output
    Stdin,
    /// Pre-recorded answers, consumed in order
    Scripted(VecDeque<String>),
    /// Non-interactive mode that fails whenever input is required
    NonInteractive,
}

impl Prompt {
    pub fn new(interactive: bool) -> Self {
        if !interactive {
            Self::NonInteractive
        } else if io::stdin().is_terminal() {
            Self::Console
        } else {
            Self::Stdin
        }
    }

    pub fn scripted<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scripted(answers.into_iter().map(Into::into).collect())
    }

    /// Ask for one line of input labelled `field`. `flag` names the option
    /// that supplies the value without prompting.
    pub async fn input(&mut self, field: &str, flag: &str, out: &mut dyn Write) -> Result<String> {
        match self {
            Prompt::Console => {
                let prompt = field.to_string();
                let result = task::spawn_blocking(move || {
                    Input::<String>::new()
                        .with_prompt(prompt)
                        .allow_empty(true)
                        .interact_text()
                })
                .await
                .map_err(join_error)?;

                result.map_err(|err| Error::InvalidArgument {
                    message: err.to_string(),
                })
            }
            Prompt::Stdin => {
                write!(out, "{field}: ")?;
                out.flush()?;
                let line = task::spawn_blocking(|| {
                    let mut line = String::new();
                    io::stdin().lock().read_line(&mut line).map(|read| (read, line))
                })
                .await
                .map_err(join_error)?;

                let answer = match line? {
                    (0, _) => {
                        writeln!(out)?;
                        return Err(Error::InputClosed {
                            field: field.to_string(),
                        });
                    }
                    (_, line) => strip_line_ending(line),
                };
                writeln!(out, "{answer}")?;
                Ok(answer)
            }
            Prompt::Scripted(answers) => {
                let answer = answers.pop_front().ok_or_else(|| Error::InputClosed {
                    field: field.to_string(),
                })?;
                writeln!(out, "{field}: {answer}")?;
                Ok(answer)
            }
            Prompt::NonInteractive => Err(Error::non_interactive(field, flag)),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::Console
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

fn join_error(err: task::JoinError) -> Error {
    Error::Io {
        source: io::Error::other(err.to_string()),
    }
}
