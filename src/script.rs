//! Line mode: numbered-menu selections in, one JSON reply per line out.
//!
//! ```text
//! stdin:  2
//! stdout: {"ok":true,"command":"reserve","outcome":{"type":"reserved",...},"state":{...}}
//! ```
//!
//! The first line written describes the starting state. Reading stops at end
//! of input or at a quit selection (`0`, `q`, `quit`).

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::core::{KindSource, Outcome, Session, SessionSnapshot};
use crate::input::{parse_menu_line, MenuChoice};

#[derive(Debug, Serialize)]
struct Reply<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    state: &'a SessionSnapshot,
}

/// Totals for one scripted run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub applied: u32,
    pub failed: u32,
    pub unknown: u32,
    pub quit: bool,
}

/// Drive `session` from `input` until end of input or quit.
pub fn run_lines<S, R, W>(session: &mut Session<S>, input: R, mut output: W) -> Result<ScriptSummary>
where
    S: KindSource,
    R: BufRead,
    W: Write,
{
    let mut summary = ScriptSummary::default();
    let mut snap = session.snapshot();
    write_reply(
        &mut output,
        &Reply {
            ok: true,
            command: None,
            outcome: None,
            error: None,
            state: &snap,
        },
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse_menu_line(&line) {
            Some(MenuChoice::Quit) => {
                summary.quit = true;
                break;
            }
            Some(MenuChoice::Command(command)) => {
                let result = session.apply(command);
                session.snapshot_into(&mut snap);
                match result {
                    Ok(outcome) => {
                        summary.applied += 1;
                        Reply {
                            ok: true,
                            command: Some(command.as_str()),
                            outcome: Some(outcome),
                            error: None,
                            state: &snap,
                        }
                    }
                    Err(err) => {
                        summary.failed += 1;
                        Reply {
                            ok: false,
                            command: Some(command.as_str()),
                            outcome: None,
                            error: Some(err.to_string()),
                            state: &snap,
                        }
                    }
                }
            }
            None => {
                summary.unknown += 1;
                Reply {
                    ok: false,
                    command: None,
                    outcome: None,
                    error: Some(format!("unknown command: {}", line.trim())),
                    state: &snap,
                }
            }
        };
        write_reply(&mut output, &reply)?;
    }

    debug!(?summary, "script finished");
    Ok(summary)
}

fn write_reply<W: Write>(output: &mut W, reply: &Reply<'_>) -> Result<()> {
    serde_json::to_writer(&mut *output, reply)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
