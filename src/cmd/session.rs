//! Session command - interactive loop driving the calculator with typed commands

use super::contribution::print_view;
use super::{DataArgs, GrantBaseArg, NO_DATA};
use crate::core::{Command, Selection, Session, TaxpayerInputs};
use crate::source::DataSource;
use clap::Args;
use std::io::{self, BufRead};

#[derive(Args, Debug)]
pub struct SessionCommand {
    #[command(flatten)]
    data: DataArgs,

    /// Budget total the federal and state grants are derived from
    #[arg(long, value_enum, default_value_t = GrantBaseArg::Fetched)]
    grant_base: GrantBaseArg,
}

const USAGE: &str = "\
Commands:
  calc <federal> <state> <local>   recalculate your contribution
  all                              show every agency
  top                              show the ten largest agencies
  show                             print the current view again
  help                             show this message
  quit                             leave the session";

/// A parsed line of session input
#[derive(Debug, Clone, Copy, PartialEq)]
enum Input {
    Command(Command),
    Show,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let input = match words.next()? {
        "calc" | "calculate" => {
            // Missing fields parse as not-a-number, like empty form fields
            let federal = words.next().unwrap_or("");
            let state = words.next().unwrap_or("");
            let local = words.next().unwrap_or("");
            Input::Command(Command::Recalculate(TaxpayerInputs::parse(
                federal, state, local,
            )))
        }
        "all" => Input::Command(Command::SwitchView(Selection::All)),
        "top" | "top-ten" => Input::Command(Command::SwitchView(Selection::TopTen)),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => return None,
    };
    Some(input)
}

impl SessionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.data.source() == DataSource::Stdin {
            anyhow::bail!("session reads commands from stdin; load data from --url or a file");
        }

        let mut session = Session::new(self.data.load_snapshot(), self.grant_base.into());
        println!("{}", USAGE);

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let view = match parse_input(&line) {
                Some(Input::Command(command)) => {
                    let view = session.handle(command);
                    log::debug!("{:?} -> {:?}", command, session.state());
                    view
                }
                Some(Input::Show) => session.render(),
                Some(Input::Help) => {
                    println!("{}", USAGE);
                    continue;
                }
                Some(Input::Quit) => break,
                None => {
                    println!("Unknown command '{}', type 'help' for usage", line.trim());
                    continue;
                }
            };
            match view {
                Some(view) => print_view(&view),
                None => println!("{}", NO_DATA),
            }
        }
        Ok(())
    }
}
