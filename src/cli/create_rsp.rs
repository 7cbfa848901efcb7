//! Create-rsp command implementation

use anyhow::Result;
use clap::Args;
use console::style;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::domain::RESPONSE_FILE_NAME;
use crate::rsp::{collect_options, LinePrompter, TermPrompter};

#[derive(Args)]
pub struct CreateRspArgs {
    /// Where to write the response file
    #[arg(short, long, value_name = "FILE", default_value = RESPONSE_FILE_NAME)]
    pub file: PathBuf,
}

pub fn run(args: CreateRspArgs) -> Result<ExitCode> {
    let interactive = io::stdin().is_terminal() && console::user_attended_stderr();

    let collected = if interactive {
        collect_options(&mut TermPrompter::new())
    } else {
        collect_options(&mut LinePrompter::new(io::stdin().lock(), io::stdout()))
    };

    let written = collected.and_then(|options| options.write_to(&args.file));
    if !interactive {
        // Line prompts leave the cursor after the last question.
        println!();
    }

    match written {
        Ok(()) => {
            println!(
                "{}",
                style(format!("Response file '{}' created successfully.", args.file.display()))
                    .green()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", style(format!("Error creating response file: {err}")).red());
            Ok(ExitCode::FAILURE)
        }
    }
}
