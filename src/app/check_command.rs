use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use labtrack::io::AspartixWriter;

const CMD_NAME: &str = "check";

const ARG_PRINT: &str = "PRINT";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_PRINT)
                    .long("print")
                    .help("writes the framework back on the standard output, without comments nor duplicates"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let af = common::read_aspartix_file_path(file)?;
        if arg_matches.is_present(ARG_PRINT) {
            AspartixWriter::default().write_framework(&af, &mut std::io::stdout())?;
        }
        Ok(())
    }
}
