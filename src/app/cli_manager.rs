// labtrack
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
use super::{app_helper, command::Command, writable_string::WritableString};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

/// Returns the CLI argument setting the logging level, to be added to each command.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        match self.clap_app().get_matches_from_safe(args.iter()) {
            Ok(matches) => {
                let (name, command_matches) = matches.subcommand();
                let command_matches =
                    command_matches.ok_or_else(|| anyhow!("a subcommand is required"))?;
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!(r#"unknown subcommand "{}""#, name))?;
                app_helper::init_logger_with_level(logging_level(command_matches));
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(command_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                app_helper::init_logger();
                self.print_help(&args)
            }
            Err(e) => {
                app_helper::init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e.message))
            }
        }
    }

    fn print_help(&self, args: &[OsString]) -> Result<()> {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let str_args = args
            .iter()
            .skip(1)
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let subcommand_name = match str_args.first().map(|s| s.as_str()) {
            Some(first) if HELP_STRINGS.contains(&first) => str_args.get(1),
            Some(_) => str_args.first(),
            None => None,
        };
        let mut message = WritableString::default();
        match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n.as_str())) {
            Some(c) => c.clap_subcommand().write_long_help(&mut message),
            None => self.clap_app().write_long_help(&mut message),
        }
        .map_err(|e| anyhow!("{}", e.message))?;
        message.to_string().split('\n').for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

fn logging_level(arg_matches: &ArgMatches<'_>) -> log::LevelFilter {
    arg_matches
        .value_of(LOGGING_LEVEL_ARG)
        .and_then(|l| log::LevelFilter::from_str(l).ok())
        .unwrap_or(log::LevelFilter::Info)
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut processor_kinds: Vec<&str> = sys.cpus().iter().map(|p| p.brand()).collect();
    processor_kinds.sort_unstable();
    processor_kinds.dedup();
    info!(
        "logical core count: {} {:?}",
        sys.cpus().len(),
        processor_kinds
    );
    info!("total memory: {} bytes", sys.total_memory());
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::SubCommand;
    use std::{cell::RefCell, rc::Rc};

    struct LocalCommand {
        command_involved: Rc<RefCell<bool>>,
        argument_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local_command_name"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local_command_name")
                .about("local_command_about")
                .arg(Arg::with_name("arg_name").short("a"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.command_involved.borrow_mut() = true;
            if arg_matches.is_present("arg_name") {
                *self.argument_set.borrow_mut() = true;
            }
            Ok(())
        }
    }

    fn test_local_command_result(args: Vec<&'static str>) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let command_involved = Rc::new(RefCell::new(false));
        let argument_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(LocalCommand {
            command_involved: Rc::clone(&command_involved),
            argument_set: Rc::clone(&argument_set),
        }));
        manager.parse_cli(args)?;
        let involved = *command_involved.borrow();
        let set = *argument_set.borrow();
        Ok((involved, set))
    }

    #[test]
    fn test_command_involved() {
        assert_eq!(
            (true, false),
            test_local_command_result(vec!["app_name", "local_command_name"]).unwrap()
        );
    }

    #[test]
    fn test_command_and_arg_involved() {
        assert_eq!(
            (true, true),
            test_local_command_result(vec!["app_name", "local_command_name", "-a"]).unwrap()
        );
    }

    #[test]
    fn test_logging_level() {
        test_local_command_result(vec![
            "app_name",
            "local_command_name",
            "--logging-level",
            "off",
        ])
        .unwrap();
        assert!(test_local_command_result(vec![
            "app_name",
            "local_command_name",
            "--logging-level",
            "foo",
        ])
        .is_err());
    }

    #[test]
    fn test_wrong_subcommand() {
        assert!(test_local_command_result(vec!["app_name", "foo"]).is_err());
    }

    #[test]
    fn test_wrong_arg() {
        assert!(test_local_command_result(vec!["app_name", "local_command_name", "-b"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(
            (false, false),
            test_local_command_result(vec!["app_name", "-h"]).unwrap()
        );
    }

    #[test]
    fn test_help_subcommand() {
        test_local_command_result(vec!["app_name", "help"]).unwrap();
        test_local_command_result(vec!["app_name", "help", "local_command_name"]).unwrap();
        test_local_command_result(vec!["app_name", "local_command_name", "-h"]).unwrap();
    }
}
