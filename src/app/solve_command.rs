use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use labtrack::{
    aa::{AAFramework, Argument, Problem, Query, Semantics},
    io::{AspartixWriter, ResponseWriter},
    solvers::{
        self, CredulousAcceptanceComputer, PreferredSemanticsSolver, SingleExtensionComputer,
        SkepticalAcceptanceComputer, StableSemanticsSolver,
    },
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARGS: &str = "ARGS";
const ARG_WITH_CERTIFICATE: &str = "WITH_CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve (see the problems command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARGS)
                    .short("a")
                    .takes_value(true)
                    .empty_values(true)
                    .multiple(false)
                    .help("the comma separated arguments (the set for VE queries, the argument for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_WITH_CERTIFICATE)
                    .long("with-certificate")
                    .help("for DC/DS queries, writes an extension justifying the answer when possible"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let problem_str = arg_matches
            .value_of(ARG_PROBLEM)
            .ok_or_else(|| anyhow!("missing problem"))?;
        let problem = Problem::try_from(problem_str)?;
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let af = common::read_aspartix_file_path(file)?;
        let labels = arg_matches
            .value_of(ARG_ARGS)
            .map(split_labels)
            .unwrap_or_default();
        info!("solving {}", problem);
        match problem.query {
            Query::SE => {
                if arg_matches.is_present(ARG_ARGS) {
                    warn!(
                        "unexpected arguments on the command line (useless for query {})",
                        problem.query.as_ref()
                    );
                }
                compute_one_extension(&af, problem.semantics)
            }
            Query::VE => {
                let status = solvers::solve_decision_problem(&af, problem, &labels)?;
                write_status_and_certificate(status, None)
            }
            Query::DC | Query::DS => {
                if labels.is_empty() {
                    return Err(anyhow!(
                        "missing argument on the command line (required for query {})",
                        problem.query.as_ref()
                    ));
                }
                if labels.len() > 1 {
                    warn!(
                        "only the first argument ({}) is considered for query {}",
                        labels[0],
                        problem.query.as_ref()
                    );
                }
                if arg_matches.is_present(ARG_WITH_CERTIFICATE) {
                    check_acceptance_with_certificate(&af, problem, &labels[0])
                } else {
                    let status = solvers::solve_decision_problem(&af, problem, &labels)?;
                    write_status_and_certificate(status, None)
                }
            }
        }
    }
}

fn split_labels(s: &str) -> Vec<String> {
    s.split(',')
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

fn compute_one_extension(af: &AAFramework<String>, semantics: Semantics) -> Result<()> {
    match semantics {
        Semantics::PR => write_one_extension(&mut PreferredSemanticsSolver::new(af)),
        Semantics::ST => write_one_extension(&mut StableSemanticsSolver::new(af)),
    }
}

fn write_one_extension(solver: &mut dyn SingleExtensionComputer<String>) -> Result<()> {
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    match solver.compute_one_extension() {
        Some(ext) => writer.write_single_extension(&mut out, &ext),
        None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
    }
}

fn check_acceptance_with_certificate(
    af: &AAFramework<String>,
    problem: Problem,
    label: &str,
) -> Result<()> {
    let arg = match af.argument_set().get_argument(&label.to_string()) {
        Ok(arg) => arg,
        Err(e) => {
            warn!("{}", e);
            return write_status_and_certificate(false, None);
        }
    };
    match (problem.query, problem.semantics) {
        (Query::DC, Semantics::PR) => {
            check_credulous_acceptance(&mut PreferredSemanticsSolver::new(af), arg)
        }
        (Query::DC, Semantics::ST) => {
            check_credulous_acceptance(&mut StableSemanticsSolver::new(af), arg)
        }
        (Query::DS, Semantics::PR) => {
            check_skeptical_acceptance(&mut PreferredSemanticsSolver::new(af), arg)
        }
        (Query::DS, Semantics::ST) => {
            check_skeptical_acceptance(&mut StableSemanticsSolver::new(af), arg)
        }
        _ => Err(anyhow!("{} is not an acceptance problem", problem)),
    }
}

fn check_credulous_acceptance(
    solver: &mut dyn CredulousAcceptanceComputer<String>,
    arg: &Argument<String>,
) -> Result<()> {
    let (status, certificate) = solver.is_credulously_accepted_with_certificate(arg);
    write_status_and_certificate(status, certificate)
}

fn check_skeptical_acceptance(
    solver: &mut dyn SkepticalAcceptanceComputer<String>,
    arg: &Argument<String>,
) -> Result<()> {
    let (status, certificate) = solver.is_skeptically_accepted_with_certificate(arg);
    write_status_and_certificate(status, certificate)
}

fn write_status_and_certificate(
    status: bool,
    certificate: Option<Vec<&Argument<String>>>,
) -> Result<()> {
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    ResponseWriter::<String>::write_acceptance_status(&writer, &mut out, status)?;
    if let Some(ext) = certificate {
        writer
            .write_single_extension(&mut out, &ext)
            .context("while writing the certificate")?;
    }
    Ok(())
}
