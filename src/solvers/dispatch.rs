use super::{
    specs::{CredulousAcceptanceComputer, ExtensionVerifier, SkepticalAcceptanceComputer},
    PreferredSemanticsSolver, StableSemanticsSolver,
};
use crate::aa::{AAFramework, Argument, LabelType, Problem, Query, Semantics};
use anyhow::{anyhow, Result};

/// Solves one of the decision problems (verification, credulous and skeptical acceptance) on a framework.
///
/// For verification problems, the labels are the arguments of the candidate set (repetitions are ignored);
/// a label that does not belong to the framework makes the answer `false`.
/// For acceptance problems, the first label is the argument under consideration;
/// if this label is missing or does not belong to the framework, the answer is `false`.
///
/// An error is returned if the problem is not a decision problem.
///
/// # Example
///
/// ```
/// # use labtrack::aa::{AAFramework, ArgumentSet, Problem};
/// # use labtrack::solvers::solve_decision_problem;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let problem = Problem::try_from("DS-ST").unwrap();
/// assert!(solve_decision_problem(&af, problem, &["a"]).unwrap());
/// assert!(!solve_decision_problem(&af, problem, &["b"]).unwrap());
/// assert!(!solve_decision_problem(&af, problem, &["c"]).unwrap());
/// ```
pub fn solve_decision_problem<T>(af: &AAFramework<T>, problem: Problem, labels: &[T]) -> Result<bool>
where
    T: LabelType,
{
    log::debug!("solving {} with arguments {:?}", problem, labels);
    match problem.query {
        Query::SE => Err(anyhow!("{} is not a decision problem", problem)),
        Query::VE => {
            let arguments = match labels
                .iter()
                .map(|l| af.argument_set().get_argument(l))
                .collect::<Result<Vec<&Argument<T>>>>()
            {
                Ok(args) => args,
                Err(e) => {
                    log::info!("{}; the set is not an extension", e);
                    return Ok(false);
                }
            };
            Ok(match problem.semantics {
                Semantics::PR => PreferredSemanticsSolver::new(af).is_extension(&arguments),
                Semantics::ST => StableSemanticsSolver::new(af).is_extension(&arguments),
            })
        }
        Query::DC | Query::DS => {
            let arg = match labels.first().map(|l| af.argument_set().get_argument(l)) {
                Some(Ok(arg)) => arg,
                Some(Err(e)) => {
                    log::info!("{}; the argument is not accepted", e);
                    return Ok(false);
                }
                None => {
                    log::info!("no argument given; nothing is accepted");
                    return Ok(false);
                }
            };
            Ok(match (problem.query, problem.semantics) {
                (Query::DC, Semantics::PR) => {
                    PreferredSemanticsSolver::new(af).is_credulously_accepted(arg)
                }
                (Query::DC, Semantics::ST) => {
                    StableSemanticsSolver::new(af).is_credulously_accepted(arg)
                }
                (_, Semantics::PR) => PreferredSemanticsSolver::new(af).is_skeptically_accepted(arg),
                (_, Semantics::ST) => StableSemanticsSolver::new(af).is_skeptically_accepted(arg),
            })
        }
    }
}
