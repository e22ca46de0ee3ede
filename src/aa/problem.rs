use anyhow::{anyhow, Context, Result};
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "pr" => Ok(Semantics::PR),
            "st" => Ok(Semantics::ST),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Check whether a set of arguments is an extension
    VE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns `true` iff this query is one of the decision problems (verification or acceptance).
    pub fn is_decision_problem(&self) -> bool {
        !matches!(self, Query::SE)
    }

    /// Returns `true` iff this query checks the acceptance status of a single argument.
    pub fn is_acceptance_query(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "se" => Ok(Query::SE),
            "ve" => Ok(Query::VE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// A problem, made of a query and a semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    /// The query
    pub query: Query,
    /// The semantics
    pub semantics: Semantics,
}

impl Problem {
    /// Builds a new problem.
    pub fn new(query: Query, semantics: Semantics) -> Self {
        Self { query, semantics }
    }

    /// Returns an iterator over all the problems handled by this crate.
    pub fn iter() -> impl Iterator<Item = Problem> {
        Query::iter().flat_map(|q| Semantics::iter().map(move |s| Problem::new(q, s)))
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.query.as_ref(), self.semantics.as_ref())
    }
}

impl TryFrom<&str> for Problem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        read_problem_string(value).map(|(q, s)| Problem::new(q, s))
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
/// In case there is more then one, then all the hyphens except the first are considered as part of the semantics.
///
/// # Example
///
/// ```
/// # use labtrack::aa::{read_problem_string, Query, Semantics};
/// assert_eq!((Query::VE, Semantics::PR), read_problem_string("VE-PR").unwrap());
/// assert!(read_problem_string("VE-GR").is_err());
/// ```
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

/// Iterates over the strings of the problems handled by this crate.
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Problem::iter().map(|p| p.to_string())
}
