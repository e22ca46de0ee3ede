use super::{warnings::Warned, InstanceReader, WarningHandler};
use crate::aa::AAFramework;
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^arg\(([^()]*)\)\.$").unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^att\(([^(),]*),([^()]*)\)\.$").unwrap();
    static ref NAME_PATTERN: Regex = Regex::new(r"^[_[:alnum:]]+$").unwrap();
}

const RESERVED_NAMES: [&str; 2] = ["arg", "att"];

enum Declaration {
    Argument(Warned<String>),
    Attack(Warned<(String, String)>),
}

fn read_name(raw: &str) -> Result<Warned<String>> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(anyhow!("empty argument name"));
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(anyhow!(r#"invalid argument name "{}""#, name));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(anyhow!(r#""{}" is a reserved word"#, name));
    }
    if name.len() == raw.len() {
        Ok(Warned::ok(name.to_string()))
    } else {
        Ok(Warned::with_warning(
            name.to_string(),
            "argument names beginning or ending by spaces may be ambiguous".to_string(),
        ))
    }
}

// Reads a trimmed line which is neither empty nor a comment.
fn read_declaration(line: &str) -> Result<Declaration> {
    if line.starts_with("arg(") {
        let captures = ARG_LINE_PATTERN
            .captures(line)
            .ok_or_else(|| anyhow!(r#"syntax error in argument declaration "{}""#, line))?;
        return Ok(Declaration::Argument(read_name(&captures[1])?));
    }
    if line.starts_with("att(") {
        let captures = ATT_LINE_PATTERN
            .captures(line)
            .ok_or_else(|| anyhow!(r#"syntax error in attack declaration "{}""#, line))?;
        let from = read_name(&captures[1]).context("in attack source")?;
        let to = read_name(&captures[2]).context("in attack target")?;
        return Ok(Declaration::Attack(from.zip(to)));
    }
    Err(anyhow!(
        r#"syntax error in line "{}"; expected an argument or an attack declaration"#,
        line
    ))
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// # a comment
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// Each line holds at most one declaration; blank lines and lines beginning with `#` are ignored.
/// Argument names are made of letters, digits and underscores, except `arg` and `att`.
/// An attack may only refer to arguments declared on previous lines.
/// Declaring an argument or an attack twice raises a warning, but is not an error.
/// A framework must have at least one argument.
///
/// # Example
///
/// ```
/// # use labtrack::aa::AAFramework;
/// # use labtrack::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::default();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let line_number = i + 1;
            let context = || format!("while reading line {}", line_number);
            let warn = |w: &str| {
                self.warning_handlers
                    .iter()
                    .for_each(|h| (h)(line_number, w.to_string()))
            };
            let line = line.with_context(context)?;
            let l = line.trim();
            if l.is_empty() || l.starts_with('#') {
                continue;
            }
            match read_declaration(l).with_context(context)? {
                Declaration::Argument(warned) => {
                    let label = warned.take(&warn);
                    if af.argument_set().contains(&label) {
                        warn(&format!("argument {} is declared more than once", label));
                    } else {
                        af.new_argument(label);
                    }
                }
                Declaration::Attack(warned) => {
                    let (from, to) = warned.take(&warn);
                    if !af.new_attack(&from, &to).with_context(context)? {
                        warn(&format!(
                            "attack from {} to {} is declared more than once",
                            from, to
                        ));
                    }
                }
            }
        }
        if af.n_arguments() == 0 {
            return Err(anyhow!("the framework has no argument"));
        }
        Ok(af)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
