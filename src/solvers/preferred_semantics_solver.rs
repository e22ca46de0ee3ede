use super::{
    labelling::Label,
    search,
    specs::{
        CredulousAcceptanceComputer, ExtensionVerifier, SingleExtensionComputer,
        SkepticalAcceptanceComputer,
    },
    utils,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    sets,
};

/// A labelling-based solver for the preferred semantics.
///
/// The solver relies on the admissible-completion search, which decides whether a set of arguments
/// is included in an admissible set (and thus in a preferred extension).
/// Maximality checks and skeptical acceptance are expressed in terms of this search.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    // Grows an admissible set into a preferred extension.
    //
    // Each outside argument is considered once: if it failed to join some admissible superset of the current set,
    // it cannot join an admissible superset of a larger set.
    fn maximize(&self, mut set: Vec<usize>) -> Vec<usize> {
        for candidate in 0..self.af.n_arguments() {
            if set.binary_search(&candidate).is_ok() {
                continue;
            }
            let mut extended = set.clone();
            utils::insert_sorted(&mut extended, candidate);
            if let Some(superset) = search::admissible_superset(&extended, self.af) {
                set = superset;
            }
        }
        set
    }

    // Checks that no admissible set includes the set and the argument.
    //
    // When the set is admissible and does not contain the argument,
    // this means the preferred extensions including the set do not contain the argument.
    fn excludes(&self, set: &[usize], arg_id: usize) -> bool {
        let mut extended = set.to_vec();
        utils::insert_sorted(&mut extended, arg_id);
        search::admissible_superset(&extended, self.af).is_none()
    }

    // Returns an admissible set such that no preferred extension including it contains the argument.
    //
    // Only the ancestors of the argument are considered while looking for such a set:
    // the preferred extensions restricted to them are the preferred extensions of the sub-framework they induce.
    fn find_counter_example(&self, arg_id: usize) -> Option<Vec<usize>> {
        let grounded = sets::grounded_extension(self.af);
        if search::admissible_superset(&[arg_id], self.af).is_none() {
            log::debug!("argument {} is not credulously accepted", self.label(arg_id));
            return Some(grounded);
        }
        if grounded.binary_search(&arg_id).is_ok() {
            log::debug!("argument {} belongs to the grounded extension", self.label(arg_id));
            return None;
        }
        let ancestors = utils::ancestors(arg_id, self.af);
        self.find_counter_example_from_seeds(arg_id, &ancestors)
            .or_else(|| self.find_counter_example_exhaustively(arg_id, &ancestors, &grounded))
    }

    fn label(&self, id: usize) -> &T {
        self.af.argument_set().get_argument_by_id(id).label()
    }

    fn find_counter_example_from_seeds(&self, arg_id: usize, ancestors: &[bool]) -> Option<Vec<usize>> {
        let seeds = std::iter::once(vec![]).chain(
            (0..self.af.n_arguments())
                .filter(|s| *s != arg_id && ancestors[*s])
                .map(|s| vec![s]),
        );
        for seed in seeds {
            let mut set = match search::admissible_superset(&seed, self.af) {
                Some(s) => s,
                None => continue,
            };
            sets::extend_to_maximal(&mut set, self.af);
            if set.binary_search(&arg_id).is_err() && self.excludes(&set, arg_id) {
                log::debug!("counter-example found from seed {:?}", seed);
                return Some(set);
            }
        }
        None
    }

    // Enumerates the admissible sets of ancestors including the grounded ones and excluding the argument.
    //
    // Sets that can be extended by a single ancestor are skipped, since the extended set is enumerated too.
    fn find_counter_example_exhaustively(
        &self,
        arg_id: usize,
        ancestors: &[bool],
        grounded: &[usize],
    ) -> Option<Vec<usize>> {
        let grounded_ancestors = grounded
            .iter()
            .copied()
            .filter(|id| ancestors[*id])
            .collect::<Vec<usize>>();
        let mut labelling = search::labelling_with_in_arguments(&grounded_ancestors, self.af)?;
        (0..self.af.n_arguments())
            .filter(|id| *id == arg_id || !ancestors[*id])
            .for_each(|id| labelling.set(id, Label::Out));
        let mut counter_example = None;
        search::find_defensible_assignment(&mut labelling, self.af, &mut |set| {
            let saturated = (0..self.af.n_arguments())
                .filter(|b| *b != arg_id && ancestors[*b])
                .all(|b| !sets::is_extensible_with(set, b, self.af));
            if saturated && self.excludes(set, arg_id) {
                counter_example = Some(set.to_vec());
                true
            } else {
                false
            }
        });
        counter_example
    }
}

impl<T> ExtensionVerifier<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_extension(&mut self, arguments: &[&Argument<T>]) -> bool {
        let ids = utils::arguments_to_ids(arguments);
        if !sets::is_admissible(&ids, self.af) {
            return false;
        }
        (0..self.af.n_arguments())
            .filter(|id| ids.binary_search(id).is_err())
            .all(|candidate| {
                if sets::is_extensible_with(&ids, candidate, self.af) {
                    return false;
                }
                let mut extended = ids.clone();
                utils::insert_sorted(&mut extended, candidate);
                search::admissible_superset(&extended, self.af).is_none()
            })
    }
}

impl<T> SingleExtensionComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        let ext = self.maximize(sets::grounded_extension(self.af));
        Some(utils::ids_to_arguments(&ext, self.af))
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        search::admissible_superset(&[arg.id()], self.af).is_some()
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match search::admissible_superset(&[arg.id()], self.af) {
            Some(admissible) => (
                true,
                Some(utils::ids_to_arguments(
                    &self.maximize(admissible),
                    self.af,
                )),
            ),
            None => (false, None),
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.find_counter_example(arg.id()).is_none()
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match self.find_counter_example(arg.id()) {
            Some(set) => (
                false,
                Some(utils::ids_to_arguments(&self.maximize(set), self.af)),
            ),
            None => (true, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    fn arg<'a>(af: &'a AAFramework<String>, label: &str) -> &'a Argument<String> {
        af.argument_set().get_argument(&label.to_string()).unwrap()
    }

    fn labels(ext: &[&Argument<String>]) -> Vec<String> {
        ext.iter().map(|a| a.label().to_string()).collect()
    }

    const TWO_PREFERRED_EXTENSIONS: &str = r#"
        arg(a).
        arg(b).
        arg(c).
        arg(x).
        att(b,a).
        att(c,b).
        att(x,c).
        att(a,x).
    "#;

    #[test]
    fn test_compute_one() {
        let af = read_af(
            r#"
            arg(a0).
            arg(a1).
            arg(a2).
            att(a0,a1).
            att(a1,a0).
            att(a1,a2).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert_eq!(
            vec!["a0", "a2"],
            labels(&solver.compute_one_extension().unwrap())
        );
    }

    #[test]
    fn test_compute_one_needs_joint_insertions() {
        let af = read_af(TWO_PREFERRED_EXTENSIONS);
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert_eq!(vec!["a", "c"], labels(&solver.compute_one_extension().unwrap()));
    }

    #[test]
    fn test_compute_one_odd_cycle() {
        let af = read_af(
            r#"
            arg(a0).
            arg(a1).
            arg(a2).
            att(a0,a1).
            att(a1,a2).
            att(a2,a0).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().unwrap().is_empty());
    }

    #[test]
    fn test_verification() {
        let af = read_af(
            r#"
            arg(a).
            arg(b).
            att(a,b).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.is_extension(&[arg(&af, "a")]));
        assert!(!solver.is_extension(&[]));
        assert!(!solver.is_extension(&[arg(&af, "b")]));
        assert!(!solver.is_extension(&[arg(&af, "a"), arg(&af, "b")]));
    }

    #[test]
    fn test_verification_detects_joint_insertions() {
        let af = read_af(TWO_PREFERRED_EXTENSIONS);
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(!solver.is_extension(&[]));
        assert!(solver.is_extension(&[arg(&af, "a"), arg(&af, "c")]));
        assert!(solver.is_extension(&[arg(&af, "x"), arg(&af, "b")]));
        assert!(!solver.is_extension(&[arg(&af, "a")]));
    }

    #[test]
    fn test_verification_self_attack() {
        let af = read_af(
            r#"
            arg(a).
            att(a,a).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(!solver.is_extension(&[arg(&af, "a")]));
        assert!(solver.is_extension(&[]));
        assert!(!solver.is_credulously_accepted(arg(&af, "a")));
        assert!(!solver.is_skeptically_accepted(arg(&af, "a")));
    }

    #[test]
    fn test_acceptance_two_extensions() {
        let af = read_af(TWO_PREFERRED_EXTENSIONS);
        let mut solver = PreferredSemanticsSolver::new(&af);
        for label in ["a", "b", "c", "x"] {
            assert!(solver.is_credulously_accepted(arg(&af, label)));
            assert!(!solver.is_skeptically_accepted(arg(&af, label)));
        }
    }

    #[test]
    fn test_skeptical_acceptance_outside_grounded() {
        let af = read_af(
            r#"
            arg(a).
            arg(b).
            arg(c).
            arg(d).
            att(a,b).
            att(b,a).
            att(a,c).
            att(b,c).
            att(c,d).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(sets::grounded_extension(&af).is_empty());
        assert!(solver.is_skeptically_accepted(arg(&af, "d")));
        assert!(!solver.is_skeptically_accepted(arg(&af, "a")));
        assert!(!solver.is_credulously_accepted(arg(&af, "c")));
        assert!(!solver.is_skeptically_accepted(arg(&af, "c")));
    }

    #[test]
    fn test_skeptical_acceptance_grounded() {
        let af = read_af(
            r#"
            arg(a).
            arg(b).
            arg(c).
            att(a,b).
            att(b,c).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.is_skeptically_accepted(arg(&af, "a")));
        assert!(solver.is_skeptically_accepted(arg(&af, "c")));
        assert!(!solver.is_skeptically_accepted(arg(&af, "b")));
    }

    #[test]
    fn test_exhaustive_counter_example_search() {
        let af = read_af(TWO_PREFERRED_EXTENSIONS);
        let solver = PreferredSemanticsSolver::new(&af);
        assert_eq!(Some(vec![1, 3]), solver.find_counter_example_exhaustively(0, &utils::ancestors(0, &af), &[]));
        let af = read_af(
            r#"
            arg(a).
            arg(b).
            arg(c).
            att(a,b).
            att(b,c).
            "#,
        );
        let solver = PreferredSemanticsSolver::new(&af);
        assert_eq!(None, solver.find_counter_example_exhaustively(2, &utils::ancestors(2, &af), &[]));
    }

    #[test]
    fn test_certificates() {
        let af = read_af(TWO_PREFERRED_EXTENSIONS);
        let mut solver = PreferredSemanticsSolver::new(&af);
        let (accepted, certificate) =
            solver.is_credulously_accepted_with_certificate(arg(&af, "c"));
        assert!(accepted);
        assert_eq!(vec!["a", "c"], labels(&certificate.unwrap()));
        let (accepted, certificate) =
            solver.is_skeptically_accepted_with_certificate(arg(&af, "a"));
        assert!(!accepted);
        assert_eq!(vec!["b", "x"], labels(&certificate.unwrap()));
    }

    #[test]
    fn test_certificate_when_not_credulously_accepted() {
        let af = read_af(
            r#"
            arg(a).
            arg(b).
            att(a,b).
            "#,
        );
        let mut solver = PreferredSemanticsSolver::new(&af);
        let (accepted, certificate) =
            solver.is_skeptically_accepted_with_certificate(arg(&af, "b"));
        assert!(!accepted);
        assert_eq!(vec!["a"], labels(&certificate.unwrap()));
        assert_eq!(
            (false, None),
            solver.is_credulously_accepted_with_certificate(arg(&af, "b"))
        );
    }

    fn framework_with_extra_arguments(extra: &str) -> AAFramework<String> {
        let instance = format!(
            r#"
            arg(a).
            arg(b).
            arg(c).
            arg(d).
            att(a,b).
            att(b,a).
            att(a,c).
            att(b,c).
            att(c,d).
            {}
            "#,
            extra
        );
        read_af(&instance)
    }

    #[test]
    fn test_skeptical_acceptance_with_many_unrelated_extensions() {
        let pairs = (0..40)
            .map(|i| format!("arg(p{i}).\narg(q{i}).\natt(p{i},q{i}).\natt(q{i},p{i}).\n", i = i))
            .collect::<String>();
        let af = framework_with_extra_arguments(&pairs);
        assert_eq!(84, af.n_arguments());
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.is_skeptically_accepted(arg(&af, "d")));
        assert_eq!(
            (true, None),
            solver.is_skeptically_accepted_with_certificate(arg(&af, "d"))
        );
        assert!(!solver.is_skeptically_accepted(arg(&af, "p0")));
        assert!(solver.is_credulously_accepted(arg(&af, "p0")));
    }

    #[test]
    fn test_skeptical_acceptance_with_many_defeated_attackers() {
        let attackers = (0..40)
            .map(|i| format!("arg(w{i}).\narg(u{i}).\natt(w{i},u{i}).\natt(u{i},c).\natt(u{i},a).\n", i = i))
            .collect::<String>();
        let af = framework_with_extra_arguments(&attackers);
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(solver.is_skeptically_accepted(arg(&af, "d")));
        assert!(solver.is_skeptically_accepted(arg(&af, "w0")));
        assert!(!solver.is_skeptically_accepted(arg(&af, "u0")));
        assert!(!solver.is_skeptically_accepted(arg(&af, "a")));
    }
}
