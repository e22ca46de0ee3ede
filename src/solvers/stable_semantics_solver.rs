use super::{
    labelling::{Label, Labelling},
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

/// A labelling-based solver for the stable semantics.
///
/// Every query runs the stable search: arguments are labelled in increasing order of their ids,
/// and the sets of IN arguments reaching the end of the search are checked to attack all the other arguments.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    fn search_from(&self, mut labelling: Labelling) -> Option<Vec<&'a Argument<T>>> {
        if search::find_stable_assignment(&mut labelling, self.af) {
            Some(utils::ids_to_arguments(
                &labelling.in_arguments(),
                self.af,
            ))
        } else {
            None
        }
    }
}

impl<T> ExtensionVerifier<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_extension(&mut self, arguments: &[&Argument<T>]) -> bool {
        let ids = utils::arguments_to_ids(arguments);
        sets::is_conflict_free(&ids, self.af) && sets::attacks_all_outside(&ids, self.af)
    }
}

impl<T> SingleExtensionComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        self.search_from(Labelling::new(self.af.n_arguments()))
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let labelling = match search::labelling_with_in_arguments(&[arg.id()], self.af) {
            Some(l) => l,
            None => {
                log::debug!("argument {} is self-attacking", arg);
                return (false, None);
            }
        };
        match self.search_from(labelling) {
            Some(ext) => (true, Some(ext)),
            None => (false, None),
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        if sets::grounded_extension(self.af)
            .binary_search(&arg.id())
            .is_ok()
        {
            log::debug!("argument {} belongs to the grounded extension", arg);
            return (true, None);
        }
        let mut labelling = Labelling::new(self.af.n_arguments());
        labelling.set(arg.id(), Label::Out);
        match self.search_from(labelling) {
            Some(ext) => (false, Some(ext)),
            None => (true, None),
        }
    }
}
