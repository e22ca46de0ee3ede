use crate::aa::{AAFramework, Argument, LabelType};

// Translates argument ids into references to the arguments of the framework.
pub(crate) fn ids_to_arguments<'a, T>(ids: &[usize], af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
where
    T: LabelType,
{
    ids.iter()
        .map(|id| af.argument_set().get_argument_by_id(*id))
        .collect()
}

// Sorted and deduplicated ids of a set of arguments.
pub(crate) fn arguments_to_ids<T>(arguments: &[&Argument<T>]) -> Vec<usize>
where
    T: LabelType,
{
    let mut ids = arguments.iter().map(|arg| arg.id()).collect::<Vec<usize>>();
    ids.sort_unstable();
    ids.dedup();
    ids
}

// Inserts an id in a sorted vector, if not already present.
pub(crate) fn insert_sorted(ids: &mut Vec<usize>, id: usize) {
    if let Err(pos) = ids.binary_search(&id) {
        ids.insert(pos, id);
    }
}

// Marks the arguments from which the given argument can be reached by following attacks, including itself.
pub(crate) fn ancestors<T>(id: usize, af: &AAFramework<T>) -> Vec<bool>
where
    T: LabelType,
{
    let mut reached = vec![false; af.n_arguments()];
    reached[id] = true;
    let mut to_process = vec![id];
    while let Some(current) = to_process.pop() {
        for attacker in af.attacker_ids(current) {
            if !reached[*attacker] {
                reached[*attacker] = true;
                to_process.push(*attacker);
            }
        }
    }
    reached
}
