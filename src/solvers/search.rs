use super::labelling::{Label, Labelling};
use crate::{
    aa::{AAFramework, LabelType},
    sets,
};

/// Builds a labelling in which the given arguments are IN and the arguments they attack are OUT.
///
/// Returns `None` if the given arguments are in conflict.
pub(crate) fn labelling_with_in_arguments<T>(ids: &[usize], af: &AAFramework<T>) -> Option<Labelling>
where
    T: LabelType,
{
    let mut labelling = Labelling::new(af.n_arguments());
    if ids.iter().all(|id| labelling.set_in_and_propagate(*id, af)) {
        Some(labelling)
    } else {
        None
    }
}

/// Searches for a conflict-free set compatible with the labelling and accepted by the provided function.
///
/// Arguments are processed in increasing order of their ids.
/// For each undecided argument, the search first tries to label it IN (if no attacker is IN),
/// propagating OUT labels to the arguments it attacks; then it tries to label it OUT.
/// When all the arguments are decided, the IN arguments are given to the acceptance function.
///
/// In case of success, the labelling is left in the state that was accepted.
/// Otherwise, it is restored to its initial state.
pub(crate) fn find_conflict_free_assignment<T, F>(
    labelling: &mut Labelling,
    af: &AAFramework<T>,
    accept: &mut F,
) -> bool
where
    T: LabelType,
    F: FnMut(&[usize]) -> bool,
{
    search(labelling, af, accept, |_| true)
}

/// Same as [`find_conflict_free_assignment`], but only explores the labellings in which each attacker
/// of an IN argument is attacked by an argument that is IN or undecided.
///
/// Each set given to the acceptance function is admissible.
pub(crate) fn find_defensible_assignment<T, F>(
    labelling: &mut Labelling,
    af: &AAFramework<T>,
    accept: &mut F,
) -> bool
where
    T: LabelType,
    F: FnMut(&[usize]) -> bool,
{
    search(labelling, af, accept, |l| is_defensible(l, af))
}

fn is_defensible<T>(labelling: &Labelling, af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    (0..labelling.len())
        .filter(|id| labelling.get(*id) == Label::In)
        .all(|id| {
            af.attacker_ids(id).iter().all(|attacker| {
                af.attacker_ids(*attacker)
                    .iter()
                    .any(|defender| labelling.get(*defender) != Label::Out)
            })
        })
}

struct Decision {
    index: usize,
    checkpoint: usize,
    tried_in: bool,
}

fn search<T, F, K>(labelling: &mut Labelling, af: &AAFramework<T>, accept: &mut F, keep_branch: K) -> bool
where
    T: LabelType,
    F: FnMut(&[usize]) -> bool,
    K: Fn(&Labelling) -> bool,
{
    let initial = labelling.checkpoint();
    let mut decisions: Vec<Decision> = vec![];
    let mut index = 0;
    let mut forward = true;
    loop {
        if forward {
            if index == labelling.len() {
                if accept(&labelling.in_arguments()) {
                    return true;
                }
                forward = false;
                continue;
            }
            match labelling.get(index) {
                Label::In => forward = !labelling.has_in_attacker(index, af),
                Label::Out => {}
                Label::Undec => {
                    let checkpoint = labelling.checkpoint();
                    let tried_in = !labelling.has_in_attacker(index, af);
                    decisions.push(Decision {
                        index,
                        checkpoint,
                        tried_in,
                    });
                    forward = if tried_in {
                        labelling.set_in_and_propagate(index, af) && keep_branch(labelling)
                    } else {
                        labelling.set(index, Label::Out);
                        keep_branch(labelling)
                    };
                }
            }
            index += 1;
        } else {
            let decision = match decisions.pop() {
                Some(d) => d,
                None => {
                    labelling.rollback(initial);
                    return false;
                }
            };
            labelling.rollback(decision.checkpoint);
            if decision.tried_in {
                decisions.push(Decision {
                    index: decision.index,
                    checkpoint: decision.checkpoint,
                    tried_in: false,
                });
                labelling.set(decision.index, Label::Out);
                if keep_branch(labelling) {
                    index = decision.index + 1;
                    forward = true;
                }
            }
        }
    }
}

/// Searches for a stable extension compatible with the labelling.
///
/// OUT labels only mean the argument is not chosen, so the final set is checked to attack all the arguments outside it.
pub(crate) fn find_stable_assignment<T>(labelling: &mut Labelling, af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    find_conflict_free_assignment(labelling, af, &mut |set| {
        sets::attacks_all_outside(set, af)
    })
}

// Returns the first attacker of the argument which is neither OUT nor IN.
fn undefended_attacker<T>(id: usize, labelling: &Labelling, af: &AAFramework<T>) -> Option<usize>
where
    T: LabelType,
{
    af.attacker_ids(id)
        .iter()
        .find(|attacker| labelling.get(**attacker) == Label::Undec)
        .copied()
}

struct DefenseFrame {
    attacker: usize,
    next_defender: usize,
    checkpoint: usize,
    n_pending: usize,
    cursor: usize,
}

/// Searches for an admissible set including the IN arguments of the labelling.
///
/// The labelling must be such that OUT arguments are exactly the ones attacked by an IN argument,
/// as produced by [`labelling_with_in_arguments`].
///
/// IN arguments are checked in the order they became IN, the initial ones first in increasing order of ids.
/// While an IN argument has an attacker which is not OUT, the attackers of this attacker are tried as defenders, in framework order.
/// Defenders that are OUT or self-attacking are skipped.
///
/// In case of success, the IN arguments of the labelling form an admissible set.
/// Otherwise, the labelling is restored to its initial state.
pub(crate) fn find_admissible_assignment<T>(labelling: &mut Labelling, af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    let mut pending = labelling.in_arguments();
    if pending
        .iter()
        .any(|id| labelling.has_in_attacker(*id, af))
    {
        return false;
    }
    let mut cursor = 0;
    let mut frames: Vec<DefenseFrame> = vec![];
    loop {
        let attacker = loop {
            match pending.get(cursor) {
                None => return true,
                Some(id) => match undefended_attacker(*id, labelling, af) {
                    Some(attacker) => break attacker,
                    None => cursor += 1,
                },
            }
        };
        frames.push(DefenseFrame {
            attacker,
            next_defender: 0,
            checkpoint: labelling.checkpoint(),
            n_pending: pending.len(),
            cursor,
        });
        loop {
            let frame = match frames.last_mut() {
                Some(f) => f,
                None => return false,
            };
            labelling.rollback(frame.checkpoint);
            pending.truncate(frame.n_pending);
            cursor = frame.cursor;
            let defenders = af.attacker_ids(frame.attacker);
            let mut defended = false;
            while frame.next_defender < defenders.len() {
                let defender = defenders[frame.next_defender];
                frame.next_defender += 1;
                if labelling.get(defender) == Label::Out || af.is_self_attacking(defender) {
                    continue;
                }
                if labelling.set_in_and_propagate(defender, af) {
                    pending.push(defender);
                    defended = true;
                    break;
                }
                labelling.rollback(frame.checkpoint);
            }
            if defended {
                break;
            }
            frames.pop();
        }
    }
}

/// Returns an admissible set including the given arguments, if such a set exists.
pub(crate) fn admissible_superset<T>(ids: &[usize], af: &AAFramework<T>) -> Option<Vec<usize>>
where
    T: LabelType,
{
    let mut labelling = labelling_with_in_arguments(ids, af)?;
    if find_admissible_assignment(&mut labelling, af) {
        Some(labelling.in_arguments())
    } else {
        None
    }
}
