use crate::aa::{AAFramework, LabelType};

/// The label given to an argument during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The argument is in the set under construction.
    In,
    /// The argument is not in the set under construction.
    Out,
    /// No decision has been made for this argument yet.
    Undec,
}

/// A labelling of the arguments of a framework, with an undo trail.
///
/// Each change of a label is recorded in the trail.
/// A [`checkpoint`](Self::checkpoint) marks the current position in the trail,
/// and a [`rollback`](Self::rollback) restores the labels changed since a checkpoint.
/// Restoring costs a time linear in the number of changes, not in the number of arguments.
///
/// # Example
///
/// ```
/// # use labtrack::solvers::{Label, Labelling};
/// let mut labelling = Labelling::new(3);
/// labelling.set(0, Label::In);
/// let cp = labelling.checkpoint();
/// labelling.set(1, Label::Out);
/// labelling.set(2, Label::In);
/// labelling.rollback(cp);
/// assert_eq!(Label::In, labelling.get(0));
/// assert_eq!(Label::Undec, labelling.get(1));
/// assert_eq!(vec![0], labelling.in_arguments());
/// ```
#[derive(Debug, Clone)]
pub struct Labelling {
    labels: Vec<Label>,
    trail: Vec<(usize, Label)>,
}

impl Labelling {
    /// Builds a labelling of `n` arguments, all undecided.
    pub fn new(n: usize) -> Self {
        Self {
            labels: vec![Label::Undec; n],
            trail: vec![],
        }
    }

    /// Returns the number of labelled arguments.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` iff the labelling has no arguments.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label of an argument.
    pub fn get(&self, id: usize) -> Label {
        self.labels[id]
    }

    /// Sets the label of an argument.
    pub fn set(&mut self, id: usize, label: Label) {
        let old = self.labels[id];
        if old != label {
            self.trail.push((id, old));
            self.labels[id] = label;
        }
    }

    /// Returns a checkpoint to give to [`rollback`](Self::rollback).
    pub fn checkpoint(&self) -> usize {
        self.trail.len()
    }

    /// Restores the labels as they were when the checkpoint was taken.
    pub fn rollback(&mut self, checkpoint: usize) {
        for (id, old) in self.trail.drain(checkpoint..).rev() {
            self.labels[id] = old;
        }
    }

    /// Labels an argument IN and labels OUT all the arguments it attacks.
    ///
    /// Returns `false` if the argument is attacked by an IN argument,
    /// or if an attacked argument is already IN (including the argument itself in case of a self-attack).
    /// In this case the labelling may be partially updated; the caller is expected to roll it back.
    pub fn set_in_and_propagate<T>(&mut self, id: usize, af: &AAFramework<T>) -> bool
    where
        T: LabelType,
    {
        if self.has_in_attacker(id, af) {
            return false;
        }
        self.set(id, Label::In);
        for attacked in af.attacked_ids(id) {
            if self.labels[*attacked] == Label::In {
                return false;
            }
            self.set(*attacked, Label::Out);
        }
        true
    }

    /// Returns `true` iff at least one attacker of the argument is IN.
    pub fn has_in_attacker<T>(&self, id: usize, af: &AAFramework<T>) -> bool
    where
        T: LabelType,
    {
        af.attacker_ids(id)
            .iter()
            .any(|attacker| self.labels[*attacker] == Label::In)
    }

    /// Returns the ids of the IN arguments, in increasing order.
    pub fn in_arguments(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| if *l == Label::In { Some(i) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    #[test]
    fn test_rollback_only_restores_newer_changes() {
        let mut labelling = Labelling::new(4);
        labelling.set(0, Label::In);
        let cp0 = labelling.checkpoint();
        labelling.set(1, Label::Out);
        let cp1 = labelling.checkpoint();
        labelling.set(1, Label::In);
        labelling.set(3, Label::Out);
        labelling.rollback(cp1);
        assert_eq!(Label::Out, labelling.get(1));
        assert_eq!(Label::Undec, labelling.get(3));
        labelling.rollback(cp0);
        assert_eq!(Label::Undec, labelling.get(1));
        assert_eq!(Label::In, labelling.get(0));
    }

    #[test]
    fn test_setting_same_label_is_not_recorded() {
        let mut labelling = Labelling::new(2);
        labelling.set(0, Label::Undec);
        assert_eq!(0, labelling.checkpoint());
    }

    #[test]
    fn test_propagation() {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[
            "a", "b", "c",
        ]));
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"a", &"c").unwrap();
        let mut labelling = Labelling::new(3);
        assert!(labelling.set_in_and_propagate(0, &af));
        assert_eq!(Label::Out, labelling.get(1));
        assert_eq!(Label::Out, labelling.get(2));
        assert!(labelling.has_in_attacker(1, &af));
        assert!(!labelling.has_in_attacker(0, &af));
    }

    #[test]
    fn test_propagation_conflict() {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[
            "a", "b",
        ]));
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"b").unwrap();
        let mut labelling = Labelling::new(2);
        labelling.set(1, Label::In);
        let cp = labelling.checkpoint();
        assert!(!labelling.set_in_and_propagate(0, &af));
        labelling.rollback(cp);
        assert_eq!(Label::Undec, labelling.get(0));
        let mut labelling = Labelling::new(2);
        assert!(!labelling.set_in_and_propagate(1, &af));
    }
}
