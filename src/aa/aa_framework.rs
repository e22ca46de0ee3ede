use super::{Argument, ArgumentSet, LabelType};
use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Arguments are handled by an [`ArgumentSet`], which gives them dense ids.
/// Attacks are stored in both directions, so that the arguments attacked by an argument
/// and the arguments attacking it can be listed in time linear in their count.
///
/// Frameworks are built once and then only read by the solvers.
/// No attack or argument can be removed, except by [`clear`](Self::clear)ing the whole framework.
#[derive(Debug, Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attack_index: HashSet<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use labtrack::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use labtrack::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.len()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attack_index: HashSet::new(),
            attacks_from,
            attacks_to,
        }
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// Returns `true` iff the argument was not already defined.
    pub fn new_argument(&mut self, label: T) -> bool {
        if self.arguments.new_argument(label) {
            self.attacks_from.push(Vec::new());
            self.attacks_to.push(Vec::new());
            true
        } else {
            false
        }
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// If the attack already exists, nothing is changed and `false` is returned.
    /// Else, the attack is added and `true` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use labtrack::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert!(framework.new_attack(&"a", &"b").unwrap());
    /// assert!(!framework.new_attack(&"a", &"b").unwrap());
    /// assert!(framework.new_attack(&"a", &"d").is_err());
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<bool> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        Ok(self.push_attack(attacker_id, attacked_id))
    }

    /// Adds a new attack given the IDs of the source and destination arguments.
    ///
    /// Same as [`new_attack`](Self::new_attack), but arguments are given by their ids.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<bool> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add an attack from identifiers {:?} to {:?}; the framework has {} argument(s)",
                from,
                to,
                n_arguments
            ));
        }
        Ok(self.push_attack(from, to))
    }

    fn push_attack(&mut self, from: usize, to: usize) -> bool {
        if !self.attack_index.insert((from, to)) {
            return false;
        }
        self.attacks.push((from, to));
        self.attacks_from[from].push(to);
        self.attacks_to[to].push(from);
        true
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks, in the order they were added.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Returns the ids of the arguments attacked by the argument with the given id.
    ///
    /// # Example
    ///
    /// ```
    /// # use labtrack::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"b").unwrap();
    /// framework.new_attack(&"a", &"c").unwrap();
    /// assert_eq!(&[1, 2], framework.attacked_ids(0));
    /// assert_eq!(&[0], framework.attacker_ids(2));
    /// ```
    pub fn attacked_ids(&self, attacker_id: usize) -> &[usize] {
        &self.attacks_from[attacker_id]
    }

    /// Returns the ids of the arguments attacking the argument with the given id.
    pub fn attacker_ids(&self, attacked_id: usize) -> &[usize] {
        &self.attacks_to[attacked_id]
    }

    /// Returns `true` iff the first argument attacks the second one.
    pub fn has_attack(&self, from: usize, to: usize) -> bool {
        self.attack_index.contains(&(from, to))
    }

    /// Returns `true` iff the argument attacks itself.
    pub fn is_self_attacking(&self, id: usize) -> bool {
        self.has_attack(id, id)
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Removes all the arguments and all the attacks of this framework.
    pub fn clear(&mut self) {
        self.arguments.clear();
        self.attacks.clear();
        self.attack_index.clear();
        self.attacks_from.clear();
        self.attacks_to.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_framework() -> (Vec<String>, AAFramework<String>) {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        (arg_labels, AAFramework::new_with_argument_set(args))
    }

    #[test]
    fn test_n_args() {
        let (_, af) = abc_framework();
        assert_eq!(3, af.n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let (arg_labels, mut af) = abc_framework();
        assert_eq!(0, af.n_attacks());
        assert!(af.new_attack(&arg_labels[0], &arg_labels[0]).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!((0, 0), af.attacks[0]);
        assert!(af.is_self_attacking(0));
        assert!(!af.is_self_attacking(1));
    }

    #[test]
    fn test_new_attack_twice() {
        let (arg_labels, mut af) = abc_framework();
        assert!(af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap());
        assert!(!af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap());
        assert!(!af.new_attack_by_ids(0, 1).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!(&[1], af.attacked_ids(0));
        assert_eq!(&[0], af.attacker_ids(1));
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&"d".to_string(), &arg_labels[0]).unwrap_err();
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[0], &"d".to_string()).unwrap_err();
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id() {
        let (_, mut af) = abc_framework();
        af.new_attack_by_ids(3, 0).unwrap_err();
        af.new_attack_by_ids(0, 3).unwrap_err();
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_adjacency_is_transposed() {
        let (_, mut af) = abc_framework();
        for (i, j) in [(0, 1), (1, 2), (2, 0), (0, 2), (2, 2)] {
            af.new_attack_by_ids(i, j).unwrap();
        }
        for i in 0..3 {
            for j in af.attacked_ids(i) {
                assert!(af.attacker_ids(*j).contains(&i));
            }
            for j in af.attacker_ids(i) {
                assert!(af.attacked_ids(*j).contains(&i));
                assert!(af.has_attack(*j, i));
            }
        }
        assert_eq!(5, af.iter_attacks().count());
    }

    #[test]
    fn test_new_argument() {
        let (_, mut af) = abc_framework();
        assert!(af.new_argument("d".to_string()));
        assert_eq!(4, af.n_arguments());
        assert!(!af.new_argument("d".to_string()));
        assert_eq!(4, af.n_arguments());
        assert!(af.new_attack_by_ids(3, 0).unwrap());
        assert_eq!(&[3], af.attacker_ids(0));
    }

    #[test]
    fn test_clear() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        af.clear();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_attacks());
        assert!(af.new_argument("b".to_string()));
        assert!(af.new_argument("a".to_string()));
        assert!(af.new_attack_by_ids(0, 1).unwrap());
        assert!(!af.has_attack(1, 0));
    }
}
