use crate::aa::{AAFramework, LabelType};

/// Builds a membership vector for a set of argument ids.
pub(crate) fn membership<T>(set: &[usize], af: &AAFramework<T>) -> Vec<bool>
where
    T: LabelType,
{
    let mut in_set = vec![false; af.n_arguments()];
    set.iter().for_each(|id| in_set[*id] = true);
    in_set
}

/// Returns `true` iff no argument of the set attacks an argument of the set.
///
/// The check follows the attacks of the members, so it runs in time linear in the number of these attacks.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
///
/// # Example
///
/// ```
/// # use labtrack::aa::{AAFramework, ArgumentSet};
/// # use labtrack::sets;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
/// af.new_attack(&"a", &"b").unwrap();
/// assert!(sets::is_conflict_free(&[0, 2], &af));
/// assert!(!sets::is_conflict_free(&[0, 1], &af));
/// ```
pub fn is_conflict_free<T>(set: &[usize], af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    let in_set = membership(set, af);
    is_conflict_free_with_membership(set, af, &in_set)
}

fn is_conflict_free_with_membership<T>(set: &[usize], af: &AAFramework<T>, in_set: &[bool]) -> bool
where
    T: LabelType,
{
    set.iter()
        .all(|id| af.attacked_ids(*id).iter().all(|attacked| !in_set[*attacked]))
}

/// Returns `true` iff each attacker of the target argument is attacked by an argument of the set.
///
/// An argument with no attacker is defended by any set, including the empty one.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
pub fn defends<T>(set: &[usize], target: usize, af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    let in_set = membership(set, af);
    defends_with_membership(target, af, &in_set)
}

fn defends_with_membership<T>(target: usize, af: &AAFramework<T>, in_set: &[bool]) -> bool
where
    T: LabelType,
{
    af.attacker_ids(target).iter().all(|attacker| {
        af.attacker_ids(*attacker)
            .iter()
            .any(|defender| in_set[*defender])
    })
}

/// Returns `true` iff the set is conflict-free and defends each of its members.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
///
/// # Example
///
/// ```
/// # use labtrack::aa::{AAFramework, ArgumentSet};
/// # use labtrack::sets;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// assert!(sets::is_admissible(&[0], &af));
/// assert!(!sets::is_admissible(&[1], &af));
/// assert!(sets::is_admissible(&[], &af));
/// ```
pub fn is_admissible<T>(set: &[usize], af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    let in_set = membership(set, af);
    is_conflict_free_with_membership(set, af, &in_set)
        && set
            .iter()
            .all(|id| defends_with_membership(*id, af, &in_set))
}

/// Returns `true` iff each argument outside the set is attacked by a member of the set.
///
/// Together with conflict-freeness, this property characterizes the stable extensions.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
pub fn attacks_all_outside<T>(set: &[usize], af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    let in_set = membership(set, af);
    let mut attacked = in_set.clone();
    set.iter()
        .for_each(|id| af.attacked_ids(*id).iter().for_each(|a| attacked[*a] = true));
    attacked.iter().all(|b| *b)
}

/// Computes the characteristic function of the framework applied to a set: the ids of all the arguments it defends.
///
/// The returned ids are sorted in increasing order.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
///
/// # Example
///
/// ```
/// # use labtrack::aa::{AAFramework, ArgumentSet};
/// # use labtrack::sets;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
/// af.new_attack(&"a", &"b").unwrap();
/// af.new_attack(&"b", &"c").unwrap();
/// assert_eq!(vec![0], sets::characteristic_function(&[], &af));
/// assert_eq!(vec![0, 2], sets::characteristic_function(&[0], &af));
/// ```
pub fn characteristic_function<T>(set: &[usize], af: &AAFramework<T>) -> Vec<usize>
where
    T: LabelType,
{
    let in_set = membership(set, af);
    (0..af.n_arguments())
        .filter(|id| defends_with_membership(*id, af, &in_set))
        .collect()
}

/// Returns `true` iff the candidate is not in the set and adding it to the set results in an admissible set.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
pub fn is_extensible_with<T>(set: &[usize], candidate: usize, af: &AAFramework<T>) -> bool
where
    T: LabelType,
{
    if set.contains(&candidate) {
        return false;
    }
    let mut extended = Vec::with_capacity(set.len() + 1);
    extended.extend_from_slice(set);
    extended.push(candidate);
    is_admissible(&extended, af)
}

/// Grows a set by trying to insert each argument in increasing order of ids.
///
/// An argument is inserted if the set stays admissible.
/// The set is kept sorted.
///
/// The result cannot be extended by a single argument, but it may still be extended by several arguments at once.
///
/// # Panics
///
/// Panics if an id is not lower than the number of arguments of the framework.
pub fn extend_to_maximal<T>(set: &mut Vec<usize>, af: &AAFramework<T>)
where
    T: LabelType,
{
    for candidate in 0..af.n_arguments() {
        if is_extensible_with(set, candidate, af) {
            let pos = set.partition_point(|id| *id < candidate);
            set.insert(pos, candidate);
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

    #[test]
    fn test_conflict_freeness() {
        let af = read_af(
            r#"
            arg(a0).
            arg(a1).
            arg(a2).
            att(a0,a1).
            att(a2,a2).
            "#,
        );
        assert!(is_conflict_free(&[], &af));
        assert!(is_conflict_free(&[0], &af));
        assert!(is_conflict_free(&[1], &af));
        assert!(!is_conflict_free(&[0, 1], &af));
        assert!(!is_conflict_free(&[2], &af));
    }

    #[test]
    #[should_panic]
    fn test_conflict_freeness_unknown_id() {
        let af = read_af("arg(a0).");
        is_conflict_free(&[1], &af);
    }

    #[test]
    #[should_panic]
    fn test_defense_unknown_target() {
        let af = read_af("arg(a0).");
        defends(&[0], 1, &af);
    }

    #[test]
    fn test_defense() {
        let af = read_af(
            r#"
            arg(a0).
            arg(a1).
            arg(a2).
            att(a0,a1).
            att(a1,a2).
            "#,
        );
        assert!(defends(&[], 0, &af));
        assert!(!defends(&[], 2, &af));
        assert!(defends(&[0], 2, &af));
        assert!(!defends(&[2], 1, &af));
    }

    #[test]
    fn test_admissibility() {
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
        assert!(is_admissible(&[], &af));
        assert!(is_admissible(&[0], &af));
        assert!(is_admissible(&[1], &af));
        assert!(!is_admissible(&[2], &af));
        assert!(is_admissible(&[0, 2], &af));
        assert!(!is_admissible(&[0, 1], &af));
    }

    #[test]
    fn test_attacks_all_outside() {
        let af = read_af(
            r#"
            arg(a0).
            arg(a1).
            arg(a2).
            att(a0,a1).
            att(a1,a2).
            "#,
        );
        assert!(attacks_all_outside(&[0, 2], &af));
        assert!(!attacks_all_outside(&[0], &af));
        assert!(!attacks_all_outside(&[], &af));
    }

    #[test]
    fn test_attacks_all_outside_empty_framework() {
        let af = AAFramework::<String>::default();
        assert!(attacks_all_outside(&[], &af));
    }

    #[test]
    fn test_characteristic_function_odd_cycle() {
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
        assert!(characteristic_function(&[], &af).is_empty());
        assert_eq!(vec![2], characteristic_function(&[0], &af));
    }

    #[test]
    fn test_extend_to_maximal() {
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
        let mut set = vec![];
        extend_to_maximal(&mut set, &af);
        assert_eq!(vec![0, 2], set);
        let mut set = vec![1];
        extend_to_maximal(&mut set, &af);
        assert_eq!(vec![1], set);
        assert!(!is_extensible_with(&[1], 1, &af));
    }

    #[test]
    fn test_greedy_extension_misses_joint_insertions() {
        let af = read_af(
            r#"
            arg(a).
            arg(b).
            arg(c).
            arg(x).
            att(b,a).
            att(c,b).
            att(x,c).
            att(a,x).
            "#,
        );
        let mut set = vec![];
        extend_to_maximal(&mut set, &af);
        assert!(set.is_empty());
        assert!(is_admissible(&[0, 2], &af));
    }
}
