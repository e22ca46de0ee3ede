use crate::aa::{AAFramework, LabelType};

/// Computes the least fixpoint of the characteristic function, starting from the empty set.
///
/// The resulting set (the grounded extension) is included in every preferred and every stable extension.
/// Rather than iterating the characteristic function, unattacked arguments are accepted first,
/// and each defeated argument decreases the count of the undefeated attackers of the arguments it attacks.
///
/// The returned ids are sorted in increasing order.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<usize>
where
    T: LabelType,
{
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; af.n_arguments()];
    let mut undefeated_attackers = (0..af.n_arguments())
        .map(|id| {
            let n = af.attacker_ids(id).len();
            if n == 0 {
                ext.push(id)
            }
            n
        })
        .collect::<Vec<usize>>();
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args];
        af.attacked_ids(id).iter().for_each(|defeated| {
            if !defeated_args[*defeated] {
                defeated_args[*defeated] = true;
                af.attacked_ids(*defeated).iter().for_each(|attacked| {
                    undefeated_attackers[*attacked] -= 1;
                    if undefeated_attackers[*attacked] == 0 {
                        ext.push(*attacked)
                    }
                })
            }
        });
        n_processed_args += 1;
    }
    ext.sort_unstable();
    ext
}
