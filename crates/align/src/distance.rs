/// Minimum edit cost between two sequences, without the ops.
///
/// Uses two rolling rows sized by the shorter sequence. Returns the same
/// value as [`align_by`](crate::align_by)'s `cost`.
pub fn edit_distance_by<T, U, F>(reference: &[T], hypothesis: &[U], mut equivalent: F) -> usize
where
    F: FnMut(&T, &U) -> bool,
{
    if reference.len() >= hypothesis.len() {
        rolling(reference.len(), hypothesis.len(), |outer, inner| {
            equivalent(&reference[outer], &hypothesis[inner])
        })
    } else {
        // Delete and insert cost the same, so the table can be transposed.
        rolling(hypothesis.len(), reference.len(), |outer, inner| {
            equivalent(&reference[inner], &hypothesis[outer])
        })
    }
}

/// [`edit_distance_by`] with `==` as the equivalence.
pub fn edit_distance<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> usize {
    edit_distance_by(reference, hypothesis, |a, b| a == b)
}

fn rolling<F>(outer_len: usize, inner_len: usize, mut matches: F) -> usize
where
    F: FnMut(usize, usize) -> bool,
{
    let mut prev: Vec<usize> = (0..=inner_len).collect();
    let mut curr = vec![0usize; inner_len + 1];

    for o in 1..=outer_len {
        curr[0] = o;
        for k in 1..=inner_len {
            let diagonal = prev[k - 1] + usize::from(!matches(o - 1, k - 1));
            curr[k] = diagonal.min(prev[k] + 1).min(curr[k - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner_len]
}
