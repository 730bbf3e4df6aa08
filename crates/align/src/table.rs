use crate::op::EditOp;

/// Predecessor choice recorded for one DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Step {
    Origin,
    Match,
    Substitute,
    Delete,
    Insert,
}

/// Pick the cheapest predecessor of a cell.
///
/// Ties resolve diagonal first, then delete, then insert.
#[inline]
pub(crate) fn choose(diagonal: usize, delete: usize, insert: usize, matched: bool) -> (usize, Step) {
    if diagonal <= delete && diagonal <= insert {
        let step = if matched { Step::Match } else { Step::Substitute };
        (diagonal, step)
    } else if delete <= insert {
        (delete, Step::Delete)
    } else {
        (insert, Step::Insert)
    }
}

/// Flat `(rows + 1) x (cols + 1)` matrix of [`Step`]s.
///
/// Costs are only needed one row back, so they are kept in two rolling rows
/// while the steps are kept for the whole table.
pub(crate) struct StepMatrix {
    cols: usize,
    steps: Vec<Step>,
}

impl StepMatrix {
    /// Fill the table for `rows` reference and `cols` hypothesis tokens.
    ///
    /// Returns the matrix together with the total cost at `(rows, cols)`.
    pub(crate) fn fill<F>(rows: usize, cols: usize, mut matches: F) -> (Self, usize)
    where
        F: FnMut(usize, usize) -> bool,
    {
        let width = cols + 1;
        let mut steps = vec![Step::Origin; (rows + 1) * width];
        let mut prev: Vec<usize> = (0..=cols).collect();
        let mut curr = vec![0usize; width];

        for step in steps.iter_mut().take(width).skip(1) {
            *step = Step::Insert;
        }

        for i in 1..=rows {
            let row = i * width;
            curr[0] = i;
            steps[row] = Step::Delete;
            for j in 1..=cols {
                let matched = matches(i - 1, j - 1);
                let diagonal = prev[j - 1] + usize::from(!matched);
                let (cost, step) = choose(diagonal, prev[j] + 1, curr[j - 1] + 1, matched);
                curr[j] = cost;
                steps[row + j] = step;
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        (Self { cols: width, steps }, prev[cols])
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> Step {
        self.steps[i * self.cols + j]
    }

    /// Walk from `(rows, cols)` back to the origin and return the ops in
    /// forward order.
    pub(crate) fn backtrack(&self, rows: usize, cols: usize) -> Vec<EditOp> {
        let mut ops = Vec::with_capacity(rows.max(cols));
        let (mut i, mut j) = (rows, cols);

        while i > 0 || j > 0 {
            match self.at(i, j) {
                Step::Match => {
                    i -= 1;
                    j -= 1;
                    ops.push(EditOp::Match {
                        reference: i,
                        hypothesis: j,
                    });
                }
                Step::Substitute => {
                    i -= 1;
                    j -= 1;
                    ops.push(EditOp::Substitute {
                        reference: i,
                        hypothesis: j,
                    });
                }
                Step::Delete => {
                    i -= 1;
                    ops.push(EditOp::Delete { reference: i });
                }
                Step::Insert => {
                    j -= 1;
                    ops.push(EditOp::Insert { hypothesis: j });
                }
                // Only (0, 0) holds Origin.
                Step::Origin => break,
            }
        }

        ops.reverse();
        ops
    }
}
