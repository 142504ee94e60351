use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Which questions a quiz draws from. On the wire `0` stands for [`CategoryScope::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    Any,
    Category(i64),
}

impl CategoryScope {
    pub const ANY_ID: i64 = 0;

    pub fn contains(self, question: &Question) -> bool {
        match self {
            CategoryScope::Any => true,
            CategoryScope::Category(id) => question.category == id,
        }
    }
}

impl From<i64> for CategoryScope {
    fn from(id: i64) -> Self {
        if id == Self::ANY_ID {
            CategoryScope::Any
        } else {
            CategoryScope::Category(id)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Selection<'a> {
    pub question: Option<&'a Question>,
    /// Questions in scope regardless of exclusions.
    pub total_in_category: usize,
}

/// Draws one question in `scope` whose id is not in `excluded`, uniformly at random.
pub fn select<'a, R>(
    scope: CategoryScope,
    excluded: &HashSet<i64>,
    questions: &'a [Question],
    rng: &mut R,
) -> Selection<'a>
where
    R: Rng + ?Sized,
{
    let in_scope: Vec<&Question> = questions.iter().filter(|q| scope.contains(q)).collect();
    let candidates: Vec<&Question> = in_scope
        .iter()
        .copied()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    Selection {
        question: candidates.choose(rng).copied(),
        total_in_category: in_scope.len(),
    }
}
