use crate::{Card, Combo};
use serde::{Deserialize, Serialize};

pub const PHASE_COUNT: usize = 10;

/// One of the ten milestones. `index` is zero-based; `ordinal()` is what players see.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase {
    index: usize,
    requirements: Vec<Combo>,
}

fn catalog_requirements(index: usize) -> Option<Vec<Combo>> {
    let reqs = match index {
        0 => vec![Combo::number_of(2, Combo::SetOf(3))],
        1 => vec![Combo::SetOf(3), Combo::RunOf(4)],
        2 => vec![Combo::SetOf(4), Combo::RunOf(4)],
        3 => vec![Combo::RunOf(7)],
        4 => vec![Combo::RunOf(8)],
        5 => vec![Combo::RunOf(9)],
        6 => vec![Combo::number_of(2, Combo::SetOf(4))],
        7 => vec![Combo::NumberOfColor(7)],
        8 => vec![Combo::SetOf(5), Combo::SetOf(2)],
        9 => vec![Combo::SetOf(5), Combo::SetOf(3)],
        _ => return None,
    };
    Some(reqs)
}

impl Phase {
    pub fn at(index: usize) -> Option<Phase> {
        let requirements = catalog_requirements(index)?;
        Some(Phase {
            index,
            requirements,
        })
    }

    pub fn first() -> Phase {
        Phase {
            index: 0,
            requirements: catalog_requirements(0).unwrap_or_default(),
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Phase> {
        ordinal.checked_sub(1).and_then(Phase::at)
    }

    pub fn all() -> Vec<Phase> {
        (0..PHASE_COUNT).filter_map(Phase::at).collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    pub fn requirements(&self) -> &[Combo] {
        &self.requirements
    }

    pub fn next(&self) -> Option<Phase> {
        Phase::at(self.index + 1)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == PHASE_COUNT
    }

    /// A lone composite requirement is checked against every submitted card;
    /// otherwise requirement `i` is checked against group `i`.
    pub fn is_cleared_by(&self, groups: &[Vec<Card>]) -> bool {
        if let [single] = self.requirements.as_slice() {
            if single.is_composite() {
                let union: Vec<Card> = groups.iter().flatten().copied().collect();
                return single.is_satisfied_by(&union);
            }
        }
        self.requirements.iter().enumerate().all(|(idx, req)| {
            groups
                .get(idx)
                .map_or(false, |group| req.is_satisfied_by(group))
        })
    }

    pub fn description(&self) -> String {
        self.requirements
            .iter()
            .map(Combo::description)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
