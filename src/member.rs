use crate::genotype::{Genotype, Probabilities};

/// Index of a `Member` inside its `FamilyGraph`.
pub type MemberId = usize;

/// Whether a member's genotype probabilities have been computed yet.
#[derive(Debug, Clone, PartialEq)]
pub enum GenotypeState {
    Unsolved,
    Solved(Probabilities),
}

/// A member of a family (a node of the pedigree).
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    has_power: bool,
    state: GenotypeState,
}

impl Member {
    /// Constructs a new `Member`.
    ///
    /// Having the power implies genotype aa, so power carriers start out
    /// solved.
    pub fn new(name: &str, has_power: bool) -> Self {
        let state = if has_power {
            GenotypeState::Solved(Genotype::HomozygousRecessive.certain())
        } else {
            GenotypeState::Unsolved
        };
        Self {
            name: name.into(),
            has_power,
            state,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_power(&self) -> bool {
        self.has_power
    }

    pub fn state(&self) -> &GenotypeState {
        &self.state
    }

    /// The computed probabilities, if any.
    pub fn probabilities(&self) -> Option<&Probabilities> {
        match &self.state {
            GenotypeState::Solved(probs) => Some(probs),
            GenotypeState::Unsolved => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.probabilities().is_some()
    }

    /// Freezes the result for this member. A solved member is never changed.
    pub(crate) fn freeze(&mut self, probs: Probabilities) -> &Probabilities {
        if let GenotypeState::Unsolved = self.state {
            self.state = GenotypeState::Solved(probs);
        }
        match &self.state {
            GenotypeState::Solved(probs) => probs,
            GenotypeState::Unsolved => unreachable!("state was just set"),
        }
    }
}
