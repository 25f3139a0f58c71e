use std::ops::Add;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states generated through successor expansion.
    pub states_visited: u64,
    /// Number of nodes whose successors were enumerated.
    pub expansions: u64,
    /// Number of leaf/cutoff evaluations.
    pub evals: u64,
    /// Number of times the pruning condition has been reached.
    pub beta_prunes: u64,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        states_visited: 0,
        expansions: 0,
        evals: 0,
        beta_prunes: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
        self.expansions += c.expansions;
        self.evals += c.evals;
        self.beta_prunes += c.beta_prunes;
    }

    pub fn summary(&self) -> String {
        format!(
            "visited={} expanded={} evals={} prunes={}",
            self.states_visited, self.expansions, self.evals, self.beta_prunes
        )
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}
