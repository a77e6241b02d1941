/// One step of the parents/babies recurrence.
///
/// Starts at `(1, 1)`; each step moves `babies` into `parents` and sums the pair into the new
/// `babies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    pub parents: i128,
    pub babies: i128,
}

impl Generation {
    pub const fn new() -> Self {
        Generation {
            parents: 1,
            babies: 1,
        }
    }

    /// The next generation, or `None` once the sum no longer fits in an `i128`.
    pub fn advance(self) -> Option<Self> {
        Some(Generation {
            parents: self.babies,
            babies: self.parents.checked_add(self.babies)?,
        })
    }

    /// Successive generations, starting with `self`.
    pub fn iter(self) -> Generations {
        Generations { next: Some(self) }
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over generations, ending at the last one whose successor would overflow.
#[derive(Debug, Clone)]
pub struct Generations {
    next: Option<Generation>,
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        let current = self.next?;
        self.next = current.advance();
        Some(current)
    }
}
