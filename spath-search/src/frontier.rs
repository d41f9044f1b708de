//! Frontier for the Dijkstra algorithm.

/// Set of vertex positions not yet finalized by the search.
///
/// Members are kept in insertion order and the minimum is found by a linear
/// scan, so there is no decrease-key: callers change the keys freely between
/// extractions and the next scan picks them up.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    /// Members in insertion order.
    queue: Vec<usize>,

    /// Membership flag per vertex position.
    present: Vec<bool>,
}

impl Frontier {
    /// Create new empty instance.
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Create a frontier holding the given positions, in iteration order.
    /// Repeated positions are only added once.
    pub fn with_members<I: IntoIterator<Item = usize>>(members: I) -> Frontier {
        let mut frontier = Frontier::new();
        members.into_iter().for_each(|m| frontier.push(m));
        frontier
    }

    /// Append a position unless it is already a member.
    pub fn push(&mut self, member: usize) {
        if self.contains(member) {
            return;
        }
        if member >= self.present.len() {
            self.present.resize(member + 1, false);
        }
        self.present[member] = true;
        self.queue.push(member);
    }

    pub fn contains(&self, member: usize) -> bool {
        self.present.get(member).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }

    /// Remove and return the member with the least key.
    /// Among equal keys the earliest inserted member wins.
    pub fn pop_min_by_key<K, F>(&mut self, mut key: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(usize) -> K,
    {
        let mut best: Option<(usize, K)> = None;
        for (pos, &member) in self.queue.iter().enumerate() {
            let k = key(member);
            let better = match &best {
                Some((_, best_key)) => k < *best_key,
                None => true,
            };
            if better {
                best = Some((pos, k));
            }
        }

        let (pos, _) = best?;
        let member = self.queue.remove(pos);
        self.present[member] = false;
        Some(member)
    }
}
