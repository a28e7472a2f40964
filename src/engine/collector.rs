//! The top-K collector: either keeps every layout (sorted at the end) or
//! maintains a bounded, sorted-by-score buffer as layouts arrive.
//!
//! Linear scan + shift, not a heap: for the realistic K (≤ 50) this spec
//! targets, it beats a heap by constant factors and makes the tie-breaking
//! rule (equal-score layouts admitted in encounter order, then frozen once
//! full) trivial to state.

pub struct TopKCollector<T> {
    limit: Option<usize>,
    items: Vec<T>,
}

impl<T> TopKCollector<T> {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit, items: Vec::new() }
    }

    /// `Some(0)` is the only limit that makes further work pointless; a
    /// caller should use this to skip enumeration entirely.
    pub fn is_short_circuited(&self) -> bool {
        self.limit == Some(0)
    }

    pub fn push(&mut self, item: T, score: impl Fn(&T) -> f64) {
        match self.limit {
            None => self.items.push(item),
            Some(0) => {}
            Some(k) => {
                let new_score = score(&item);
                let position = self.items.iter().position(|existing| score(existing) < new_score);
                match position {
                    Some(index) => {
                        self.items.insert(index, item);
                        self.items.truncate(k);
                    }
                    None if self.items.len() < k => self.items.push(item),
                    None => {}
                }
            }
        }
    }

    pub fn finish(mut self, score: impl Fn(&T) -> f64) -> Vec<T> {
        if self.limit.is_none() {
            self.items.sort_by(|a, b| score(b).partial_cmp(&score(a)).expect("score must not be NaN"));
        }
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: &f64) -> f64 {
        *value
    }

    #[test]
    fn unbounded_collector_sorts_descending() {
        let mut collector = TopKCollector::new(None);
        for v in [0.2, 0.9, 0.5] {
            collector.push(v, score);
        }
        assert_eq!(collector.finish(score), vec![0.9, 0.5, 0.2]);
    }

    #[test]
    fn bounded_collector_keeps_only_top_k() {
        let mut collector = TopKCollector::new(Some(2));
        for v in [0.2, 0.9, 0.5, 0.1] {
            collector.push(v, score);
        }
        assert_eq!(collector.finish(score), vec![0.9, 0.5]);
    }

    #[test]
    fn zero_limit_short_circuits() {
        let collector: TopKCollector<f64> = TopKCollector::new(Some(0));
        assert!(collector.is_short_circuited());
        assert_eq!(collector.finish(score), Vec::<f64>::new());
    }

    #[test]
    fn ties_are_admitted_in_encounter_order_until_full_then_frozen() {
        let mut collector = TopKCollector::new(Some(2));
        collector.push(0.9, score);
        collector.push(0.8, score);
        // Buffer is full at [0.9, 0.8]; a later equal-score newcomer must
        // not displace either incumbent.
        collector.push(0.8, score);
        assert_eq!(collector.finish(score), vec![0.9, 0.8]);
    }
}
