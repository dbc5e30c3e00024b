use std::fmt::Debug;

/// Structure to store ranking results
pub struct Hits<K> {
    /// (key, score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    pub fn new(vec: Vec<(K, f64)>) -> Self {
        Hits { list: vec }
    }

    /// Sort results by descending score
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Keep hits scoring at least `threshold`
    pub fn above(mut self, threshold: f64) -> Self {
        self.list.retain(|(_, s)| *s >= threshold);
        self
    }

    /// Best hit, if any
    pub fn top(&self) -> Option<&(K, f64)> {
        self.list
            .iter()
            .filter(|(_, s)| !s.is_nan())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // each hit on a new line
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}
