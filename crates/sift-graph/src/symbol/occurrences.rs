use rustc_hash::FxHashMap;

/// Multiset of identifier names.
///
/// Membership is what callers ask about; the counts exist so that one
/// mention can be subtracted per import specifier name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrences {
    counts: FxHashMap<String, usize>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `name`.
    pub fn add(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_default() += 1;
    }

    /// Remove a single occurrence of `name`, if any remain.
    pub fn remove_one(&mut self, name: &str) {
        if let Some(count) = self.counts.get_mut(name) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(name);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for Occurrences {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut occurrences = Self::new();
        for name in iter {
            occurrences.add(name);
        }
        occurrences
    }
}
