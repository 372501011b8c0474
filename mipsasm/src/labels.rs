use indexmap::IndexMap;

/// Label keys have their leading zeros stripped, so a numeric label
/// like 003 is looked up as 3.
pub fn normalize(name: &str) -> &str {
    name.trim_start_matches('0')
}

/// Label name to resolved position in the label-free line stream.
/// Built during pass one, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: IndexMap<String, usize>,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
        }
    }

    pub fn add(&mut self, key: &str, target: usize) {
        self.labels.insert(normalize(key).to_owned(), target);
    }

    pub fn lookup(&self, key: &str) -> Option<usize> {
        self.labels.get(normalize(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
