use std::collections::HashSet;

/// Set of student identifiers already used in this process.
///
/// Append-only: sessions only test membership and add.
pub trait IdRegistry {
    fn contains(&self, id: &str) -> bool;
    fn add(&mut self, id: String);
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryIdRegistry {
    ids: HashSet<String>,
}

impl InMemoryIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl IdRegistry for InMemoryIdRegistry {
    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn add(&mut self, id: String) {
        self.ids.insert(id);
    }
}
