//! Read-only access to the distortion library.

use std::sync::Arc;

use crate::domain::foundation::ThoughtPatternId;
use crate::domain::records::{RecordError, ThoughtPattern};
use crate::ports::ThoughtPatternReader;

pub struct ThoughtPatternHandler {
    reader: Arc<dyn ThoughtPatternReader>,
}

impl ThoughtPatternHandler {
    pub fn new(reader: Arc<dyn ThoughtPatternReader>) -> Self {
        Self { reader }
    }

    pub fn list(&self) -> Vec<ThoughtPattern> {
        self.reader.list()
    }

    pub fn get(&self, id: ThoughtPatternId) -> Result<ThoughtPattern, RecordError> {
        self.reader
            .find_by_id(id)
            .ok_or(RecordError::ThoughtPatternNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecordStore;

    #[test]
    fn catalog_starts_with_catastrophizing() {
        let handler = ThoughtPatternHandler::new(Arc::new(InMemoryRecordStore::new()));

        let patterns = handler.list();
        assert!(patterns.len() >= 10);
        assert_eq!(handler.get(ThoughtPatternId::new(1)).unwrap().name, "Catastrophizing");
        assert!(handler.get(ThoughtPatternId::new(999)).is_err());
    }
}
