use parking_lot::RwLock;
use std::io;
use std::sync::Arc;

use crate::quiz::record::AnswerRecord;
use crate::results::{LogError, ResultLog};

#[derive(Clone, Default)]
pub struct MockResultLog {
    appends: Arc<RwLock<Vec<Vec<AnswerRecord>>>>,
    failing: bool,
}

impl MockResultLog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn failing() -> Self {
        MockResultLog {
            failing: true,
            ..Default::default()
        }
    }

    pub fn append_count(&self) -> usize {
        self.appends.read().len()
    }

    pub fn last_append(&self) -> Option<Vec<AnswerRecord>> {
        self.appends.read().last().cloned()
    }
}

impl ResultLog for MockResultLog {
    fn append(&mut self, records: &[AnswerRecord]) -> Result<(), LogError> {
        self.appends.write().push(records.to_vec());
        if self.failing {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only disk").into());
        }
        Ok(())
    }
}
