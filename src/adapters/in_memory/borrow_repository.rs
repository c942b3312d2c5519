use crate::domain::{BorrowId, BorrowRecord, BorrowStatus};
use crate::ports::{
    GuardedWrite, Result, borrow_repository::BorrowRepository as BorrowRepositoryTrait,
};
use async_trait::async_trait;
use std::sync::Mutex;

use super::{lock, replace_if};

/// In-memory loan tracker store
pub struct BorrowRepository {
    borrows: Mutex<Vec<BorrowRecord>>,
}

impl BorrowRepository {
    pub fn new() -> Self {
        Self::with_borrows(Vec::new())
    }

    pub fn with_borrows(borrows: Vec<BorrowRecord>) -> Self {
        Self {
            borrows: Mutex::new(borrows),
        }
    }
}

impl Default for BorrowRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BorrowRepositoryTrait for BorrowRepository {
    async fn list_borrows(&self) -> Result<Vec<BorrowRecord>> {
        Ok(lock(&self.borrows)?.clone())
    }

    async fn get_borrow(&self, borrow_id: BorrowId) -> Result<Option<BorrowRecord>> {
        Ok(lock(&self.borrows)?
            .iter()
            .find(|b| b.id == borrow_id)
            .cloned())
    }

    async fn update_borrow(
        &self,
        record: BorrowRecord,
        expected: BorrowStatus,
    ) -> Result<GuardedWrite> {
        let mut borrows = lock(&self.borrows)?;
        Ok(replace_if(borrows.as_mut_slice(), record, |b| b.id, |b| b.status == expected))
    }
}
