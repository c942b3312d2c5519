use crate::domain::{BookRequest, Direction, RequestId, RequestStatus};
use crate::ports::{
    GuardedWrite, Result, request_repository::RequestRepository as RequestRepositoryTrait,
};
use async_trait::async_trait;
use std::sync::Mutex;

use super::{lock, replace_if, upsert};

/// In-memory request store
pub struct RequestRepository {
    requests: Mutex<Vec<BookRequest>>,
}

impl RequestRepository {
    pub fn new() -> Self {
        Self::with_requests(Vec::new())
    }

    pub fn with_requests(requests: Vec<BookRequest>) -> Self {
        Self {
            requests: Mutex::new(requests),
        }
    }
}

impl Default for RequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestRepositoryTrait for RequestRepository {
    async fn list_requests(&self, direction: Option<Direction>) -> Result<Vec<BookRequest>> {
        Ok(lock(&self.requests)?
            .iter()
            .filter(|r| direction.is_none_or(|d| r.direction == d))
            .cloned()
            .collect())
    }

    async fn get_request(&self, request_id: RequestId) -> Result<Option<BookRequest>> {
        Ok(lock(&self.requests)?
            .iter()
            .find(|r| r.id == request_id)
            .cloned())
    }

    async fn save_request(&self, request: BookRequest) -> Result<()> {
        upsert(&mut *lock(&self.requests)?, request, |r| r.id);
        Ok(())
    }

    async fn update_request(
        &self,
        request: BookRequest,
        expected: RequestStatus,
    ) -> Result<GuardedWrite> {
        let mut requests = lock(&self.requests)?;
        Ok(replace_if(requests.as_mut_slice(), request, |r| r.id, |r| r.status == expected))
    }
}
