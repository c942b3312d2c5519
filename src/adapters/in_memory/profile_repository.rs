use crate::domain::{CollectionBook, CollectionBookId, Review, UserProfile};
use crate::ports::{
    GuardedWrite, Result, profile_repository::ProfileRepository as ProfileRepositoryTrait,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{lock, replace_if};

/// Owned books and their favorite marks, locked together
struct Shelf {
    books: Vec<CollectionBook>,
    favorites: HashSet<CollectionBookId>,
}

impl Shelf {
    fn contains(&self, book_id: CollectionBookId) -> bool {
        self.books.iter().any(|b| b.id == book_id)
    }
}

/// In-memory profile store for the single current user
pub struct ProfileRepository {
    profile: Mutex<UserProfile>,
    shelf: Mutex<Shelf>,
    reviews: Vec<Review>,
}

impl ProfileRepository {
    pub fn new(
        profile: UserProfile,
        collection: Vec<CollectionBook>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            profile: Mutex::new(profile),
            shelf: Mutex::new(Shelf {
                books: collection,
                favorites: HashSet::new(),
            }),
            reviews,
        }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn get_profile(&self) -> Result<UserProfile> {
        Ok(lock(&self.profile)?.clone())
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<()> {
        *lock(&self.profile)? = profile;
        Ok(())
    }

    async fn list_collection(&self) -> Result<Vec<CollectionBook>> {
        Ok(lock(&self.shelf)?.books.clone())
    }

    async fn get_collection_book(
        &self,
        book_id: CollectionBookId,
    ) -> Result<Option<CollectionBook>> {
        Ok(lock(&self.shelf)?
            .books
            .iter()
            .find(|b| b.id == book_id)
            .cloned())
    }

    async fn update_collection_book(&self, book: CollectionBook) -> Result<GuardedWrite> {
        let mut shelf = lock(&self.shelf)?;
        Ok(replace_if(shelf.books.as_mut_slice(), book, |b| b.id, |_| true))
    }

    async fn remove_collection_book(&self, book_id: CollectionBookId) -> Result<bool> {
        let mut shelf = lock(&self.shelf)?;
        let before = shelf.books.len();
        shelf.books.retain(|b| b.id != book_id);
        shelf.favorites.remove(&book_id);
        Ok(shelf.books.len() < before)
    }

    async fn favorites(&self) -> Result<HashSet<CollectionBookId>> {
        Ok(lock(&self.shelf)?.favorites.clone())
    }

    async fn update_favorite(
        &self,
        book_id: CollectionBookId,
        was_favorite: bool,
        favorite: bool,
    ) -> Result<GuardedWrite> {
        let mut shelf = lock(&self.shelf)?;
        if !shelf.contains(book_id) {
            return Ok(GuardedWrite::Missing);
        }
        if shelf.favorites.contains(&book_id) != was_favorite {
            return Ok(GuardedWrite::Stale);
        }

        if favorite {
            shelf.favorites.insert(book_id);
        } else {
            shelf.favorites.remove(&book_id);
        }
        Ok(GuardedWrite::Applied)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.clone())
    }
}
