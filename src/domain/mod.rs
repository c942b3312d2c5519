pub mod book;
pub mod borrow;
pub mod commands;
pub mod errors;
pub mod events;
pub mod notification;
pub mod profile;
pub mod request;
pub mod value_objects;

pub use book::{AddBookForm, Book, CatalogFilter};
pub use borrow::{BorrowRecord, BorrowStatus};
pub use errors::*;
pub use events::*;
pub use notification::{Notification, NotificationCategory, NotificationView};
pub use profile::{CollectionBook, ProfileSettings, Review, UserProfile};
pub use request::{BookRequest, RequestAction, RequestStatus};
pub use value_objects::*;
