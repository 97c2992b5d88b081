pub mod backend;
pub mod book_view;
pub mod clipboard;
pub mod contact_book;
pub mod error_handling;
pub mod feedback;
pub mod search;
pub mod session;
pub mod timer;
pub mod validation;

pub use backend::Backend;
pub use book_view::{BookView, ContactStats, Draft};
pub use contact_book::{BookSettings, ContactBook, MutationOutcome};
pub use error_handling::RolodexError;
pub use session::{Bootstrap, Navigation, SessionService};
