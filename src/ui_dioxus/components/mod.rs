pub mod contact_card;
pub mod edit_card;
pub mod new_contact_form;
pub mod search_bar;
pub mod stat_card;
pub mod toast;

pub use contact_card::ContactCard;
pub use edit_card::EditCard;
pub use new_contact_form::NewContactForm;
pub use search_bar::SearchBar;
pub use stat_card::StatCard;
pub use toast::Toast;
