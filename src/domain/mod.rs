pub mod contact;
pub mod identity;
pub mod notification;
