pub mod form_actions;
pub mod uploader;
pub mod user_card;
