pub mod link;
pub mod price_card;
pub mod search;
pub mod status;
pub mod template;
