pub mod follow_button;
pub mod item_card;
pub mod items_list;
pub mod nav;
pub mod notifications;
pub mod review_card;
pub mod review_form;
pub mod reviews_list;
pub mod search_bar;
pub mod star_rating;
pub mod user_search;
