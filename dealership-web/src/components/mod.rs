pub mod back_to_top;
pub mod car_card;
pub mod car_detail;
pub mod car_listings;
pub mod confirmation_overlay;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod modal;
pub mod purchase_form;
pub mod search_bar;
pub mod sell_form;
