pub mod car_card;
pub mod nav;
pub mod review_form;
pub mod service_card;
pub mod toast;
