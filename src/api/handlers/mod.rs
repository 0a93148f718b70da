//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cars;
pub mod health;
pub mod orders;
pub mod payment;
pub mod reviews;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use cars::{add_car_handler, best_cars_handler, delete_car_handler};
pub use health::{banner_handler, health_handler};
pub use orders::{
    all_orders_handler, create_order_handler, delete_order_handler, my_orders_handler,
    update_order_status_handler,
};
pub use payment::{checkout_car_handler, create_payment_intent_handler};
pub use reviews::{create_review_handler, review_list_handler};
pub use users::{
    admin_status_handler, create_user_handler, grant_admin_handler, login_user_handler,
    upsert_user_handler,
};
