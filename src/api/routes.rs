//! API route configuration.

use crate::api::handlers::{
    add_car_handler, admin_status_handler, all_orders_handler, best_cars_handler,
    checkout_car_handler, create_order_handler, create_payment_intent_handler,
    create_review_handler, create_user_handler, delete_car_handler, delete_order_handler,
    grant_admin_handler, login_user_handler, my_orders_handler, review_list_handler,
    update_order_status_handler, upsert_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Routes open to any caller.
///
/// # Endpoints
///
/// - `POST   /users`                  - Register a user
/// - `PUT    /users`                  - Upsert a user profile by email
/// - `GET    /users/{email}`          - Admin status for an email
/// - `GET    /loginUser/{email}`      - Full user document or null
/// - `GET    /cars/bestCars/{limit}`  - At most `limit` cars
/// - `POST   /admin/addCar`           - Add a car listing
/// - `DELETE /deleteCar/{id}`         - Delete a car
/// - `GET    /payment/{id}`           - Car for the checkout page
/// - `POST   /create-payment-intent`  - Create a payment intent
/// - `POST   /customerReview`         - Submit a review
/// - `GET    /customerReview`         - List reviews
/// - `POST   /customerOrder`          - Place an order
/// - `GET    /myOrder/{email}`        - Orders for an email
/// - `GET    /allOrder`               - All orders
/// - `DELETE /deleteOrder/{id}`       - Delete an order
/// - `PUT    /status/{id}`            - Patch an order's status (upsert)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler).put(upsert_user_handler))
        .route("/users/{email}", get(admin_status_handler))
        .route("/loginUser/{email}", get(login_user_handler))
        .route("/cars/bestCars/{limit}", get(best_cars_handler))
        .route("/admin/addCar", post(add_car_handler))
        .route("/deleteCar/{id}", delete(delete_car_handler))
        .route("/payment/{id}", get(checkout_car_handler))
        .route("/create-payment-intent", post(create_payment_intent_handler))
        .route(
            "/customerReview",
            post(create_review_handler).get(review_list_handler),
        )
        .route("/customerOrder", post(create_order_handler))
        .route("/myOrder/{email}", get(my_orders_handler))
        .route("/allOrder", get(all_orders_handler))
        .route("/deleteOrder/{id}", delete(delete_order_handler))
        .route("/status/{id}", put(update_order_status_handler))
}

/// The admin-grant route, wrapped with the identity middleware by the
/// top-level router.
///
/// # Endpoints
///
/// - `PUT /users/admin` - Promote an account to admin (requires a verified
///   caller whose stored role is admin)
pub fn admin_grant_routes() -> Router<AppState> {
    Router::new().route("/users/admin", put(grant_admin_handler))
}
