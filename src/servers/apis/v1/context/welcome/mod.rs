//! Welcome message.
//!
//! `GET /`
//!
//! It does not require authentication. It is the endpoint the clients of the
//! first version of the service used to check the API was up.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Welcome to the Kia Vehicle Control API"
//! }
//! ```
pub mod handlers;
