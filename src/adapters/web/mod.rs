pub mod errors;
pub mod health_handler;
pub mod payment_intent_handler;
pub mod schema;
pub mod webhook_handler;
