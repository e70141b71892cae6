pub mod create_payment_intent;
pub mod dto;
pub mod handle_webhook_event;
