/// A provider callback after signature verification, reduced to the closed
/// set of events this service reacts to. Anything outside that set lands in
/// `Unhandled` so new provider event types never break dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
	PaymentSucceeded { intent_id: String },
	PaymentFailed { intent_id: String },
	Unhandled { event_type: String },
}
