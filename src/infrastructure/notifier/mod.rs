mod webhook;

pub use webhook::{LogOnlyNotifier, WebhookLeadNotifier};
