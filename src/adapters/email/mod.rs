//! Email Adapters.
//!
//! - `ResendEmailSender` - Resend HTTP API

mod resend_sender;

pub use resend_sender::{ResendConfig, ResendEmailSender};
