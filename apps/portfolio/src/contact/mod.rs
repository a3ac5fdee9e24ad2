// Contact form submission: schema validation, one relay call, tri-state outcome.

pub mod handlers;
pub mod notify;
pub mod pipeline;
pub mod relay;
pub mod validation;

pub use relay::{FormRelay, RelayClient};
