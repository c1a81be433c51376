pub mod docs;
pub mod health;
pub mod mock;
pub mod spec;

pub use docs::docs_handler;
pub use health::health_handler;
pub use spec::{api_spec_handler, root_handler};
