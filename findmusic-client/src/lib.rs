pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod status;
pub mod transport;
pub mod util;
pub mod view;

pub use client::QueryClient;
pub use config::ClientConfig;
pub use error::{ConfigError, SearchError};
pub use render::{render, DisplayFragment, Entry};
pub use session::{SearchSession, SubmitOutcome};
pub use view::{HtmlPage, ResultsView};
