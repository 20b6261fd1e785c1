//! Host-facing side of the copy plugins
//!
//! The proxy exposes the current selection through `MessageContext` and
//! binds each `MenuItem` to `Copier::invoke`. Two menu sets exist, one per
//! plugin flavor.
//!
//! # Examples
//!
//! ```no_run
//! use reqcopy::{Copier, CopierConfig, FormatMode, HttpMessage, RequestResponse, StaticContext, SystemClipboard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let copier = Copier::start(SystemClipboard::new(), CopierConfig::default());
//!
//!     let exchange = RequestResponse::new(
//!         "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n",
//!         Some(HttpMessage::from("HTTP/1.1 200 OK\r\n\r\nhello")),
//!     );
//!     let context = StaticContext::new(vec![exchange]);
//!
//!     copier.invoke(FormatMode::FullFull, &context)?.wait().await?;
//!     copier.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod copier;
pub mod menu;


pub use config::CopierConfig;
pub use context::{MessageContext, StaticContext};
pub use copier::Copier;
pub use menu::{EXTENSION_NAME, MenuItem, MenuSet};
