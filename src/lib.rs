pub mod config;
pub mod error;
pub mod figma_client;
pub mod file_key;
pub mod output;
pub mod reduce;
pub mod types;

pub use config::Config;
pub use error::{PrismError, Result};
pub use figma_client::{FetchedFile, FigmaApiClient, FigmaAuth};
pub use file_key::parse_file_key;
pub use output::{render_simplified, write_simplified};
pub use reduce::{reduce_document, reduce_node, KeptType, ReduceStats};
pub use types::{FigmaFileResponse, FigmaNode, SimplifiedNode};
