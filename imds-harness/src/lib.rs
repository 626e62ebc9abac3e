pub mod category;
pub mod cli;
pub mod client;
pub mod commands;
pub mod container;
pub mod options;

pub use cli::{Cli, Commands};
pub use client::{
  ImdsClient, MetadataResponse, ALL_CATEGORIES, MAX_TOKEN_TTL_SECONDS, MIN_TOKEN_TTL_SECONDS, TOKEN_HEADER,
  TOKEN_TTL_HEADER,
};
pub use container::Container;
pub use options::{LaunchRequest, Options, SpotAction, SpotActionKind};
