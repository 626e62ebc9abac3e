use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{commands::LaunchArgs, container::Container, options::Options};

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct StartInput {
  #[command(flatten)]
  pub launch: LaunchArgs,
}

impl StartInput {
  /// Launch the mock and block until interrupted, terminating the container on the way out
  pub async fn start(&self) -> Result<()> {
    let container = Container::start_with(Options::from(&self.launch)).await?;

    println!("metadata: {}", container.metadata_url());
    println!("token:    {}", container.token_url());
    info!("Press Ctrl-C to terminate the mock");

    let signal = tokio::signal::ctrl_c().await;
    container.terminate().await?;

    Ok(signal?)
  }
}
