use anyhow::{bail, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{
  client::{ImdsClient, MAX_TOKEN_TTL_SECONDS},
  options::DEFAULT_PORT,
};

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct TokenInput {
  /// Port on the host the mock is exposed on
  #[arg(short, long, env = "IMDS_PORT", default_value_t = DEFAULT_PORT)]
  pub port: u16,

  /// Lifetime of the session token in seconds (1 - 21600)
  #[arg(long, default_value_t = MAX_TOKEN_TTL_SECONDS)]
  pub ttl: u32,
}

impl TokenInput {
  pub async fn token(&self) -> Result<()> {
    let client = ImdsClient::new(self.port)?;
    let rsp = client.token_with_ttl(self.ttl).await?;
    if !rsp.status.is_success() {
      bail!("Failed to request session token with TTL {}: {}", self.ttl, rsp.status);
    }

    println!("{}", rsp.body);

    Ok(())
  }
}
