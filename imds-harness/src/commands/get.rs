use anyhow::{bail, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{
  client::{ImdsClient, ALL_CATEGORIES},
  options::DEFAULT_PORT,
};

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct GetInput {
  /// Category to retrieve (i.e. - local-ipv4). Lists all top-level categories when omitted
  pub category: Option<String>,

  /// Port on the host the mock is exposed on
  #[arg(short, long, env = "IMDS_PORT", default_value_t = DEFAULT_PORT)]
  pub port: u16,

  /// Session token, required when the mock enforces IMDSv2
  #[arg(short, long, env = "IMDS_TOKEN")]
  pub token: Option<String>,
}

impl GetInput {
  pub async fn get(&self) -> Result<()> {
    let client = ImdsClient::new(self.port)?;
    let category = self.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let token = self.token.as_deref().unwrap_or_default();

    let rsp = client.get_v2(category, token).await?;
    if !rsp.status.is_success() {
      bail!("Failed to retrieve category '{category}': {}", rsp.status);
    }

    println!("{}", rsp.body);

    Ok(())
  }
}
