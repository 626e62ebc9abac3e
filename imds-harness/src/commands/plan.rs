use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{commands::LaunchArgs, options::Options};

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct PlanInput {
  #[command(flatten)]
  pub launch: LaunchArgs,
}

impl PlanInput {
  /// Print the launch request as JSON without contacting Docker
  pub fn plan(&self) -> Result<()> {
    let request = Options::from(&self.launch).launch_request();
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
  }
}
