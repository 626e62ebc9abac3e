pub mod get;
pub mod plan;
pub mod start;
pub mod token;

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::options::{Options, SpotAction, DEFAULT_IMAGE, DEFAULT_IMAGE_TAG, DEFAULT_PORT};

/// Options controlling how the Instance Metadata Mock is launched
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct LaunchArgs {
  /// Name of the Instance Metadata Mock image
  #[arg(long, env = "IMDS_IMAGE", default_value = DEFAULT_IMAGE)]
  pub image: String,

  /// Version of the Instance Metadata Mock image
  #[arg(long, env = "IMDS_IMAGE_TAG", default_value = DEFAULT_IMAGE_TAG)]
  pub tag: String,

  /// Port on the host mapped to the mock
  #[arg(short, long, env = "IMDS_PORT", default_value_t = DEFAULT_PORT)]
  pub port: u16,

  /// Enforce IMDSv2, requiring a session token on every metadata request
  #[arg(long)]
  pub imdsv2: bool,

  /// Do not expose instance tags through the tags/instance category
  #[arg(long)]
  pub exclude_instance_tags: bool,

  /// Instance tag exposed through the tags/instance category (repeatable)
  #[arg(long = "instance-tag", value_name = "KEY=VALUE", value_parser = parse_key_value)]
  pub instance_tags: Vec<(String, String)>,

  /// Pretty print any JSON response
  #[arg(long)]
  pub pretty: bool,

  /// Simulate a spot instance and its interruption notice
  #[arg(long)]
  pub spot: bool,

  /// Type and delay of the spot interruption notice (i.e. - stop=200ms, hibernate=1m30s)
  ///
  /// Supported actions are terminate, stop and hibernate. Defaults to terminate=0s
  #[arg(long, value_name = "ACTION=DELAY", requires = "spot")]
  pub spot_action: Option<SpotAction>,
}

impl From<&LaunchArgs> for Options {
  fn from(args: &LaunchArgs) -> Self {
    Options {
      image: args.image.to_owned(),
      image_tag: args.tag.to_owned(),
      port: args.port,
      imdsv2: args.imdsv2,
      exclude_instance_tags: args.exclude_instance_tags,
      instance_tags: args.instance_tags.iter().cloned().collect::<BTreeMap<_, _>>(),
      pretty: args.pretty,
      spot: args.spot,
      spot_action: args.spot_action.unwrap_or_default(),
    }
  }
}

fn parse_key_value(s: &str) -> Result<(String, String)> {
  match s.split_once('=') {
    Some(("", _)) => Err(anyhow!("Invalid KEY=VALUE: key cannot be empty in `{s}`")),
    Some((key, value)) => Ok((key.to_string(), value.to_string())),
    None => Err(anyhow!("Invalid KEY=VALUE: no `=` found in `{s}`")),
  }
}
