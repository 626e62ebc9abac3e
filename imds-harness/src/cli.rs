use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;

use crate::commands;

/// Styles for CLI
fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .literal(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightCyan))),
    )
    .usage(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
}

#[derive(Debug, Parser)]
#[command(author, about, version)]
#[command(propagate_version = true)]
#[command(styles=get_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  #[clap(flatten)]
  pub verbose: Verbosity,

  /// Disable colored log output
  #[arg(long, global = true, env = "NO_COLOR")]
  pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Launch the Instance Metadata Mock and keep it running until interrupted (Ctrl-C)
  Start(commands::start::StartInput),

  /// Print the container launch request derived from the options without starting anything
  Plan(commands::plan::PlanInput),

  /// Retrieve an instance category from a running mock
  Get(commands::get::GetInput),

  /// Request an IMDSv2 session token from a running mock
  Token(commands::token::TokenInput),
}

#[cfg(test)]
mod tests {
  use std::{collections::BTreeMap, time::Duration};

  use assert_cmd::prelude::*;
  use rstest::*;

  use crate::options::{Options, SpotAction, SpotActionKind};

  fn cmd() -> std::process::Command {
    let bin_under_test = escargot::CargoBuild::new()
      .bin("imds-harness")
      .current_release()
      .current_target()
      .run()
      .unwrap();

    bin_under_test.command()
  }

  #[rstest]
  #[case(vec![], Options::default())]
  #[case(vec!["--imdsv2"], Options { imdsv2: true, ..Default::default() })]
  #[case(vec!["--port", "2233", "--pretty"], Options { port: 2233, pretty: true, ..Default::default() })]
  #[case(
    vec!["--tag", "v0.5.0", "--exclude-instance-tags"],
    Options { image_tag: "v0.5.0".to_string(), exclude_instance_tags: true, ..Default::default() }
  )]
  #[case(
    vec!["--spot", "--spot-action", "stop=200ms"],
    Options {
      spot: true,
      spot_action: SpotAction::new(SpotActionKind::Stop, Duration::from_millis(200)),
      ..Default::default()
    }
  )]
  #[case(
    vec!["--instance-tag", "Name=testing", "--instance-tag", "Environment=dev"],
    Options {
      instance_tags: BTreeMap::from([
        ("Name".to_string(), "testing".to_string()),
        ("Environment".to_string(), "dev".to_string()),
      ]),
      ..Default::default()
    }
  )]
  fn plan_test(#[case] args: Vec<&str>, #[case] options: Options) {
    let expected = serde_json::to_string_pretty(&options.launch_request()).unwrap();

    cmd()
      .env_remove("IMDS_PORT")
      .env_remove("IMDS_IMAGE")
      .env_remove("IMDS_IMAGE_TAG")
      .arg("plan")
      .args(args)
      .assert()
      .success()
      .stdout(format!("{expected}\n"));
  }

  #[rstest]
  #[case(vec!["--spot-action", "stop=1s"])]
  #[case(vec!["--spot", "--spot-action", "reboot=1s"])]
  #[case(vec!["--instance-tag", "Name"])]
  #[case(vec!["--port", "not-a-port"])]
  fn plan_invalid_test(#[case] args: Vec<&str>) {
    cmd().arg("plan").args(args).assert().failure();
  }

  #[test]
  fn it_fails_to_get_without_mock() {
    // Reserve a port and release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    cmd()
      .arg("get")
      .arg("--port")
      .arg(port.to_string())
      .arg("local-ipv4")
      .assert()
      .failure();
  }
}
