use std::{collections::BTreeMap, fmt, str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Result};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::METADATA_PATH;

/// Image of the Instance Metadata Mock pulled when launching the container
pub const DEFAULT_IMAGE: &str = "ghcr.io/purpleclay/imds-mock";

/// Version of the Instance Metadata Mock image
pub const DEFAULT_IMAGE_TAG: &str = "latest";

/// Port on the host mapped to the mock unless overridden
pub const DEFAULT_PORT: u16 = 1338;

/// Port the mock listens on within the container
pub const CONTAINER_PORT: u16 = 1338;

/// The type of spot interruption raised by the mock
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotActionKind {
  Terminate,
  Stop,
  Hibernate,
}

impl Default for SpotActionKind {
  fn default() -> Self {
    Self::Terminate
  }
}

impl fmt::Display for SpotActionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = match self {
      SpotActionKind::Terminate => "terminate",
      SpotActionKind::Stop => "stop",
      SpotActionKind::Hibernate => "hibernate",
    };

    write!(f, "{kind}")
  }
}

impl FromStr for SpotActionKind {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "terminate" => Ok(SpotActionKind::Terminate),
      "stop" => Ok(SpotActionKind::Stop),
      "hibernate" => Ok(SpotActionKind::Hibernate),
      _ => Err(anyhow!("Unsupported spot action '{s}', expected one of terminate, stop or hibernate")),
    }
  }
}

/// Controls both the type and initial delay of the spot interruption notice
///
/// Expressed on the command line of the mock as `<action>=<delay>`, i.e. `stop=200ms`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpotAction {
  pub action: SpotActionKind,
  pub delay: Duration,
}

impl SpotAction {
  pub fn new(action: SpotActionKind, delay: Duration) -> Self {
    Self { action, delay }
  }
}

impl fmt::Display for SpotAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.action, format_duration(self.delay))
  }
}

impl FromStr for SpotAction {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let (action, delay) = s
      .split_once('=')
      .ok_or_else(|| anyhow!("Spot action '{s}' must be in the form <action>=<delay>"))?;

    Ok(SpotAction {
      action: action.parse()?,
      delay: parse_duration(delay)?,
    })
  }
}

impl TryFrom<String> for SpotAction {
  type Error = anyhow::Error;

  fn try_from(value: String) -> Result<Self> {
    value.parse()
  }
}

impl From<SpotAction> for String {
  fn from(value: SpotAction) -> Self {
    value.to_string()
  }
}

/// Parse a duration in the format understood by the mock, i.e. `200ms`, `1.5s` or `1m30s`
///
/// Each segment is a decimal number followed by one of `ns`, `us` (`µs`), `ms`, `s`, `m` or `h`
pub fn parse_duration(input: &str) -> Result<Duration> {
  let input = input.trim();
  if input.is_empty() {
    bail!("Duration cannot be empty");
  }
  if input == "0" {
    return Ok(Duration::ZERO);
  }

  let is_number = |c: char| c.is_ascii_digit() || c == '.';
  let mut rest = input;
  let mut nanos: u128 = 0;

  while !rest.is_empty() {
    let unit_start = rest
      .find(|c: char| !is_number(c))
      .ok_or_else(|| anyhow!("Duration '{input}' is missing a unit"))?;
    let (number, tail) = rest.split_at(unit_start);
    let (unit, tail) = tail.split_at(tail.find(is_number).unwrap_or(tail.len()));

    let scale = unit_nanos(unit).ok_or_else(|| anyhow!("Unsupported unit '{unit}' in duration '{input}'"))?;
    let segment = segment_nanos(number, scale).ok_or_else(|| anyhow!("Invalid duration '{input}'"))?;
    nanos = nanos
      .checked_add(segment)
      .ok_or_else(|| anyhow!("Duration '{input}' overflows"))?;
    rest = tail;
  }

  let nanos = u64::try_from(nanos).map_err(|_| anyhow!("Duration '{input}' overflows"))?;
  Ok(Duration::from_nanos(nanos))
}

fn unit_nanos(unit: &str) -> Option<u128> {
  match unit {
    "ns" => Some(1),
    "us" | "µs" | "μs" => Some(1_000),
    "ms" => Some(1_000_000),
    "s" => Some(1_000_000_000),
    "m" => Some(60 * 1_000_000_000),
    "h" => Some(3600 * 1_000_000_000),
    _ => None,
  }
}

/// Nanoseconds of a single `<number><unit>` segment; digits beyond nanosecond precision are truncated
fn segment_nanos(number: &str, scale: u128) -> Option<u128> {
  let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
  if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
    return None;
  }

  let whole = match whole {
    "" => 0,
    digits => digits.parse::<u128>().ok()?.checked_mul(scale)?,
  };

  let fraction = &fraction[..fraction.len().min(18)];
  let fraction = match fraction {
    "" => 0,
    digits => digits.parse::<u128>().ok()? * scale / 10u128.pow(digits.len() as u32),
  };

  whole.checked_add(fraction)
}

/// Format a duration with the largest unit that represents it exactly
pub fn format_duration(duration: Duration) -> String {
  match duration.as_nanos() {
    0 => "0s".to_string(),
    n if n % 1_000_000_000 == 0 => format!("{}s", n / 1_000_000_000),
    n if n % 1_000_000 == 0 => format!("{}ms", n / 1_000_000),
    n if n % 1_000 == 0 => format!("{}us", n / 1_000),
    n => format!("{n}ns"),
  }
}

/// Configurable options when launching the Instance Metadata Mock container
///
/// https://docs.purpleclay.dev/imds-mock/
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
  /// Name of the Instance Metadata Mock image
  pub image: String,

  /// Version of the Instance Metadata Mock image
  pub image_tag: String,

  /// Port on the host that is mapped to the default port of the container
  pub port: u16,

  /// Enforce IMDSv2, requiring a session token on every metadata request
  ///
  /// A token is requested by issuing a PUT to the token endpoint with a TTL
  /// between 1 and 21600 seconds:
  ///
  /// `PUT localhost:1338/latest/api/token -H "X-aws-ec2-metadata-token-ttl-seconds: 21600"`
  pub imdsv2: bool,

  /// Do not expose instance tags through the `tags/instance` category,
  /// mirroring the default behaviour of an EC2 instance
  pub exclude_instance_tags: bool,

  /// Instance tags exposed through the `tags/instance` category, replacing any defaults
  pub instance_tags: BTreeMap<String, String>,

  /// Pretty print any JSON response
  pub pretty: bool,

  /// Simulate a spot instance and its interruption notice
  pub spot: bool,

  /// Type and delay of the spot interruption notice. Only used when `spot` is enabled
  pub spot_action: SpotAction,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      image: DEFAULT_IMAGE.to_string(),
      image_tag: DEFAULT_IMAGE_TAG.to_string(),
      port: DEFAULT_PORT,
      imdsv2: false,
      exclude_instance_tags: false,
      instance_tags: BTreeMap::new(),
      pretty: false,
      spot: false,
      spot_action: SpotAction::default(),
    }
  }
}

impl Options {
  /// Image reference in the form `repository:tag`
  pub fn image_ref(&self) -> String {
    format!("{}:{}", self.image, self.image_tag)
  }

  /// Command line flags passed to the mock
  pub fn flags(&self) -> Vec<String> {
    let mut flags = Vec::new();

    if self.exclude_instance_tags {
      flags.push("--exclude-instance-tags".to_string());
    }

    if !self.instance_tags.is_empty() {
      flags.push("--instance-tags".to_string());
      flags.push(key_value_list(&self.instance_tags));
    }

    if self.pretty {
      flags.push("--pretty".to_string());
    }

    if self.spot {
      flags.push("--spot".to_string());
      flags.push("--spot-action".to_string());
      flags.push(self.spot_action.to_string());
    }

    if self.imdsv2 {
      flags.push("--imdsv2".to_string());
    }

    flags
  }

  /// Status returned by the metadata root once the mock is ready
  ///
  /// With IMDSv2 enforced, an unauthenticated request is rejected with a 401
  pub fn ready_status(&self) -> StatusCode {
    match self.imdsv2 {
      true => StatusCode::UNAUTHORIZED,
      false => StatusCode::OK,
    }
  }

  pub fn launch_request(&self) -> LaunchRequest {
    LaunchRequest {
      image: self.image_ref(),
      cmd: self.flags(),
      host_port: self.port,
      container_port: format!("{CONTAINER_PORT}/tcp"),
      ready_path: METADATA_PATH.to_string(),
      ready_status: self.ready_status().as_u16(),
    }
  }
}

fn key_value_list(map: &BTreeMap<String, String>) -> String {
  map
    .iter()
    .map(|(key, value)| format!("{key}={value}"))
    .collect::<Vec<_>>()
    .join(",")
}

/// Everything required to create, start and wait on the mock container
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
  pub image: String,
  pub cmd: Vec<String>,
  pub host_port: u16,
  pub container_port: String,
  pub ready_path: String,
  pub ready_status: u16,
}

impl LaunchRequest {
  /// Readiness predicate applied to the status of the metadata root
  pub fn is_ready(&self, status: StatusCode) -> bool {
    status.as_u16() == self.ready_status
  }
}

#[cfg(test)]
mod tests {
  use rstest::*;

  use super::*;

  #[test]
  fn it_defaults_options() {
    let options = Options::default();

    assert_eq!(options.image_ref(), "ghcr.io/purpleclay/imds-mock:latest");
    assert_eq!(options.port, 1338);
    assert!(options.flags().is_empty());
    assert_eq!(options.spot_action.to_string(), "terminate=0s");
  }

  #[test]
  fn it_creates_launch_request() {
    let options = Options {
      image_tag: "v0.5.0".to_string(),
      port: 2233,
      imdsv2: true,
      exclude_instance_tags: true,
      instance_tags: BTreeMap::from([
        ("Name".to_string(), "testing".to_string()),
        ("Environment".to_string(), "dev".to_string()),
      ]),
      pretty: true,
      spot: true,
      spot_action: SpotAction::new(SpotActionKind::Stop, Duration::from_millis(200)),
      ..Default::default()
    };

    let request = options.launch_request();
    insta::assert_debug_snapshot!(request);
  }

  #[rstest]
  #[case(Options { imdsv2: true, ..Default::default() }, vec!["--imdsv2"])]
  #[case(Options { pretty: true, ..Default::default() }, vec!["--pretty"])]
  #[case(Options { exclude_instance_tags: true, ..Default::default() }, vec!["--exclude-instance-tags"])]
  #[case(Options { spot: true, ..Default::default() }, vec!["--spot", "--spot-action", "terminate=0s"])]
  #[case(
    Options {
      spot_action: SpotAction::new(SpotActionKind::Hibernate, Duration::from_secs(5)),
      ..Default::default()
    },
    vec![]
  )]
  #[case(
    Options {
      instance_tags: BTreeMap::from([("Role".to_string(), "devops".to_string())]),
      ..Default::default()
    },
    vec!["--instance-tags", "Role=devops"]
  )]
  fn flags_test(#[case] options: Options, #[case] expected: Vec<&str>) {
    assert_eq!(options.flags(), expected);
  }

  #[test]
  fn it_sorts_instance_tags() {
    let options = Options {
      instance_tags: BTreeMap::from([
        ("Role".to_string(), "devops".to_string()),
        ("Environment".to_string(), "development".to_string()),
        ("Name".to_string(), "mock-ec2".to_string()),
      ]),
      ..Default::default()
    };

    assert_eq!(
      options.flags(),
      vec!["--instance-tags", "Environment=development,Name=mock-ec2,Role=devops"]
    );
  }

  #[rstest]
  #[case(false, StatusCode::OK, true)]
  #[case(false, StatusCode::UNAUTHORIZED, false)]
  #[case(true, StatusCode::UNAUTHORIZED, true)]
  #[case(true, StatusCode::OK, false)]
  #[case(true, StatusCode::SERVICE_UNAVAILABLE, false)]
  fn readiness_test(#[case] imdsv2: bool, #[case] status: StatusCode, #[case] expected: bool) {
    let request = Options {
      imdsv2,
      ..Default::default()
    }
    .launch_request();

    assert_eq!(request.is_ready(status), expected);
  }

  #[rstest]
  #[case("0", Duration::ZERO)]
  #[case("0s", Duration::ZERO)]
  #[case("200ms", Duration::from_millis(200))]
  #[case("90s", Duration::from_secs(90))]
  #[case("2m", Duration::from_secs(120))]
  #[case("1h", Duration::from_secs(3600))]
  #[case("750us", Duration::from_micros(750))]
  #[case(" 15ns ", Duration::from_nanos(15))]
  #[case("1m30s", Duration::from_secs(90))]
  #[case("1.5s", Duration::from_millis(1500))]
  #[case(".5s", Duration::from_millis(500))]
  #[case("1h2m3.25s", Duration::from_millis(3_723_250))]
  #[case("2µs", Duration::from_micros(2))]
  fn parse_duration_test(#[case] input: &str, #[case] expected: Duration) {
    assert_eq!(parse_duration(input).unwrap(), expected);
  }

  #[rstest]
  #[case("")]
  #[case("ms")]
  #[case("10")]
  #[case("10d")]
  #[case("-5s")]
  #[case(".s")]
  #[case("1.2.3s")]
  #[case("1s-")]
  fn parse_duration_invalid_test(#[case] input: &str) {
    assert!(parse_duration(input).is_err());
  }

  #[rstest]
  #[case(Duration::ZERO, "0s")]
  #[case(Duration::from_secs(90), "90s")]
  #[case(Duration::from_millis(1500), "1500ms")]
  #[case(Duration::from_micros(42), "42us")]
  #[case(Duration::from_nanos(1_000_001), "1000001ns")]
  fn format_duration_test(#[case] duration: Duration, #[case] expected: &str) {
    assert_eq!(format_duration(duration), expected);
  }

  #[rstest]
  #[case("stop=200ms", SpotActionKind::Stop, Duration::from_millis(200))]
  #[case("terminate=0s", SpotActionKind::Terminate, Duration::ZERO)]
  #[case("Hibernate=1m", SpotActionKind::Hibernate, Duration::from_secs(60))]
  #[case("stop=1m30s", SpotActionKind::Stop, Duration::from_secs(90))]
  fn spot_action_test(#[case] input: &str, #[case] action: SpotActionKind, #[case] delay: Duration) {
    let result: SpotAction = input.parse().unwrap();
    assert_eq!(result, SpotAction::new(action, delay));
  }

  #[rstest]
  #[case("stop")]
  #[case("reboot=1s")]
  #[case("stop=soon")]
  fn spot_action_invalid_test(#[case] input: &str) {
    assert!(input.parse::<SpotAction>().is_err());
  }

  #[test]
  fn it_deserializes_partial_options() {
    let options: Options = serde_json::from_str(r#"{"imdsv2": true, "spot_action": "stop=5s"}"#).unwrap();

    assert!(options.imdsv2);
    assert_eq!(options.port, DEFAULT_PORT);
    assert_eq!(options.spot_action, SpotAction::new(SpotActionKind::Stop, Duration::from_secs(5)));
  }
}
