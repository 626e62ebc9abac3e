use std::{
  collections::HashMap,
  time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use aws_config::imds::client::Client;
use bollard::{
  container::{
    Config, InspectContainerOptions, RemoveContainerOptions, StartContainerOptions, StopContainerOptions,
  },
  image::CreateImageOptions,
  models::{HostConfig, PortBinding},
  Docker,
};
use futures_util::StreamExt;
use http::Uri;
use tracing::{debug, info, warn};

use crate::{
  client::{ImdsClient, MetadataResponse, ALL_CATEGORIES, MAX_TOKEN_TTL_SECONDS},
  options::{LaunchRequest, Options},
};

/// Maximum time to wait for the mock to pass its readiness check
const STARTUP_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Label recording the host port on every container created by the harness
pub const PORT_LABEL: &str = "imds-harness.port";

/// A running instance of the Instance Metadata Mock (imds-mock) container
///
/// As the caller it is your responsibility to terminate the container by
/// invoking `terminate()`; nothing is cleaned up when the handle is dropped.
#[derive(Debug)]
pub struct Container {
  docker: Docker,
  id: String,
  options: Options,
  client: ImdsClient,
}

impl Container {
  /// Create and start the mock with the default options
  ///
  /// Once started, IMDS is accessible at `http://localhost:1338/latest/meta-data/`
  /// supporting both IMDSv1 and IMDSv2. Metadata can be retrieved using any of the documented categories:
  /// https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instancedata-data-categories.html
  pub async fn start() -> Result<Self> {
    Self::start_with(Options::default()).await
  }

  /// Create and start the mock, with its launch behaviour configured through `options`
  ///
  /// The image is pulled if not already present. The container is only returned once
  /// the metadata root responds with the status expected for the given options.
  pub async fn start_with(options: Options) -> Result<Self> {
    let request = options.launch_request();
    let client = ImdsClient::new(options.port)?;
    let docker = Docker::connect_with_local_defaults().context("Failed to connect to the Docker daemon")?;

    pull_image(&docker, &options).await?;
    let id = create_container(&docker, &request).await?;

    let container = Container {
      client,
      docker,
      id,
      options,
    };

    if let Err(e) = container.launch(&request).await {
      warn!("Removing container {} after failed launch", container.id);
      if let Err(rm) = container.remove().await {
        warn!("{rm:#}");
      }
      return Err(e);
    }

    info!("IMDS mock {} available at {}", container.id, container.metadata_url());
    Ok(container)
  }

  /// Behaves the same as `start` but panics if the container cannot be started
  pub async fn must_start() -> Self {
    Self::must_start_with(Options::default()).await
  }

  /// Behaves the same as `start_with` but panics if the container cannot be started
  pub async fn must_start_with(options: Options) -> Self {
    let description = format!("{options:?}");
    match Self::start_with(options).await {
      Ok(container) => container,
      Err(e) => panic!("imds-harness: must_start_with({description}): {e:#}"),
    }
  }

  async fn launch(&self, request: &LaunchRequest) -> Result<()> {
    self
      .docker
      .start_container(&self.id, None::<StartContainerOptions<String>>)
      .await
      .with_context(|| format!("Failed to start container {}", self.id))?;

    self.wait_until_ready(request).await
  }

  /// Poll the metadata root until it responds with the expected status
  async fn wait_until_ready(&self, request: &LaunchRequest) -> Result<()> {
    let start = Instant::now();

    loop {
      match self.client.get(ALL_CATEGORIES).await {
        Ok(rsp) if request.is_ready(rsp.status) => {
          debug!("Container {} ready after {:?}", self.id, start.elapsed());
          return Ok(());
        }
        Ok(rsp) => debug!("Container {} not ready: {}", self.id, rsp.status),
        Err(e) => {
          debug!("Container {} not ready: {e:#}", self.id);
          if let Some(code) = self.exit_code().await? {
            bail!("Container {} exited with code {code} before becoming ready", self.id);
          }
        }
      }

      if start.elapsed() >= STARTUP_TIMEOUT {
        bail!(
          "Timed out after {STARTUP_TIMEOUT:?} waiting for {} to respond with {}",
          self.client.metadata_url(),
          request.ready_status
        );
      }

      tokio::time::sleep(POLL_INTERVAL).await;
    }
  }

  /// Exit code of the container, or `None` while it is still running
  async fn exit_code(&self) -> Result<Option<i64>> {
    let inspect = self
      .docker
      .inspect_container(&self.id, None::<InspectContainerOptions>)
      .await
      .with_context(|| format!("Failed to inspect container {}", self.id))?;

    let state = inspect.state.unwrap_or_default();
    match state.running {
      Some(true) => Ok(None),
      _ => Ok(Some(state.exit_code.unwrap_or_default())),
    }
  }

  /// Stop and remove the container along with any anonymous volumes
  pub async fn terminate(self) -> Result<()> {
    self.remove().await?;
    info!("Terminated container {}", self.id);

    Ok(())
  }

  /// Stop the container without removing it; subsequent requests fail to connect
  pub async fn stop(&self) -> Result<()> {
    self
      .docker
      .stop_container(&self.id, Some(StopContainerOptions { t: 1 }))
      .await
      .with_context(|| format!("Failed to stop container {}", self.id))?;
    debug!("Stopped container {}", self.id);

    Ok(())
  }

  async fn remove(&self) -> Result<()> {
    let options = RemoveContainerOptions {
      force: true,
      v: true,
      ..Default::default()
    };

    self
      .docker
      .remove_container(&self.id, Some(options))
      .await
      .with_context(|| format!("Failed to remove container {}", self.id))
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  /// Options the container was launched with
  pub fn options(&self) -> &Options {
    &self.options
  }

  /// URL for querying the default instance metadata endpoint
  ///
  /// `http://localhost:<port>/latest/meta-data/`
  pub fn metadata_url(&self) -> &str {
    self.client.metadata_url()
  }

  /// URL for requesting an IMDSv2 session token
  ///
  /// `http://localhost:<port>/latest/api/token`
  pub fn token_url(&self) -> &str {
    self.client.token_url()
  }

  pub fn client(&self) -> &ImdsClient {
    &self.client
  }

  /// Retrieve an instance category, see `ImdsClient::get`
  pub async fn get(&self, category: &str) -> Result<MetadataResponse> {
    self.client.get(category).await
  }

  /// Retrieve an instance category with a session token, see `ImdsClient::get_v2`
  pub async fn get_v2(&self, category: &str, token: &str) -> Result<MetadataResponse> {
    self.client.get_v2(category, token).await
  }

  /// Request a session token, see `ImdsClient::token_with_ttl`
  pub async fn token_with_ttl(&self, ttl: u32) -> Result<MetadataResponse> {
    self.client.token_with_ttl(ttl).await
  }

  /// AWS SDK IMDS client pointed at the mock
  ///
  /// Lets code built on `aws-config` be exercised against the container
  pub async fn sdk_client(&self) -> Result<Client> {
    let client = Client::builder()
      .endpoint(self.client.endpoint().parse::<Uri>()?)
      .max_attempts(1)
      .token_ttl(Duration::from_secs(MAX_TOKEN_TTL_SECONDS.into()))
      .connect_timeout(Duration::from_secs(1))
      .read_timeout(Duration::from_secs(1))
      .build()
      .await?;

    Ok(client)
  }
}

/// Pull the image unless it is already present on the host
async fn pull_image(docker: &Docker, options: &Options) -> Result<()> {
  let image = options.image_ref();
  if docker.inspect_image(&image).await.is_ok() {
    debug!("Image found: {image}");
    return Ok(());
  }

  info!("Image not found - pulling {image}");
  let pull = CreateImageOptions {
    from_image: options.image.as_str(),
    tag: options.image_tag.as_str(),
    ..Default::default()
  };

  let mut stream = docker.create_image(Some(pull), None, None);
  while let Some(progress) = stream.next().await {
    let progress = progress.with_context(|| format!("Failed to pull image {image}"))?;
    if let Some(status) = progress.status {
      debug!("{image}: {status}");
    }
  }

  Ok(())
}

async fn create_container(docker: &Docker, request: &LaunchRequest) -> Result<String> {
  let port_bindings = HashMap::from([(
    request.container_port.clone(),
    Some(vec![PortBinding {
      host_ip: None,
      host_port: Some(request.host_port.to_string()),
    }]),
  )]);

  let config = Config {
    image: Some(request.image.clone()),
    cmd: Some(request.cmd.clone()),
    exposed_ports: Some(HashMap::from([(request.container_port.clone(), HashMap::new())])),
    labels: Some(HashMap::from([(PORT_LABEL.to_string(), request.host_port.to_string())])),
    host_config: Some(HostConfig {
      port_bindings: Some(port_bindings),
      ..Default::default()
    }),
    ..Default::default()
  };

  let rsp = docker
    .create_container::<String, String>(None, config)
    .await
    .with_context(|| format!("Failed to create container from {}", request.image))?;
  for warning in rsp.warnings {
    warn!("{warning}");
  }
  debug!("Created container {} with command {:?}", rsp.id, request.cmd);

  Ok(rsp.id)
}
