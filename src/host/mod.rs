//! Host container detection
//!
//! FlashDrill may run embedded in a host container that shows a splash
//! screen until the drill reports it is ready. At startup the adapter asks
//! the host whether we are embedded, picks the environment label, and sends
//! the ready signal. Failures are logged and leave the standalone label.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::drill::TextSurface;

/// Environment variable the bundled host integration reads by default
pub const DEFAULT_HOST_ENV_VAR: &str = "FLASHDRILL_HOST_READY";

pub const EMBEDDED_LABEL: &str = "mini app";
pub const STANDALONE_LABEL: &str = "web";

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Host interface unavailable: {0}")]
    Unavailable(String),

    #[error("Host rejected the call: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the drill is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    Embedded,
    Standalone,
}

impl HostMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Embedded => EMBEDDED_LABEL,
            Self::Standalone => STANDALONE_LABEL,
        }
    }
}

/// The two calls a host container offers
#[async_trait]
pub trait HostContainer: Send + Sync {
    /// Whether this process is embedded in the host
    async fn is_embedded(&self) -> Result<bool, HostError>;

    /// Tell the host we are ready so it can dismiss its splash
    async fn ready(&self) -> Result<(), HostError>;
}

/// Detect the host and send the ready signal when embedded.
///
/// Returns `None` when detection fails; the caller keeps its default
/// (standalone) presentation. A failed ready signal is logged but the
/// detected mode is still returned.
pub async fn detect<H: HostContainer + ?Sized>(host: &H) -> Option<HostMode> {
    let embedded = match host.is_embedded().await {
        Ok(embedded) => embedded,
        Err(e) => {
            log::error!("Host detection failed, staying standalone: {}", e);
            return None;
        }
    };
    log::info!("Embedded in host container: {}", embedded);

    if !embedded {
        return Some(HostMode::Standalone);
    }

    match host.ready().await {
        Ok(()) => log::info!("Ready signal sent, host splash should be hidden"),
        Err(e) => log::error!("Failed to signal host readiness: {}", e),
    }
    Some(HostMode::Embedded)
}

/// Run detection once and write the resulting label onto `label`.
/// The label is left untouched when detection fails.
pub async fn announce<H: HostContainer + ?Sized>(
    host: &H,
    label: Option<&mut dyn TextSurface>,
) -> Option<HostMode> {
    let mode = detect(host).await;
    if let (Some(mode), Some(label)) = (mode, label) {
        label.set_text(mode.label());
    }
    mode
}

/// Host integration through an environment variable.
///
/// The host sets the variable to a file path before launching us. Being
/// set and non-empty means embedded; `ready` appends a line to that file.
#[derive(Debug, Clone)]
pub struct EnvHost {
    var: String,
}

impl EnvHost {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    fn ready_path(&self) -> Result<Option<PathBuf>, HostError> {
        match std::env::var(&self.var) {
            Ok(v) if v.trim().is_empty() => Ok(None),
            Ok(v) => Ok(Some(PathBuf::from(v.trim()))),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(HostError::Unavailable(format!(
                "{} is not valid unicode",
                self.var
            ))),
        }
    }
}

impl Default for EnvHost {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_ENV_VAR)
    }
}

#[async_trait]
impl HostContainer for EnvHost {
    async fn is_embedded(&self) -> Result<bool, HostError> {
        Ok(self.ready_path()?.is_some())
    }

    async fn ready(&self) -> Result<(), HostError> {
        let path = self
            .ready_path()?
            .ok_or_else(|| HostError::Rejected(format!("{} is not set", self.var)))?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(b"ready\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct FakeHost {
        embedded: Option<bool>,
        ready_fails: bool,
        ready_calls: AtomicUsize,
    }

    impl FakeHost {
        fn new(embedded: Option<bool>) -> Self {
            Self {
                embedded,
                ready_fails: false,
                ready_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl HostContainer for FakeHost {
        async fn is_embedded(&self) -> Result<bool, HostError> {
            self.embedded
                .ok_or_else(|| HostError::Unavailable("no sdk".to_string()))
        }

        async fn ready(&self) -> Result<(), HostError> {
            self.ready_calls.fetch_add(1, Ordering::SeqCst);
            if self.ready_fails {
                Err(HostError::Rejected("splash already gone".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_embedded_sends_ready() {
        let host = FakeHost::new(Some(true));
        let mut label = String::from(STANDALONE_LABEL);

        let mode = announce(&host, Some(&mut label)).await;

        assert_eq!(mode, Some(HostMode::Embedded));
        assert_eq!(label, "mini app");
        assert_eq!(host.ready_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_standalone_skips_ready() {
        let host = FakeHost::new(Some(false));
        let mut label = String::new();

        let mode = announce(&host, Some(&mut label)).await;

        assert_eq!(mode, Some(HostMode::Standalone));
        assert_eq!(label, "web");
        assert_eq!(host.ready_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_detection_failure_keeps_label() {
        let host = FakeHost::new(None);
        let mut label = String::from("web");

        let mode = announce(&host, Some(&mut label)).await;

        assert_eq!(mode, None);
        assert_eq!(label, "web");
        assert_eq!(host.ready_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ready_failure_is_not_fatal() {
        let mut host = FakeHost::new(Some(true));
        host.ready_fails = true;

        assert_eq!(detect(&host).await, Some(HostMode::Embedded));
    }

    #[tokio::test]
    async fn test_missing_label_surface() {
        let host = FakeHost::new(Some(false));
        assert_eq!(announce(&host, None).await, Some(HostMode::Standalone));
    }

    #[tokio::test]
    async fn test_env_host_unset_is_standalone() {
        let host = EnvHost::new("FLASHDRILL_TEST_HOST_UNSET");
        std::env::remove_var("FLASHDRILL_TEST_HOST_UNSET");

        assert!(!host.is_embedded().await.unwrap());
        assert!(matches!(host.ready().await, Err(HostError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_env_host_writes_ready_file() {
        let temp = TempDir::new().unwrap();
        let ready_file = temp.path().join("ready");
        std::env::set_var("FLASHDRILL_TEST_HOST_SET", &ready_file);
        let host = EnvHost::new("FLASHDRILL_TEST_HOST_SET");

        assert_eq!(detect(&host).await, Some(HostMode::Embedded));
        let written = std::fs::read_to_string(&ready_file).unwrap();
        assert_eq!(written, "ready\n");

        std::env::remove_var("FLASHDRILL_TEST_HOST_SET");
    }
}
