//! Network reachability probing.
//!
//! [`ReachabilityProbe`] answers a single "are we online" question with an
//! HTTP `HEAD` request. [`NetworkMonitor`] runs the probe on a background
//! thread with its own Tokio runtime: it answers fetch requests by id and
//! polls on an interval, reporting only changes.

use std::thread;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::types::errors::ReachabilityError;
use crate::types::settings::ReachabilitySettings;
use crate::types::shell::Reachability;

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ReachabilityProbe {
    client: reqwest::Client,
    url: String,
}

impl ReachabilityProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ReachabilityError> {
        // Proxy environment variables are ignored; only the direct link is probed.
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .map_err(|e| ReachabilityError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_settings(settings: &ReachabilitySettings) -> Result<Self, ReachabilityError> {
        Self::new(
            settings.probe_url.clone(),
            Duration::from_secs(settings.probe_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Any HTTP response counts as connected, whatever its status code.
    /// Transport failures are "not connected"; a request that cannot even be
    /// built is indeterminate.
    pub async fn check(&self) -> Reachability {
        match self.client.head(self.url.as_str()).send().await {
            Ok(response) => {
                tracing::trace!(status = %response.status(), "probe answered");
                Some(true)
            }
            Err(e) if e.is_builder() => {
                tracing::warn!(url = %self.url, error = %e, "probe request is invalid");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "probe failed");
                Some(false)
            }
        }
    }
}

/// What the monitor thread hands back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorReport {
    Fetched {
        request_id: u64,
        status: Reachability,
    },
    Changed(Reachability),
}

#[derive(Debug)]
enum MonitorCommand {
    Fetch(u64),
    Shutdown,
}

pub struct NetworkMonitor {
    commands: mpsc::UnboundedSender<MonitorCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

/// Cloneable sender for fetch requests, usable after the monitor is moved.
#[derive(Clone)]
pub struct MonitorHandle {
    commands: mpsc::UnboundedSender<MonitorCommand>,
}

impl MonitorHandle {
    /// Asks for a one-shot check; the answer arrives as `MonitorReport::Fetched`.
    pub fn request_fetch(&self, request_id: u64) -> Result<(), ReachabilityError> {
        self.commands
            .send(MonitorCommand::Fetch(request_id))
            .map_err(|_| ReachabilityError::MonitorStopped)
    }
}

impl NetworkMonitor {
    /// Starts the monitor thread. `report` is called on that thread.
    pub fn spawn<F>(
        probe: ReachabilityProbe,
        poll_interval: Duration,
        report: F,
    ) -> Result<Self, ReachabilityError>
    where
        F: Fn(MonitorReport) + Send + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ReachabilityError::RuntimeInit(e.to_string()))?;

        let (tx, rx) = mpsc::unbounded_channel();
        let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);

        let thread = thread::Builder::new()
            .name("network-monitor".to_string())
            .spawn(move || runtime.block_on(run_monitor(probe, poll_interval, rx, report)))
            .map_err(|e| ReachabilityError::RuntimeInit(e.to_string()))?;

        tracing::debug!(?poll_interval, "network monitor started");
        Ok(Self {
            commands: tx,
            thread: Some(thread),
        })
    }

    pub fn handle(&self) -> MonitorHandle {
        MonitorHandle {
            commands: self.commands.clone(),
        }
    }

    pub fn request_fetch(&self, request_id: u64) -> Result<(), ReachabilityError> {
        self.handle().request_fetch(request_id)
    }

    /// Stops the thread and waits for it. An in-flight probe is abandoned.
    pub fn shutdown(&mut self) {
        let _ = self.commands.send(MonitorCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("network monitor thread panicked");
            }
        }
    }
}

impl Drop for NetworkMonitor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_monitor<F>(
    probe: ReachabilityProbe,
    poll_interval: Duration,
    mut commands: mpsc::UnboundedReceiver<MonitorCommand>,
    report: F,
) where
    F: Fn(MonitorReport),
{
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_reported: Reachability = None;

    loop {
        let mut waiting = Vec::new();
        let polled = tokio::select! {
            command = commands.recv() => match command {
                Some(MonitorCommand::Fetch(request_id)) => {
                    waiting.push(request_id);
                    false
                }
                Some(MonitorCommand::Shutdown) | None => break,
            },
            _ = ticker.tick() => true,
        };

        let Some(status) = check_or_stop(&probe, &mut commands, &mut waiting).await else {
            break;
        };
        for request_id in waiting {
            report(MonitorReport::Fetched { request_id, status });
        }
        if polled && status.is_some() && status != last_reported {
            last_reported = status;
            report(MonitorReport::Changed(status));
        }
    }
    tracing::debug!("network monitor stopped");
}

/// Runs one probe while still listening for commands. Fetches that arrive in
/// the meantime share its result. Returns `None` on shutdown, abandoning the
/// in-flight request.
async fn check_or_stop(
    probe: &ReachabilityProbe,
    commands: &mut mpsc::UnboundedReceiver<MonitorCommand>,
    waiting: &mut Vec<u64>,
) -> Option<Reachability> {
    let check = probe.check();
    tokio::pin!(check);
    loop {
        tokio::select! {
            status = &mut check => return Some(status),
            command = commands.recv() => match command {
                Some(MonitorCommand::Fetch(request_id)) => waiting.push(request_id),
                Some(MonitorCommand::Shutdown) | None => return None,
            },
        }
    }
}
