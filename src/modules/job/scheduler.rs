use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Command telling the scheduler to rescan the job queue tables.
pub const WAKE_COMMAND: &str = "database";

const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum SchedulerError {
    #[error("Cannot connect to scheduler at {addr}: {source}")]
    Connect { addr: String, source: std::io::Error },
    #[error("Scheduler connection error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scheduler did not answer within {0:?}")]
    Timeout(Duration),
    #[error("{message}")]
    Rejected { message: String, output: String },
}

impl SchedulerError {
    /// Error text surfaced to the caller: the scheduler's reported error
    /// concatenated with whatever output it produced before failing.
    pub fn report(&self) -> String {
        match self {
            SchedulerError::Rejected { message, output } => format!("{message}\n{output}"),
            other => other.to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SchedulerClient {
    /// Sends one command line and collects the scheduler's answer up to its
    /// terminal `end`/`received` line.
    async fn communicate(&self, command: &str) -> Result<String, SchedulerError>;
}

#[derive(Clone)]
pub struct TcpSchedulerClient {
    host: String,
    port: u16,
}

impl TcpSchedulerClient {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }
}

#[async_trait::async_trait]
impl SchedulerClient for TcpSchedulerClient {
    async fn communicate(&self, command: &str) -> Result<String, SchedulerError> {
        let addr = format!("{}:{}", self.host, self.port);
        let exchange = async {
            let stream = TcpStream::connect(&addr)
                .await
                .map_err(|source| SchedulerError::Connect { addr: addr.clone(), source })?;
            let (read_half, mut write_half) = stream.into_split();

            write_half.write_all(command.as_bytes()).await?;
            write_half.write_all(b"\n").await?;

            let mut lines = BufReader::new(read_half).lines();
            let mut output = Vec::new();
            let mut error: Option<String> = None;
            while let Some(line) = lines.next_line().await? {
                let line = line.trim();
                if line == "received" || line == "end" {
                    break;
                }
                if let Some(rest) = line.strip_prefix("ERROR:") {
                    error = Some(rest.trim().to_string());
                } else if !line.is_empty() {
                    output.push(line.to_string());
                }
            }

            let output = output.join("\n");
            match error {
                Some(message) => Err(SchedulerError::Rejected { message, output }),
                None => Ok(output),
            }
        };

        match tokio::time::timeout(EXCHANGE_TIMEOUT, exchange).await {
            Ok(result) => result,
            Err(_) => Err(SchedulerError::Timeout(EXCHANGE_TIMEOUT)),
        }
    }
}
