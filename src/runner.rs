// Runner module - sequential list-then-detail orchestration
use crate::client::HarnessClient;
use crate::error::ClientError;

/// Outcome counters for one full run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub listed: usize,
    pub fetched: usize,
    pub failed: usize,
}

pub struct Runner {
    pub client: HarnessClient,
}

impl Runner {
    pub fn new(client: HarnessClient) -> Self {
        Self { client }
    }

    /// List perspectives, then fetch and print detail for each one in
    /// listing order.
    ///
    /// Failure policy: the listing call is strict - any error aborts the
    /// run before a single detail request goes out. Detail calls are
    /// partial-failure tolerant - a non-2xx status is logged with the id
    /// and skipped; transport errors still abort.
    pub async fn run(&self) -> Result<RunSummary, ClientError> {
        let perspectives = self.client.get_perspectives().await?;

        let mut summary = RunSummary {
            listed: perspectives.len(),
            ..Default::default()
        };

        for perspective in &perspectives {
            println!(
                "Fetching details for Perspective: {} (ID: {})",
                perspective.name, perspective.id
            );

            match self.client.get_perspective_detail(&perspective.id).await {
                Ok(body) => {
                    println!("Details for Perspective ID {}: {}", perspective.id, body);
                    summary.fetched += 1;
                }
                Err(ClientError::Api { status, body }) => {
                    eprintln!(
                        "Error: received status code {} for perspective {}: {}",
                        status, perspective.id, body
                    );
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}
