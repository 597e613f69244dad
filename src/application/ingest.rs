use crate::config::IngestConfig;
use crate::domain::keys::parse_key;
use crate::domain::listing::{ListingPage, PaginationState};
use crate::error::ServiceError;
use crate::ports::listing::ObjectLister;
use crate::ports::sink::RecordSink;
use tracing::{debug, info, warn};

/// Counters for a finished walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub pages: usize,
    pub keys_seen: u64,
    pub inserted: u64,
    pub parse_failures: u64,
    pub insert_failures: u64,
    /// Progress lines logged
    pub progress_lines: u64,
    /// Token to resume from when the walk stopped at the page cap
    pub last_continuation_token: Option<String>,
}

/// Walks a bucket listing page by page and feeds every parsed key to a sink.
pub struct IngestService<L, S> {
    lister: L,
    sink: S,
    config: IngestConfig,
    state: PaginationState,
    report: IngestReport,
}

impl<L, S> IngestService<L, S>
where
    L: ObjectLister,
    S: RecordSink,
{
    pub fn new(lister: L, sink: S, config: IngestConfig) -> Self {
        Self {
            lister,
            sink,
            config,
            state: PaginationState::default(),
            report: IngestReport::default(),
        }
    }

    /// Run the walk to completion.
    ///
    /// Stops when the listing is exhausted or `max_pages` listing calls have
    /// been made. A listing error ends the walk and is returned; parse and
    /// insert failures only skip the key.
    pub async fn run(mut self) -> Result<IngestReport, ServiceError> {
        while self.state.page_count < self.config.max_pages {
            let page = self
                .lister
                .fetch_page(
                    &self.config.bucket_name,
                    &self.config.prefix,
                    self.state.continuation_token.clone(),
                )
                .await?;

            self.process_page(&page).await;
            self.state.advance(&page);
            self.report.pages = self.state.page_count;
            self.report.last_continuation_token = self.state.continuation_token.clone();

            if self.config.verbose {
                info!(
                    page = self.state.page_count,
                    keys = self.state.total_processed,
                    inserted = self.report.inserted,
                    "Page done"
                );
            }

            if self.state.is_done(&page, self.config.max_pages) {
                break;
            }
            if self.state.continuation_token.is_none() {
                warn!(
                    page = self.state.page_count,
                    "Listing is truncated but has no continuation token, stopping"
                );
                break;
            }
        }

        Ok(self.report)
    }

    async fn process_page(&mut self, page: &ListingPage) {
        for key in &page.keys {
            self.report.keys_seen += 1;

            let record = match parse_key(key, self.config.key_offset) {
                Ok(record) => record,
                Err(e) => {
                    debug!(key = %key, error = %e, "Skipping key");
                    self.report.parse_failures += 1;
                    continue;
                }
            };

            if self.config.progress_every > 0
                && self.report.keys_seen % self.config.progress_every == 0
            {
                self.report.progress_lines += 1;
                info!(
                    count = self.report.keys_seen,
                    key = %record.source_key,
                    prefix = %record.prefix,
                    video_id = %record.identifier,
                    "Progress"
                );
            }

            match self.sink.insert(&record, &self.config.bucket_name).await {
                Ok(()) => self.report.inserted += 1,
                Err(e) => {
                    warn!(key = %record.source_key, error = %e, "DB insert error");
                    self.report.insert_failures += 1;
                }
            }
        }
    }
}
