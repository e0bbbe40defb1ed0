//! Launchpad orchestrator
//!
//! Runs the social launchpad pipeline for one prompt:
//! - Analyze: sentiment and token extraction, requested concurrently
//! - Deploy: token contract deployment
//! - Mint: a policy share of the requested supply to the owner
//! - Announce: best-effort social post
//!
//! Analyze, deploy and mint must succeed; any failure there ends the run
//! with one transcript entry. The announcement may fail without aborting.
//! No error escapes [`LaunchpadOrchestrator::run`], and every exit path
//! clears the processing flag and the tracker's current step.

use sentinex_client::ClientError;
use sentinex_core::domain::step::{ProgressSnapshot, StepId};
use sentinex_core::domain::token::{MintFraction, MissingField, TokenDescriptor};
use sentinex_core::domain::transcript::{Link, TranscriptEntry};
use sentinex_core::dto::launchpad::{
    AnnounceRequest, DeployRequest, DeployedContract, MintRequest,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::messages;
use crate::network::NetworkProfile;
use crate::repository::LaunchpadRepository;
use crate::service::busy::{BusyFlag, BusyGuard};
use crate::service::tracker::StepTracker;
use crate::service::transcript::{NullSink, TranscriptSink, TranscriptStore};

/// Launch policy for a deployment target
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub network: NetworkProfile,
    pub mint_fraction: MintFraction,
    /// Owner used when the extraction does not provide one
    pub default_owner: Option<String>,
}

/// Everything produced by a completed launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub run_id: Uuid,
    pub token: TokenDescriptor,
    pub contract: DeployedContract,
    pub mint_amount: u64,
    pub transaction_hash: String,
    pub announced: bool,
}

/// How a call to [`LaunchpadOrchestrator::run`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Blank prompt or another run in progress; nothing happened
    Skipped,
    /// All four steps completed (the announcement may have failed)
    Completed(Box<LaunchReport>),
    /// Stopped after analysis on a precondition (sentiment or missing fields)
    Rejected,
    /// A must-succeed step failed
    Failed { step: StepId },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Reasons a run stops before completing
#[derive(Debug, Error)]
enum LaunchError {
    #[error("market sentiment is unfavorable")]
    UnfavorableSentiment,

    #[error("token request is missing {0:?}")]
    IncompleteToken(Vec<MissingField>),

    #[error("supply {supply} yields nothing to mint at {percent}%")]
    NothingToMint { supply: u64, percent: f64 },

    #[error("{step} step failed: {message}")]
    StepFailed { step: StepId, message: String },
}

impl LaunchError {
    fn step(step: StepId, err: anyhow::Error) -> Self {
        LaunchError::StepFailed {
            step,
            message: format!("{:#}", err),
        }
    }
}

/// Runs the launch pipeline and owns its transcript and progress state
pub struct LaunchpadOrchestrator {
    repository: Arc<dyn LaunchpadRepository>,
    settings: LaunchSettings,
    transcript: Mutex<TranscriptStore>,
    tracker: Mutex<StepTracker>,
    processing: BusyFlag,
    sink: Arc<dyn TranscriptSink>,
}

impl LaunchpadOrchestrator {
    /// Creates an orchestrator with an empty transcript
    pub fn new(repository: Arc<dyn LaunchpadRepository>, settings: LaunchSettings) -> Self {
        Self::with_sink(repository, settings, Arc::new(NullSink))
    }

    /// Creates an orchestrator that reports entries and progress to `sink`
    pub fn with_sink(
        repository: Arc<dyn LaunchpadRepository>,
        settings: LaunchSettings,
        sink: Arc<dyn TranscriptSink>,
    ) -> Self {
        Self {
            repository,
            settings,
            transcript: Mutex::new(TranscriptStore::with_sink(
                messages::LAUNCHPAD_GREETING,
                sink.clone(),
            )),
            tracker: Mutex::new(StepTracker::new()),
            processing: BusyFlag::default(),
            sink,
        }
    }

    pub fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_set()
    }

    /// Copy of the transcript entries
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        lock(&self.transcript).entries().to_vec()
    }

    pub fn progress(&self) -> ProgressSnapshot {
        lock(&self.tracker).snapshot()
    }

    /// Clears the transcript back to the greeting
    pub fn reset_transcript(&self) {
        lock(&self.transcript).reset();
    }

    /// Runs the pipeline for one prompt
    ///
    /// Blank prompts and calls made while another run is in progress are
    /// no-ops: the transcript and tracker are untouched and no remote call is
    /// made.
    pub async fn run(&self, prompt: &str) -> RunOutcome {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            debug!("Ignoring blank prompt");
            return RunOutcome::Skipped;
        }

        let Some(guard) = self.processing.try_acquire() else {
            debug!("Launch already in progress, ignoring prompt");
            return RunOutcome::Skipped;
        };
        let _run = RunGuard {
            orchestrator: self,
            _busy: guard,
        };

        let run_id = Uuid::new_v4();
        let span = info_span!("launch", %run_id);

        async {
            self.append(TranscriptEntry::user(prompt));
            self.with_tracker(StepTracker::begin);
            info!("Launch started");

            match self.launch(run_id, prompt).await {
                Ok(report) => {
                    info!(
                        "Launch completed: {} at {}",
                        report.token.symbol, report.contract.address
                    );
                    RunOutcome::Completed(Box::new(report))
                }
                Err(LaunchError::UnfavorableSentiment) => {
                    warn!("Launch rejected: unfavorable market sentiment");
                    self.append(TranscriptEntry::warning(messages::UNFAVORABLE_SENTIMENT));
                    RunOutcome::Rejected
                }
                Err(LaunchError::IncompleteToken(missing)) => {
                    warn!("Launch rejected: token request missing {:?}", missing);
                    self.append(TranscriptEntry::warning(messages::incomplete_token(
                        &missing,
                    )));
                    RunOutcome::Rejected
                }
                Err(LaunchError::NothingToMint { supply, percent }) => {
                    warn!("Launch stopped: supply {} yields nothing to mint", supply);
                    self.append(TranscriptEntry::error(messages::nothing_to_mint(
                        supply, percent,
                    )));
                    RunOutcome::Failed {
                        step: StepId::Mint,
                    }
                }
                Err(LaunchError::StepFailed { step, message }) => {
                    error!("Launch failed at {} step: {}", step, message);
                    self.append(TranscriptEntry::error(messages::RUN_FAILED));
                    RunOutcome::Failed { step }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn launch(&self, run_id: Uuid, prompt: &str) -> Result<LaunchReport, LaunchError> {
        let network = &self.settings.network;

        // Analyze
        let token = self.analyze(prompt).await?;
        self.complete(StepId::Analyze);
        self.append(TranscriptEntry::success(messages::SENTIMENT_FAVORABLE));

        // Deploy
        self.append(TranscriptEntry::system(messages::deploying(network)));
        let contract: DeployedContract = self
            .repository
            .deploy_contract(&DeployRequest::from(&token))
            .await
            .map_err(|e| LaunchError::step(StepId::Deploy, e))?
            .into();
        info!("Contract deployed at {}", contract.address);
        self.complete(StepId::Deploy);
        self.append(TranscriptEntry::success(messages::deployed(&token, network)));

        // Mint
        let mint_amount = self.settings.mint_fraction.apply(token.initial_supply);
        if mint_amount == 0 {
            return Err(LaunchError::NothingToMint {
                supply: token.initial_supply,
                percent: self.settings.mint_fraction.as_percent(),
            });
        }
        self.append(TranscriptEntry::system(messages::minting(
            mint_amount,
            &token.owner,
        )));
        let minted = self
            .repository
            .mint_tokens(&MintRequest {
                contract_address: contract.address.clone(),
                recipient: token.owner.clone(),
                amount: mint_amount,
                contract_code_hash: contract.code_hash.clone(),
            })
            .await
            .map_err(|e| LaunchError::step(StepId::Mint, e))?;
        let transaction_hash = minted.transaction_hash().to_string();
        let transaction_url = network.transaction_url(&transaction_hash);
        info!("Minted {} {} in {}", mint_amount, token.symbol, transaction_hash);
        self.complete(StepId::Mint);
        self.append(
            TranscriptEntry::success(messages::minted(
                mint_amount,
                &token.symbol,
                &transaction_hash,
            ))
            .with_link(Link::new(transaction_url, "View Transaction")),
        );

        // Announce (best effort)
        self.append(TranscriptEntry::system(messages::ANNOUNCING));
        let content = messages::announcement(&token, &contract, network);
        let announced = match self
            .repository
            .post_announcement(&AnnounceRequest { content })
            .await
        {
            Ok(()) => {
                self.complete(StepId::Announce);
                self.append(TranscriptEntry::success(messages::ANNOUNCED));
                true
            }
            Err(e) => {
                warn!("Announcement failed, continuing: {:#}", e);
                let rate_limited = e
                    .downcast_ref::<ClientError>()
                    .is_some_and(ClientError::is_rate_limited);
                self.complete(StepId::Announce);
                self.append(TranscriptEntry::warning(if rate_limited {
                    messages::ANNOUNCE_RATE_LIMITED
                } else {
                    messages::ANNOUNCE_FAILED
                }));
                false
            }
        };

        self.append(
            TranscriptEntry::success(messages::CONGRATULATIONS).with_link(Link::new(
                network.address_url(&contract.address),
                "View Token on Explorer",
            )),
        );
        self.append(TranscriptEntry::system(messages::summary(
            &token,
            &contract,
            mint_amount,
            announced,
        )));

        Ok(LaunchReport {
            run_id,
            token,
            contract,
            mint_amount,
            transaction_hash,
            announced,
        })
    }

    /// Requests sentiment and extraction together, then checks both
    async fn analyze(&self, prompt: &str) -> Result<TokenDescriptor, LaunchError> {
        let (sentiment, extraction) = tokio::join!(
            self.repository.analyze_sentiment(prompt),
            self.repository.extract_token(prompt)
        );
        let sentiment = sentiment.map_err(|e| LaunchError::step(StepId::Analyze, e))?;
        let extraction = extraction.map_err(|e| LaunchError::step(StepId::Analyze, e))?;

        if !sentiment.sentiment {
            return Err(LaunchError::UnfavorableSentiment);
        }

        TokenDescriptor::from_extraction(&extraction, self.settings.default_owner.as_deref())
            .map_err(LaunchError::IncompleteToken)
    }

    fn append(&self, entry: TranscriptEntry) {
        lock(&self.transcript).append(entry);
    }

    fn complete(&self, step: StepId) {
        debug!("Step {} completed", step);
        self.with_tracker(|tracker| {
            tracker.advance(step);
        });
    }

    fn with_tracker(&self, f: impl FnOnce(&mut StepTracker)) {
        let snapshot = {
            let mut tracker = lock(&self.tracker);
            f(&mut tracker);
            tracker.snapshot()
        };
        self.sink.on_progress(&snapshot);
    }
}

/// Ends the tracker's run, then releases the processing flag
struct RunGuard<'a> {
    orchestrator: &'a LaunchpadOrchestrator,
    _busy: BusyGuard<'a>,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.orchestrator.with_tracker(StepTracker::end);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
