use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cases::{MalformedTestCase, TestCase, MALFORMED_PAYLOADS, PROBLEMATIC_TEXTS};
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::translate::{RawResponse, TranslateApi, TranslateRequest};
use crate::utils::clean_text_for_translation;

/// What happened to one well-formed case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    Translated(String),
    HttpError { status: u16, body: String },
    ConnectionError,
    Timeout,
    Unexpected(String),
}

impl CaseOutcome {
    pub fn classify(result: &Result<RawResponse, ProbeError>) -> Self {
        match result {
            Ok(raw) if raw.is_ok() => match raw.decode() {
                Ok(decoded) => CaseOutcome::Translated(
                    decoded.translated_text.unwrap_or_else(|| "N/A".to_string()),
                ),
                Err(e) => CaseOutcome::Unexpected(e.to_string()),
            },
            Ok(raw) => CaseOutcome::HttpError {
                status: raw.status,
                body: raw.body.clone(),
            },
            Err(ProbeError::Connection { .. }) => CaseOutcome::ConnectionError,
            Err(ProbeError::Timeout { .. }) => CaseOutcome::Timeout,
            Err(e) => CaseOutcome::Unexpected(e.to_string()),
        }
    }
}

/// Outcome counters for one run. Reported in the log only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub translated: usize,
    pub http_errors: usize,
    pub connection_errors: usize,
    pub timeouts: usize,
    pub unexpected: usize,
    pub malformed_answered: usize,
    pub malformed_failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &CaseOutcome) {
        match outcome {
            CaseOutcome::Translated(_) => self.translated += 1,
            CaseOutcome::HttpError { .. } => self.http_errors += 1,
            CaseOutcome::ConnectionError => self.connection_errors += 1,
            CaseOutcome::Timeout => self.timeouts += 1,
            CaseOutcome::Unexpected(_) => self.unexpected += 1,
        }
    }
}

/// Sends every test case to the service, one at a time, and writes a
/// human-readable report to `out`.
pub struct Runner<W: Write> {
    api: Arc<dyn TranslateApi>,
    config: ProbeConfig,
    out: W,
    summary: RunSummary,
}

impl<W: Write> Runner<W> {
    pub fn new(api: Arc<dyn TranslateApi>, config: ProbeConfig, out: W) -> Self {
        Self {
            api,
            config,
            out,
            summary: RunSummary::default(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run both passes and print the banners. Request failures never end
    /// the run early; only a failing output stream does.
    pub async fn run(&mut self) -> io::Result<RunSummary> {
        writeln!(self.out, "Transflow API Test Suite")?;
        writeln!(self.out, "{}", "=".repeat(30))?;

        self.run_problematic_texts().await?;
        self.run_malformed_payloads().await?;

        writeln!(self.out, "\n{}", "=".repeat(60))?;
        writeln!(self.out, "Test suite completed!")?;
        self.out.flush()?;

        let summary = &self.summary;
        info!(
            "Run finished: {} translated, {} http errors, {} connection errors, {} timeouts, \
             {} unexpected; malformed {} answered, {} failed",
            summary.translated,
            summary.http_errors,
            summary.connection_errors,
            summary.timeouts,
            summary.unexpected,
            summary.malformed_answered,
            summary.malformed_failed
        );
        Ok(self.summary.clone())
    }

    pub async fn run_problematic_texts(&mut self) -> io::Result<()> {
        writeln!(self.out, "Testing Transflow API with problematic texts...")?;
        writeln!(self.out, "{}", "=".repeat(60))?;

        for (i, case) in PROBLEMATIC_TEXTS.iter().enumerate() {
            self.run_case(i + 1, case).await?;
        }
        Ok(())
    }

    async fn run_case(&mut self, number: usize, case: &TestCase) -> io::Result<()> {
        writeln!(self.out, "\n{}. Test: {}", number, case.name)?;
        writeln!(self.out, "   Description: {}", case.description)?;
        writeln!(self.out, "   Original text: {:?}", case.text)?;
        if self.config.cleaning_preview {
            writeln!(
                self.out,
                "   Cleaned text: {:?}",
                clean_text_for_translation(case.text)
            )?;
        }

        let request = TranslateRequest {
            text: case.text.to_string(),
            to: self.config.target_lang.clone(),
        };
        debug!("Sending case {} ({})", number, case.name);
        let result = self.api.translate(&request).await;

        if let Ok(raw) = &result {
            writeln!(self.out, "   Status code: {}", raw.status)?;
        }

        let outcome = CaseOutcome::classify(&result);
        match &outcome {
            CaseOutcome::Translated(text) => {
                writeln!(self.out, "   ✅ Success! Translated text: {}", text)?;
            }
            CaseOutcome::HttpError { status, body } => {
                warn!("Case {} answered with HTTP {}", case.name, status);
                writeln!(self.out, "   ❌ Error: {}", body)?;
            }
            CaseOutcome::ConnectionError => {
                writeln!(
                    self.out,
                    "   ❌ Connection error: Make sure the API is running on {}",
                    self.api.endpoint()
                )?;
            }
            CaseOutcome::Timeout => {
                writeln!(self.out, "   ❌ Timeout: Request took too long")?;
            }
            CaseOutcome::Unexpected(message) => {
                writeln!(self.out, "   ❌ Unexpected error: {}", message)?;
            }
        }
        if let Err(e) = &result {
            warn!("Case {} failed: {}", case.name, e);
        }
        self.summary.record(&outcome);

        writeln!(self.out, "   {}", "-".repeat(50))?;
        Ok(())
    }

    pub async fn run_malformed_payloads(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\nTesting JSON validation...")?;
        writeln!(self.out, "{}", "=".repeat(40))?;

        for case in MALFORMED_PAYLOADS.iter() {
            self.run_malformed(case).await?;
        }
        Ok(())
    }

    async fn run_malformed(&mut self, case: &MalformedTestCase) -> io::Result<()> {
        writeln!(self.out, "\nTest: {}", case.name)?;
        writeln!(self.out, "Payload: {}", case.payload)?;
        debug!("Sending {}, service should answer: {}", case.name, case.expected_error);

        match self.api.post_raw(case.payload).await {
            Ok(raw) => {
                writeln!(self.out, "Status: {}", raw.status)?;
                writeln!(self.out, "Response: {}", raw.body)?;
                self.summary.malformed_answered += 1;
            }
            Err(e) => {
                warn!("Malformed case {} failed: {}", case.name, e);
                writeln!(self.out, "Error: {}", e)?;
                self.summary.malformed_failed += 1;
            }
        }
        Ok(())
    }
}
