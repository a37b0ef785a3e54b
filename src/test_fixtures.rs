//! Shared test fixtures for the runner, check run and pipeline tests.
//!
//! Test doubles for the engine, configuration resolver and HTTP transport,
//! so the orchestration can be exercised without a network or real rules.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;

use crate::config::{ConfigResolver, LintConfig, RuleSeverity};
use crate::engine::{LineAndCharacter, LintEngine, LintResult, RuleFailure};
use crate::error::{LintCheckError, Result};
use crate::github::{ApiRequest, HttpClient};

/// A scripted finding: rule, severity, zero-based line, message.
pub type Finding = (&'static str, &'static str, usize, &'static str);

/// Engine that reports canned findings per file name and records calls.
#[derive(Default)]
pub struct ScriptedEngine {
    findings: HashMap<String, Vec<Finding>>,
    failing: Option<String>,
    seen: RefCell<Vec<String>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_findings(mut self, file_name: &str, findings: &[Finding]) -> Self {
        self.findings
            .insert(file_name.to_string(), findings.to_vec());
        self
    }

    /// Fail with an engine error when `file_name` is linted.
    pub fn failing_on(mut self, file_name: &str) -> Self {
        self.failing = Some(file_name.to_string());
        self
    }

    /// File names passed to `lint`, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl LintEngine for ScriptedEngine {
    fn lint(
        &self,
        file_name: &str,
        _content: &str,
        _config: &LintConfig,
        result: &mut LintResult,
    ) -> Result<()> {
        self.seen.borrow_mut().push(file_name.to_string());
        if self.failing.as_deref() == Some(file_name) {
            return Err(LintCheckError::Engine(format!("cannot lint {file_name}")));
        }

        for (rule, severity, line, message) in self.findings.get(file_name).into_iter().flatten() {
            let position = LineAndCharacter::new(*line, 0);
            result.record(RuleFailure::new(
                file_name,
                position,
                position,
                *rule,
                RuleSeverity::from(*severity),
                *message,
            ));
        }
        Ok(())
    }
}

/// Resolver returning the same configuration for every file.
#[derive(Default)]
pub struct StaticResolver {
    config: LintConfig,
}

impl StaticResolver {
    pub const fn new(config: LintConfig) -> Self {
        Self { config }
    }
}

impl ConfigResolver for StaticResolver {
    fn resolve(&self, _base: Option<&Path>, _target: &Path) -> Result<LintConfig> {
        Ok(self.config.clone())
    }

    fn read_base(&self, _base: Option<&Path>) -> Result<LintConfig> {
        Ok(self.config.clone())
    }
}

enum Scripted {
    Body(String),
    Status(u16),
    Unreachable,
}

/// HTTP client answering from a queue of scripted responses.
///
/// Every request is recorded along with the token it was sent with. Once the
/// queue is empty, requests fail as unreachable.
#[derive(Default)]
pub struct MockHttpClient {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(ApiRequest, String)>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: &str) -> Self {
        self.push(Scripted::Body(body.to_string()))
    }

    pub fn fail_status(self, status: u16) -> Self {
        self.push(Scripted::Status(status))
    }

    pub fn fail_transport(self) -> Self {
        self.push(Scripted::Unreachable)
    }

    fn push(self, response: Scripted) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    /// Body of the `index`th request parsed as JSON.
    pub fn body(&self, index: usize) -> serde_json::Value {
        serde_json::from_str(&self.requests()[index].body).unwrap()
    }
}

impl HttpClient for MockHttpClient {
    fn send(&self, request: &ApiRequest, token: &str) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), token.to_string()));

        match self.responses.lock().unwrap().pop_front() {
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Status(status)) => Err(LintCheckError::Api {
                status,
                body: r#"{"message":"scripted failure"}"#.to_string(),
            }),
            Some(Scripted::Unreachable) | None => Err(LintCheckError::Transport(format!(
                "Failed to connect to {}",
                request.url
            ))),
        }
    }
}
