//! Recording test doubles for the provider traits.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use cxsdk::{
    ConfigurationProvider, EngineConfiguration, LoginService, LoginType, Preset, PresetProvider, ProjectProvider,
    Providers, SdkConfiguration, SdkError, SdkResult, Session, Team, TeamProvider,
};

pub const SERVER_URL: &str = "http://some-fake-url.com";
pub const PROJECT_NAME: &str = "projectName";
pub const TEAM_ID: &str = "1";

pub fn sample_session() -> Session {
    let mut cookies = HashMap::new();
    cookies.insert("key".to_string(), "value".to_string());
    Session::new("sessionId", cookies, true, true)
}

pub fn credentials_config() -> SdkConfiguration {
    SdkConfiguration::new(SERVER_URL, LoginType::Credentials).with_credentials("user", "pass")
}

/// Login service that counts calls per flow. Sessions get ids `sid-1`, `sid-2`, ... unless a
/// fixed session is configured.
#[derive(Default)]
pub struct FakeLogin {
    pub credentials: AtomicUsize,
    pub sso: AtomicUsize,
    pub saml: AtomicUsize,
    issued: AtomicUsize,
    pub fixed: Mutex<Option<Session>>,
    pub failure: Mutex<Option<SdkError>>,
}

impl FakeLogin {
    pub fn returning(session: Session) -> Self {
        let fake = Self::default();
        *fake.fixed.lock() = Some(session);
        fake
    }

    pub fn failing(err: SdkError) -> Self {
        let fake = Self::default();
        *fake.failure.lock() = Some(err);
        fake
    }

    pub fn total(&self) -> usize {
        self.credentials.load(Ordering::SeqCst) + self.sso.load(Ordering::SeqCst) + self.saml.load(Ordering::SeqCst)
    }

    fn issue(&self) -> SdkResult<Session> {
        if let Some(err) = self.failure.lock().clone() {
            return Err(err);
        }
        if let Some(s) = self.fixed.lock().clone() {
            return Ok(s);
        }
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Session { session_id: format!("sid-{n}"), ..Default::default() })
    }
}

impl LoginService for FakeLogin {
    fn login(&self) -> SdkResult<Session> {
        self.credentials.fetch_add(1, Ordering::SeqCst);
        self.issue()
    }
    fn sso_login(&self) -> SdkResult<Session> {
        self.sso.fetch_add(1, Ordering::SeqCst);
        self.issue()
    }
    fn saml_login(&self) -> SdkResult<Session> {
        self.saml.fetch_add(1, Ordering::SeqCst);
        self.issue()
    }
}

/// Queue of outcomes for one provider method; falls back to `fallback` once drained.
pub struct Scripted<T: Clone> {
    queue: Mutex<VecDeque<SdkResult<T>>>,
    fallback: T,
    pub calls: AtomicUsize,
    pub sessions: Mutex<Vec<String>>,
}

impl<T: Clone> Scripted<T> {
    pub fn new(fallback: T) -> Self {
        Self { queue: Mutex::new(VecDeque::new()), fallback, calls: AtomicUsize::new(0), sessions: Mutex::new(Vec::new()) }
    }

    pub fn push(&self, outcome: SdkResult<T>) {
        self.queue.lock().push_back(outcome);
    }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

    fn next(&self, session: &Session) -> SdkResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sessions.lock().push(session.session_id.clone());
        self.queue.lock().pop_front().unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

pub struct FakeDomain {
    pub configurations: Scripted<Vec<EngineConfiguration>>,
    pub presets: Scripted<Vec<Preset>>,
    pub teams: Scripted<Vec<Team>>,
    pub projects: Scripted<bool>,
    pub validated: Mutex<Vec<(String, String)>>,
}

impl Default for FakeDomain {
    fn default() -> Self {
        Self {
            configurations: Scripted::new(vec![EngineConfiguration::new("id", "name")]),
            presets: Scripted::new(vec![Preset::new("id", "name")]),
            teams: Scripted::new(vec![Team::new("id", "name")]),
            projects: Scripted::new(true),
            validated: Mutex::new(Vec::new()),
        }
    }
}

impl ConfigurationProvider for FakeDomain {
    fn get_engine_configurations(&self, session: &Session) -> SdkResult<Vec<EngineConfiguration>> {
        self.configurations.next(session)
    }
}

impl PresetProvider for FakeDomain {
    fn get_presets(&self, session: &Session) -> SdkResult<Vec<Preset>> {
        self.presets.next(session)
    }
}

impl TeamProvider for FakeDomain {
    fn get_teams(&self, session: &Session) -> SdkResult<Vec<Team>> {
        self.teams.next(session)
    }
}

impl ProjectProvider for FakeDomain {
    fn is_valid_project_name(&self, session: &Session, project_name: &str, team_id: &str) -> SdkResult<bool> {
        self.validated.lock().push((project_name.to_string(), team_id.to_string()));
        self.projects.next(session)
    }
}

pub fn providers(login: &Arc<FakeLogin>, domain: &Arc<FakeDomain>) -> Providers {
    Providers::new(login.clone(), domain.clone(), domain.clone(), domain.clone(), domain.clone())
}
