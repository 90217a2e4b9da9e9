#![allow(dead_code)]

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scout_common::observability::{LogConfig, LogFormat};
use scout_social::medium::transport::JSON_GUARD;
use scout_social::medium::{MediumApi, MediumSettings, Pacer};
use serde_json::Value;
use wiremock::{MockServer, ResponseTemplate};

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let config = LogConfig {
            app_name: "scout-tests",
            emit_stderr: true,
            format: if std::env::var("SCOUT_LOG_FORMAT")
                .map(|raw| raw.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false)
            {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
            default_filter: "debug".into(),
            ..LogConfig::default()
        };

        scout_common::observability::init_logging(config).unwrap_or_default()
    });
}

/// A 200 response carrying `body` behind Medium's JSON guard.
pub fn guarded(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(format!("{JSON_GUARD}{body}"))
}

pub fn api_for(server: &MockServer) -> MediumApi {
    MediumApi::new(&MediumSettings {
        origin: server.uri(),
        ..MediumSettings::default()
    })
    .expect("client builds")
}

/// Pacer that only counts how often it was asked to wait.
#[derive(Default)]
pub struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}
