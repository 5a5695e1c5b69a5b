//! End-to-end batch runs with scripted sessions and a recording analyzer.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sentinel_analysis::Analyzer;
use sentinel_core::battery::CommandBattery;
use sentinel_core::constants::REPORT_DEVICE_NAME;
use sentinel_core::entities::Device;
use sentinel_core::enums::{AnalysisStatus, DetailStatus, DeviceStatus};
use sentinel_core::outcome::{AnalysisResult, DeviceOutcome};
use sentinel_db::service::SentinelService;
use sentinel_inspect::{
    CollectionCoordinator, InspectError, InspectionOrchestrator, InspectionStage, NoProgress,
    ProgressSink,
};
use sentinel_ssh::{CommandSession, SessionConnector, SessionError, SessionParams, SessionSettings};

// ── Fakes ──────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeConnector {
    unreachable: HashSet<String>,
    stuck: HashSet<String>,
    command_latency: Duration,
    active: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl FakeConnector {
    fn unreachable(hosts: &[&str]) -> Self {
        Self {
            unreachable: hosts.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    fn stuck(hosts: &[&str]) -> Self {
        Self {
            stuck: hosts.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

struct FakeSession {
    host: String,
    latency: Duration,
    active: Arc<AtomicUsize>,
}

impl SessionConnector for FakeConnector {
    type Session = FakeSession;

    async fn connect(&self, params: &SessionParams) -> Result<FakeSession, SessionError> {
        if self.unreachable.contains(&params.host) {
            return Err(SessionError::Connect {
                host: params.host.clone(),
                port: params.port,
                reason: "No route to host".into(),
            });
        }
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        Ok(FakeSession {
            host: params.host.clone(),
            latency: if self.stuck.contains(&params.host) {
                Duration::from_secs(3600)
            } else {
                self.command_latency
            },
            active: Arc::clone(&self.active),
        })
    }
}

impl CommandSession for FakeSession {
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(format!("{} says ok to {command}", self.host))
    }

    async fn close(self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Clone)]
struct RecordingAnalyzer {
    reply: AnalysisResult,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingAnalyzer {
    fn replying(reply: AnalysisResult) -> Self {
        Self {
            reply,
            calls: Arc::default(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Analyzer for RecordingAnalyzer {
    async fn analyze(&self, combined_transcript: &str, _model: &str) -> AnalysisResult {
        self.calls
            .lock()
            .unwrap()
            .push(combined_transcript.to_string());
        self.reply.clone()
    }
}

#[derive(Default)]
struct RecordingSink {
    completed: Mutex<Vec<(usize, usize)>>,
    finished: Mutex<Vec<String>>,
    stages: Mutex<Vec<InspectionStage>>,
}

impl ProgressSink for RecordingSink {
    fn device_finished(&self, completed: usize, total: usize, outcome: &DeviceOutcome) {
        self.completed.lock().unwrap().push((completed, total));
        self.finished
            .lock()
            .unwrap()
            .push(outcome.device.hostname.clone());
    }

    fn stage_changed(&self, stage: InspectionStage) {
        self.stages.lock().unwrap().push(stage);
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn device(n: usize) -> Device {
    Device {
        id: i64::try_from(n).unwrap(),
        hostname: format!("sw{n}"),
        ip: format!("10.0.0.{n}"),
        username: "admin".into(),
        password: "pw".into(),
        port: 22,
        platform: "huawei".into(),
        created_at: Utc::now(),
    }
}

fn devices(count: usize) -> Vec<Device> {
    (1..=count).map(device).collect()
}

fn battery() -> CommandBattery {
    CommandBattery::new(["display version", "display cpu-usage"]).unwrap()
}

fn settings() -> SessionSettings {
    SessionSettings {
        connect_timeout: Duration::from_secs(30),
        command_timeout: Duration::from_secs(30),
        delay_factor: 0,
    }
}

async fn store() -> SentinelService {
    SentinelService::new_local(":memory:").await.unwrap()
}

// ── Orchestrator ───────────────────────────────────────────────────

#[tokio::test]
async fn two_of_three_succeed() {
    let store = store().await;
    let analyzer = RecordingAnalyzer::replying(AnalysisResult::report_generated("# Fleet OK"));
    let coordinator = CollectionCoordinator::new(FakeConnector::unreachable(&["10.0.0.3"]), settings(), 5);
    let orchestrator = InspectionOrchestrator::new(coordinator, analyzer.clone(), &store);

    let summary = orchestrator
        .run(devices(3), battery(), "qwen2.5:14b", &NoProgress)
        .await
        .unwrap();

    assert_eq!(summary.total_devices, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.analysis_status, AnalysisStatus::ReportGenerated);

    let calls = analyzer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].matches("--- Device: ").count(), 2);
    assert!(calls[0].contains("--- Device: sw1 (10.0.0.1) ---"));
    assert!(!calls[0].contains("sw3"));

    let (task, details) = store.load_task(summary.task_id).await.unwrap();
    assert_eq!(task.total_devices, 3);
    assert_eq!(task.model_used, "qwen2.5:14b");
    assert_eq!(details.len(), 4);
    assert_eq!(details.iter().filter(|d| d.is_report()).count(), 1);

    let failed: Vec<_> = details
        .iter()
        .filter(|d| d.status == DetailStatus::Device(DeviceStatus::ConnectionError))
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].device_name, "sw3");
    assert!(failed[0].raw_log.starts_with("SSH Connect Error: "));
}

#[tokio::test]
async fn all_failed_skips_analysis_but_persists() {
    let store = store().await;
    let analyzer = RecordingAnalyzer::replying(AnalysisResult::report_generated("unused"));
    let coordinator = CollectionCoordinator::new(
        FakeConnector::unreachable(&["10.0.0.1", "10.0.0.2"]),
        settings(),
        5,
    );
    let orchestrator = InspectionOrchestrator::new(coordinator, analyzer.clone(), &store);
    let sink = RecordingSink::default();

    let summary = orchestrator
        .run(devices(2), battery(), "llama3", &sink)
        .await
        .unwrap();

    assert!(analyzer.calls().is_empty());
    assert_eq!(summary.analysis_status, AnalysisStatus::Skipped);

    let (task, details) = store.load_task(summary.task_id).await.unwrap();
    assert_eq!(task.total_devices, 2);
    assert_eq!(details.len(), 3);
    let report = details.iter().find(|d| d.is_report()).unwrap();
    assert_eq!(report.device_name, REPORT_DEVICE_NAME);
    assert_eq!(report.status, DetailStatus::Analysis(AnalysisStatus::Skipped));

    assert_eq!(
        *sink.stages.lock().unwrap(),
        vec![
            InspectionStage::Init,
            InspectionStage::Collecting,
            InspectionStage::AnalysisSkipped,
            InspectionStage::Persisting,
            InspectionStage::Done,
        ]
    );
}

#[tokio::test]
async fn analysis_failure_is_recorded_not_raised() {
    let store = store().await;
    let analyzer = RecordingAnalyzer::replying(AnalysisResult::timeout(300));
    let coordinator = CollectionCoordinator::new(FakeConnector::default(), settings(), 5);
    let orchestrator = InspectionOrchestrator::new(coordinator, analyzer, &store);

    let summary = orchestrator
        .run(devices(1), battery(), "deepseek-r1", &NoProgress)
        .await
        .unwrap();
    assert_eq!(summary.analysis_status, AnalysisStatus::Timeout);

    let (task, details) = store.load_task(summary.task_id).await.unwrap();
    assert_eq!(task.avg_score, 0);
    let report = details.iter().find(|d| d.is_report()).unwrap();
    assert_eq!(report.analysis().unwrap().status, AnalysisStatus::Timeout);
}

#[tokio::test]
async fn empty_inventory_is_rejected_before_work() {
    let store = store().await;
    let analyzer = RecordingAnalyzer::replying(AnalysisResult::report_generated("unused"));
    let coordinator = CollectionCoordinator::new(FakeConnector::default(), settings(), 5);
    let orchestrator = InspectionOrchestrator::new(coordinator, analyzer.clone(), &store);

    let err = orchestrator
        .run(Vec::new(), battery(), "llama3", &NoProgress)
        .await
        .unwrap_err();
    assert!(matches!(err, InspectError::NoDevices));
    assert!(analyzer.calls().is_empty());
    assert!(store.list_tasks(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_model_is_rejected_before_work() {
    let store = store().await;
    let connector = FakeConnector::default();
    let peak = Arc::clone(&connector.peak);
    let coordinator = CollectionCoordinator::new(connector, settings(), 5);
    let analyzer = RecordingAnalyzer::replying(AnalysisResult::report_generated("unused"));
    let orchestrator = InspectionOrchestrator::new(coordinator, analyzer, &store);

    let err = orchestrator
        .run(devices(2), battery(), "  ", &NoProgress)
        .await
        .unwrap_err();
    assert!(matches!(err, InspectError::NoModel));
    assert_eq!(peak.load(Ordering::SeqCst), 0);
    assert!(store.list_tasks(10).await.unwrap().is_empty());
}

// ── Coordinator ────────────────────────────────────────────────────

#[rstest]
#[case(1)]
#[case(5)]
#[case(13)]
#[tokio::test]
async fn one_outcome_per_device(#[case] count: usize) {
    let coordinator = CollectionCoordinator::new(FakeConnector::unreachable(&["10.0.0.2"]), settings(), 5);
    let sink = RecordingSink::default();
    let report = coordinator
        .collect_all(devices(count).into(), Arc::new(battery()), &sink)
        .await;

    assert_eq!(report.outcomes.len(), count);
    let names: HashSet<_> = report.outcomes.iter().map(|o| o.device.hostname.clone()).collect();
    assert_eq!(names, devices(count).into_iter().map(|d| d.hostname).collect());

    let completed = sink.completed.lock().unwrap().clone();
    let expected: Vec<_> = (1..=count).map(|n| (n, count)).collect();
    assert_eq!(completed, expected);
}

#[tokio::test(start_paused = true)]
async fn never_more_than_five_sessions_at_once() {
    let connector = FakeConnector {
        command_latency: Duration::from_secs(2),
        ..FakeConnector::default()
    };
    let peak = Arc::clone(&connector.peak);
    let active = Arc::clone(&connector.active);
    let coordinator = CollectionCoordinator::new(connector, settings(), 5);

    let report = coordinator
        .collect_all(devices(12).into(), Arc::new(battery()), &NoProgress)
        .await;

    assert_eq!(report.succeeded(), 12);
    assert_eq!(peak.load(Ordering::SeqCst), 5);
    assert_eq!(active.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn every_device_stuck_times_out() {
    let connector = FakeConnector {
        command_latency: Duration::from_secs(3600),
        ..FakeConnector::default()
    };
    let coordinator = CollectionCoordinator::new(
        connector,
        SessionSettings {
            command_timeout: Duration::from_secs(30),
            ..settings()
        },
        2,
    );

    let report = coordinator
        .collect_all(devices(4).into(), Arc::new(battery()), &NoProgress)
        .await;

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.failed(), 4);
    assert!(!report.has_transcript());
    assert!(
        report
            .outcomes
            .iter()
            .all(|o| o.outcome.raw_log().contains("timed out after 30s"))
    );
}

#[tokio::test(start_paused = true)]
async fn stuck_device_does_not_stall_others() {
    let coordinator = CollectionCoordinator::new(FakeConnector::stuck(&["10.0.0.1"]), settings(), 2);
    let sink = RecordingSink::default();

    let started = tokio::time::Instant::now();
    let report = coordinator
        .collect_all(devices(6).into(), Arc::new(battery()), &sink)
        .await;

    assert_eq!(report.succeeded(), 5);
    assert_eq!(report.failed(), 1);
    assert!(started.elapsed() < Duration::from_secs(60));

    let stuck = report
        .outcomes
        .iter()
        .find(|o| o.device.hostname == "sw1")
        .unwrap();
    assert!(!stuck.outcome.is_success());
    assert!(stuck.outcome.raw_log().contains("timed out after 30s"));
    assert!(
        report
            .outcomes
            .iter()
            .filter(|o| o.device.hostname != "sw1")
            .all(|o| o.outcome.is_success())
    );

    let finished = sink.finished.lock().unwrap().clone();
    assert_eq!(finished.len(), 6);
    assert_eq!(finished.last().map(String::as_str), Some("sw1"));
}
