/*!
 * Support Kit Self-Test Program
 *
 * Runs a fixed set of checks against the library's public surface and writes
 * a JSON report. Exits non-zero when any check fails.
 *
 * Set RUST_LOG to see library tracing output, and SUPPORT_KIT_RESULTS to
 * choose where the report is written.
 */

#![warn(clippy::all, clippy::pedantic)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use colored::Colorize;
use futures::FutureExt;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use support_kit::helpers::{self, CipherAlgorithm, Encrypted, IvSource};
use support_kit::{
    Arr, EventEmitter, Exception, LengthAwarePaginator, Listener, Objectifiable, Paginator, Str,
    SupportConfig, VERSION,
};

const RESULTS_FILE: &str = "support-kit-results.json";

/* Test result structures */
#[derive(Debug, Serialize)]
struct CheckResult {
    name: &'static str,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct TestResults {
    version: &'static str,
    environment: String,
    checks: Vec<CheckResult>,
    #[serde(rename = "allPassed")]
    all_passed: bool,
}

struct Logger;

impl Logger {
    fn heading(msg: &str) {
        println!("{}", msg.blue().bold());
    }

    fn test(name: &str, passed: bool, error_detail: Option<&str>) {
        if passed {
            println!("  {}: {}", "✅ PASS".green(), name);
        } else {
            println!("  {}: {}", "❌ FAIL".red(), name);
            if let Some(error) = error_detail {
                println!("    {}", error.red());
            }
        }
    }
}

struct SelfTestRunner {
    config: SupportConfig,
    checks: Vec<CheckResult>,
}

impl SelfTestRunner {
    fn new() -> Result<Self> {
        let config = SupportConfig::from_env()
            .context("Failed to read configuration from the environment")?
            // keep bcrypt fast for the self-test
            .with_hash_rounds(4);
        Ok(Self {
            config,
            checks: Vec::new(),
        })
    }

    fn record(&mut self, name: &'static str, outcome: Result<bool>) {
        let (passed, error) = match outcome {
            Ok(true) => (true, None),
            Ok(false) => (false, Some("unexpected result".to_string())),
            Err(e) => (false, Some(format!("{e:#}"))),
        };
        Logger::test(name, passed, error.as_deref());
        self.checks.push(CheckResult { name, passed, error });
    }

    async fn run_all_tests(&mut self) -> Result<bool> {
        Logger::heading(&format!("Support Kit v{VERSION} self-test ({})", self.config.environment));

        let strings = Self::check_strings();
        self.record("strings", strings);
        let arrays = Self::check_arrays();
        self.record("arrays", arrays);
        let pagination = Self::check_pagination();
        self.record("pagination", pagination);
        let exception = Self::check_exception();
        self.record("exception", exception);
        let crypto = self.check_crypto().await;
        self.record("crypto", crypto);
        let events = Self::check_events().await;
        self.record("events", events);

        self.save_results()?;
        Ok(self.display_summary())
    }

    fn check_strings() -> Result<bool> {
        let decoded = Str::base64_decode(&Str::base64_encode("support kit"))?;
        Ok(decoded == "support kit"
            && Str::camel("user_first_name") == "userFirstName"
            && Str::kebab("UserFirstName") == "user-first-name"
            && Str::path("a//b\\c/", true) == "/a/b/c"
            && Str::matches("users.123.name", "users.*.name")
            && !Str::matches("users(1)", "users.*")
            && Str::is_valid_email("ops@example.com")
            && Str::is_localhost("http://localhost:8080"))
    }

    fn check_arrays() -> Result<bool> {
        let groups = Arr::group_by(vec![1, 2, 3, 4, 5], |n| n % 2 == 0);
        let odd = groups.get(&false).map(Vec::as_slice);
        Ok(odd == Some(&[1, 3, 5][..])
            && Arr::unique(vec!["a", "b", "a"]) == vec!["a", "b"]
            && Arr::first(&[] as &[u8], Some(&9)) == Some(&9))
    }

    fn check_pagination() -> Result<bool> {
        let mut page = LengthAwarePaginator::new(vec!["x"; 10], 25, 10, 2);
        page.set_path("/users").add_query("q", "ann");
        let object = serde_json::to_value(&page).context("Failed to serialize paginator")?;
        Ok(object["last_page"] == json!(3)
            && object["from"] == json!(11)
            && object["next_page_url"] == json!("/users?q=ann&page=3"))
    }

    fn check_exception() -> Result<bool> {
        let mut exception = Exception::with_status("Not here", 404);
        exception.set_payload(json!({"id": 1}));
        let object = exception.to_object();
        Ok(object.error == Some("Not Found") && object.data["id"] == json!(1))
    }

    async fn check_crypto(&self) -> Result<bool> {
        let hashed = helpers::hash("s3cret", &self.config).await?;
        let verified = helpers::verify_hash("s3cret", &hashed).await?;

        let key = "0123456789abcdef0123456789abcdef";
        let sealed = helpers::encrypt("payload", key, CipherAlgorithm::Aes256Gcm, IvSource::Random)?;
        let reopened = Encrypted::from_base64(CipherAlgorithm::Aes256Gcm, &sealed.to_base64())?;
        Ok(verified && helpers::decrypt(&reopened, key)? == "payload")
    }

    async fn check_events() -> Result<bool> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = Listener::new(move |event, data: u32| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().await.push(format!("{event}:{data}"));
                Ok(())
            }
            .boxed()
        });

        let mut emitter = EventEmitter::new();
        emitter.on(["created", "updated"], &listener);
        emitter.emit("created", 1).await?;
        emitter.emit("updated", 2).await?;
        emitter.remove_listeners(Some("updated"), Some(&listener));
        emitter.emit("updated", 3).await?;

        let seen = seen.lock().await;
        Ok(*seen == ["created:1", "updated:2"])
    }

    fn save_results(&self) -> Result<()> {
        let path = std::env::var("SUPPORT_KIT_RESULTS").unwrap_or_else(|_| RESULTS_FILE.to_string());
        let results = TestResults {
            version: VERSION,
            environment: self.config.environment.to_string(),
            checks: self
                .checks
                .iter()
                .map(|c| CheckResult {
                    name: c.name,
                    passed: c.passed,
                    error: c.error.clone(),
                })
                .collect(),
            all_passed: self.checks.iter().all(|c| c.passed),
        };

        let json_output = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        fs::write(&path, json_output).with_context(|| format!("Cannot create results file: {path}"))?;
        println!("\n{} {}", "📁 Results saved to:".blue(), path);
        Ok(())
    }

    fn display_summary(&self) -> bool {
        let total = self.checks.len();
        let passed = self.checks.iter().filter(|c| c.passed).count();

        Logger::heading("\n═══════════════════════════════════════════");
        let line = format!("Checks Passed: {passed}/{total}");
        if passed == total {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
            for check in self.checks.iter().filter(|c| !c.passed) {
                println!("  - {}", check.name);
            }
        }
        Logger::heading("═══════════════════════════════════════════");

        passed == total
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut runner = SelfTestRunner::new().context("Failed to initialize test runner")?;
    let all_passed = runner.run_all_tests().await.context("Test execution failed")?;

    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}
