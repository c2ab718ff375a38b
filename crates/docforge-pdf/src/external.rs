//! External converter backends
//!
//! Each backend runs one command line with `{input}` and `{output}`
//! placeholders replaced by the staged HTML path and the destination path.
//! A run is bounded by the job timeout; an overdue child is killed.

use std::ffi::OsString;
use std::io::{ErrorKind, Read};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::backend::{PdfBackend, PdfJob, RenderOutcome};

const INPUT_PLACEHOLDER: &str = "{input}";
const OUTPUT_PLACEHOLDER: &str = "{output}";
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Names of the built-in external converters, in default priority order
pub const BUILTIN_CONVERTERS: [&str; 3] = ["wkhtmltopdf", "weasyprint", "pandoc"];

/// A backend that shells out to a converter program
#[derive(Debug, Clone)]
pub struct CommandBackend {
    name: &'static str,
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    /// Create a backend running `program args...`
    pub fn new(
        name: &'static str,
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name,
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `wkhtmltopdf --quiet <html> <pdf>`
    pub fn wkhtmltopdf() -> Self {
        Self::new(
            "wkhtmltopdf",
            "wkhtmltopdf",
            ["--quiet", INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER],
        )
    }

    /// `weasyprint <html> <pdf>`
    pub fn weasyprint() -> Self {
        Self::new("weasyprint", "weasyprint", [INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER])
    }

    /// `pandoc <html> -o <pdf>`
    pub fn pandoc() -> Self {
        Self::new(
            "pandoc",
            "pandoc",
            [INPUT_PLACEHOLDER, "-o", OUTPUT_PLACEHOLDER],
        )
    }

    /// Look up a built-in converter by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "wkhtmltopdf" => Some(Self::wkhtmltopdf()),
            "weasyprint" => Some(Self::weasyprint()),
            "pandoc" => Some(Self::pandoc()),
            _ => None,
        }
    }

    /// Program that will be spawned
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with placeholders expanded for a job
    pub fn expand_args(&self, job: &PdfJob) -> Vec<OsString> {
        self.args
            .iter()
            .map(|arg| match arg.as_str() {
                INPUT_PLACEHOLDER => job.html_path.clone().into_os_string(),
                OUTPUT_PLACEHOLDER => job.output_path.clone().into_os_string(),
                other => OsString::from(other),
            })
            .collect()
    }
}

impl PdfBackend for CommandBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(&self, job: &PdfJob) -> RenderOutcome {
        let spawned = Command::new(&self.program)
            .args(self.expand_args(job))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn();

        let child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return RenderOutcome::Unavailable(format!("{} not found", self.program));
            }
            Err(e) => return RenderOutcome::Failed(e.to_string()),
        };

        log::debug!("Started {} (pid {})", self.name, child.id());
        run_to_completion(child, job.timeout)
    }
}

/// Wait for `child` up to `timeout`, collecting stderr for the failure reason
fn run_to_completion(mut child: Child, timeout: Duration) -> RenderOutcome {
    // Drain stderr concurrently so a chatty converter cannot block on a full pipe
    let stderr_reader = child.stderr.take().map(|mut stderr| {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            buf
        })
    });
    let collect_stderr = |reader: Option<thread::JoinHandle<String>>| {
        reader
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default()
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => return RenderOutcome::Rendered,
            Ok(Some(status)) => {
                let stderr = collect_stderr(stderr_reader);
                let reason = match stderr.trim() {
                    "" => status.to_string(),
                    text => text.to_string(),
                };
                return RenderOutcome::Failed(reason);
            }
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                // Grandchildren may still hold the pipe; leave the reader detached
                drop(stderr_reader);
                return RenderOutcome::Failed(format!(
                    "timed out after {}s",
                    timeout.as_secs_f32()
                ));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => return RenderOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docforge_ast::StyleTemplate;
    use std::path::PathBuf;

    fn job(timeout: Duration) -> PdfJob {
        PdfJob {
            html_path: PathBuf::from("/tmp/in.html"),
            output_path: PathBuf::from("/tmp/out.pdf"),
            title: "T".to_string(),
            content: String::new(),
            style: StyleTemplate {
                name: "professional",
                primary_color: "#1f4e79",
                secondary_color: "#2e75b6",
                font_family: "Calibri",
            },
            timeout,
        }
    }

    #[test]
    fn test_builtin_command_lines() {
        let job = job(Duration::from_secs(30));
        assert_eq!(
            CommandBackend::wkhtmltopdf().expand_args(&job),
            vec!["--quiet", "/tmp/in.html", "/tmp/out.pdf"]
        );
        assert_eq!(
            CommandBackend::weasyprint().expand_args(&job),
            vec!["/tmp/in.html", "/tmp/out.pdf"]
        );
        assert_eq!(
            CommandBackend::pandoc().expand_args(&job),
            vec!["/tmp/in.html", "-o", "/tmp/out.pdf"]
        );
    }

    #[test]
    fn test_builtin_lookup() {
        for name in BUILTIN_CONVERTERS {
            assert_eq!(CommandBackend::builtin(name).unwrap().name(), name);
        }
        assert!(CommandBackend::builtin("latex").is_none());
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let backend = CommandBackend::new("ghost", "docforge-no-such-converter", ["{input}"]);
        assert!(matches!(
            backend.render(&job(Duration::from_secs(5))),
            RenderOutcome::Unavailable(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_reports_stderr() {
        let backend = CommandBackend::new("failing", "sh", ["-c", "echo broken >&2; exit 3"]);
        assert_eq!(
            backend.render(&job(Duration::from_secs(5))),
            RenderOutcome::Failed("broken".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_hanging_backend_is_killed() {
        let backend = CommandBackend::new("sleeper", "sh", ["-c", "sleep 30"]);
        let start = Instant::now();
        let outcome = backend.render(&job(Duration::from_millis(200)));
        assert!(start.elapsed() < Duration::from_secs(10));
        match outcome {
            RenderOutcome::Failed(reason) => assert!(reason.contains("timed out")),
            other => panic!("expected timeout failure, got {other:?}"),
        }
    }
}
