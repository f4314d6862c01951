use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const CORPUS: &str = "The cat sat. The dog ran. The cat slept.";

struct TestContext {
	_dir: TempDir,
	corpus_path: PathBuf,
	config_path: PathBuf,
}

impl TestContext {
	fn new(corpus: &str) -> Self {
		let dir = tempfile::tempdir().expect("Failed to create temp dir");
		let corpus_path = dir.path().join("corpus.txt");
		let config_path = dir.path().join("config.json");

		let mut corpus_file = File::create(&corpus_path).unwrap();
		writeln!(corpus_file, "{}", corpus).unwrap();

		let mut config_file = File::create(&config_path).unwrap();
		writeln!(
			config_file,
			r#"{{ "chunk_size": 1, "target_length": 6, "words_per_line": 3 }}"#
		)
		.unwrap();

		Self { _dir: dir, corpus_path, config_path }
	}

	fn corpus(&self) -> &str {
		self.corpus_path.to_str().unwrap()
	}

	fn config(&self) -> &str {
		self.config_path.to_str().unwrap()
	}
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_chain-gen"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn config_file_sets_the_line_layout() {
	let ctx = TestContext::new(CORPUS);
	let output = run(&[ctx.corpus(), "--config", ctx.config(), "--raw", "-s", "1"]);

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	let lines: Vec<String> = stdout(&output).lines().map(str::to_owned).collect();
	assert_eq!(lines.len(), 2);
	assert!(lines.iter().all(|line| line.split(' ').count() == 3));
}

#[test]
fn words_per_line_flag_overrides_config_file() {
	let ctx = TestContext::new(CORPUS);
	let output = run(&[ctx.corpus(), "--config", ctx.config(), "-w", "0", "--raw", "-s", "1"]);

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	let text = stdout(&output);
	assert_eq!(text.lines().count(), 1);
	assert_eq!(text.split_whitespace().count(), 6);
	assert!(text.starts_with("The "));
}

#[test]
fn same_seed_prints_same_text() {
	let ctx = TestContext::new(CORPUS);
	let first = run(&[ctx.corpus(), "-n", "30", "-s", "12"]);
	let second = run(&[ctx.corpus(), "-n", "30", "-s", "12"]);

	assert!(first.status.success());
	assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn missing_corpus_fails() {
	let ctx = TestContext::new(CORPUS);
	let missing = ctx._dir.path().join("nope.txt");
	let output = run(&[missing.to_str().unwrap()]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("Invalid corpus path"));
	assert!(stdout(&output).is_empty());
}

#[test]
fn zero_chunks_fails() {
	let ctx = TestContext::new(CORPUS);
	let output = run(&[ctx.corpus(), "-n", "0"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("number of chunks to generate must be positive"));
}

#[test]
fn zero_chunk_size_fails() {
	let ctx = TestContext::new(CORPUS);
	let output = run(&[ctx.corpus(), "-c", "0"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("chunk size must be positive"));
}

#[test]
fn lowercase_corpus_reports_missing_seed() {
	let ctx = TestContext::new("the cat sat on the mat");
	let output = run(&[ctx.corpus(), "-n", "5"]);

	assert_eq!(output.status.code(), Some(1));
	let message = stderr(&output);
	assert!(message.contains("No capitalized token available to start generation"));
	assert!(message.contains("at least one capitalized word"));
}

#[test]
fn short_corpus_reports_insufficient_corpus() {
	let ctx = TestContext::new("Hello world");
	let output = run(&[ctx.corpus(), "-c", "2"]);

	assert_eq!(output.status.code(), Some(1));
	let message = stderr(&output);
	assert!(message.contains("Insufficient corpus: 2 token(s) for a chunk size of 2"));
	assert!(message.contains("smaller --chunk-size"));
}

#[test]
fn stats_go_to_stderr() {
	let ctx = TestContext::new(CORPUS);
	let output = run(&[ctx.corpus(), "--stats", "-n", "5", "-s", "3", "--raw"]);

	assert!(output.status.success());
	let report = stderr(&output);
	assert!(report.contains("==== Transition map ===="));
	assert!(report.contains("-> keys: 5"));
	assert!(report.contains("-> busiest key: `The` (3)"));
	assert_eq!(stdout(&output).split_whitespace().count(), 5);
}
