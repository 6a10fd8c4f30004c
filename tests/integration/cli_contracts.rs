use prefpair::error::ApiError;
use prefpair::session::{CompletionView, PairView, SessionEvent};
use prefpair::tooling::cli::{CliContext, Commands};
use prefpair::tooling::prompt::{PromptAction, Prompter};
use prefpair::types::Choice;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::integration::support::{make_groups, rater_config};

/// Replays a fixed list of actions, then quits.
#[derive(Default)]
struct ScriptedPrompter {
    actions: VecDeque<PromptAction>,
    shown: Vec<String>,
    /// Runs once, before the first completion prompt
    on_completion: Option<Box<dyn FnOnce()>>,
}

impl ScriptedPrompter {
    fn new(actions: Vec<PromptAction>) -> Self {
        Self {
            actions: actions.into(),
            ..Self::default()
        }
    }

    fn next(&mut self) -> PromptAction {
        self.actions.pop_front().unwrap_or(PromptAction::Quit)
    }
}

impl Prompter for ScriptedPrompter {
    fn show(&mut self, screen: &str) {
        self.shown.push(screen.to_string());
    }

    fn pair_action(&mut self, _view: &PairView) -> Result<PromptAction, ApiError> {
        Ok(self.next())
    }

    fn completion_action(&mut self, _view: &CompletionView) -> Result<PromptAction, ApiError> {
        if let Some(hook) = self.on_completion.take() {
            hook();
        }
        Ok(self.next())
    }
}

fn choose(choice: Choice) -> PromptAction {
    PromptAction::Event(SessionEvent::Choose(choice))
}

fn next() -> PromptAction {
    PromptAction::Event(SessionEvent::Next)
}

fn context(temp: &TempDir, total: usize) -> CliContext {
    let groups = make_groups(
        temp.path(),
        &[("A", &["1.mp4", "2.mp4", "3.mp4"]), ("B", &["1.mp4", "2.mp4", "3.mp4"])],
    );
    CliContext::with_config(temp.path().to_path_buf(), rater_config(groups, total, Some(42)))
}

fn session_documents(dir: &Path) -> Vec<PathBuf> {
    let mut docs: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().map(|x| x == "json").unwrap_or(false))
        .collect();
    docs.sort();
    docs
}

fn rate_once(ctx: &CliContext, out: &Path, actions: Vec<PromptAction>) -> (String, PathBuf) {
    let mut prompter = ScriptedPrompter::new(actions);
    let output = ctx
        .execute_with_prompter(
            &Commands::Rate {
                results_dir: Some(out.to_path_buf()),
                resume: None,
            },
            &mut prompter,
        )
        .unwrap();
    let docs = session_documents(out);
    assert_eq!(docs.len(), 1);
    (output, docs[0].clone())
}

#[test]
fn generate_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 3);
    let output = ctx
        .execute(&Commands::Generate {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let tasks = parsed.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    for (position, task) in tasks.iter().enumerate() {
        assert_eq!(task["id"].as_u64(), Some(position as u64));
        assert!(task["item_a"].as_str().is_some());
        assert!(task["item_b"].as_str().is_some());
        assert_eq!(task["metadata"]["pair_id"].as_u64(), Some(position as u64));
        assert!(task["metadata"]["A_dir"].as_str().is_some());
        assert!(task["metadata"]["B_dir"].as_str().is_some());
    }
}

#[test]
fn rate_records_every_choice_and_exports() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 2);
    let out = temp.path().join("out");

    let (output, document) = rate_once(
        &ctx,
        &out,
        vec![
            choose(Choice::A),
            next(),
            choose(Choice::B),
            next(),
            PromptAction::Export,
            PromptAction::Quit,
        ],
    );
    assert!(output.contains("Rated 2 of 2 pairs"));

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&document).unwrap()).unwrap();
    let rows = on_disk.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["choice"], "A");
    assert_eq!(rows[1]["choice"], "B");

    let csv = fs::read_to_string(document.with_extension("csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("timestamp,A,B,choice,metadata"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn next_without_choice_shows_hint() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 2);
    let out = temp.path().join("out");
    let mut prompter = ScriptedPrompter::new(vec![next()]);

    ctx.execute_with_prompter(
        &Commands::Rate {
            results_dir: Some(out),
            resume: None,
        },
        &mut prompter,
    )
    .unwrap();

    assert!(prompter
        .shown
        .iter()
        .any(|screen| screen.contains("Please select a preference to continue")));
}

#[test]
fn resume_continues_an_existing_document() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 2);
    let out = temp.path().join("out");
    let (_, document) = rate_once(&ctx, &out, vec![choose(Choice::A)]);

    let mut prompter = ScriptedPrompter::new(vec![next(), choose(Choice::B)]);
    let output = ctx
        .execute_with_prompter(
            &Commands::Rate {
                results_dir: Some(out.clone()),
                resume: Some(document.clone()),
            },
            &mut prompter,
        )
        .unwrap();

    assert!(output.contains("Rated 2 of 2 pairs"));
    assert_eq!(session_documents(&out), vec![document]);
}

#[test]
fn review_json_contract_matches_document() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 2);
    let out = temp.path().join("out");
    let (_, document) = rate_once(&ctx, &out, vec![choose(Choice::B)]);

    let output = ctx
        .execute(&Commands::Review {
            document: document.clone(),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    for field in ["timestamp", "A", "B", "choice", "metadata"] {
        assert!(rows[0].get(field).is_some(), "missing field {}", field);
    }

    let table = ctx
        .execute(&Commands::Review {
            document,
            format: "table".to_string(),
        })
        .unwrap();
    assert!(table.contains("Choice"));
}

#[test]
fn export_without_output_returns_csv() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 1);
    let out = temp.path().join("out");
    let (_, document) = rate_once(&ctx, &out, vec![choose(Choice::A)]);

    let csv = ctx
        .execute(&Commands::Export {
            document,
            output: None,
        })
        .unwrap();
    assert!(csv.starts_with("timestamp,A,B,choice,metadata\n"));
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn malformed_document_is_a_load_error() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 1);
    let document = temp.path().join("broken.json");
    fs::write(&document, "not json").unwrap();

    let err = ctx
        .execute(&Commands::Export {
            document,
            output: None,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::LoadError(_)));
}

#[test]
fn config_command_prints_toml() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 3);
    let output = ctx.execute(&Commands::Config).unwrap();

    let parsed: toml::Value = toml::from_str(&output).unwrap();
    assert_eq!(parsed["total_pairs"].as_integer(), Some(3));
    assert_eq!(parsed["rand_seed"].as_integer(), Some(42));
    assert_eq!(parsed["session"]["file_prefix"].as_str(), Some("result"));
}

#[test]
fn failed_new_round_is_reported_as_document_creation() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp, 1);
    let out = temp.path().join("out");
    let mut prompter = ScriptedPrompter::new(vec![
        choose(Choice::A),
        next(),
        PromptAction::Event(SessionEvent::NewRound),
    ]);
    let blocked = out.clone();
    prompter.on_completion = Some(Box::new(move || {
        fs::remove_dir_all(&blocked).unwrap();
        fs::write(&blocked, b"not a directory").unwrap();
    }));

    let output = ctx
        .execute_with_prompter(
            &Commands::Rate {
                results_dir: Some(out),
                resume: None,
            },
            &mut prompter,
        )
        .unwrap();

    assert!(output.contains("Rated 1 of 1 pairs"));
    assert!(prompter
        .shown
        .iter()
        .any(|screen| screen.starts_with("Failed to create a new session document")));
    assert!(!prompter
        .shown
        .iter()
        .any(|screen| screen.contains("Failed to save preference")));
}

#[test]
fn relative_img_dirs_resolve_against_workspace() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("study");
    make_groups(&workspace, &[("A", &["1.mp4"]), ("B", &["2.mp4"])]);
    let config = rater_config(vec![PathBuf::from("A"), PathBuf::from("B")], 2, Some(7));
    let ctx = CliContext::with_config(workspace.clone(), config);

    let output = ctx
        .execute(&Commands::Generate {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    for task in parsed.as_array().unwrap() {
        let item_a = PathBuf::from(task["item_a"].as_str().unwrap());
        assert!(item_a.starts_with(&workspace));
        assert!(item_a.is_file());
    }
}
