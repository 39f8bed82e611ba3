#![cfg(test)]
//! Scripted stand-ins for the terminal, the renderer and the filesystem.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use teamgen_common::config::Config;
use teamgen_common::team::{Employee, Roster};
use teamgen_core::TeamError;
use teamgen_core::ports::{OutputWriter, PromptService, Renderer};
use teamgen_core::questions::{Answers, FieldDescriptor, ask_until_valid};
use teamgen_core::session::Session;

type Result<T> = std::result::Result<T, TeamError>;

#[derive(Debug, Default)]
pub struct PromptLog {
    /// Every question message shown, including repeats after a rejection.
    pub asked: Vec<String>,
    pub rejections: Vec<String>,
    /// Choice lists of every menu shown, in order.
    pub menus: Vec<Vec<String>>,
}

/// Replays typed answers and menu picks. Menu picks are given by label.
pub struct ScriptedPrompt {
    inputs: VecDeque<String>,
    picks: VecDeque<String>,
    log: Arc<Mutex<PromptLog>>,
}

#[async_trait]
impl PromptService for ScriptedPrompt {
    async fn ask(&mut self, questions: Vec<FieldDescriptor>) -> Result<Answers> {
        let mut answers = Answers::new();
        for descriptor in &questions {
            let value = ask_until_valid(
                descriptor,
                |d| {
                    self.log.lock().unwrap().asked.push(d.message.clone());
                    self.inputs.pop_front().ok_or_else(|| {
                        TeamError::Prompt(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "script ran out of answers",
                        ))
                    })
                },
                |_, rejection| {
                    self.log.lock().unwrap().rejections.push(rejection.to_string());
                },
            )?;
            answers.insert(descriptor.field, value);
        }
        Ok(answers)
    }

    async fn choose(&mut self, _message: &str, choices: &[&str]) -> Result<usize> {
        self.log
            .lock()
            .unwrap()
            .menus
            .push(choices.iter().map(|c| c.to_string()).collect());

        let pick = self.picks.pop_front().ok_or_else(|| {
            TeamError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script ran out of menu picks",
            ))
        })?;
        let idx = choices
            .iter()
            .position(|choice| *choice == pick)
            .unwrap_or_else(|| panic!("menu {choices:?} has no entry {pick:?}"));
        Ok(idx)
    }
}

/// Records each roster it is asked to render.
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<Vec<Employee>>>>,
}

impl Renderer for RecordingRenderer {
    fn render(&self, roster: &Roster) -> String {
        self.calls.lock().unwrap().push(roster.members().to_vec());
        format!("<html>{} members</html>", roster.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Directory,
    File,
}

#[derive(Debug, Default)]
pub struct WriteLog {
    pub directories: Vec<PathBuf>,
    pub files: Vec<(PathBuf, String)>,
}

pub struct MemoryWriter {
    log: Arc<Mutex<WriteLog>>,
    fail: Option<Failure>,
}

#[async_trait]
impl OutputWriter for MemoryWriter {
    async fn ensure_directory(&self, path: &Path) -> Result<()> {
        if self.fail == Some(Failure::Directory) {
            return Err(TeamError::CreateDir {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        self.log.lock().unwrap().directories.push(path.to_path_buf());
        Ok(())
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        if self.fail == Some(Failure::File) {
            return Err(TeamError::WriteFile {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        self.log
            .lock()
            .unwrap()
            .files
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

/// Shared views into what the collaborators saw during a run.
pub struct Harness {
    pub prompts: Arc<Mutex<PromptLog>>,
    pub renders: Arc<Mutex<Vec<Vec<Employee>>>>,
    pub writes: Arc<Mutex<WriteLog>>,
}

impl Harness {
    pub fn rendered(&self) -> Vec<Vec<Employee>> {
        self.renders.lock().unwrap().clone()
    }

    pub fn asked(&self) -> Vec<String> {
        self.prompts.lock().unwrap().asked.clone()
    }

    pub fn rejections(&self) -> Vec<String> {
        self.prompts.lock().unwrap().rejections.clone()
    }
}

pub fn session(picks: &[&str], inputs: &[&str]) -> (Session, Harness) {
    session_failing(picks, inputs, None)
}

pub fn session_failing(
    picks: &[&str],
    inputs: &[&str],
    fail: Option<Failure>,
) -> (Session, Harness) {
    let harness = Harness {
        prompts: Arc::new(Mutex::new(PromptLog::default())),
        renders: Arc::new(Mutex::new(Vec::new())),
        writes: Arc::new(Mutex::new(WriteLog::default())),
    };

    let prompt = ScriptedPrompt {
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        picks: picks.iter().map(|s| s.to_string()).collect(),
        log: harness.prompts.clone(),
    };
    let renderer = RecordingRenderer {
        calls: harness.renders.clone(),
    };
    let writer = MemoryWriter {
        log: harness.writes.clone(),
        fail,
    };

    let session = Session::new(
        Box::new(prompt),
        Box::new(renderer),
        Box::new(writer),
        &Config::default(),
    );
    (session, harness)
}

pub const ADA: [&str; 4] = ["Ada", "1", "ada@x.com", "100"];
pub const BO: [&str; 4] = ["Bo", "2", "bo@y.com", "MIT"];
pub const CY: [&str; 4] = ["Cy", "3", "cy@z.com", "cy-dev"];
