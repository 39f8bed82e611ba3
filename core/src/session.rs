//! # Session Controller
//!
//! Drives one run of the tool:
//!
//! ```text
//! NotStarted ─Start─▶ CollectingManager ─▶ Idle(roster) ─Add─▶ CollectingMember(role) ─┐
//!     │                                      │  ▲                                       │
//!     Exit                                   │  └───────────────────────────────────────┘
//!     │                          Render ◀────┴────▶ Exit without Rendering
//!     ▼                            │                         │
//! Terminated ◀── Rendering ◀───────┘                         ▼
//!                                                        Terminated
//! ```
//!
//! The roster is carried inside the state itself, so it only exists once a manager has
//! been collected and is owned by exactly one state at a time.

use std::path::PathBuf;

use teamgen_common::config::Config;
use teamgen_common::success;
use teamgen_common::team::{Employee, Roster, RoleKind};
use tracing::{debug, info};

use crate::error::{Result, TeamError};
use crate::ports::{OutputWriter, PromptService, Renderer};
use crate::questions::{self, build_employee};

pub const MENU_MESSAGE: &str = "What would you like to do?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    Start,
    Exit,
}

impl StartChoice {
    pub const ALL: [StartChoice; 2] = [StartChoice::Start, StartChoice::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            StartChoice::Start => "Start",
            StartChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddIntern,
    AddEngineer,
    Render,
    Exit,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::AddIntern,
        Action::AddEngineer,
        Action::Render,
        Action::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddIntern => "Add Intern",
            Action::AddEngineer => "Add Engineer",
            Action::Render => "Render Team Roster",
            Action::Exit => "Exit without Rendering",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// "Exit" on the start menu. No roster was ever created.
    Declined,
    ExitedWithoutRendering(Roster),
    Rendered { roster: Roster, path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    CollectingManager,
    Idle(Roster),
    CollectingMember(Roster, RoleKind),
    Rendering(Roster),
    Terminated(SessionOutcome),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not-started",
            SessionState::CollectingManager => "collecting-manager",
            SessionState::Idle(_) => "idle",
            SessionState::CollectingMember(..) => "collecting-member",
            SessionState::Rendering(_) => "rendering",
            SessionState::Terminated(_) => "terminated",
        }
    }
}

pub struct Session {
    prompt: Box<dyn PromptService>,
    renderer: Box<dyn Renderer>,
    writer: Box<dyn OutputWriter>,
    output_dir: PathBuf,
    output_path: PathBuf,
}

impl Session {
    pub fn new(
        prompt: Box<dyn PromptService>,
        renderer: Box<dyn Renderer>,
        writer: Box<dyn OutputWriter>,
        cfg: &Config,
    ) -> Self {
        Self {
            prompt,
            renderer,
            writer,
            output_dir: cfg.output_dir.clone(),
            output_path: cfg.output_path(),
        }
    }

    /// Runs the state machine until it terminates.
    ///
    /// Any error is fatal for the session; validation problems never surface here
    /// because the prompt service resolves them.
    pub async fn run(mut self) -> Result<SessionOutcome> {
        let mut state = SessionState::NotStarted;
        loop {
            debug!(state = state.name(), "session state");
            state = match state {
                SessionState::Terminated(outcome) => {
                    info!("Exiting program");
                    return Ok(outcome);
                }
                other => self.step(other).await?,
            };
        }
    }

    /// Performs the single transition leaving `state`.
    pub async fn step(&mut self, state: SessionState) -> Result<SessionState> {
        let next = match state {
            SessionState::NotStarted => match self.ask_to_start().await? {
                StartChoice::Start => SessionState::CollectingManager,
                StartChoice::Exit => SessionState::Terminated(SessionOutcome::Declined),
            },
            SessionState::CollectingManager => {
                let manager = self.collect(RoleKind::Manager).await?;
                SessionState::Idle(Roster::new(manager)?)
            }
            SessionState::Idle(roster) => match self.ask_action(roster.len()).await? {
                Action::AddIntern => SessionState::CollectingMember(roster, RoleKind::Intern),
                Action::AddEngineer => SessionState::CollectingMember(roster, RoleKind::Engineer),
                Action::Render => SessionState::Rendering(roster),
                Action::Exit => {
                    SessionState::Terminated(SessionOutcome::ExitedWithoutRendering(roster))
                }
            },
            SessionState::CollectingMember(mut roster, kind) => {
                let member = self.collect(kind).await?;
                roster.push(member)?;
                SessionState::Idle(roster)
            }
            SessionState::Rendering(roster) => {
                let path = self.render(&roster).await?;
                SessionState::Terminated(SessionOutcome::Rendered { roster, path })
            }
            terminated @ SessionState::Terminated(_) => terminated,
        };
        Ok(next)
    }

    async fn ask_to_start(&mut self) -> Result<StartChoice> {
        info!("Welcome to the Team Roster Generator!");
        info!("To generate a new roster, enter the team's manager first.");

        let labels = StartChoice::ALL.map(|choice| choice.label());
        let idx = self.prompt.choose(MENU_MESSAGE, &labels).await?;
        StartChoice::ALL
            .get(idx)
            .copied()
            .ok_or(TeamError::InvalidChoice(idx))
    }

    async fn ask_action(&mut self, team_size: usize) -> Result<Action> {
        let plural = if team_size == 1 { "" } else { "s" };
        info!("Your team currently consists of: {team_size} member{plural}");

        let labels = Action::ALL.map(|action| action.label());
        let idx = self.prompt.choose(MENU_MESSAGE, &labels).await?;
        Action::ALL
            .get(idx)
            .copied()
            .ok_or(TeamError::InvalidChoice(idx))
    }

    async fn collect(&mut self, kind: RoleKind) -> Result<Employee> {
        info!("GETTING {} INFO", kind.as_str().to_uppercase());

        let answers = self.prompt.ask(questions::questions_for(kind)).await?;
        let employee = build_employee(kind, &answers)?;

        success!("Added {} {} (id {})", kind, employee.name(), employee.id());
        Ok(employee)
    }

    async fn render(&self, roster: &Roster) -> Result<PathBuf> {
        info!("RENDERING HTML");

        let html = self.renderer.render(roster);
        self.writer.ensure_directory(&self.output_dir).await?;
        self.writer.write_file(&self.output_path, &html).await?;

        success!("Team roster written to {}", self.output_path.display());
        Ok(self.output_path.clone())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
