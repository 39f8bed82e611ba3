use colored::*;
use teamgen_common::config::Config;
use teamgen_common::team::{Roster, RoleKind};
use teamgen_common::warn;
use teamgen_core::output::FsOutputWriter;
use teamgen_core::render::HtmlRenderer;
use teamgen_core::session::{Session, SessionOutcome};

use crate::terminal::format::{self, Detail};
use crate::terminal::prompt::TerminalPrompt;
use crate::terminal::{colors, print};

pub async fn generate(cfg: &Config) -> anyhow::Result<()> {
    let session = Session::new(
        Box::new(TerminalPrompt::new()),
        Box::new(HtmlRenderer),
        Box::new(FsOutputWriter),
        cfg,
    );

    match session.run().await? {
        SessionOutcome::Declined => {
            print::status("No roster was created");
        }
        SessionOutcome::ExitedWithoutRendering(roster) => {
            print_roster(&roster, cfg);
            warn!("Roster was not rendered");
        }
        SessionOutcome::Rendered { roster, path } => {
            let width = print_roster(&roster, cfg);
            print::field("Output", path.display(), width);
        }
    }

    print::rule();
    Ok(())
}

/// Prints the roster tree and returns the key column width it used.
fn print_roster(roster: &Roster, cfg: &Config) -> usize {
    let details: Vec<Vec<Detail>> = roster.iter().map(format::employee_to_details).collect();
    let width = print::key_width(details.iter().flatten().map(|(key, _)| key.as_str()));

    print::header("team roster", cfg.quiet);
    for (idx, (employee, rows)) in roster.iter().zip(&details).enumerate() {
        if idx > 0 {
            print::blank();
        }
        print::tree_head(idx, employee.name());
        print::tree(rows, width);
    }

    print::rule();
    let summary: String = RoleKind::ALL
        .iter()
        .map(|kind| {
            let count = roster.count_of(*kind);
            format!("{count} {}", kind.as_str().to_lowercase())
        })
        .collect::<Vec<String>>()
        .join(", ");
    print::centered(
        &format!("Team of {}: {}", roster.len().to_string().bold().green(), summary)
            .color(colors::TEXT_DEFAULT)
            .to_string(),
    );
    width
}
