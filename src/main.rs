//! Entry point for the **tilerc** command.
//!
//! Without arguments the declared document is printed as JSON, which is the
//! form the host runtime imports.  `--check` reports problems a host would
//! only reveal by silently ignoring them, and `--startup` fires the
//! startup-once hook the way the host does on session start.

use log::{error, info, warn};
use std::process::ExitCode;
use tilerc::config::{self, Settings};
use tilerc::document::{declare, Document};
use tilerc::group::MAX_DIGIT_GROUPS;
use tilerc::hooks::{self, HookAction, HookEvent};
use tilerc::keys;
use tilerc::spawn::ProcessSpawner;

/// Resolve the settings directory (`$XDG_CONFIG_HOME/tilerc`).
fn settings_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| config::env_home().join(".config"));
    base.join("tilerc")
}

/// Try to load settings from `$XDG_CONFIG_HOME/tilerc/settings.json`,
/// falling back to compiled-in defaults.
fn load_settings() -> Settings {
    let path = settings_dir().join("settings.json");
    match Settings::load(&path) {
        Ok(s) => {
            info!("loaded settings from {}", path.display());
            s
        }
        Err(e) => {
            info!("no settings file ({}), using defaults", e);
            Settings::default()
        }
    }
}

//  Main

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let doc = declare(&load_settings());

    if args.iter().any(|a| a == "--check") {
        run_check(&doc)
    } else if args.iter().any(|a| a == "--startup") {
        run_startup(&doc)
    } else {
        print_document(&doc)
    }
}

/// Default mode: dump the document.
fn print_document(doc: &Document) -> ExitCode {
    match doc.to_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// `--check`: key conflicts fail the check; unreachable groups and missing
/// scripts are warnings.
fn run_check(doc: &Document) -> ExitCode {
    let conflicts = keys::conflicts(&doc.keys);
    for c in &conflicts {
        let (a, b) = (&doc.keys[c.first], &doc.keys[c.second]);
        error!(
            "{:?}+{} bound twice: {} shadows {}",
            a.modifiers, a.key, a.command, b.command
        );
    }

    if doc.groups.len() > MAX_DIGIT_GROUPS {
        for g in &doc.groups[MAX_DIGIT_GROUPS..] {
            warn!("group {:?} has no reachable digit key", g.name);
        }
    }

    for hook in &doc.hooks {
        let HookAction::SpawnScript(path) = &hook.action;
        if !path.exists() {
            warn!("{:?} hook script {} does not exist", hook.event, path.display());
        }
    }

    for (font, size) in doc.fonts() {
        info!("bar font: {} {}", font, size);
    }

    if conflicts.is_empty() {
        println!(
            "ok: {} keys, {} groups, {} layouts, {} screens",
            doc.keys.len(),
            doc.groups.len(),
            doc.layouts.len(),
            doc.screens.len()
        );
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// `--startup`: run the startup-once hooks and return immediately.
fn run_startup(doc: &Document) -> ExitCode {
    match hooks::fire(&doc.hooks, HookEvent::StartupOnce, &ProcessSpawner::new()) {
        Ok(n) => {
            info!("started {} hook action(s)", n);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("startup hook failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
