//! CLI command definitions and execution

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rdfolio_core::iri::is_valid_iri;
use rdfolio_mapping::view::{subject_detail_rows, subject_rows, triple_map_rows};
use rdfolio_mapping::EditingSession;
use rdfolio_store::{load_snapshot, save_snapshot, turtle, WorkspaceDirs};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "rdfolio", version, about = "Build RML mapping documents from the command line")]
pub struct Cli {
    /// Mapping snapshot to load and save back
    #[arg(long, short, global = true, default_value = "mapping.json")]
    pub mapping: PathBuf,

    /// Workspace root holding the saved_mappings/ and exported_mappings/
    /// folders
    #[arg(long, short, global = true, default_value = ".")]
    pub workspace: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a triple map bound to a data source file
    AddMap {
        /// Triple map label (must be unique in the mapping)
        label: String,
        /// Data source file (.csv, .json or .xml)
        source: String,
    },
    /// Bind a subject-map template to a triple map
    AddSubject {
        /// Triple map label
        tmap: String,
        /// Subject map label
        label: String,
        /// Field identifier interpolated into the template
        identifier: String,
    },
    /// Remove a triple map, keeping fragments shared with other maps
    RemoveMap {
        label: String,
    },
    /// List triple maps
    Maps,
    /// List subject rules
    Subjects {
        /// Include class, term type and graph bindings
        #[arg(long)]
        full: bool,
    },
    /// Show the identity triples of a triple map
    Derived {
        label: String,
    },
    /// Show the identity triples no other map shares
    Exclusive {
        label: String,
    },
    /// Export the mapping as Turtle
    Export {
        /// Output file; defaults into the workspace export folder
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Copy the working mapping into the workspace save folder
    Save {
        /// Snapshot name, stored as <name>.json
        name: String,
    },
    /// Replace the working mapping with a saved snapshot
    Load {
        /// Snapshot name under the workspace save folder
        name: String,
    },
    /// Check a string against the IRI rules
    CheckIri {
        iri: String,
    },
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::AddMap { .. }
                | Command::AddSubject { .. }
                | Command::RemoveMap { .. }
                | Command::Load { .. }
        )
    }
}

/// Loads the session, runs one command, and writes the snapshot back after
/// mutations.
pub struct CommandExecutor {
    session: EditingSession,
    mapping: PathBuf,
    workspace: PathBuf,
}

impl CommandExecutor {
    /// Open the working snapshot, or start a fresh session when it does not
    /// exist yet.
    pub fn open(mapping: &Path, workspace: &Path) -> Result<Self> {
        let session = if mapping.exists() {
            let store = load_snapshot(mapping)
                .with_context(|| format!("failed to load mapping {}", mapping.display()))?;
            EditingSession::from_store(store)
        } else {
            EditingSession::new()
        };
        Ok(Self {
            session,
            mapping: mapping.to_path_buf(),
            workspace: workspace.to_path_buf(),
        })
    }

    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::AddMap { label, source } => {
                let tmap = self.session.create_triple_map(label, source)?;
                println!("created triple map {}", tmap);
            }
            Command::AddSubject {
                tmap,
                label,
                identifier,
            } => {
                let subject_map = self
                    .session
                    .bind_subject_template(tmap, label, identifier)?;
                println!("bound subject map {}", subject_map);
            }
            Command::RemoveMap { label } => {
                let removed = self.session.remove_triple_map(label)?;
                println!("removed {} triples", removed.len());
                for triple in &removed {
                    println!("  {}", triple);
                }
            }
            Command::Maps => {
                let rows = triple_map_rows(&self.session);
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            Command::Subjects { full } => {
                if *full {
                    let rows = subject_detail_rows(&self.session);
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    let rows = subject_rows(&self.session);
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
            }
            Command::Derived { label } => {
                for triple in self.session.derived_triples(label)? {
                    println!("{}", triple);
                }
            }
            Command::Exclusive { label } => {
                for triple in self.session.exclusive_derived_triples(label)? {
                    println!("{}", triple);
                }
            }
            Command::Export { output } => {
                let path = match output {
                    Some(path) => path.clone(),
                    None => {
                        let dirs = WorkspaceDirs::check(&self.workspace)?;
                        let stem = self
                            .mapping
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_else(|| "mapping".to_string());
                        dirs.export_dir.join(format!("{}.ttl", stem))
                    }
                };
                turtle::export_to_file(self.session.store(), &path)?;
                info!(output = %path.display(), "exported mapping");
                println!("exported {}", path.display());
            }
            Command::Save { name } => {
                let dirs = WorkspaceDirs::check(&self.workspace)?;
                let path = dirs.save_dir.join(format!("{}.json", name));
                save_snapshot(self.session.store(), &path)?;
                println!("saved {}", path.display());
            }
            Command::Load { name } => {
                let dirs = WorkspaceDirs::check(&self.workspace)?;
                let path = dirs.save_dir.join(format!("{}.json", name));
                let store = load_snapshot(&path)
                    .with_context(|| format!("failed to load snapshot {}", path.display()))?;
                self.session = EditingSession::from_store(store);
                println!("loaded {}", path.display());
            }
            Command::CheckIri { iri } => {
                if is_valid_iri(iri) {
                    println!("valid");
                } else {
                    println!("invalid");
                    anyhow::bail!("not a valid IRI: {}", iri);
                }
            }
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        save_snapshot(self.session.store(), &self.mapping)
            .with_context(|| format!("failed to save mapping {}", self.mapping.display()))
    }
}

/// Run one CLI invocation end to end.
pub fn run(cli: &Cli) -> Result<()> {
    let mut executor = CommandExecutor::open(&cli.mapping, &cli.workspace)?;
    executor.execute(&cli.command)?;
    if cli.command.mutates() {
        executor.save()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(dir: &Path, command: Command) -> Cli {
        Cli {
            mapping: dir.join("mapping.json"),
            workspace: dir.to_path_buf(),
            command,
        }
    }

    #[test]
    fn add_map_persists_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        run(&cli(
            dir.path(),
            Command::AddMap {
                label: "M1".to_string(),
                source: "a.csv".to_string(),
            },
        ))
        .unwrap();

        let mapping = dir.path().join("mapping.json");
        assert!(mapping.exists());
        let store = load_snapshot(&mapping).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn read_only_commands_do_not_create_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        run(&cli(dir.path(), Command::Maps)).unwrap();
        assert!(!dir.path().join("mapping.json").exists());
    }

    #[test]
    fn duplicate_label_fails_without_touching_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let add = || {
            cli(
                dir.path(),
                Command::AddMap {
                    label: "M1".to_string(),
                    source: "a.csv".to_string(),
                },
            )
        };

        run(&add()).unwrap();
        let mapping = dir.path().join("mapping.json");
        let before = std::fs::read_to_string(&mapping).unwrap();

        assert!(run(&add()).is_err());
        assert_eq!(std::fs::read_to_string(&mapping).unwrap(), before);
    }

    #[test]
    fn save_and_load_use_workspace_folders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(WorkspaceDirs::SAVE_DIR)).unwrap();
        std::fs::create_dir(dir.path().join(WorkspaceDirs::EXPORT_DIR)).unwrap();

        run(&cli(
            dir.path(),
            Command::AddMap {
                label: "M1".to_string(),
                source: "a.csv".to_string(),
            },
        ))
        .unwrap();
        run(&cli(
            dir.path(),
            Command::Save {
                name: "draft".to_string(),
            },
        ))
        .unwrap();
        assert!(dir
            .path()
            .join(WorkspaceDirs::SAVE_DIR)
            .join("draft.json")
            .exists());

        // wipe the working mapping, then restore it from the saved snapshot
        std::fs::remove_file(dir.path().join("mapping.json")).unwrap();
        run(&cli(
            dir.path(),
            Command::Load {
                name: "draft".to_string(),
            },
        ))
        .unwrap();
        let store = load_snapshot(&dir.path().join("mapping.json")).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn save_requires_workspace_folders() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&cli(
            dir.path(),
            Command::Save {
                name: "draft".to_string(),
            },
        ));
        assert!(result.is_err());
    }

    #[test]
    fn export_defaults_into_export_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(WorkspaceDirs::SAVE_DIR)).unwrap();
        std::fs::create_dir(dir.path().join(WorkspaceDirs::EXPORT_DIR)).unwrap();

        run(&cli(
            dir.path(),
            Command::AddMap {
                label: "M1".to_string(),
                source: "a.csv".to_string(),
            },
        ))
        .unwrap();
        run(&cli(dir.path(), Command::Export { output: None })).unwrap();

        let exported = dir
            .path()
            .join(WorkspaceDirs::EXPORT_DIR)
            .join("mapping.ttl");
        let turtle = std::fs::read_to_string(exported).unwrap();
        assert!(turtle.contains("map:M1"));
    }

    #[test]
    fn check_iri_distinguishes_valid_from_invalid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&cli(
            dir.path(),
            Command::CheckIri {
                iri: "http://example.org/".to_string(),
            },
        ))
        .is_ok());
        assert!(run(&cli(
            dir.path(),
            Command::CheckIri {
                iri: "example.org".to_string(),
            },
        ))
        .is_err());
    }
}
