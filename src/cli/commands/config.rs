use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        // ---- CHECK / MIGRATE ----
        if *check {
            for issue in cfg.value_issues() {
                warning(issue);
            }
        }

        if *check || *run_migrate {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (run `rsmokelog init`)",
                    path.display()
                ));
                return Ok(());
            }

            if *run_migrate {
                let added = migrate::fill_missing_fields(&path)?;
                if added.is_empty() {
                    info("Configuration is up to date.");
                } else {
                    success(format!("Added missing keys: {}", added.join(", ")));
                }
            } else {
                let missing = migrate::missing_fields(&path)?;
                if missing.is_empty() {
                    success("All configuration keys are present.");
                } else {
                    warning(format!(
                        "Missing keys (defaults apply): {}. Run `rsmokelog config --migrate` to add them.",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    let status = Command::new(&default_editor)
                        .arg(&path)
                        .status()
                        .map_err(|e| AppError::Config(e.to_string()))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "Failed to edit configuration file using '{}'",
                            default_editor
                        )));
                    }
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }

    Ok(())
}
