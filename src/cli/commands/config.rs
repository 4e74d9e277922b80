use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("serialize: {e}")))?;
            println!("{}", yaml);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let chosen = match editor {
                Some(e) => e.clone(),
                None => std::env::var("EDITOR")
                    .or_else(|_| std::env::var("VISUAL"))
                    .unwrap_or_else(|_| {
                        if cfg!(target_os = "windows") {
                            "notepad".to_string()
                        } else {
                            "nano".to_string()
                        }
                    }),
            };

            let status = Command::new(&chosen).arg(&path).status().map_err(|_| {
                AppError::Config(format!("could not launch editor '{}'", chosen))
            })?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{}' exited with an error",
                    chosen
                )));
            }
        }
    }

    Ok(())
}
