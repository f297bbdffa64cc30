//! External editor process

use crate::error::{DumprError, Result};
use std::path::Path;
use std::process::{Child, Command};

/// Session for editing a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Launch the editor on a file and return the running process.
    ///
    /// The caller watches the file while the process runs and treats its
    /// exit as closing the editor.
    pub fn spawn(&self, file_path: &Path) -> Result<Child> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program).args(&all_args);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new(&program);
            cmd.args(&all_args);
            cmd
        };

        cmd.spawn().map_err(|e| {
            DumprError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
