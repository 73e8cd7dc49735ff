use super::console::{timestamp_now, Console};
use crate::config::Config;
use crate::editor::EditorBuffer;
use crate::error::WorkspaceError;
use crate::simulator::{self, SimulationResult};
use crate::workspace::{self, Workspace};
use std::thread;
use tracing::info;

pub const READY: &str = "Ready";

/// Headless IDE state: the file table, the open buffer, the console and
/// the status line.
pub struct Session {
    workspace: Workspace,
    buffer: EditorBuffer,
    console: Console,
    status: String,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let workspace = Workspace::new();
        let buffer = EditorBuffer::new(workspace.current_content());
        Self {
            workspace,
            buffer,
            console: Console::default(),
            status: READY.to_string(),
            config,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut EditorBuffer {
        &mut self.buffer
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        info!(status = %self.status);
    }

    /// Replace the buffer text, as typing would.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.set_status("Modified");
    }

    fn store_buffer(&mut self) {
        let current = self.workspace.current().to_string();
        self.workspace.set(&current, self.buffer.text());
    }

    pub fn switch_to(&mut self, name: &str) -> Result<(), WorkspaceError> {
        if !self.workspace.contains(name) {
            return Err(WorkspaceError::NotFound(name.to_string()));
        }
        self.store_buffer();
        self.workspace.set_current(name)?;
        self.buffer = EditorBuffer::new(self.workspace.current_content());
        self.set_status(format!("Opened {}", name));
        Ok(())
    }

    pub fn new_file(&mut self, name: &str) -> Result<String, WorkspaceError> {
        let clean = self.workspace.create_file(name)?;
        self.switch_to(&clean)?;
        self.set_status(format!("Created {}", clean));
        Ok(clean)
    }

    pub fn delete(&mut self, name: &str) -> Result<(), WorkspaceError> {
        let was_current = self.workspace.current() == name;
        self.workspace.delete_file(name)?;
        if was_current {
            self.buffer = EditorBuffer::new(self.workspace.current_content());
        }
        self.set_status(format!("Deleted {}", name));
        Ok(())
    }

    pub fn save(&mut self) -> String {
        self.store_buffer();
        let name = self.workspace.current().to_string();
        self.set_status(format!("Saved {}", name));
        name
    }

    /// Put a bundled sample into the buffer and the current file.
    pub fn load_example(&mut self, index: usize) -> Result<&'static str, WorkspaceError> {
        let sample = workspace::sample(index).ok_or(WorkspaceError::UnknownExample(index))?;
        self.buffer.set_text(sample.code);
        self.store_buffer();
        self.set_status(format!("Loaded example: {}", sample.name));
        Ok(sample.name)
    }

    /// Save, wait out the configured latency, then simulate.
    pub fn compile_and_run(&mut self) -> SimulationResult {
        self.store_buffer();
        self.set_status("Compiling...");
        if !self.config.compile_delay.is_zero() {
            thread::sleep(self.config.compile_delay);
        }
        self.run_now(&timestamp_now())
    }

    /// Compile without the artificial latency, stamping the transcript
    /// with `timestamp`.
    pub fn run_now(&mut self, timestamp: &str) -> SimulationResult {
        self.store_buffer();
        let result = simulator::simulate(self.buffer.text());
        info!(
            file = self.workspace.current(),
            exit_code = result.exit_code(),
            "compile finished"
        );
        self.console.show_result(&result, timestamp);
        self.set_status("Compilation completed");
        result
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
        self.set_status("Console cleared");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
