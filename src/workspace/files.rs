use crate::error::WorkspaceError;
use tracing::info;

pub const DEFAULT_FILE: &str = "main.c";

pub const DEFAULT_PROGRAM: &str =
    "#include <stdio.h>\n\nint main() {\n    printf(\"Hello, World!\\n\");\n    return 0;\n}";

pub const NEW_FILE_TEMPLATE: &str =
    "// New C file\n#include <stdio.h>\n\nint main() {\n    // Your code here\n    return 0;\n}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// Name to content table, iterated in insertion order, with one file
/// marked current. Never empty.
#[derive(Debug, Clone)]
pub struct Workspace {
    files: Vec<SourceFile>,
    current: String,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            files: vec![SourceFile {
                name: DEFAULT_FILE.to_string(),
                content: DEFAULT_PROGRAM.to_string(),
            }],
            current: DEFAULT_FILE.to_string(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.files[i].content.as_str())
    }

    /// Overwrite an existing file, or append a new one.
    pub fn set(&mut self, name: &str, content: impl Into<String>) {
        let content = content.into();
        match self.position(name) {
            Some(i) => self.files[i].content = content,
            None => self.files.push(SourceFile {
                name: name.to_string(),
                content,
            }),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn current_content(&self) -> &str {
        self.get(&self.current).unwrap_or_default()
    }

    pub fn set_current(&mut self, name: &str) -> Result<(), WorkspaceError> {
        if !self.contains(name) {
            return Err(WorkspaceError::NotFound(name.to_string()));
        }
        self.current = name.to_string();
        Ok(())
    }

    /// Add a file holding the new-file template. Returns the trimmed name.
    pub fn create_file(&mut self, name: &str) -> Result<String, WorkspaceError> {
        let clean = name.trim();
        if clean.is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        if self.contains(clean) {
            return Err(WorkspaceError::AlreadyExists(clean.to_string()));
        }

        self.files.push(SourceFile {
            name: clean.to_string(),
            content: NEW_FILE_TEMPLATE.to_string(),
        });
        info!(file = clean, count = self.files.len(), "file created");
        Ok(clean.to_string())
    }

    /// Remove a file. Deleting the current file makes the first remaining
    /// one current.
    pub fn delete_file(&mut self, name: &str) -> Result<(), WorkspaceError> {
        if self.files.len() <= 1 {
            return Err(WorkspaceError::LastFile);
        }
        let idx = self
            .position(name)
            .ok_or_else(|| WorkspaceError::NotFound(name.to_string()))?;

        self.files.remove(idx);
        if self.current == name {
            self.current = self.files[0].name.clone();
        }
        info!(file = name, current = %self.current, "file deleted");
        Ok(())
    }

    pub fn file_count_label(&self) -> String {
        let count = self.files.len();
        format!("{} file{}", count, if count == 1 { "" } else { "s" })
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
