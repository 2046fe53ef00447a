//! Project model and the editable project list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// A project time can be logged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project code (e.g., "01-MEL-01-0007").
    pub code: String,
    /// Project name.
    pub name: String,
    /// Client short code.
    pub client: String,
    /// Hours logged so far.
    #[serde(default)]
    pub hours: Decimal,
}

/// Projects in display order, newest first.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Creates a catalog from seeded projects, keeping their order.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// All projects, newest first.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project by code.
    pub fn get(&self, code: &str) -> EngineResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.code == code)
            .ok_or_else(|| EngineError::ProjectNotFound {
                code: code.to_string(),
            })
    }

    /// Adds a project at the front of the list with zero hours logged.
    ///
    /// The code is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingProjectCode`] when the code is blank
    /// - [`EngineError::DuplicateProject`] when the code is already listed
    ///
    /// # Example
    ///
    /// ```
    /// use time_leave_engine::models::ProjectCatalog;
    /// use rust_decimal::Decimal;
    ///
    /// let mut catalog = ProjectCatalog::default();
    /// let project = catalog.add("01-BNE-01-0001", "Riverside Pergola", "RVP")?;
    /// assert_eq!(project.hours, Decimal::ZERO);
    /// assert!(catalog.add("  ", "Unnamed", "").is_err());
    /// # Ok::<(), time_leave_engine::error::EngineError>(())
    /// ```
    pub fn add(
        &mut self,
        code: &str,
        name: impl Into<String>,
        client: impl Into<String>,
    ) -> EngineResult<Project> {
        let code = code.trim();
        if code.is_empty() {
            return Err(EngineError::MissingProjectCode);
        }
        if self.projects.iter().any(|p| p.code == code) {
            return Err(EngineError::DuplicateProject {
                code: code.to_string(),
            });
        }

        let project = Project {
            code: code.to_string(),
            name: name.into(),
            client: client.into(),
            hours: Decimal::ZERO,
        };
        info!(code = %project.code, client = %project.client, "Project added");
        self.projects.insert(0, project.clone());
        Ok(project)
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if no projects are listed.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
