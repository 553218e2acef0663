// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Grouping report construction and rendering.

use crate::analysis::{Group, Scope, StatusTally};
use crate::config::{CommitType, ReportConfig};
use crate::error::{CgError, Result};
use crate::git::ChangedFile;
use console::style;
use serde::Serialize;

use super::suggestion::{example_message, Recommendation};

const RULE: &str = "======================================================================";

/// One group as presented to the user.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    pub scope: Scope,
    pub description: &'static str,
    pub files: Vec<ChangedFile>,
    pub example: String,
}

impl From<&Group> for GroupReport {
    fn from(group: &Group) -> Self {
        Self {
            commit_type: group.commit_type,
            scope: group.scope.clone(),
            description: group.description(),
            files: group.files.clone(),
            example: example_message(group.commit_type, &group.scope),
        }
    }
}

/// Everything the renderer needs, in serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_files: usize,
    pub status: StatusTally,
    pub groups: Vec<GroupReport>,
    pub recommendation: Option<Recommendation>,
}

impl Report {
    /// Assemble a report from the change list and its groups.
    pub fn new(files: &[ChangedFile], groups: &[Group]) -> Self {
        Self {
            total_files: files.len(),
            status: StatusTally::from_files(files),
            groups: groups.iter().map(GroupReport::from).collect(),
            recommendation: Recommendation::for_group_count(groups.len()),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CgError::WithContext {
            context: "serialize report".to_string(),
            message: e.to_string(),
        })
    }
}

/// Plain-text report renderer.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    color: bool,
    examples: bool,
    recommendations: bool,
}

impl TextRenderer {
    /// Renderer with every section enabled.
    pub fn new(color: bool) -> Self {
        Self {
            color,
            examples: true,
            recommendations: true,
        }
    }

    /// Renderer honouring the `[report]` section.
    pub fn from_config(config: &ReportConfig, color: bool) -> Self {
        Self {
            color: color && config.color,
            examples: config.examples,
            recommendations: config.recommendations,
        }
    }

    /// Render the full report.
    pub fn render(&self, report: &Report) -> String {
        let mut lines: Vec<String> = Vec::new();

        self.banner(&mut lines, "Conventional Commit Grouping Analysis");
        lines.push(format!("Total changed files: {}", report.total_files));
        lines.push(String::new());

        lines.push("Status breakdown:".to_string());
        for (code, count) in report.status.non_zero() {
            lines.push(format!("  {}: {}", code.label(), count));
        }
        lines.push(String::new());

        lines.push(format!("Suggested commit groups: {}", report.groups.len()));
        lines.push(String::new());

        for (i, group) in report.groups.iter().enumerate() {
            lines.push(format!("Group {}: {}", i + 1, self.header(group)));
            lines.push(format!("  Type: {}", group.description));
            lines.push(format!("  Files ({}):", group.files.len()));

            let mut files: Vec<&ChangedFile> = group.files.iter().collect();
            files.sort_by(|a, b| a.path.cmp(&b.path));
            for file in files {
                lines.push(format!(
                    "    {} {}",
                    self.paint_dim(&format!("[{}]", file.raw_status)),
                    file.path
                ));
            }
            lines.push(String::new());
        }

        if self.recommendations {
            if let Some(recommendation) = report.recommendation {
                self.banner(&mut lines, "Recommendations");
                lines.push(format!(
                    "{} {}",
                    self.paint_ok("✓"),
                    recommendation.headline()
                ));
                for advice in recommendation.advice() {
                    lines.push(format!("  → {}", advice));
                }
                lines.push(String::new());
            }
        }

        if self.examples && !report.groups.is_empty() {
            lines.push("Example commit messages:".to_string());
            lines.push(String::new());
            for (i, group) in report.groups.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, group.example));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn banner(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(RULE.to_string());
        lines.push(style(title).bold().force_styling(self.color).to_string());
        lines.push(RULE.to_string());
        lines.push(String::new());
    }

    fn header(&self, group: &GroupReport) -> String {
        let name = group.commit_type.as_str();
        let styled = match group.commit_type {
            CommitType::Feat => style(name).green(),
            CommitType::Fix => style(name).red(),
            CommitType::Docs => style(name).blue(),
            CommitType::Style => style(name).magenta(),
            CommitType::Refactor => style(name).yellow(),
            CommitType::Perf => style(name).cyan(),
            _ => style(name).white(),
        };
        format!(
            "{}({})",
            styled.bold().force_styling(self.color),
            style(&group.scope).cyan().force_styling(self.color)
        )
    }

    fn paint_ok(&self, text: &str) -> String {
        style(text).green().force_styling(self.color).to_string()
    }

    fn paint_dim(&self, text: &str) -> String {
        style(text).dim().force_styling(self.color).to_string()
    }
}
