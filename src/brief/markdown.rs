use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use super::model::Proposal;

/// Render the proposal as a standalone Markdown document.
pub fn to_markdown(p: &Proposal) -> String {
    Markdown(p).to_string()
}

struct Markdown<'a>(&'a Proposal);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_markdown(out, self.0)
    }
}

fn write_markdown(out: &mut impl fmt::Write, p: &Proposal) -> fmt::Result {
    writeln!(out, "# Project brief: {}", p.project)?;
    writeln!(out)?;
    writeln!(out, "- **Client:** {}", p.client)?;
    writeln!(out, "- **Prepared by:** {}", p.prepared_by)?;
    writeln!(out, "- **Date:** {}", p.date.format("%Y-%m-%d"))?;

    if !p.summary.is_empty() {
        writeln!(out, "\n## Summary\n")?;
        for paragraph in &p.summary {
            writeln!(out, "{paragraph}\n")?;
        }
    }

    if !p.scope.is_empty() {
        writeln!(out, "\n## Scope\n")?;
        for item in &p.scope {
            writeln!(out, "- **{}**: {}", item.title, item.detail)?;
        }
    }

    if !p.milestones.is_empty() {
        writeln!(out, "\n## Timeline\n")?;
        writeln!(out, "| Milestone | Weeks | Deliverables |")?;
        writeln!(out, "|---|---:|---|")?;
        for m in &p.milestones {
            writeln!(
                out,
                "| {} | {} | {} |",
                m.name,
                m.weeks,
                m.deliverables.join(", ")
            )?;
        }
        writeln!(out, "| **Total** | **{}** | |", p.total_weeks())?;
    }

    if !p.pricing.is_empty() {
        writeln!(out, "\n## Investment\n")?;
        writeln!(out, "| Item | Amount |")?;
        writeln!(out, "|---|---:|")?;
        for line in &p.pricing {
            writeln!(out, "| {} | {} |", line.item, p.money(line.amount))?;
        }
        writeln!(out, "| **Total** | **{}** |", p.money(p.total()))?;
    }

    if !p.terms.is_empty() {
        writeln!(out, "\n## Terms\n")?;
        for term in &p.terms {
            writeln!(out, "- {term}")?;
        }
    }

    Ok(())
}

/// Write the Markdown brief to `path`, creating parent directories.
pub fn export(p: &Proposal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_markdown(p))
}
