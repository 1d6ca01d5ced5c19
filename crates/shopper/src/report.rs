use crate::{error::Result, plan::ShoppingPlan};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Whether items without a zone are listed after the route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    #[default]
    Include,
    Exclude,
}

/// Writes the grouped list in visit order
pub fn write_report<W: Write>(plan: &ShoppingPlan, policy: UnmatchedPolicy, mut out: W) -> Result<()> {
    if plan.categorized.is_empty() {
        writeln!(out, "(empty shopping list)")?;
        return Ok(());
    }

    for (i, group) in plan.categorized.matched.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, group.category)?;
        for item in &group.items {
            writeln!(out, "   - {}", item)?;
        }
    }

    if policy == UnmatchedPolicy::Include && !plan.categorized.unmatched.is_empty() {
        writeln!(out, "unmatched:")?;
        for group in &plan.categorized.unmatched {
            writeln!(out, "   {}", group.category)?;
            for item in &group.items {
                writeln!(out, "   - {}", item)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
