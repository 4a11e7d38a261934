use anyhow::Result;

use super::CommandContext;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let source = format!("mutation {{ {} }}", mutation);
    ctx.execute(&source, variables)
}
