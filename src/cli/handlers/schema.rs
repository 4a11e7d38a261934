use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    let schema = ctx.schema()?;
    print!("{}", schema.sdl());
    Ok(())
}
