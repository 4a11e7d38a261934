use anyhow::Result;
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }

    let schema = ctx.schema()?;
    let url = format!("http://{}:{}{}", settings.host, settings.port, settings.endpoint());

    println!("{} {}", "GraphQL endpoint:".green(), url.cyan());
    if settings.graphiql {
        println!("{} {}", "GraphiQL:".green(), url.cyan());
    }

    ctx.runtime.block_on(run_server(schema, &settings))?;
    Ok(())
}
