//! Runs one parsed command against a `TaskApiClient`.

use std::time::Duration;

use task_core::{
    report, ClientConfig, Operation, Outcome, Renderer, Report, TaskApiClient, Transport,
};

use crate::args::{Cli, Command};

/// Client config from the arguments, or the 400 report explaining why not.
pub fn configure(cli: &Cli) -> Result<ClientConfig, Report> {
    let config = ClientConfig::new(cli.port.as_deref().unwrap_or_default())
        .and_then(|config| config.with_host(&cli.host))
        .map_err(|err| Report::from_config_error(&err))?;
    Ok(match cli.timeout_secs {
        Some(secs) => config.with_timeout(Duration::from_secs(secs)),
        None => config,
    })
}

pub fn run<T: Transport, R: Renderer>(client: &TaskApiClient<T>, renderer: &R, command: &Command) -> Report {
    let (operation, result) = match command {
        Command::Create(fields) => (
            Operation::Create,
            client
                .create_task(&fields.title, &fields.description, &fields.due_date)
                .map(Outcome::Created),
        ),
        Command::List => (Operation::List, client.list_tasks().map(Outcome::Listed)),
        Command::Get { id } => (Operation::Get, client.get_task(*id).map(Outcome::Fetched)),
        Command::Update { id, fields } => (
            Operation::Update,
            client
                .update_task(*id, &fields.title, &fields.description, &fields.due_date)
                .map(Outcome::Updated),
        ),
        Command::Delete { id } => (
            Operation::Delete,
            client.delete_task(*id).map(|()| Outcome::Deleted),
        ),
    };
    report(renderer, operation, result)
}
