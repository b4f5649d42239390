mod cli;
mod client;
mod command;

use client::ClientError;

type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
    let opts = cli::parse_args();

    if let Err(err) = run(opts) {
        if let Some(ClientError::Connect(_)) = err.downcast_ref::<ClientError>() {
            eprintln!("ERROR: Could not connect to the key/value store");
        } else {
            eprintln!("ERROR: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(opts: cli::Opts) -> Result<()> {
    let client = client::StoreClient::new(&opts.connection)?;

    match opts.command {
        cli::Command::Register(args) => command::register::execute(&client, args)?,
        cli::Command::Kv(action) => match action {
            cli::KvAction::Backup(args) => command::backup::execute(&client, args)?,
            cli::KvAction::Restore(args) => command::restore::execute(&client, args)?,
            cli::KvAction::Ls(args) => command::ls::execute(&client, args)?,
            cli::KvAction::Mkdir(args) => command::mkdir::execute(&client, args)?,
            cli::KvAction::Get(args) => command::get::execute(&client, args)?,
            cli::KvAction::Set(args) => command::set::execute(&client, args)?,
            cli::KvAction::Rm(args) => command::rm::execute(&client, args)?,
        },
    }

    Ok(())
}
