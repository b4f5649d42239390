pub mod backup;
pub mod get;
pub mod ls;
pub mod mkdir;
pub mod register;
pub mod restore;
pub mod rm;
pub mod set;

use super::cli::{
    BackupArgs, GetArgs, LsArgs, MkdirArgs, RegisterArgs, RestoreArgs, RmArgs, SetArgs,
};
use super::client::StoreClient;
use super::Result;
use anyhow::Context;
use corral_models::Record;

fn write_output(target: Option<&std::path::Path>, contents: &str) -> Result<()> {
    use std::io::Write;

    match target {
        Some(path) => std::fs::write(path, contents)
            .context(format!("Error writing {}", path.display())),
        None => std::io::stdout()
            .write_all(contents.as_bytes())
            .context("Error writing to stdout"),
    }
}

fn read_input(source: Option<&std::path::Path>) -> Result<String> {
    use std::io::Read;

    match source {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Error reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Error reading from stdin")?;
            Ok(buf)
        }
    }
}
