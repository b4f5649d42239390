use super::*;

pub fn execute(client: &StoreClient, args: BackupArgs) -> Result<()> {
    let records = client.records()?;

    let mut dump = serde_json::to_string(&records).context("Error encoding records")?;
    dump.push('\n');

    write_output(args.file.as_deref(), &dump)
}
