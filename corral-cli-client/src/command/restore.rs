use super::*;

pub fn execute(client: &StoreClient, args: RestoreArgs) -> Result<()> {
    let raw = read_input(args.file.as_deref())?;
    let records: Vec<Record> = serde_json::from_str(&raw).context("Malformed backup data")?;

    // First transport error aborts the loop; records written so far stay.
    for record in &records {
        client.set_record(record, !args.no_replace)?;
    }

    Ok(())
}
