use super::*;

pub fn execute(client: &StoreClient, args: SetArgs) -> Result<()> {
    client.set(&args.key, Some(&args.value), &[])?;
    Ok(())
}
