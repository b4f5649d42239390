use super::*;

pub fn execute(client: &StoreClient, args: RmArgs) -> Result<()> {
    client.delete(&args.key, args.recurse)?;
    Ok(())
}
