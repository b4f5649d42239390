use super::*;

pub fn execute(client: &StoreClient, args: GetArgs) -> Result<()> {
    match client.get(&args.key)? {
        Some(value) => println!("{}", value),
        None => println!("None"),
    }

    Ok(())
}
