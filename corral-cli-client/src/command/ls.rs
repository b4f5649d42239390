use super::*;

pub fn execute(client: &StoreClient, args: LsArgs) -> Result<()> {
    for key in client.keys()? {
        if args.long {
            let value_len = client.get(&key)?.map_or(0, |value| value.len());
            println!("{}", long_format(value_len, &key));
        } else {
            println!("{}", key);
        }
    }

    Ok(())
}

fn long_format(value_len: usize, key: &str) -> String {
    format!("{:>14} {}", value_len, key)
}
