use super::*;

pub fn execute(client: &StoreClient, args: MkdirArgs) -> Result<()> {
    let path = folder_path(args.path);
    client.set(&path, None, &[])?;
    Ok(())
}

fn folder_path(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}
