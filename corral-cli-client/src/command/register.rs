use super::*;
use crate::cli::CheckSpec;
use corral_models::{HealthCheck, ServiceRegistration};

pub fn execute(client: &StoreClient, args: RegisterArgs) -> Result<()> {
    let registration = build_registration(args);
    client.register(&registration)?;
    Ok(())
}

fn build_registration(args: RegisterArgs) -> ServiceRegistration {
    let mut registration = ServiceRegistration::new(args.name);
    registration.id = args.service_id;
    registration.address = args.address;
    registration.port = args.port;
    registration.tags = args.tags.filter(|tags| !tags.is_empty()).map(split_tags);
    registration.check = args.check.and_then(|spec| match spec {
        CheckSpec::Check { interval, path } => Some(HealthCheck::Script {
            script: path,
            interval: format!("{}s", interval),
        }),
        CheckSpec::Ttl { duration } => Some(HealthCheck::Ttl {
            ttl: format!("{}s", duration),
        }),
        CheckSpec::NoCheck => None,
    });

    registration
}

fn split_tags(tags: String) -> Vec<String> {
    tags.split(',').map(str::to_string).collect()
}
