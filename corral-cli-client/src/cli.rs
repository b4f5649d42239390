use std::path::PathBuf;
use structopt::StructOpt;

pub fn parse_args() -> Opts {
    Opts::from_args()
}

#[derive(Debug, StructOpt)]
#[structopt(name = "corral", about = "Command line utilities for a corral store")]
pub struct Opts {
    #[structopt(flatten)]
    pub connection: ConnectionOpts,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub struct ConnectionOpts {
    /// Scheme to use for connecting to the store API
    #[structopt(long, default_value = "http")]
    pub api_scheme: String,

    /// Host to connect to
    #[structopt(long, default_value = "localhost")]
    pub api_host: String,

    /// API port to connect to
    #[structopt(long, default_value = "8500")]
    pub api_port: u16,

    /// Datacenter to specify for the connection
    #[structopt(long)]
    pub datacenter: Option<String>,

    /// ACL token
    #[structopt(long)]
    pub token: Option<String>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Registers a service for this node
    Register(RegisterArgs),
    /// Key/value database utilities
    Kv(KvAction),
}

#[derive(Debug, StructOpt)]
pub enum KvAction {
    /// Backs up every record to stdout or a JSON file
    Backup(BackupArgs),
    /// Restores records from stdin or a JSON file
    Restore(RestoreArgs),
    /// Lists all of the keys
    Ls(LsArgs),
    /// Creates a folder
    Mkdir(MkdirArgs),
    /// Gets a key from the database
    Get(GetArgs),
    /// Sets a key in the database
    Set(SetArgs),
    /// Removes a key from the database
    Rm(RmArgs),
}

#[derive(Debug, StructOpt)]
pub struct BackupArgs {
    /// JSON file to write instead of stdout
    #[structopt(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct RestoreArgs {
    /// JSON file to read instead of stdin
    #[structopt(short, long)]
    pub file: Option<PathBuf>,

    /// Do not replace existing entries
    #[structopt(short, long)]
    pub no_replace: bool,
}

#[derive(Debug, StructOpt)]
pub struct LsArgs {
    /// Long format
    #[structopt(short, long)]
    pub long: bool,
}

#[derive(Debug, StructOpt)]
pub struct MkdirArgs {
    /// The path to create
    pub path: String,
}

#[derive(Debug, StructOpt)]
pub struct GetArgs {
    /// The key to get
    pub key: String,
}

#[derive(Debug, StructOpt)]
pub struct SetArgs {
    /// The key to set
    pub key: String,
    /// The value of the key
    pub value: String,
}

#[derive(Debug, StructOpt)]
pub struct RmArgs {
    /// The key to remove
    pub key: String,

    /// Delete all keys prefixed with the specified key
    #[structopt(short, long)]
    pub recurse: bool,
}

#[derive(Debug, StructOpt)]
pub struct RegisterArgs {
    /// The service name
    pub name: String,

    /// Specify an address
    #[structopt(short, long)]
    pub address: Option<String>,

    /// Specify a port
    #[structopt(short, long)]
    pub port: Option<u16>,

    /// Specify a service ID
    #[structopt(short, long)]
    pub service_id: Option<String>,

    /// Specify a comma delimited list of tags
    #[structopt(short, long)]
    pub tags: Option<String>,

    #[structopt(subcommand)]
    pub check: Option<CheckSpec>,
}

#[derive(Debug, StructOpt)]
pub enum CheckSpec {
    /// Defines an external script-based check
    Check {
        /// How often to run the check script
        interval: u64,
        /// Path to the script invoked by the agent
        path: String,
    },
    /// Defines a duration based TTL check
    Ttl {
        /// TTL duration for a service with missing check data
        duration: u64,
    },
    /// Does not enable service monitoring
    NoCheck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_connection_defaults() {
        let opts = Opts::from_iter(&["corral", "kv", "ls"]);
        assert_eq!(opts.connection.api_scheme, "http");
        assert_eq!(opts.connection.api_host, "localhost");
        assert_eq!(opts.connection.api_port, 8500);
        assert!(opts.connection.datacenter.is_none());
        assert!(opts.connection.token.is_none());
    }

    #[test]
    fn parses_connection_overrides() {
        let opts = Opts::from_iter(&[
            "corral",
            "--api-scheme",
            "https",
            "--api-host",
            "store.internal",
            "--api-port",
            "8501",
            "--datacenter",
            "dc1",
            "--token",
            "secret",
            "kv",
            "ls",
        ]);
        assert_eq!(opts.connection.api_scheme, "https");
        assert_eq!(opts.connection.api_host, "store.internal");
        assert_eq!(opts.connection.api_port, 8501);
        assert_eq!(opts.connection.datacenter.as_deref(), Some("dc1"));
        assert_eq!(opts.connection.token.as_deref(), Some("secret"));
    }

    #[test]
    fn parses_kv_get() {
        let opts = Opts::from_iter(&["corral", "kv", "get", "app/config"]);
        match opts.command {
            Command::Kv(KvAction::Get(args)) => assert_eq!(args.key, "app/config"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_kv_set() {
        let opts = Opts::from_iter(&["corral", "kv", "set", "app/config", "on"]);
        match opts.command {
            Command::Kv(KvAction::Set(args)) => {
                assert_eq!(args.key, "app/config");
                assert_eq!(args.value, "on");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_kv_rm_recurse() {
        let opts = Opts::from_iter(&["corral", "kv", "rm", "app/", "-r"]);
        match opts.command {
            Command::Kv(KvAction::Rm(args)) => {
                assert_eq!(args.key, "app/");
                assert!(args.recurse);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_kv_ls_long() {
        let opts = Opts::from_iter(&["corral", "kv", "ls", "--long"]);
        match opts.command {
            Command::Kv(KvAction::Ls(args)) => assert!(args.long),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_kv_restore_flags() {
        let opts = Opts::from_iter(&["corral", "kv", "restore", "-f", "dump.json", "-n"]);
        match opts.command {
            Command::Kv(KvAction::Restore(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("dump.json")));
                assert!(args.no_replace);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_register_with_ttl_check() {
        let opts = Opts::from_iter(&[
            "corral", "register", "web", "-p", "8080", "-t", "edge,blue", "ttl", "30",
        ]);
        match opts.command {
            Command::Register(args) => {
                assert_eq!(args.name, "web");
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.tags.as_deref(), Some("edge,blue"));
                match args.check {
                    Some(CheckSpec::Ttl { duration }) => assert_eq!(duration, 30),
                    other => panic!("unexpected check: {:?}", other),
                }
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_register_with_script_check() {
        let opts = Opts::from_iter(&[
            "corral",
            "register",
            "web",
            "check",
            "10",
            "/usr/local/bin/check-web",
        ]);
        match opts.command {
            Command::Register(args) => match args.check {
                Some(CheckSpec::Check { interval, path }) => {
                    assert_eq!(interval, 10);
                    assert_eq!(path, "/usr/local/bin/check-web");
                }
                other => panic!("unexpected check: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn register_check_defaults_to_none() {
        let opts = Opts::from_iter(&["corral", "register", "web"]);
        match opts.command {
            Command::Register(args) => assert!(args.check.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
