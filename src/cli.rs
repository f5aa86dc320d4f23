use crate::connect::{env_bool, ENV_INSECURE, ENV_URL};
use crate::inventory::kind::ObjectKind;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// ESX or vCenter URL [VSCOUT_URL]
    #[arg(long, global = true, env = ENV_URL, value_name = "URL")]
    pub url: Option<String>,

    /// Skip verification of the server's certificate chain [VSCOUT_INSECURE]
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Only list objects with this exact name
    #[arg(long, global = true, default_value = "", value_name = "NAME")]
    pub name: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List virtual machines
    Vm,
    /// List datastores
    Datastore,
    /// List networks
    Network,
    /// List datastores, virtual machines and networks
    All,
}

impl Command {
    /// Object kinds queried by this subcommand, in output order.
    pub fn kinds(&self) -> &'static [ObjectKind] {
        match self {
            Command::Vm => &[ObjectKind::VirtualMachine],
            Command::Datastore => &[ObjectKind::Datastore],
            Command::Network => &[ObjectKind::Network],
            Command::All => &ObjectKind::ALL,
        }
    }
}

impl Cli {
    /// Effective insecure-TLS setting: the flag wins, the environment
    /// supplies the default.
    pub fn insecure_tls(&self) -> bool {
        self.insecure || env_bool(ENV_INSECURE, false)
    }
}
