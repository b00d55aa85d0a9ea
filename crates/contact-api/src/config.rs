//! Runtime configuration.
//!
//! Every setting is a CLI flag backed by an environment variable; `main`
//! loads a `.env` file first, so the same variables work from either place.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use contact_core::ValidationOptions;
use contact_store::mongo::DEFAULT_URI;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,contact_api=debug";

/// Which [`SubmissionStore`](contact_store::SubmissionStore) backs the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// MongoDB at `--mongodb-uri`.
    #[default]
    Mongo,
    /// Process memory, for development only: records accumulate for the
    /// life of the process and vanish on exit.
    Memory,
}

/// Contact intake service
#[derive(Parser, Debug, Clone)]
#[command(name = "contact-api", version)]
#[command(about = "Accepts contact-form submissions and stores them", long_about = None)]
pub struct Config {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", default_value = DEFAULT_URI)]
    pub mongodb_uri: String,

    /// Address to bind
    #[arg(long, env = "CONTACT_API_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Storage backend
    #[arg(long, env = "CONTACT_STORE", value_enum, default_value_t = StoreKind::Mongo)]
    pub store: StoreKind,

    /// Require emails to look like `local@domain.tld`
    ///
    /// Accepts true/false, 1/0, yes/no, on/off.
    #[arg(
        long,
        env = "CONTACT_STRICT_EMAIL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub strict_email: bool,
}

impl Config {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validation settings for the intake service.
    pub fn validation(&self) -> ValidationOptions {
        ValidationOptions {
            strict_email: self.strict_email,
        }
    }
}
