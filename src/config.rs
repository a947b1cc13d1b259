/*!
Structs to hold configuration data and global variables.
*/
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    ids::IdScheme,
    store::{Seed, Store},
};

#[derive(Deserialize)]
struct ConfigFile {
    host: Option<String>,
    port: Option<u16>,
    id_scheme: Option<String>,
    strict_registrations: Option<bool>,
    cors: Option<bool>,
    seed_file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Cfg {
    pub addr: SocketAddr,
    pub id_scheme: IdScheme,
    pub strict_registrations: bool,
    pub cors: bool,
    /// If `None`, the store starts with the stock demo data.
    pub seed_file: Option<PathBuf>,
}

impl std::default::Default for Cfg {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            id_scheme: IdScheme::Counter,
            strict_registrations: false,
            cors: true,
            seed_file: None,
        }
    }
}

impl Cfg {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        let cf: ConfigFile = toml::from_str(text)
            .map_err(|e| format!("Unable to deserialize config file: {}", &e))?;

        let mut c = Self::default();

        if let Some(s) = cf.host {
            c.addr.set_ip(
                s.parse().map_err(|e| format!(
                    "Error parsing {:?} as IP address: {}",
                    &s, &e
                ))?
            );
        }
        if let Some(n) = cf.port {
            c.addr.set_port(n);
        }
        if let Some(s) = cf.id_scheme {
            c.id_scheme = s.parse()?;
        }
        if let Some(b) = cf.strict_registrations {
            c.strict_registrations = b;
        }
        if let Some(b) = cf.cors {
            c.cors = b;
        }
        if let Some(p) = cf.seed_file {
            c.seed_file = Some(p);
        }

        Ok(c)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Unable to read config file: {}", &e))?;

        let mut c = Cfg::from_toml(&file_contents)?;

        // A relative seed path means relative to the config file.
        if let Some(p) = c.seed_file.take() {
            let p = match (p.is_relative(), path.parent()) {
                (true, Some(dir)) => dir.join(p),
                _ => p,
            };
            c.seed_file = Some(p);
        }

        Ok(c)
    }
}

/**
This guy will haul around the global state and be passed in an
`axum::Extension` to the handlers who need him.
*/
#[derive(Debug)]
pub struct Glob {
    pub store: Store,
    pub addr: SocketAddr,
    pub cors: bool,
}

/// Build the global state described by `cfg`, loading seed data if a seed
/// file is named.
pub fn load_configuration(cfg: Cfg) -> Result<Glob, String> {
    log::info!("Configuration:\n{:#?}", &cfg);

    let seed = match &cfg.seed_file {
        Some(path) => {
            log::trace!("Loading seed data from {}...", path.display());
            let seed = Seed::from_file(path)?;
            log::trace!("...seed data loaded.");
            seed
        },
        None => {
            log::trace!("No seed file; using default data.");
            Seed::default()
        },
    };
    log::info!(
        "Seeding {} users, {} events, {} registrations.",
        seed.users.len(), seed.events.len(), seed.registrations.len()
    );

    let mut store = Store::new(seed, cfg.id_scheme);
    store.set_strict_registrations(cfg.strict_registrations);

    let glob = Glob {
        store,
        addr: cfg.addr,
        cors: cfg.cors,
    };

    Ok(glob)
}
