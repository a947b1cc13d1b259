/*!
Here we go!

```text
eventhall [ CONFIG_FILE ]
```

With no config file, the server listens on 0.0.0.0:3001 with the stock demo
data. Set `LOG_LEVEL` to see more than warnings.
*/
use std::sync::Arc;

use simplelog::{ColorChoice, TerminalMode, TermLogger};
use tokio::sync::RwLock;

use eventhall::config::{self, Cfg};
use eventhall::inter::api;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_cfg = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("eventhall")
        .build();
    TermLogger::init(
        eventhall::log_level_from_env(),
        log_cfg,
        TerminalMode::Stdout,
        ColorChoice::Auto
    ).unwrap();
    log::info!("Logging started.");

    let cfg = match std::env::args().nth(1) {
        Some(path) => match Cfg::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Error loading configuration from {:?}: {}", &path, &e);
                std::process::exit(1);
            },
        },
        None => {
            log::info!("No config file specified; using defaults.");
            Cfg::default()
        },
    };

    let glob = match config::load_configuration(cfg) {
        Ok(glob) => glob,
        Err(e) => {
            log::error!("Unable to initialize: {}", &e);
            std::process::exit(1);
        },
    };
    let addr = glob.addr;
    let cors = glob.cors;
    let glob = Arc::new(RwLock::new(glob));

    let app = api::router(glob, cors);

    log::info!("Listening on {}", &addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
