// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use shuttleplan::cli::{run, Cli};
use shuttleplan::config::Config;
use shuttleplan::logging;
use shuttleplan::storage::{SqliteStore, TrainingStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env()?;

    let config = Config::load(cli.config.clone())?;
    debug!(database.path = %config.database_path.display(), "Opening store");

    let store = SqliteStore::open(&config.database_path)?;
    let mut store = TrainingStore::new(store);

    run(cli.command, &mut store)
}
