// Copyright (c) 2026 rezky_nightky

//! File logging. The terminal owns stdout while the session runs, so events
//! only go anywhere when `--log-file` names a destination.

use std::fs::File;
use std::io::Result;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

pub fn init_file(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(build_subscriber(file));
    Ok(())
}
