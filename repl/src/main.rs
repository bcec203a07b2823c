//! Runs a Monkey file, or an interactive session if no file is given.
use monkey_repl::{Config, Session, run_file};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    logging::enable();

    let default_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        default_panic_hook(panic_info);
    }));

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: monkey [--lex | --parse] [path]");
            return ExitCode::from(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(?config);

    let mut stdout = io::stdout().lock();
    let result = match &config.path {
        Some(path) => run_file(path, config.mode, &mut stdout).map(|outcome| outcome.is_success()),
        None => Session::new(config.mode)
            .start(io::stdin().lock(), &mut stdout)
            .map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(?err);

            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn panic_hook(panic_info: &std::panic::PanicHookInfo) {
    let payload = if let Some(payload) = panic_info.payload().downcast_ref::<&str>() {
        Some(&**payload)
    } else if let Some(payload) = panic_info.payload().downcast_ref::<String>() {
        Some(payload.as_str())
    } else {
        None
    };

    let location = panic_info.location().map(|location| location.to_string());
    #[cfg(feature = "tracing")]
    tracing::error!("monkey panicked at {location:?}: {payload:?}");
    #[cfg(not(feature = "tracing"))]
    let _ = (payload, location);
}

#[cfg(feature = "tracing")]
mod logging {
    use std::io;
    use tracing_subscriber::{
        EnvFilter, Registry,
        fmt::{self, time::UtcTime},
        prelude::*,
    };

    /// Enable logging to stderr, filtered by `RUST_LOG`.
    pub fn enable() {
        let console_logger = fmt::layer()
            .with_writer(io::stderr)
            .with_timer(UtcTime::rfc_3339())
            .pretty();

        let subscriber = Registry::default()
            .with(EnvFilter::from_default_env())
            .with(console_logger);

        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("could not enable logging: {err}");
        }
    }
}
