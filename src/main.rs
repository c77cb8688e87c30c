use clap::Parser;
use hyper::Method;
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

mod cli;
mod handler;
mod http;
mod logger;
mod server;

fn main() {
    let args = cli::Args::parse();

    // The log file is the only output sink; without it the process must not
    // start serving.
    let log = match logger::Logger::open(&args.log) {
        Ok(l) => Arc::new(l),
        Err(err) => {
            eprintln!(
                "Error while opening log output {}: {err}",
                args.log.display()
            );
            process::exit(1);
        }
    };

    // Routes are registered once here; the table is immutable afterwards.
    let mut router = handler::Router::new();
    router.register(Method::GET, "/", handler::views::home);
    let router = Arc::new(router);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            log.error(&format!("failed to build runtime: {err}"));
            process::exit(1);
        }
    };

    log.info(&format!("Videos root directory: {}", args.dir.display()));
    log.info(&format!("Streaming on port {}", args.port));

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    if let Err(err) = runtime.block_on(server::run(addr, router, Arc::clone(&log))) {
        log.error(&format!("server terminated: {err}"));
        process::exit(1);
    }
}
