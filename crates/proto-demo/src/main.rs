use proto_demo::{Demo, DemoConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut demo = Demo::new(std::io::stdout().lock(), DemoConfig::default());
    demo.run();
}
