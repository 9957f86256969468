use clap::Parser;

/// Minimal HTTP/1.1 static file server.
#[derive(Debug, Clone, Parser)]
#[command(name = "statik")]
#[command(about = "Serve files from a directory over HTTP/1.1, one connection at a time")]
pub struct Config {
    /// Port to listen on (bound on all interfaces)
    pub port: u16,

    /// Document root; request URIs are resolved beneath it
    #[arg(long, default_value = ".")]
    pub root: String,
}

impl Config {
    /// Parses configuration from the command line. A missing or non-numeric
    /// port prints usage to stderr and exits with status 1, the same code
    /// fatal socket setup failures exit with.
    pub fn load() -> Self {
        Config::try_parse().unwrap_or_else(|e| {
            let _ = e.print();
            std::process::exit(1);
        })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
