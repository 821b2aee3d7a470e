use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "blog-admin")]
#[command(version)]
#[command(about = "Admin pages for creating blog posts", long_about = None)]
pub struct Config {
    /// IP address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    pub ip: std::net::IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8010)]
    pub port: u16,

    /// Directory posts are stored in
    #[arg(short, long, default_value = crate::blog::DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Milliseconds to wait before handling each new-post submission
    #[arg(long, default_value_t = crate::blog::DEFAULT_SUBMIT_DELAY.as_millis() as u64)]
    pub submit_delay_ms: u64,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "blog_admin=debug,tower_http=debug,info"
        } else {
            "blog_admin=info"
        }
    }
}
