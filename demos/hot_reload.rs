//! Hot-reloading a config file while readers keep their snapshots.
//!
//! Run with: RUST_LOG=docbind=debug cargo run --example hot_reload

use docbind::{bind, Config, ConfigHolder};
use std::error::Error;
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Server {
    host: String,
    port: u16,
    workers: u32,
}

bind!(Server {
    host,
    port,
    workers,
});

impl Config for Server {
    fn normalize(&mut self) {
        if self.host.is_empty() {
            self.host = "0.0.0.0".to_string();
        }
        self.workers = self.workers.max(1);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("docbind=info".parse()?))
        .init();

    let dir = std::env::temp_dir().join("docbind-hot-reload");
    fs::create_dir_all(&dir)?;
    let path = dir.join("server.json");
    fs::write(&path, r#"{"port": 8080, "workers": 4}"#)?;

    let holder = Arc::new(ConfigHolder::<Server>::new());
    holder.load_from_file(&path)?;

    let reader = {
        let holder = Arc::clone(&holder);
        thread::spawn(move || {
            for _ in 0..5 {
                let snapshot = holder.snapshot();
                println!(
                    "serving on {}:{} with {} workers",
                    snapshot.host, snapshot.port, snapshot.workers
                );
                thread::sleep(Duration::from_millis(20));
            }
        })
    };

    thread::sleep(Duration::from_millis(30));
    fs::write(&path, r#"{"host": "127.0.0.1", "port": 9090, "workers": 0}"#)?;
    holder.load_from_file(&path)?;

    // A broken edit is rejected and the previous snapshot stays current.
    fs::write(&path, r#"{"port": "ninety"}"#)?;
    if let Err(e) = holder.load_from_file(&path) {
        println!("reload rejected: {}", e);
    }

    reader.join().map_err(|_| "reader thread panicked")?;

    let backup = dir.join("server.backup.json");
    holder.save_to_file(&backup)?;
    println!("saved {}: {}", backup.display(), fs::read_to_string(&backup)?);

    Ok(())
}
