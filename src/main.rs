use icon_forge::{BackendRegistry, Config, Generator, IconSet};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::error::Error;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load();

    TermLogger::init(
        config.log_level(),
        Default::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    // Resolved once; nothing is rendered without a backend
    let backend = match BackendRegistry::with_default_backends().select() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", e.install_hint());
            process::exit(1);
        }
    };

    let assets_dir = config.assets_dir();
    log::info!("Assets directory: {}", assets_dir.display());
    let icons = IconSet::in_dir(&assets_dir);
    Generator::new(backend, icons).run()?;

    println!("\nAll icons generated successfully!");
    Ok(())
}
