use tm::{
    AppResult,
    app::App,
    cli::Cli,
    config::{Config, EnvOverrides},
    display,
    exec::SystemExecutor,
    init_logging,
    session::HostFilesystem,
};

fn main() -> AppResult<()> {
    let cli = Cli::parse_args();
    let overrides = EnvOverrides::from_env();

    // Initialize logging
    init_logging(&cli.effective_log_level(overrides.debug_enabled()))?;

    tracing::debug!("CLI arguments: {:?}", cli);

    // Load configuration
    let config = match Config::load(cli.config_file.as_deref(), &overrides) {
        Ok(config) => config,
        Err(err) => fail(err),
    };

    let app = App::new(&config, SystemExecutor::new(), &HostFilesystem);

    if cli.list {
        let sessions = app.list_sessions();
        return if cli.json {
            display::display_session_list_json(&sessions)
        } else {
            display::display_session_list(&sessions)
        };
    }

    // `name` is required unless --list was given, which returned above
    let Some(name) = cli.name.as_deref() else {
        fail(anyhow::anyhow!("Please provide a session name"));
    };

    if cli.is_dry_run_mode() {
        match app.resolve(name) {
            Ok(session) => display::display_resolution(&session),
            Err(err) => fail(err),
        }
    } else {
        // only returns when tmux could not take over
        if let Err(err) = app.run(name) {
            fail(err);
        }
        Ok(())
    }
}

fn fail(err: anyhow::Error) -> ! {
    display::print_error(&format!("{err:#}"));
    std::process::exit(1);
}
