use std::time::Duration;

use anyhow::Context;
use pixmenu::config::Config;
use pixmenu::demo;
use pixmenu::host::MenuHost;
use pixmenu_kit::components::menu::GraphicalDisplayMenu;
use pixmenu_kit::rendering::Framebuffer;

static USAGE: &[&str] = &[
    "--config <path> : Load a single config file instead of the layered lookup.",
    "--dump-config : Print the effective config as TOML and exit.",
    "--help : Show this message.",
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Ok(env_filter) = tracing_subscriber::EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("info")
            .compact()
            .init();
    }

    let mut args = std::env::args().skip(1);
    let config = match args.next().as_deref() {
        Some("--config") => {
            let path = args.next().context("--config needs a path")?;
            Config::load_from(&path).with_context(|| format!("loading {path}"))?
        }
        Some("--dump-config") => {
            let config = Config::with(Clone::clone);
            let text = toml::to_string_pretty(&config).context("serializing config")?;
            println!("{text}");
            return Ok(());
        }
        Some("--help") => {
            println!("USAGE: pixmenu [option]");
            println!();
            for line in USAGE {
                println!("\t{line}");
            }
            return Ok(());
        }
        Some(other) => anyhow::bail!("unknown argument: {other}"),
        None => Config::with(Clone::clone),
    };

    run(config).await
}

async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting pixmenu on a {}x{} framebuffer",
        config.display.width,
        config.display.height
    );

    let mut display = Framebuffer::new(config.display.width, config.display.height);
    let mut home = demo::home_layout(&config);
    home.dump_config();
    demo::draw_home(&mut display, &mut home);
    println!("{}", display.to_ascii());

    let menu = GraphicalDisplayMenu::new(demo::demo_menu())
        .with_style(config.menu.item_style(&config.font))
        .with_mode(config.menu.mode)
        .with_y_padding(config.menu.y_padding);

    let mut host = MenuHost::new(display, menu);
    host.menu().dump_config();

    let period = Duration::from_millis(config.host.tick_interval_ms);
    host.run(period, config.host.ticks, demo::demo_script(), |display| {
        println!("{}", display.to_ascii());
    })
    .await;

    for action in host.take_commands() {
        tracing::info!("Unhandled command: {action}");
    }

    // the menu hands the display back on hide; repaint the home page
    if !host.menu().is_active() {
        demo::draw_home(host.display_mut(), &mut home);
        println!("{}", host.display().to_ascii());
    }

    Ok(())
}
