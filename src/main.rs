//! Thambi server entry point: loads configuration, wires adapters into the
//! handlers and serves the HTTP API.

use std::process;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use thambi::adapters::ai::{AnthropicConfig, AnthropicProvider};
use thambi::adapters::email::{ResendConfig, ResendEmailSender};
use thambi::adapters::http::{app_router, ChatHandlers, HistoryHandlers, RouterSettings};
use thambi::adapters::shopping::{Locator, StorefrontFlow, WebDriverStorefront};
use thambi::adapters::storage::{FileTranscriptStore, InMemorySessionStore};
use thambi::adapters::system::{
    LocalFileFinder, ProcessShell, ScreenPoint, ShellCommands, WhatsappFlow, WhatsappMessenger,
    XdotoolDesktop,
};
use thambi::application::{
    DeleteHistoryHandler, DispatcherConfig, GetHistoryHandler, HandleUtteranceHandler,
    ListHistoryHandler, StartNewChatHandler, TaskDispatcher, TaskPorts,
};
use thambi::config::{
    parse_selector, AppConfig, ConfigError, DesktopConfig, SelectorKind, ShoppingConfig,
    ValidationError,
};

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("thambi: {}", e);
            process::exit(1);
        }
    };

    init_tracing(&config);

    let (addr, app) = match config.server.socket_addr().and_then(|addr| {
        let (chat, history) = build_handlers(&config)?;
        let settings = RouterSettings {
            request_timeout: config.server.request_timeout(),
            cors_origins: config.server.cors_origins_list(),
        };
        Ok((addr, app_router(chat, history, &settings)))
    }) {
        Ok(built) => built,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "Failed to bind");
            process::exit(1);
        }
    };

    info!(%addr, "Thambi listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` wins over the configured level; production logs JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_handlers(config: &AppConfig) -> Result<(ChatHandlers, HistoryHandlers), ValidationError> {
    let ai = &config.ai;
    if !ai.has_anthropic() {
        warn!("No Anthropic API key; questions will be answered with an apology");
    }
    let anthropic = AnthropicConfig::new(ai.api_key())
        .with_model(&ai.model)
        .with_base_url(&ai.base_url)
        .with_timeout(ai.timeout())
        .with_default_max_tokens(ai.max_tokens);

    let email = &config.email;
    let resend = ResendConfig::new(email.api_key(), email.from_header())
        .with_base_url(&email.base_url);
    if !resend.is_configured() {
        warn!("No Resend API key; email tasks will fail");
    }

    let shell = Arc::new(ProcessShell::new(ShellCommands::for_host()));
    let desktop = Arc::new(
        XdotoolDesktop::new()
            .with_program(&config.desktop.xdotool_program)
            .with_timeout(config.desktop.command_timeout()),
    );

    let files = match config.files.roots() {
        Some(roots) => LocalFileFinder::new(roots),
        None => LocalFileFinder::new(LocalFileFinder::default_roots()),
    };

    let ports = TaskPorts {
        ai: Arc::new(AnthropicProvider::new(anthropic)),
        email: Arc::new(ResendEmailSender::new(resend)),
        storefront: Arc::new(WebDriverStorefront::new(
            &config.shopping.webdriver_url,
            storefront_flow(&config.shopping)?,
        )),
        shell: shell.clone(),
        files: Arc::new(files),
        messenger: Arc::new(WhatsappMessenger::new(
            shell,
            desktop,
            whatsapp_flow(&config.desktop)?,
        )),
    };
    let dispatcher = Arc::new(TaskDispatcher::new(
        ports,
        DispatcherConfig {
            apps: config.apps.commands(),
            system_prompt: ai.system_prompt.clone(),
            max_tokens: Some(ai.max_tokens),
            file_preview_count: config.files.preview_count,
        },
    ));

    let sessions = Arc::new(InMemorySessionStore::new());
    let transcripts = Arc::new(FileTranscriptStore::new(&config.history.folder));
    info!(folder = %config.history.folder.display(), "Transcripts folder");

    let chat = ChatHandlers::new(
        Arc::new(HandleUtteranceHandler::new(
            sessions.clone(),
            transcripts.clone(),
            dispatcher,
        )),
        Arc::new(StartNewChatHandler::new(sessions)),
    );
    let history = HistoryHandlers::new(
        Arc::new(ListHistoryHandler::new(transcripts.clone())),
        Arc::new(GetHistoryHandler::new(transcripts.clone())),
        Arc::new(DeleteHistoryHandler::new(transcripts)),
    );
    Ok((chat, history))
}

fn locator(raw: &str, setting: &'static str) -> Result<Locator, ValidationError> {
    match parse_selector(raw) {
        Some((SelectorKind::Css, value)) => Ok(Locator::Css(value.to_string())),
        Some((SelectorKind::XPath, value)) => Ok(Locator::XPath(value.to_string())),
        None => Err(ValidationError::MissingRequired(setting)),
    }
}

fn storefront_flow(shopping: &ShoppingConfig) -> Result<StorefrontFlow, ValidationError> {
    Ok(StorefrontFlow {
        store_url: shopping.store_url.clone(),
        search_box: locator(&shopping.search_box, "SHOPPING__SEARCH_BOX")?,
        first_result: locator(&shopping.first_result, "SHOPPING__FIRST_RESULT")?,
        add_to_cart_button: locator(
            &shopping.add_to_cart_button,
            "SHOPPING__ADD_TO_CART_BUTTON",
        )?,
        element_timeout: shopping.wait_timeout(),
        poll_interval: shopping.poll_interval(),
        settle: shopping.settle(),
        browser_args: shopping.browser_args(),
    })
}

fn whatsapp_flow(desktop: &DesktopConfig) -> Result<WhatsappFlow, ValidationError> {
    let point = |p: Option<(i32, i32)>| p.map(|(x, y)| ScreenPoint { x, y });
    Ok(WhatsappFlow {
        launch_uri: desktop.whatsapp_uri.clone(),
        window_title: desktop.window_title.clone(),
        launch_delay: desktop.launch_delay(),
        search_delay: desktop.search_delay(),
        results_delay: desktop.results_delay(),
        chat_delay: desktop.chat_delay(),
        voice_call_button: point(desktop.voice_call_point()?),
        video_call_button: point(desktop.video_call_point()?),
    })
}
