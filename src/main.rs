use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use outside_api::adapters::http::{app_router, PaymentAppState, RouterOptions, SocialAppState};
use outside_api::adapters::{FacebookOAuthAdapter, HttpCallbackTransport, PayPalAdapter};
use outside_api::application::CallbackForwarder;
use outside_api::config::{AppConfig, LogFormat};
use outside_api::ports::{PaymentGateway, SocialLogin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.server.log_level, config.server.log_format);

    let http_client = reqwest::Client::builder()
        .timeout(config.server.request_timeout())
        .build()
        .context("failed to build HTTP client")?;

    let payment_gateway = connect_paypal(&config, http_client.clone()).await;
    let social_login = FacebookOAuthAdapter::from_config(&config.facebook, http_client.clone())
        .map(|adapter| Arc::new(adapter) as Arc<dyn SocialLogin>);
    match &social_login {
        Some(_) => tracing::info!(scopes = ?config.facebook.scopes, "Facebook login enabled"),
        None => tracing::warn!("Facebook credentials not set, login routes disabled"),
    }

    let forwarder = Arc::new(CallbackForwarder::new(Arc::new(HttpCallbackTransport::new(
        http_client,
    ))));

    let payment = PaymentAppState {
        payment_gateway,
        forwarder: forwarder.clone(),
        callback_url: config.forwarding.paypal_callback_url.clone(),
    };
    let social = SocialAppState {
        social_login,
        forwarder: forwarder.clone(),
        callback_url: config.forwarding.facebook_callback_url.clone(),
    };
    let cors_origins = config.server.cors_origins_list();
    let app = app_router(
        payment,
        social,
        RouterOptions {
            request_timeout: Some(config.server.request_timeout()),
            cors_origins: (!cors_origins.is_empty()).then_some(cors_origins),
        },
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "outside-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let grace = config.server.shutdown_grace();
    if forwarder.shutdown(grace).await {
        tracing::info!("Callback deliveries drained");
    } else {
        tracing::warn!(grace_secs = grace.as_secs(), "Callback deliveries cancelled");
    }
    Ok(())
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Build the PayPal adapter and check its credentials with one token fetch.
///
/// Any failure leaves payments disabled; the service still starts.
async fn connect_paypal(
    config: &AppConfig,
    http_client: reqwest::Client,
) -> Option<Arc<dyn PaymentGateway>> {
    let Some(adapter) = PayPalAdapter::from_config(&config.paypal, http_client) else {
        tracing::warn!("PayPal credentials not set, payment routes disabled");
        return None;
    };

    match adapter.access_token().await {
        Ok(_) => {
            tracing::info!(
                base_url = adapter.base_url(),
                live = config.paypal.is_live_mode(),
                "PayPal client ready"
            );
            Some(Arc::new(adapter))
        }
        Err(e) => {
            tracing::warn!(error = %e, "PayPal token check failed, payment routes disabled");
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
