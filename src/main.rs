use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use corporate_fleet::config;
use corporate_fleet::config::environment::EnvironmentConfig;
use corporate_fleet::create_app;
use corporate_fleet::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Corporate Fleet - Disponibilidad de vehículos");
    info!("================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match config::database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    // Resolver la tabla de reservas una sola vez al arrancar
    let booking_table = config::booking_table::resolve_booking_table(&pool, &config).await;
    info!("📋 Tabla de reservas: {}", booking_table);

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(pool, config, booking_table));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET /health - Health check");
    info!("   GET /api/availability?user_id=&from=&to= - Vehículos disponibles");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
