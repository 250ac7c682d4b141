use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use sev_control::config::environment::EnvironmentConfig;
use sev_control::services::SystemClock;
use sev_control::storage::FileStore;
use sev_control::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚛 Controle de Veículos e SEV");
    info!("================================================");
    info!("⚙️ Entorno: {}", config.environment);

    // Inicializar almacenamiento local
    let store = match FileStore::open(&config.storage.data_dir) {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error abriendo el almacenamiento local: {}", e);
            return Err(anyhow::anyhow!("Error de almacenamiento: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config, Arc::new(store), Arc::new(SystemClock));
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health                 - Estado del servicio");
    info!("🚗 Vehículos:");
    info!("   GET    /api/vehicle            - Listar vehículos");
    info!("   GET    /api/vehicle/available  - Vehículos sin SEV en vigor");
    info!("   POST   /api/vehicle            - Registrar vehículo");
    info!("   DELETE /api/vehicle/:id        - Eliminar vehículo");
    info!("📋 SEVs:");
    info!("   GET    /api/sev                - Historial de SEVs");
    info!("   POST   /api/sev                - Crear SEV");
    info!("   POST   /api/sev/:id/complete   - Concluir SEV");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
