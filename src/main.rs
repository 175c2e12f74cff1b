use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use ms_distribution::config::{EnvironmentConfig, StorageBackend};
use ms_distribution::database::DatabaseConnection;
use ms_distribution::routes::create_api_router;
use ms_distribution::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging: salida legible en desarrollo, compacta en el resto
    if config.is_development() {
        tracing_subscriber::fmt()
            .with_max_level(config.log_level)
            .pretty()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(config.log_level)
            .compact()
            .init();
    }

    info!("💧 Water Distribution Service - Programas, Rutas, Horarios y Tarifas");
    info!("=====================================================================");
    info!("🌎 Entorno: {}", config.environment);

    // Inicializar almacén
    let app_state = match &config.storage {
        StorageBackend::Postgres(database) => {
            let connection = match DatabaseConnection::connect(database).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            connection.ensure_schema().await?;
            AppState::with_postgres(connection.pool().clone(), config.clone())
        }
        StorageBackend::Memory => {
            info!("🧪 Almacén en memoria: los datos se pierden al reiniciar");
            AppState::in_memory(config.clone())
        }
    };

    let app = create_api_router(&app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Estado del servicio");
    for resource in ["programs", "routes", "schedules", "fare"] {
        info!("📋 /api/v2/{}:", resource);
        info!("   GET    /api/v2/{} - Listar", resource);
        if resource != "programs" {
            info!("   GET    /api/v2/{}/active | /inactive - Filtrar por estado", resource);
        }
        info!("   GET    /api/v2/{}/:id - Obtener", resource);
        info!("   POST   /api/v2/{} - Crear", resource);
        info!("   PUT    /api/v2/{}/:id - Actualizar", resource);
        info!("   DELETE /api/v2/{}/:id - Eliminar", resource);
        info!("   PATCH  /api/v2/{}/:id/activate | /deactivate - Cambiar estado", resource);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

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
