mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, JwtConfig, ReminderDispatchConfig, SendgridConfig, TwilioConfig};
pub use repos::{
    DeleteResult, IDoctorRepo, IMedicationRepo, IOtpRepo, IPatientDoctorRepo, IPatientRepo,
    IReminderRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct MedtrackContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub services: Services,
}

struct ContextParams {
    pub mongodb_connection_string: String,
    pub mongodb_db_name: String,
}

impl MedtrackContext {
    fn with_repos(repos: Repos) -> Self {
        let config = Config::new();
        Self {
            repos,
            services: Services::from_config(&config),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context where nothing leaves the process, repos and gateways are in memory
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            services: Services::create_inmemory(),
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos =
            Repos::create_mongodb(&params.mongodb_connection_string, &params.mongodb_db_name)
                .await?;
        Ok(Self::with_repos(repos))
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<MedtrackContext> {
    const MONGODB_CONNECTION_STRING: &str = "MONGODB_CONNECTION_STRING";
    const MONGODB_NAME: &str = "MONGODB_NAME";

    let connection_string = std::env::var(MONGODB_CONNECTION_STRING).ok();
    let db_name = std::env::var(MONGODB_NAME).unwrap_or_else(|_| "medtrack".into());

    match connection_string {
        Some(mongodb_connection_string) => {
            info!("{} env is set, going to use the mongo repos", MONGODB_CONNECTION_STRING);
            MedtrackContext::create(ContextParams {
                mongodb_connection_string,
                mongodb_db_name: db_name,
            })
            .await
        }
        None => {
            warn!(
                "{} env is not set, data will only live as long as this process",
                MONGODB_CONNECTION_STRING
            );
            Ok(MedtrackContext::with_repos(Repos::create_inmemory()))
        }
    }
}
