use crate::config::DatabaseConfig;
use crate::models::{User, USERS_COLLECTION};
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteError, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("DATABASE is not set")]
    MissingUrl,
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

/// Process-wide MongoDB handle. Built once in `main`, shut down after the server stops.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let uri = config.url.as_deref().ok_or(DatabaseError::MissingUrl)?;

        let mut client_options = ClientOptions::parse(uri).await?;

        // Fail fast instead of hanging requests when the server is gone
        client_options.connect_timeout = Some(config.timeout);
        client_options.server_selection_timeout = Some(config.timeout);
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.name);

        let mongodb = Self { client, db };
        mongodb.ping().await?;
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Unique index on `users.email`. A failure here (e.g. existing duplicates)
    /// leaves the application-level check as the only guard.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match self.users().create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index ready: users(email) unique"),
            Err(e) => log::warn!("   ⚠️  Could not create unique index on users(email): {}", e),
        }
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// True when the driver reports a unique index violation (E11000).
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError {
            code: DUPLICATE_KEY_CODE,
            ..
        }))
    )
}
