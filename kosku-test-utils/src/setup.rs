use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_SERVER_KEY, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub payment_client: payment_gateway::Client,
}

/// Isolated test environment.
///
/// Each setup owns its own in-memory database, session store, and mock Snap server, so
/// tests never share state.
pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let payment_client = payment_gateway::Client::builder()
            .server_key(TEST_SERVER_KEY)
            .snap_url(&mock_server.url())
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db, payment_client },
            session,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Users and roles, with the role vocabulary seeded.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        async {
            let setup = $crate::test_setup_with_tables!(
                entity::prelude::AppUser,
                entity::prelude::Role,
                entity::prelude::UserRole,
            )?;
            setup.seed_roles().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::test_setup_with_tables!(
                entity::prelude::AppUser,
                entity::prelude::Role,
                entity::prelude::UserRole,
                $($entity,)+
            )?;
            setup.seed_roles().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// User tables plus listings, images, and likes, with image types seeded.
#[macro_export]
macro_rules! test_setup_with_kos_tables {
    () => {{
        async {
            let setup = $crate::test_setup_with_user_tables!(
                entity::prelude::Kos,
                entity::prelude::TipeGambar,
                entity::prelude::GambarKos,
                entity::prelude::UserLikes,
            )?;
            setup.seed_image_types().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::test_setup_with_user_tables!(
                entity::prelude::Kos,
                entity::prelude::TipeGambar,
                entity::prelude::GambarKos,
                entity::prelude::UserLikes,
                $($entity,)+
            )?;
            setup.seed_image_types().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Every table, including leases, invoices, transactions, and tenant profiles.
#[macro_export]
macro_rules! test_setup_with_billing_tables {
    () => {{
        $crate::test_setup_with_kos_tables!(
            entity::prelude::Sewa,
            entity::prelude::Tagihan,
            entity::prelude::Transactions,
            entity::prelude::ProfilePenyewa,
        )
    }};
}
