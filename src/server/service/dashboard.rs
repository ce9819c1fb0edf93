use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::DashboardDto,
    server::{
        data::{
            kos::KosRepository, like::UserLikesRepository, sewa::SewaRepository,
            tagihan::TagihanRepository, transaction::TransactionRepository,
            user::UserRepository,
        },
        error::Error,
        model::{listing::PropertyStatus, role::RoleName},
        service::role::RoleService,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Statistics for the user's highest role, with tenant statistics as the fallback
    pub async fn get_stats(&self, user_id: i32) -> Result<DashboardDto, Error> {
        let role_service = RoleService::new(self.db);

        if role_service.has_role(user_id, RoleName::Admin).await? {
            return self.admin_stats().await;
        }
        if role_service.has_role(user_id, RoleName::Pemilik).await? {
            return self.owner_stats(user_id).await;
        }

        self.tenant_stats(user_id).await
    }

    async fn admin_stats(&self) -> Result<DashboardDto, Error> {
        let transaction_repository = TransactionRepository::new(self.db);

        Ok(DashboardDto::Admin {
            total_kos: KosRepository::new(self.db).count().await?,
            total_users: UserRepository::new(self.db).count().await?,
            total_transactions: transaction_repository.count().await?,
            paid_revenue: transaction_repository.paid_revenue(None).await?,
        })
    }

    async fn owner_stats(&self, user_id: i32) -> Result<DashboardDto, Error> {
        let transaction_repository = TransactionRepository::new(self.db);
        let kos = KosRepository::new(self.db).list_by_owner(user_id).await?;

        Ok(DashboardDto::Pemilik {
            total_kos: kos.len() as u64,
            total_rooms: kos.iter().map(|k| k.total_rooms as i64).sum(),
            available_rooms: kos.iter().map(|k| k.available_rooms as i64).sum(),
            pending_transactions: transaction_repository
                .count_pending_by_penyedia(user_id)
                .await?,
            paid_revenue: transaction_repository.paid_revenue(Some(user_id)).await?,
        })
    }

    async fn tenant_stats(&self, user_id: i32) -> Result<DashboardDto, Error> {
        Ok(DashboardDto::Penyewa {
            available_kos: KosRepository::new(self.db)
                .count_by_status(PropertyStatus::Active)
                .await?,
            favorites: UserLikesRepository::new(self.db)
                .count_for_user(user_id)
                .await?,
            active_leases: SewaRepository::new(self.db)
                .count_active_for_user(user_id)
                .await?,
            unpaid_invoices: TagihanRepository::new(self.db)
                .count_unpaid_for_user(user_id)
                .await?,
        })
    }
}
