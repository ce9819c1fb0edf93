use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{billing::PaymentStatus, db::TransactionModel};

/// Values for a new pending transaction
pub struct NewTransaction<'a> {
    pub tagihan_id: Option<i32>,
    pub kos_id: Option<i32>,
    pub user_penyewa_id: i32,
    pub user_penyedia_id: i32,
    pub amount: i64,
    pub payment_method: &'a str,
    pub invoice_number: &'a str,
    pub notes: Option<String>,
}

/// Gateway-reported state applied to a transaction
pub struct GatewayUpdate<'a> {
    /// Local status to set, `None` keeps the current one
    pub payment_status: Option<PaymentStatus>,
    pub mitrans_status: &'a str,
    pub payment_method: Option<&'a str>,
    pub mitrans_id: Option<&'a str>,
}

pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    /// Creates a new instance of [`TransactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `pending` transaction awaiting the gateway
    pub async fn create(&self, new: NewTransaction<'_>) -> Result<TransactionModel, DbErr> {
        let now = Utc::now().naive_utc();

        let transaction = entity::transactions::ActiveModel {
            tagihan_id: ActiveValue::Set(new.tagihan_id),
            kos_id: ActiveValue::Set(new.kos_id),
            user_penyewa_id: ActiveValue::Set(new.user_penyewa_id),
            user_penyedia_id: ActiveValue::Set(new.user_penyedia_id),
            amount: ActiveValue::Set(new.amount),
            payment_status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            payment_method: ActiveValue::Set(new.payment_method.to_string()),
            invoice_number: ActiveValue::Set(new.invoice_number.to_string()),
            mitrans_id: ActiveValue::Set(None),
            mitrans_status: ActiveValue::Set(Some(PaymentStatus::Pending.as_str().to_string())),
            notes: ActiveValue::Set(new.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        transaction.insert(self.db).await
    }

    pub async fn find_by_invoice_number(
        &self,
        invoice_number: &str,
    ) -> Result<Option<TransactionModel>, DbErr> {
        entity::prelude::Transactions::find()
            .filter(entity::transactions::Column::InvoiceNumber.eq(invoice_number))
            .one(self.db)
            .await
    }

    /// Applies a gateway notification to the transaction
    pub async fn update_from_gateway(
        &self,
        transaction: TransactionModel,
        update: GatewayUpdate<'_>,
    ) -> Result<TransactionModel, DbErr> {
        let mut active: entity::transactions::ActiveModel = transaction.into();

        if let Some(status) = update.payment_status {
            active.payment_status = ActiveValue::Set(status.as_str().to_string());
        }
        active.mitrans_status = ActiveValue::Set(Some(update.mitrans_status.to_string()));
        if let Some(method) = update.payment_method {
            active.payment_method = ActiveValue::Set(method.to_string());
        }
        if let Some(mitrans_id) = update.mitrans_id {
            active.mitrans_id = ActiveValue::Set(Some(mitrans_id.to_string()));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Marks the transaction paid on the client's confirmation
    ///
    /// `mitrans_status` is replaced only when the client reported one.
    pub async fn mark_paid(
        &self,
        transaction: TransactionModel,
        mitrans_status: Option<&str>,
    ) -> Result<TransactionModel, DbErr> {
        let mut active: entity::transactions::ActiveModel = transaction.into();
        active.payment_status = ActiveValue::Set(PaymentStatus::Paid.as_str().to_string());
        if let Some(status) = mitrans_status {
            active.mitrans_status = ActiveValue::Set(Some(status.to_string()));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Every transaction, newest first
    pub async fn list_all(&self) -> Result<Vec<TransactionModel>, DbErr> {
        entity::prelude::Transactions::find()
            .order_by_desc(entity::transactions::Column::CreatedAt)
            .order_by_desc(entity::transactions::Column::Id)
            .all(self.db)
            .await
    }

    /// Transactions received by a listing owner, newest first
    pub async fn list_by_penyedia(&self, user_id: i32) -> Result<Vec<TransactionModel>, DbErr> {
        entity::prelude::Transactions::find()
            .filter(entity::transactions::Column::UserPenyediaId.eq(user_id))
            .order_by_desc(entity::transactions::Column::CreatedAt)
            .order_by_desc(entity::transactions::Column::Id)
            .all(self.db)
            .await
    }

    /// Transactions made by a tenant, newest first
    pub async fn list_by_penyewa(&self, user_id: i32) -> Result<Vec<TransactionModel>, DbErr> {
        entity::prelude::Transactions::find()
            .filter(entity::transactions::Column::UserPenyewaId.eq(user_id))
            .order_by_desc(entity::transactions::Column::CreatedAt)
            .order_by_desc(entity::transactions::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Transactions::find().count(self.db).await
    }

    pub async fn count_pending_by_penyedia(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Transactions::find()
            .filter(entity::transactions::Column::UserPenyediaId.eq(user_id))
            .filter(entity::transactions::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
            .count(self.db)
            .await
    }

    /// Sum of paid amounts, optionally limited to one owner
    ///
    /// Amounts are summed in Rust since SQL `SUM` over a bigint column decodes to a
    /// different type per backend.
    pub async fn paid_revenue(&self, user_penyedia_id: Option<i32>) -> Result<i64, DbErr> {
        let mut query = entity::prelude::Transactions::find()
            .select_only()
            .column(entity::transactions::Column::Amount)
            .filter(entity::transactions::Column::PaymentStatus.eq(PaymentStatus::Paid.as_str()));

        if let Some(user_id) = user_penyedia_id {
            query = query.filter(entity::transactions::Column::UserPenyediaId.eq(user_id));
        }

        let amounts: Vec<i64> = query.into_tuple().all(self.db).await?;

        Ok(amounts.into_iter().sum())
    }

    /// Fails every transaction still pending since before `cutoff`
    ///
    /// Returns the number of transactions expired.
    pub async fn fail_stale_pending(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::Transactions::update_many()
            .col_expr(
                entity::transactions::Column::PaymentStatus,
                Expr::value(PaymentStatus::Failed.as_str()),
            )
            .col_expr(entity::transactions::Column::MitransStatus, Expr::value("expire"))
            .col_expr(
                entity::transactions::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::transactions::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
            .filter(entity::transactions::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use kosku_test_utils::prelude::*;

        use crate::server::data::transaction::{NewTransaction, TransactionRepository};

        /// Expect new transactions to start pending and be found by invoice number
        #[tokio::test]
        async fn creates_pending_transaction() -> Result<(), TestError> {
            let test = test_setup_with_billing_tables!()?;
            let (owner, tenant, kos, _, tagihan) = test.insert_rental_chain().await?;

            let repo = TransactionRepository::new(&test.state.db);
            repo.create(NewTransaction {
                tagihan_id: Some(tagihan.id),
                kos_id: Some(kos.id),
                user_penyewa_id: tenant.id,
                user_penyedia_id: owner.id,
                amount: tagihan.amount,
                payment_method: "midtrans",
                invoice_number: "INV-1-ABCDEF",
                notes: None,
            })
            .await?;

            let found = repo.find_by_invoice_number("INV-1-ABCDEF").await?.unwrap();
            assert_eq!(found.payment_status, "pending");
            assert_eq!(found.mitrans_status.as_deref(), Some("pending"));
            assert_eq!(found.tagihan_id, Some(tagihan.id));
            assert_eq!(found.kos_id, Some(kos.id));

            Ok(())
        }
    }

    mod update_from_gateway {
        use chrono::Utc;
        use kosku_test_utils::prelude::*;

        use crate::server::{
            data::transaction::{GatewayUpdate, TransactionRepository},
            model::billing::PaymentStatus,
        };

        /// Expect an unmapped status to keep the local payment status
        #[tokio::test]
        async fn keeps_status_when_unmapped() -> Result<(), TestError> {
            let test = test_setup_with_billing_tables!()?;
            let (owner, tenant, _, _, tagihan) = test.insert_rental_chain().await?;
            let transaction = test
                .insert_transaction(
                    Some(tagihan.id),
                    tenant.id,
                    owner.id,
                    tagihan.amount,
                    "INV-1-AAAAAA",
                    "pending",
                    Utc::now().naive_utc(),
                )
                .await?;

            let repo = TransactionRepository::new(&test.state.db);
            let updated = repo
                .update_from_gateway(
                    transaction,
                    GatewayUpdate {
                        payment_status: None,
                        mitrans_status: "authorize",
                        payment_method: Some("credit_card"),
                        mitrans_id: Some("txn-1"),
                    },
                )
                .await?;

            assert_eq!(updated.payment_status, "pending");
            assert_eq!(updated.mitrans_status.as_deref(), Some("authorize"));
            assert_eq!(updated.payment_method, "credit_card");
            assert_eq!(updated.mitrans_id.as_deref(), Some("txn-1"));

            let updated = repo
                .update_from_gateway(
                    updated,
                    GatewayUpdate {
                        payment_status: Some(PaymentStatus::Paid),
                        mitrans_status: "settlement",
                        payment_method: None,
                        mitrans_id: None,
                    },
                )
                .await?;

            assert_eq!(updated.payment_status, "paid");
            assert_eq!(updated.payment_method, "credit_card");

            Ok(())
        }
    }

    mod paid_revenue {
        use chrono::Utc;
        use kosku_test_utils::prelude::*;

        use crate::server::data::transaction::TransactionRepository;

        /// Expect only paid amounts summed, optionally per owner
        #[tokio::test]
        async fn sums_paid_amounts() -> Result<(), TestError> {
            let test = test_setup_with_billing_tables!()?;
            let (owner, tenant, _, _, _) = test.insert_rental_chain().await?;
            let other_owner = test.insert_user("other@example.com").await?;
            let now = Utc::now().naive_utc();
            test.insert_transaction(None, tenant.id, owner.id, 500_000, "INV-1", "paid", now)
                .await?;
            test.insert_transaction(None, tenant.id, owner.id, 700_000, "INV-2", "pending", now)
                .await?;
            test.insert_transaction(None, tenant.id, other_owner.id, 300_000, "INV-3", "paid", now)
                .await?;

            let repo = TransactionRepository::new(&test.state.db);

            assert_eq!(repo.paid_revenue(None).await?, 800_000);
            assert_eq!(repo.paid_revenue(Some(owner.id)).await?, 500_000);
            assert_eq!(repo.count_pending_by_penyedia(owner.id).await?, 1);

            Ok(())
        }

        /// Expect zero without paid transactions
        #[tokio::test]
        async fn zero_without_paid() -> Result<(), TestError> {
            let test = test_setup_with_billing_tables!()?;

            let repo = TransactionRepository::new(&test.state.db);

            assert_eq!(repo.paid_revenue(None).await?, 0);

            Ok(())
        }
    }

    mod fail_stale_pending {
        use chrono::{Duration, Utc};
        use kosku_test_utils::prelude::*;

        use crate::server::data::transaction::TransactionRepository;

        /// Expect only pending transactions older than the cutoff to fail
        #[tokio::test]
        async fn fails_only_stale_pending() -> Result<(), TestError> {
            let test = test_setup_with_billing_tables!()?;
            let (owner, tenant, _, _, _) = test.insert_rental_chain().await?;
            let now = Utc::now().naive_utc();
            let old = now - Duration::hours(48);
            test.insert_transaction(None, tenant.id, owner.id, 1, "INV-OLD", "pending", old)
                .await?;
            test.insert_transaction(None, tenant.id, owner.id, 1, "INV-PAID", "paid", old)
                .await?;
            test.insert_transaction(None, tenant.id, owner.id, 1, "INV-NEW", "pending", now)
                .await?;

            let repo = TransactionRepository::new(&test.state.db);
            let expired = repo.fail_stale_pending(now - Duration::hours(24)).await?;

            assert_eq!(expired, 1);
            let stale = repo.find_by_invoice_number("INV-OLD").await?.unwrap();
            assert_eq!(stale.payment_status, "failed");
            assert_eq!(stale.mitrans_status.as_deref(), Some("expire"));
            let fresh = repo.find_by_invoice_number("INV-NEW").await?.unwrap();
            assert_eq!(fresh.payment_status, "pending");

            Ok(())
        }
    }
}
